// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the glass toast surface.
//!
//! - **Palette**: base and glass tint colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    /// Secondary text on glass (white at 80%).
    pub const TEXT_MUTED: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.8,
    };
}

/// Translucent glass tints per toast variant: a low-alpha fill with a
/// slightly stronger border of the same hue.
pub mod glass {
    use super::Color;

    pub const DEFAULT_FILL: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.10,
    };
    pub const DEFAULT_BORDER: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.25,
    };

    // Emerald
    pub const SUCCESS_FILL: Color = Color {
        r: 0.063,
        g: 0.725,
        b: 0.506,
        a: 0.15,
    };
    pub const SUCCESS_BORDER: Color = Color {
        r: 0.204,
        g: 0.827,
        b: 0.600,
        a: 0.40,
    };

    // Rose
    pub const ERROR_FILL: Color = Color {
        r: 0.957,
        g: 0.247,
        b: 0.369,
        a: 0.15,
    };
    pub const ERROR_BORDER: Color = Color {
        r: 0.984,
        g: 0.443,
        b: 0.522,
        a: 0.40,
    };

    // Sky
    pub const INFO_FILL: Color = Color {
        r: 0.055,
        g: 0.647,
        b: 0.914,
        a: 0.15,
    };
    pub const INFO_BORDER: Color = Color {
        r: 0.220,
        g: 0.741,
        b: 0.973,
        a: 0.40,
    };
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CLOSE_BUTTON: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast titles.
    pub const BODY_LG: f32 = 16.0;

    /// Toast descriptions.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Deep soft shadow lifting the glass card off the page.
    pub const GLASS: Shadow = Shadow {
        color: Color {
            r: 0.059,
            g: 0.090,
            b: 0.165,
            a: 0.32,
        },
        offset: Vector { x: 0.0, y: 18.0 },
        blur_radius: 40.0,
    };
}
