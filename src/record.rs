// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the caller-facing [`ToastDefinition`], the internal
//! [`ToastRecord`], and the small enums (`Variant`, `Animation`, `Position`,
//! `Phase`, `Expiry`) that describe a toast's appearance and lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Generated identifiers are v4 UUIDs and collision-resistant among
/// concurrently live toasts. Caller-supplied identifiers are accepted
/// verbatim without collision checking; avoiding duplicates is then the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Mints a new collision-resistant identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Visual variant determining the glass tint of the toast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Neutral white glass.
    #[default]
    Default,
    /// Emerald tint for successful operations.
    Success,
    /// Rose tint for failures.
    Error,
    /// Sky tint for informational messages.
    Info,
}

/// Entry/exit animation kind.
///
/// The exit delay is a property of the animation style, looked up from a
/// static table rather than configured per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    SlideFromRight,
    SlideFromLeft,
    SlideFromBottom,
    Scale,
}

impl Animation {
    /// How long the exit animation plays before the record is removed.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        match self {
            Animation::SlideFromRight | Animation::SlideFromLeft => Duration::from_millis(220),
            Animation::SlideFromBottom => Duration::from_millis(240),
            Animation::Scale => Duration::from_millis(200),
        }
    }
}

/// Screen anchor a toast is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl Position {
    /// All anchors, in the fixed order buckets are projected in.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
    ];

    /// Whether this anchor hangs from the top edge of the screen.
    ///
    /// Top buckets list newest first so fresh toasts appear adjacent to the
    /// edge they anchor to; bottom buckets list oldest first for the same
    /// visual reason.
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }
}

/// Lifecycle phase of a toast record.
///
/// Transitions are one-directional: `Initial -> Entering -> Exiting`,
/// followed by removal from the store (which is a store operation, not a
/// phase). A record never re-enters an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Just created, not yet visually entered.
    Initial,
    /// Visible and counting toward auto-expiry.
    Entering,
    /// Animating out, pending removal.
    Exiting,
}

/// Auto-expiry policy for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Transition to `Exiting` after this much time on screen.
    After(Duration),
    /// Stay until explicitly dismissed.
    Never,
}

impl Expiry {
    /// Convenience constructor from milliseconds.
    #[must_use]
    pub fn after_ms(ms: u64) -> Self {
        Expiry::After(Duration::from_millis(ms))
    }
}

/// Completion callback invoked exactly once when a toast is removed.
pub type CloseCallback = Box<dyn FnOnce() + Send>;

/// Caller input for [`Manager::show`](crate::Manager::show).
///
/// Every field is optional; `variant`, `expiry`, `animation` and `position`
/// fall back to the manager-wide defaults when unset, the rest stay empty.
#[derive(Default)]
pub struct ToastDefinition {
    pub(crate) id: Option<ToastId>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) variant: Option<Variant>,
    pub(crate) expiry: Option<Expiry>,
    pub(crate) animation: Option<Animation>,
    pub(crate) position: Option<Position>,
    pub(crate) on_close: Option<CloseCallback>,
}

impl ToastDefinition {
    /// Creates an empty definition; everything resolves from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a success toast with the given title.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new().with_variant(Variant::Success).with_title(title)
    }

    /// Creates an error toast with the given title.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new().with_variant(Variant::Error).with_title(title)
    }

    /// Creates an info toast with the given title.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new().with_variant(Variant::Info).with_title(title)
    }

    /// Supplies an explicit identifier instead of a generated one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Overrides the default auto-expiry policy.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Registers a callback invoked exactly once when the toast is removed,
    /// whether removal came from natural expiry or explicit dismissal.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }
}

impl fmt::Debug for ToastDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("variant", &self.variant)
            .field("expiry", &self.expiry)
            .field("animation", &self.animation)
            .field("position", &self.position)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Internal state for one live toast.
///
/// Owned exclusively by the store; the display surface only ever sees
/// shared borrows of records.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub(crate) id: ToastId,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) variant: Variant,
    pub(crate) expiry: Expiry,
    pub(crate) animation: Animation,
    pub(crate) position: Position,
    /// Stamped at insertion, used only for ordering. Never mutated.
    pub(crate) created_at: Instant,
    /// Insertion tie-break; strictly increasing per store.
    pub(crate) seq: u64,
    pub(crate) phase: Phase,
    /// Set by explicit dismissal. Records *why* the exit transition fired,
    /// as opposed to natural expiry.
    pub(crate) dismissed: bool,
}

impl ToastRecord {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn dismissed(&self) -> bool {
        self.dismissed
    }
}
