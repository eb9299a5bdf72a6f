// SPDX-License-Identifier: MPL-2.0
//! Visual surface for toasts.
//!
//! - [`design_tokens`] - Glass tints, spacing, sizing and shadow constants
//! - [`toast`] - Single glass card rendering
//! - [`overlay`] - Anchored, stacked position buckets over the host view

pub mod design_tokens;
pub mod overlay;
pub mod toast;
