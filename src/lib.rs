// SPDX-License-Identifier: MPL-2.0
//! Glass-morphism styled toast notifications for the Iced GUI toolkit.
//!
//! The crate centers on the [`Manager`], which owns every live toast and
//! drives its lifecycle: a toast is inserted in an `Initial` phase, becomes
//! visible (`Entering`) on the next tick, transitions out (`Exiting`) when
//! its duration elapses or it is dismissed, and is removed once its exit
//! animation has played. Active toasts are grouped into six screen-anchor
//! buckets and ordered so new toasts always appear adjacent to the edge
//! their bucket hangs from.
//!
//! # Usage
//!
//! ```ignore
//! use glass_toast::{Manager, ToastDefinition, ToastMessage};
//! use glass_toast::ui::overlay;
//! use iced::widget::stack;
//!
//! // In your application state
//! struct App {
//!     toasts: Manager,
//! }
//!
//! // Showing a toast from update()
//! self.toasts.show(ToastDefinition::success("Image saved"));
//!
//! // Routing toast messages
//! Message::Toast(message) => self.toasts.handle_message(&message),
//!
//! // In subscription()
//! self.toasts.subscription().map(Message::Toast)
//!
//! // In view(), layered over your content
//! stack![content, overlay::view(&self.toasts).map(Message::Toast)]
//! ```
//!
//! # Design Considerations
//!
//! - Dismissal is idempotent and unknown ids are no-ops; the lifecycle API
//!   never returns errors.
//! - Managers are plain values, not globals: independent surfaces can each
//!   own one, and dropping a manager cancels all of its pending timers.
//! - Default duration 4s, position top-right, slide-from-right entry;
//!   overridable per call or via [`config::Defaults`].

pub mod config;
pub mod error;
pub mod ui;

mod manager;
mod projector;
mod record;
mod store;
mod timer;

pub use config::Defaults;
pub use error::{Error, Result};
pub use manager::{Manager, Message as ToastMessage};
pub use record::{
    Animation, Expiry, Phase, Position, ToastDefinition, ToastId, ToastRecord, Variant,
};
