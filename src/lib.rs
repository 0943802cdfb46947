//! A headless keyboard-aware scroll coordinator.
//!
//! When an on-screen keyboard appears, the coordinator keeps the currently
//! focused input field visible above it; when the keyboard disappears, it
//! restores the scroll position without visual glitches. The two target
//! platforms get materially different corrections: iOS scrolls the field to
//! the keyboard top and undoes over-scroll on hide, Android scrolls just
//! enough to reveal the field on top of the window's own resize/pan.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the scrollable container's imperative scroll commands ([`ScrollContainer`])
//! - keyboard show/hide notifications with geometry ([`KeyboardEventSource`])
//! - asynchronous view measurement and containment checks ([`MeasurementService`])
//! - the currently focused input element ([`FocusTracker`])
//!
//! All degradation is silent by design: a missing focus, container, or
//! measurement simply means the scroll adjustment does not happen, and the
//! platform's native keyboard handling still applies underneath.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod coordinator;
mod host;
mod options;
mod platform;
mod subscription;
mod types;


pub use coordinator::KeyboardScrollCoordinator;
pub use host::{
    FocusTracker, KeyboardEventSource, KeyboardListener, MeasureBoolCallback,
    MeasureBoundsCallback, MeasureError, MeasurementService, ScrollContainer, SubscriptionToken,
};
pub use options::{CoordinatorOptions, DEFAULT_ADDITIONAL_SCROLL_OFFSET, OnKeyboardHeightChange};
pub use subscription::KeyboardSubscriptions;
pub use types::{
    KeyboardEventKind, KeyboardFrame, Platform, SCROLL_EVENT_THROTTLE_MS, ScrollGeometry,
    ScrollViewProps, SoftInputMode, ViewHandle, WindowBounds,
};
