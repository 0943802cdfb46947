use thiserror::Error;

use crate::{KeyboardEventKind, KeyboardFrame, WindowBounds};

/// Error reported by the host's measurement service.
///
/// The coordinator treats every `Err` as "skip this adjustment"; the variants
/// exist so hosts can surface precise failures in their own diagnostics.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeasureError {
    #[error("view is no longer mounted")]
    ViewUnmounted,
    #[error("measurement failed: {0}")]
    Failed(String),
}

/// Completion callback for a containment check.
pub type MeasureBoolCallback = Box<dyn FnOnce(Result<bool, MeasureError>)>;

/// Completion callback for a bounding-box measurement.
pub type MeasureBoundsCallback = Box<dyn FnOnce(Result<WindowBounds, MeasureError>)>;

/// Asynchronous view-measurement service provided by the host UI layer.
///
/// Completion callbacks are dispatched by the host and may resolve after an
/// arbitrary delay, or never (e.g. the view unmounted first). The coordinator
/// tolerates both: its callbacks re-validate the state they need at
/// invocation time and become no-ops when it is gone. There is no
/// cancellation mechanism, and none is required.
pub trait MeasurementService<H> {
    /// Reports whether `view` is a visual descendant of `ancestor`.
    fn is_descendant_of(&self, view: &H, ancestor: &H, done: MeasureBoolCallback);

    /// Reports `view`'s on-screen bounding box.
    fn measure_in_window(&self, view: &H, done: MeasureBoundsCallback);
}

/// Reports which input element currently holds focus.
pub trait FocusTracker<H> {
    fn currently_focused(&self) -> Option<H>;
}

/// Imperative scroll commands on the externally-owned scroll container.
///
/// The coordinator holds only a `Weak` back-reference to the implementor; it
/// never owns the container's lifecycle.
pub trait ScrollContainer<H> {
    /// Scrolls `field` into view above the keyboard.
    ///
    /// `additional_offset` is measured from screen top (the native primitive
    /// assumes the container spans the full screen); `prevent_negative_scroll`
    /// forbids scrolling content further down than necessary.
    fn scroll_field_into_view_above_keyboard(
        &self,
        field: &H,
        additional_offset: f64,
        prevent_negative_scroll: bool,
    );

    /// Scrolls to the end of the content.
    fn scroll_to_end(&self, animated: bool);

    /// Scrolls the content by a relative delta (positive = further down the
    /// content). Animation is at the host's discretion.
    fn scroll_by(&self, delta_y: f64);
}

/// Listener registered with a [`KeyboardEventSource`].
///
/// Hide notifications also deliver a frame; hide listeners ignore it.
pub type KeyboardListener = Box<dyn FnMut(KeyboardFrame)>;

/// Identifies a registered listener for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(pub u64);

/// The platform's keyboard show/hide notification source.
pub trait KeyboardEventSource {
    fn subscribe(&self, event: KeyboardEventKind, listener: KeyboardListener) -> SubscriptionToken;

    fn unsubscribe(&self, token: SubscriptionToken);
}
