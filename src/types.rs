/// Target platform for scroll-adjustment behavior.
///
/// The two platforms need materially different corrections: iOS scrolls the
/// focused field to the keyboard top (and must undo over-scroll on hide),
/// while Android's window manager already resizes/pans and only needs a
/// minimal additive reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// The keyboard notification to subscribe to for "show".
    ///
    /// iOS delivers reliable geometry on the will-* events; Android only on
    /// the did-* events.
    pub fn show_event(self) -> KeyboardEventKind {
        match self {
            Self::Ios => KeyboardEventKind::WillShow,
            Self::Android => KeyboardEventKind::DidShow,
        }
    }

    /// The keyboard notification to subscribe to for "hide".
    pub fn hide_event(self) -> KeyboardEventKind {
        match self {
            Self::Ios => KeyboardEventKind::WillHide,
            Self::Android => KeyboardEventKind::DidHide,
        }
    }
}

/// How the window reacts when the soft keyboard appears (Android).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoftInputMode {
    #[default]
    AdjustResize,
    AdjustPan,
    AdjustNothing,
}

impl SoftInputMode {
    /// Whether the window does *not* resize itself and the scroll container
    /// needs a manual bottom margin equal to the keyboard height.
    pub fn needs_manual_margin(self) -> bool {
        matches!(self, Self::AdjustPan | Self::AdjustNothing)
    }
}

/// The keyboard notification channels a host event source can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardEventKind {
    WillShow,
    DidShow,
    WillHide,
    DidHide,
}

/// Keyboard geometry delivered with a show event.
///
/// `height == 0` represents "hidden"; at most one frame is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardFrame {
    /// Keyboard height in logical pixels (>= 0).
    pub height: f64,
    /// Screen Y of the keyboard's top edge.
    pub top_screen_y: f64,
}

impl KeyboardFrame {
    /// The frame of a hidden keyboard.
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// A snapshot of the scroll container's geometry, taken from a scroll
/// notification.
///
/// Only the most recent snapshot is retained; it is best-effort and may be
/// stale or absent (no scroll has occurred yet).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub viewport_height: f64,
    pub scroll_offset_y: f64,
    pub content_height: f64,
}

impl ScrollGeometry {
    /// Screen-space bottom of the visible region: `viewport + offset`.
    pub fn scroll_bottom_y(&self) -> f64 {
        self.viewport_height + self.scroll_offset_y
    }

    /// Whether the content is scrolled past its true end.
    ///
    /// This happens on iOS after a keyboard hide because the platform does
    /// not auto-adjust the bottom inset.
    pub fn is_over_scrolled(&self) -> bool {
        self.scroll_bottom_y() > self.content_height
    }
}

/// An on-screen bounding box reported by the measurement service.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    pub fn bottom_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Scroll-event throttle the composition layer should apply when wiring
/// scroll notifications to [`crate::KeyboardScrollCoordinator::handle_scroll`].
pub const SCROLL_EVENT_THROTTLE_MS: u64 = 100;

/// The output contract consumed by the rendering/composition layer.
///
/// Re-read after every keyboard event (the height-change observer fires once
/// per event); the coordinator never renders anything itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewProps {
    /// Bottom content inset, equal to the current keyboard height.
    pub inset_bottom: f64,
    /// Bottom margin for the container style. `Some` only on Android under
    /// `AdjustPan`/`AdjustNothing`, where the window does not resize itself.
    pub extra_bottom_margin: Option<f64>,
    /// See [`SCROLL_EVENT_THROTTLE_MS`].
    pub scroll_event_throttle_ms: u64,
    /// The host scroll view must not apply its own content-inset heuristics.
    pub disable_automatic_content_inset_adjustment: bool,
}

/// Default opaque view handle.
///
/// Hosts with richer handle types can instantiate
/// [`crate::KeyboardScrollCoordinator`] with their own `H`.
pub type ViewHandle = u64;
