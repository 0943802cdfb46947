use std::rc::Rc;

use crate::{Platform, SoftInputMode};

/// Pixel padding kept between the focused field's bottom and the keyboard top.
pub const DEFAULT_ADDITIONAL_SCROLL_OFFSET: f64 = 20.0;

/// Observer fired after every synchronous keyboard-height update.
///
/// The argument is the new height (0 after a hide event). Composition layers
/// typically re-read [`crate::KeyboardScrollCoordinator::scroll_view_props`]
/// here.
pub type OnKeyboardHeightChange = Rc<dyn Fn(f64)>;

/// Configuration for [`crate::KeyboardScrollCoordinator`].
///
/// Immutable for the coordinator's lifetime.
#[derive(Clone)]
pub struct CoordinatorOptions {
    pub platform: Platform,

    /// Extra padding above the keyboard when scrolling a field into view.
    pub additional_scroll_offset: f64,

    /// The window's soft-input mode (Android). Under `AdjustPan` and
    /// `AdjustNothing` the output contract carries a manual bottom margin
    /// equal to the keyboard height.
    pub soft_input_mode: SoftInputMode,

    /// Optional keyboard-height observer.
    pub on_keyboard_height_change: Option<OnKeyboardHeightChange>,
}

impl CoordinatorOptions {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            additional_scroll_offset: DEFAULT_ADDITIONAL_SCROLL_OFFSET,
            soft_input_mode: SoftInputMode::default(),
            on_keyboard_height_change: None,
        }
    }

    pub fn with_additional_scroll_offset(mut self, additional_scroll_offset: f64) -> Self {
        self.additional_scroll_offset = additional_scroll_offset;
        self
    }

    pub fn with_soft_input_mode(mut self, soft_input_mode: SoftInputMode) -> Self {
        self.soft_input_mode = soft_input_mode;
        self
    }

    pub fn with_on_keyboard_height_change(
        mut self,
        on_keyboard_height_change: Option<impl Fn(f64) + 'static>,
    ) -> Self {
        self.on_keyboard_height_change = on_keyboard_height_change.map(|f| Rc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CoordinatorOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordinatorOptions")
            .field("platform", &self.platform)
            .field("additional_scroll_offset", &self.additional_scroll_offset)
            .field("soft_input_mode", &self.soft_input_mode)
            .finish_non_exhaustive()
    }
}
