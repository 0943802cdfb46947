use crate::{Platform, ScrollGeometry, SoftInputMode};

/// A scroll correction the adjustment engine wants issued.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ScrollCommand {
    /// iOS: delegate to the container's native "scroll field above keyboard"
    /// primitive, corrected for the container's own window top offset.
    IntoViewAboveKeyboard {
        offset: f64,
        prevent_negative_scroll: bool,
    },
    /// Android: scroll just enough to reveal the field.
    ScrollBy { delta_y: f64 },
}

/// Platform-specific adjustment strategy, selected once at construction.
///
/// The decision logic is kept pure (inputs in, command out) so each
/// platform's algorithm stays independently testable; the coordinator owns
/// the async measurement plumbing around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AdjustPolicy {
    Ios,
    Android,
}

impl AdjustPolicy {
    pub(crate) fn new(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Ios,
            Platform::Android => Self::Android,
        }
    }

    /// Show path, after the field is measured: decide whether the container's
    /// own window offset must be resolved before a command can be computed.
    ///
    /// iOS skips the extra measurement when the field (plus padding) already
    /// sits above the keyboard. Android skips it when no scroll notification
    /// has arrived yet, since the reveal delta needs the viewport height.
    pub(crate) fn wants_container_offset(
        self,
        field_bottom_y: f64,
        additional_scroll_offset: f64,
        keyboard_top_y: f64,
        viewport_height: Option<f64>,
    ) -> bool {
        match self {
            Self::Ios => field_bottom_y + additional_scroll_offset > keyboard_top_y,
            Self::Android => viewport_height.is_some(),
        }
    }

    /// Show path, with the container's window offset resolved: compute the
    /// command to issue, if any.
    pub(crate) fn show_command(
        self,
        field_bottom_y: f64,
        additional_scroll_offset: f64,
        container_top_y: f64,
        viewport_height: Option<f64>,
    ) -> Option<ScrollCommand> {
        match self {
            // The native primitive measures from screen top, not container
            // top; uncorrected, nested or offset containers scroll wrong.
            Self::Ios => Some(ScrollCommand::IntoViewAboveKeyboard {
                offset: additional_scroll_offset + container_top_y,
                prevent_negative_scroll: true,
            }),
            // Additive on top of the window's own resize/pan, so only the
            // shortfall below the viewport is scrolled.
            Self::Android => {
                let viewport_height = viewport_height?;
                let delta_y =
                    field_bottom_y + additional_scroll_offset - container_top_y - viewport_height;
                (delta_y > 0.0).then_some(ScrollCommand::ScrollBy { delta_y })
            }
        }
    }

    /// Hide path: whether an animated scroll-to-end should undo over-scroll.
    ///
    /// iOS only; Android's own margin/keyboard-disappearance animation is
    /// visually sufficient. Unknown geometry means no restore.
    pub(crate) fn should_restore_on_hide(self, geometry: Option<&ScrollGeometry>) -> bool {
        match self {
            Self::Ios => geometry.is_some_and(ScrollGeometry::is_over_scrolled),
            Self::Android => false,
        }
    }

    /// Bottom margin the output contract should carry for the current
    /// keyboard height.
    pub(crate) fn bottom_margin(self, mode: SoftInputMode, keyboard_height: f64) -> Option<f64> {
        match self {
            Self::Android if mode.needs_manual_margin() => Some(keyboard_height),
            _ => None,
        }
    }
}
