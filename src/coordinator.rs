use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::host::{FocusTracker, MeasurementService, ScrollContainer};
use crate::platform::{AdjustPolicy, ScrollCommand};
use crate::{
    CoordinatorOptions, KeyboardFrame, SCROLL_EVENT_THROTTLE_MS, ScrollGeometry, ScrollViewProps,
    ViewHandle,
};

/// A headless keyboard-aware scroll coordinator.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the managed scroll container is only a
///   `Weak` back-reference plus an opaque view handle.
/// - Your adapter drives it by forwarding keyboard show/hide notifications
///   and scroll notifications.
/// - Rendering input is exposed via [`Self::scroll_view_props`] and the
///   optional keyboard-height observer in [`CoordinatorOptions`].
///
/// Cloning produces another handle to the same coordinator; this is how
/// event listeners capture it. All measurement results arrive through
/// host-dispatched completion callbacks that hold only `Weak` references, so
/// a callback resolving after teardown is a no-op.
pub struct KeyboardScrollCoordinator<H = ViewHandle> {
    shared: Rc<Shared<H>>,
}

struct Shared<H> {
    options: CoordinatorOptions,
    policy: AdjustPolicy,
    focus: Rc<dyn FocusTracker<H>>,
    measurer: Rc<dyn MeasurementService<H>>,
    state: RefCell<State<H>>,
}

struct State<H> {
    keyboard_height: f64,
    geometry: Option<ScrollGeometry>,
    container: Option<ManagedContainer<H>>,
}

struct ManagedContainer<H> {
    handle: H,
    commands: Weak<dyn ScrollContainer<H>>,
}

impl<H: Clone + 'static> KeyboardScrollCoordinator<H> {
    pub fn new(
        options: CoordinatorOptions,
        focus: Rc<dyn FocusTracker<H>>,
        measurer: Rc<dyn MeasurementService<H>>,
    ) -> Self {
        kdebug!(
            platform = ?options.platform,
            additional_scroll_offset = options.additional_scroll_offset,
            soft_input_mode = ?options.soft_input_mode,
            "KeyboardScrollCoordinator::new"
        );
        let policy = AdjustPolicy::new(options.platform);
        Self {
            shared: Rc::new(Shared {
                policy,
                focus,
                measurer,
                state: RefCell::new(State {
                    keyboard_height: 0.0,
                    geometry: None,
                    container: None,
                }),
                options,
            }),
        }
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.shared.options
    }

    /// The current keyboard height: the latest show event's height, or 0.
    pub fn keyboard_height(&self) -> f64 {
        self.shared.state.borrow().keyboard_height
    }

    /// The latest recorded scroll geometry, if any scroll has occurred.
    pub fn scroll_geometry(&self) -> Option<ScrollGeometry> {
        self.shared.state.borrow().geometry
    }

    /// Registers the managed scroll container.
    ///
    /// `handle` is the container's view handle (used for containment checks
    /// and window measurements); `container` is the command surface, held
    /// weakly — dropping the host's `Rc` silently disables adjustments.
    pub fn set_container<C>(&self, handle: H, container: &Rc<C>)
    where
        C: ScrollContainer<H> + 'static,
    {
        let commands: Rc<dyn ScrollContainer<H>> = Rc::clone(container) as _;
        self.shared.state.borrow_mut().container = Some(ManagedContainer {
            handle,
            commands: Rc::downgrade(&commands),
        });
    }

    /// Clears the managed container reference (call on teardown/unmount).
    ///
    /// Pending measurement callbacks detect the missing reference when they
    /// resolve and become no-ops.
    pub fn clear_container(&self) {
        self.shared.state.borrow_mut().container = None;
    }

    /// Records the container's latest reported geometry.
    ///
    /// Wire this to the container's scroll notifications, throttled to
    /// [`SCROLL_EVENT_THROTTLE_MS`]. The snapshot is stored as-is, no
    /// validation or clamping; the hide-path restore and the Android
    /// show-path adjustment read whatever is latest.
    pub fn handle_scroll(&self, geometry: ScrollGeometry) {
        ktrace!(
            viewport_height = geometry.viewport_height,
            scroll_offset_y = geometry.scroll_offset_y,
            content_height = geometry.content_height,
            "scroll notification"
        );
        self.shared.state.borrow_mut().geometry = Some(geometry);
    }

    /// Handles a keyboard show notification.
    ///
    /// Updates `keyboard_height` synchronously, then — when a field has
    /// focus, a container is registered, and the field turns out to be a
    /// descendant of that container — measures the field and issues the
    /// platform-specific correction. Every failure along the way (no focus,
    /// no container, containment negative or errored, measurement errored)
    /// aborts silently and leaves the scroll position untouched.
    pub fn handle_keyboard_show(&self, frame: KeyboardFrame) {
        kdebug!(
            height = frame.height,
            top_screen_y = frame.top_screen_y,
            "keyboard show"
        );
        if frame.height < 0.0 {
            kwarn!(height = frame.height, "show event with negative height");
            debug_assert!(frame.height >= 0.0, "show event with negative height");
        }
        self.set_keyboard_height(frame.height.max(0.0));

        let Some(field) = self.shared.focus.currently_focused() else {
            return;
        };
        let Some(container) = self.shared.container_handle() else {
            return;
        };

        let weak = Rc::downgrade(&self.shared);
        let captured = field.clone();
        self.shared.measurer.is_descendant_of(
            &field,
            &container,
            Box::new(move |contained| {
                if !matches!(contained, Ok(true)) {
                    return;
                }
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                Shared::measure_field(&shared, captured, frame);
            }),
        );
    }

    /// Handles a keyboard hide notification.
    ///
    /// Resets `keyboard_height` to 0 first, then (iOS only) undoes
    /// over-scroll using the cached geometry: if the visible bottom sits past
    /// the content's true end, one animated scroll-to-end is issued. Missing
    /// geometry or container means no restore.
    pub fn handle_keyboard_hide(&self) {
        kdebug!("keyboard hide");
        self.set_keyboard_height(0.0);

        let geometry = self.shared.state.borrow().geometry;
        if !self.shared.policy.should_restore_on_hide(geometry.as_ref()) {
            return;
        }
        let Some(commands) = self.shared.live_commands() else {
            return;
        };
        kdebug!("restoring over-scrolled content");
        commands.scroll_to_end(true);
    }

    /// The output contract for the rendering/composition layer.
    pub fn scroll_view_props(&self) -> ScrollViewProps {
        let keyboard_height = self.keyboard_height();
        ScrollViewProps {
            inset_bottom: keyboard_height,
            extra_bottom_margin: self
                .shared
                .policy
                .bottom_margin(self.shared.options.soft_input_mode, keyboard_height),
            scroll_event_throttle_ms: SCROLL_EVENT_THROTTLE_MS,
            disable_automatic_content_inset_adjustment: true,
        }
    }

    fn set_keyboard_height(&self, height: f64) {
        self.shared.state.borrow_mut().keyboard_height = height;
        // Borrow released above: the observer may re-read the coordinator.
        if let Some(observer) = &self.shared.options.on_keyboard_height_change {
            observer(height);
        }
    }
}

impl<H: Clone + 'static> Shared<H> {
    fn container_handle(&self) -> Option<H> {
        self.state
            .borrow()
            .container
            .as_ref()
            .map(|c| c.handle.clone())
    }

    fn live_commands(&self) -> Option<Rc<dyn ScrollContainer<H>>> {
        self.state
            .borrow()
            .container
            .as_ref()
            .and_then(|c| c.commands.upgrade())
    }

    fn viewport_height(&self) -> Option<f64> {
        self.state.borrow().geometry.map(|g| g.viewport_height)
    }

    /// Show path, after containment is confirmed: measure the field's bounds.
    fn measure_field(shared: &Rc<Self>, field: H, frame: KeyboardFrame) {
        let weak = Rc::downgrade(shared);
        let captured = field.clone();
        shared.measurer.measure_in_window(
            &field,
            Box::new(move |bounds| {
                let Ok(bounds) = bounds else {
                    return;
                };
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                Self::resolve_container_offset(&shared, captured, bounds.bottom_y(), frame);
            }),
        );
    }

    /// Show path, after the field is measured: resolve the container's own
    /// window offset if the platform policy needs it, then issue the command.
    fn resolve_container_offset(
        shared: &Rc<Self>,
        field: H,
        field_bottom_y: f64,
        frame: KeyboardFrame,
    ) {
        let wants_offset = shared.policy.wants_container_offset(
            field_bottom_y,
            shared.options.additional_scroll_offset,
            frame.top_screen_y,
            shared.viewport_height(),
        );
        if !wants_offset {
            return;
        }
        let Some(container) = shared.container_handle() else {
            return;
        };

        let weak = Rc::downgrade(shared);
        shared.measurer.measure_in_window(
            &container,
            Box::new(move |bounds| {
                let Ok(bounds) = bounds else {
                    return;
                };
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let command = shared.policy.show_command(
                    field_bottom_y,
                    shared.options.additional_scroll_offset,
                    bounds.y,
                    shared.viewport_height(),
                );
                let Some(command) = command else {
                    return;
                };
                let Some(commands) = shared.live_commands() else {
                    return;
                };
                match command {
                    ScrollCommand::IntoViewAboveKeyboard {
                        offset,
                        prevent_negative_scroll,
                    } => {
                        kdebug!(offset, "scrolling field into view above keyboard");
                        commands.scroll_field_into_view_above_keyboard(
                            &field,
                            offset,
                            prevent_negative_scroll,
                        );
                    }
                    ScrollCommand::ScrollBy { delta_y } => {
                        kdebug!(delta_y, "scrolling to reveal field");
                        commands.scroll_by(delta_y);
                    }
                }
            }),
        );
    }
}

impl<H> Clone for KeyboardScrollCoordinator<H> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<H> core::fmt::Debug for KeyboardScrollCoordinator<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("KeyboardScrollCoordinator")
            .field("options", &self.shared.options)
            .field("keyboard_height", &state.keyboard_height)
            .field("geometry", &state.geometry)
            .field("has_container", &state.container.is_some())
            .finish_non_exhaustive()
    }
}
