use std::rc::Rc;

use crate::host::{KeyboardEventSource, KeyboardListener, SubscriptionToken};
use crate::{KeyboardFrame, KeyboardScrollCoordinator};

/// Scoped ownership of the coordinator's two keyboard listeners.
///
/// [`Self::attach`] subscribes to the platform-appropriate show and hide
/// channels; [`Self::release`] (or dropping the guard) removes both,
/// regardless of whether either ever fired. Release is idempotent: the token
/// fields are taken on first release, so a later drop removes nothing twice.
pub struct KeyboardSubscriptions {
    source: Rc<dyn KeyboardEventSource>,
    show: Option<SubscriptionToken>,
    hide: Option<SubscriptionToken>,
}

impl KeyboardSubscriptions {
    /// Wires `coordinator` to `source`.
    ///
    /// The listeners hold coordinator handles, so the coordinator stays alive
    /// at least as long as the subscriptions do.
    pub fn attach<H: Clone + 'static>(
        source: Rc<dyn KeyboardEventSource>,
        coordinator: &KeyboardScrollCoordinator<H>,
    ) -> Self {
        let platform = coordinator.options().platform;

        let on_show: KeyboardListener = {
            let coordinator = coordinator.clone();
            Box::new(move |frame: KeyboardFrame| coordinator.handle_keyboard_show(frame))
        };
        let on_hide: KeyboardListener = {
            let coordinator = coordinator.clone();
            Box::new(move |_frame: KeyboardFrame| coordinator.handle_keyboard_hide())
        };

        let show = source.subscribe(platform.show_event(), on_show);
        let hide = source.subscribe(platform.hide_event(), on_hide);
        Self {
            source,
            show: Some(show),
            hide: Some(hide),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.show.is_some() || self.hide.is_some()
    }

    /// Removes both listeners. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(token) = self.show.take() {
            self.source.unsubscribe(token);
        }
        if let Some(token) = self.hide.take() {
            self.source.unsubscribe(token);
        }
    }
}

impl Drop for KeyboardSubscriptions {
    fn drop(&mut self) {
        self.release();
    }
}

impl core::fmt::Debug for KeyboardSubscriptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardSubscriptions")
            .field("show", &self.show)
            .field("hide", &self.hide)
            .finish_non_exhaustive()
    }
}
