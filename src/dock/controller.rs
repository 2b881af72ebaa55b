use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};

use crate::dock::state::{decide, DockDecision, DockState, Layout, ScrollState};
use crate::dom::Subscription;
use crate::error::DockError;

/// The page as seen by the dock: one geometry read, one write.
pub trait DockSurface {
    fn layout(&self) -> Layout;
    fn apply(&self, decision: &DockDecision);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Scroll,
    Resize,
    FooterVisibility,
}

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Trigger::Scroll => "scroll",
            Trigger::Resize => "resize",
            Trigger::FooterVisibility => "footer visibility",
        }
    }
}

pub trait EventSource {
    fn subscribe(&self, trigger: Trigger, handler: Rc<dyn Fn()>) -> Result<Subscription, DockError>;
}

pub trait FrameScheduler {
    /// Run `callback` once, before the next repaint.
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Guard allowing a single scheduled frame at a time.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    /// Returns true if the caller should schedule a frame now.
    pub fn begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

pub struct ScrollDockController<S> {
    surface: S,
    scroll: ScrollState,
    state: DockState,
    applied: Option<DockDecision>,
}

impl<S: DockSurface> ScrollDockController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            scroll: ScrollState::new(),
            state: DockState::Floating,
            applied: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DockState {
        self.state
    }

    #[cfg(test)]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Read the page once, decide, and write only if something changed.
    pub fn recompute(&mut self) -> DockDecision {
        let layout = self.surface.layout();
        let direction = self.scroll.observe(layout.scroll_offset);
        let decision = decide(&layout, direction, self.state);

        if decision.state != self.state {
            debug!("scroll dock {:?} -> {:?} at offset {}", self.state, decision.state, layout.scroll_offset);
        }
        self.state = decision.state;

        if self.applied != Some(decision) {
            self.surface.apply(&decision);
            self.applied = Some(decision);
        }
        decision
    }
}

impl<S: DockSurface + 'static> ScrollDockController<S> {
    /// Hook the controller up to its three triggers and run the initial check.
    ///
    /// Scroll goes through the frame throttle, resize and footer visibility
    /// recompute right away.
    pub fn bind<E, F>(self, events: &E, frames: F) -> Result<DockBinding, DockError>
    where
        E: EventSource,
        F: FrameScheduler + 'static,
    {
        let active = Rc::new(Cell::new(true));
        let shared = Rc::new(Shared {
            controller: RefCell::new(self),
            throttle: FrameThrottle::default(),
            active: Rc::clone(&active),
        });
        let frames = Rc::new(frames);

        let on_scroll: Rc<dyn Fn()> = {
            let shared = Rc::clone(&shared);
            Rc::new(move || {
                if !shared.throttle.begin() {
                    return;
                }
                let shared = Rc::clone(&shared);
                frames.request_frame(Box::new(move || {
                    shared.throttle.finish();
                    shared.recompute();
                }));
            })
        };
        let immediate: Rc<dyn Fn()> = {
            let shared = Rc::clone(&shared);
            Rc::new(move || shared.recompute())
        };

        let subscriptions = vec![
            events.subscribe(Trigger::Scroll, on_scroll)?,
            events.subscribe(Trigger::Resize, Rc::clone(&immediate))?,
            events.subscribe(Trigger::FooterVisibility, immediate)?,
        ];

        shared.recompute();
        info!("Scroll dock active");

        Ok(DockBinding {
            active,
            subscriptions,
        })
    }
}

struct Shared<S> {
    controller: RefCell<ScrollDockController<S>>,
    throttle: FrameThrottle,
    active: Rc<Cell<bool>>,
}

impl<S: DockSurface> Shared<S> {
    fn recompute(&self) {
        if !self.active.get() {
            return;
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.recompute();
        }
    }
}

/// Live dock. Dropping it unsubscribes everything.
pub struct DockBinding {
    active: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl DockBinding {
    /// Unsubscribe every trigger. Frames already requested become no-ops.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for DockBinding {
    fn drop(&mut self) {
        self.active.set(false);
        for subscription in self.subscriptions.drain(..) {
            subscription.cancel();
        }
        debug!("Scroll dock torn down");
    }
}
