use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config;
use crate::dock::controller::{
    DockBinding, DockSurface, EventSource, FrameScheduler, ScrollDockController, Trigger,
};
use crate::dock::state::{DockDecision, Layout};
use crate::dom::{self, Subscription};
use crate::error::DockError;

/// Turn a lookup result into the missing-element precondition error.
pub fn require<T>(found: Option<T>, id: &'static str) -> Result<T, DockError> {
    found.ok_or(DockError::MissingElement { id })
}

/// Look up the bar, then the footer. A missing bar stops before the footer
/// lookup.
pub fn locate_targets<B, F>(
    find_bar: impl FnOnce(&'static str) -> Option<B>,
    find_footer: impl FnOnce(&'static str) -> Option<F>,
) -> Result<(B, F), DockError> {
    let bar = require(find_bar(config::STICKY_CTA_ID), config::STICKY_CTA_ID)?;
    let footer = require(find_footer(config::FOOTER_ID), config::FOOTER_ID)?;
    Ok((bar, footer))
}

pub struct BrowserSurface {
    window: Window,
    footer: Element,
    bar: HtmlElement,
}

impl BrowserSurface {
    /// Find the sticky CTA bar and the footer by id.
    pub fn locate(window: Window, document: &Document) -> Result<Self, DockError> {
        let (bar, footer) = locate_targets(
            |id| {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            },
            |id| document.get_element_by_id(id),
        )?;
        Ok(Self { window, footer, bar })
    }

    pub fn footer(&self) -> &Element {
        &self.footer
    }
}

impl DockSurface for BrowserSurface {
    fn layout(&self) -> Layout {
        let rect = self.footer.get_bounding_client_rect();
        Layout {
            scroll_offset: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
            footer_top: rect.top(),
            footer_height: rect.height(),
        }
    }

    fn apply(&self, decision: &DockDecision) {
        let _ = self
            .footer
            .class_list()
            .toggle_with_force(config::FOOTER_FIXED_CLASS, decision.footer_fixed());
        let _ = self
            .bar
            .style()
            .set_property("bottom", &format!("{}px", decision.bar_bottom));
    }
}

/// Window scroll/resize plus an intersection observer on the footer.
pub struct BrowserEvents {
    window: Window,
    footer: Element,
}

impl BrowserEvents {
    pub fn new(window: Window, footer: Element) -> Self {
        Self { window, footer }
    }
}

impl EventSource for BrowserEvents {
    fn subscribe(&self, trigger: Trigger, handler: Rc<dyn Fn()>) -> Result<Subscription, DockError> {
        let result = match trigger {
            Trigger::Scroll => dom::listen(&self.window, "scroll", move || handler()),
            Trigger::Resize => dom::listen(&self.window, "resize", move || handler()),
            Trigger::FooterVisibility => {
                dom::observe_intersection(&self.footer, 0.0, "0px", move |_| handler())
            }
        };
        result.map_err(|e| DockError::Subscribe(format!("{} ({:?})", trigger.name(), e)))
    }
}

/// Holds the handle of the one frame in flight. The scheduled callback only
/// keeps a weak link back, so dropping the slot drops the handle and cancels
/// the frame.
pub struct FrameSlot<H> {
    pending: Rc<RefCell<Option<H>>>,
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }
}

impl<H: 'static> FrameSlot<H> {
    pub fn schedule(&self, request: impl FnOnce(Box<dyn FnOnce()>) -> H, callback: Box<dyn FnOnce()>) {
        let slot: Weak<RefCell<Option<H>>> = Rc::downgrade(&self.pending);
        let handle = request(Box::new(move || {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let finished = slot.borrow_mut().take();
            drop(finished);
            callback();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }
}

#[derive(Default)]
pub struct BrowserFrames {
    slot: FrameSlot<AnimationFrame>,
}

impl FrameScheduler for BrowserFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.slot
            .schedule(|run| request_animation_frame(move |_| run()), callback);
    }
}

/// Find the bar and footer on the page and start docking.
pub fn bind_dock(window: Window, document: &Document) -> Result<DockBinding, DockError> {
    let surface = BrowserSurface::locate(window.clone(), document)?;
    let events = BrowserEvents::new(window, surface.footer().clone());
    ScrollDockController::new(surface).bind(&events, BrowserFrames::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stands in for an animation frame handle: records whether it was
    /// dropped before its frame ran.
    struct FakeHandle {
        fired: Rc<Cell<bool>>,
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            if !self.fired.get() {
                self.cancelled.set(true);
            }
        }
    }

    struct Scheduled {
        run: Option<Box<dyn FnOnce()>>,
        fired: Rc<Cell<bool>>,
        cancelled: Rc<Cell<bool>>,
    }

    impl Scheduled {
        fn run(&mut self) {
            self.fired.set(true);
            if let Some(run) = self.run.take() {
                run();
            }
        }
    }

    fn schedule(slot: &FrameSlot<FakeHandle>, ran: &Rc<Cell<u32>>) -> Scheduled {
        let fired = Rc::new(Cell::new(false));
        let cancelled = Rc::new(Cell::new(false));
        let mut run = None;
        let ran = Rc::clone(ran);
        slot.schedule(
            |callback| {
                run = Some(callback);
                FakeHandle {
                    fired: Rc::clone(&fired),
                    cancelled: Rc::clone(&cancelled),
                }
            },
            Box::new(move || ran.set(ran.get() + 1)),
        );
        Scheduled {
            run,
            fired,
            cancelled,
        }
    }

    #[test]
    fn test_require_reports_missing_id() {
        assert_eq!(
            require::<u8>(None, config::FOOTER_ID),
            Err(DockError::MissingElement { id: "site-footer" })
        );
        assert_eq!(require(Some(3), config::STICKY_CTA_ID), Ok(3));
    }

    #[test]
    fn test_missing_bar_stops_before_footer_lookup() {
        let footer_lookups = Cell::new(0);
        let result = locate_targets::<u8, u8>(
            |_| None,
            |_| {
                footer_lookups.set(footer_lookups.get() + 1);
                Some(1)
            },
        );

        assert_eq!(result, Err(DockError::MissingElement { id: "sticky-cta" }));
        assert_eq!(footer_lookups.get(), 0);
    }

    #[test]
    fn test_missing_footer_is_reported_by_id() {
        let result = locate_targets::<u8, u8>(|_| Some(1), |_| None);
        assert_eq!(result, Err(DockError::MissingElement { id: "site-footer" }));
    }

    #[test]
    fn test_locate_targets_looks_up_configured_ids() {
        let result = locate_targets(|id| Some(id), |id| Some(id));
        assert_eq!(result, Ok((config::STICKY_CTA_ID, config::FOOTER_ID)));
    }

    #[test]
    fn test_scheduled_frame_does_not_keep_its_slot_alive() {
        let slot = FrameSlot::default();
        let ran = Rc::new(Cell::new(0));
        let _scheduled = schedule(&slot, &ran);

        assert_eq!(Rc::strong_count(&slot.pending), 1);
    }

    #[test]
    fn test_dropping_slot_cancels_pending_frame() {
        let slot = FrameSlot::default();
        let ran = Rc::new(Cell::new(0));
        let mut scheduled = schedule(&slot, &ran);

        drop(slot);
        assert!(scheduled.cancelled.get());

        scheduled.run();
        assert_eq!(ran.get(), 0);
    }

    #[test]
    fn test_frame_runs_callback_and_clears_slot() {
        let slot = FrameSlot::default();
        let ran = Rc::new(Cell::new(0));
        let mut scheduled = schedule(&slot, &ran);

        scheduled.run();

        assert_eq!(ran.get(), 1);
        assert!(slot.pending.borrow().is_none());
        assert!(!scheduled.cancelled.get());
    }
}
