use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::logging::LogComponent;
use crate::log_debug;

type FrameCallback = Rc<RefCell<dyn FnMut(f64)>>;
type PendingFrame = Rc<RefCell<Option<AnimationFrame>>>;

/// Repeating `requestAnimationFrame` registration owned by one chart.
///
/// Each frame re-registers the next one. [`FrameLoop::cancel`] (also run on
/// drop) clears the flag and drops the pending [`AnimationFrame`], which
/// cancels it, so the callback never runs after teardown.
pub struct FrameLoop {
    pending: PendingFrame,
    active: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start calling `on_frame` with the frame timestamp (ms) every refresh.
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        let pending: PendingFrame = Rc::new(RefCell::new(None));
        let active = Rc::new(Cell::new(true));
        let callback: FrameCallback = Rc::new(RefCell::new(on_frame));

        schedule(&pending, &active, callback);
        log_debug!(LogComponent::Infrastructure("FrameLoop"), "▶️ frame loop started");

        Self { pending, active }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        if self.active.replace(false) {
            log_debug!(LogComponent::Infrastructure("FrameLoop"), "⏹️ frame loop cancelled");
        }
        // Dropping the handle cancels the request and breaks the Rc cycle
        // between the pending frame and its own closure.
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(pending: &PendingFrame, active: &Rc<Cell<bool>>, callback: FrameCallback) {
    let next_pending = Rc::clone(pending);
    let next_active = Rc::clone(active);

    let frame = request_animation_frame(move |timestamp| {
        if !next_active.get() {
            return;
        }
        (&mut *callback.borrow_mut())(timestamp);
        if next_active.get() {
            schedule(&next_pending, &next_active, callback);
        }
    });

    *pending.borrow_mut() = Some(frame);
}
