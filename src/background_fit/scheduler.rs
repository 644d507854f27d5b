use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Something that can run a callback on the next rendering frame.
pub trait FrameSource {
    type Handle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel_frame(&self, handle: Self::Handle);
}

/// Coalesces bursts of requests (resize drags) into one run per frame. A new
/// request replaces whatever frame is still waiting.
pub struct FrameScheduler<F: FrameSource> {
    source: F,
    pending: RefCell<Option<F::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<F: FrameSource> FrameScheduler<F> {
    pub fn new(source: F) -> Self {
        Self {
            source,
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        self.cancel();
        self.armed.set(true);
        let armed = self.armed.clone();
        let handle = self.source.request_frame(Box::new(move || {
            armed.set(false);
            work();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.source.cancel_frame(handle);
        }
        self.armed.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}
