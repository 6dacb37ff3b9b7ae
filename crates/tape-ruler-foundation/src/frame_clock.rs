//! Redraw and frame scheduling.
//!
//! Controls never own a timer. They ask the host to redraw or to deliver one
//! more frame, and the host calls back with the frame timestamp on its UI
//! thread.

use std::cell::Cell;
use std::rc::Rc;

/// Host-side scheduling hooks.
pub trait FrameScheduler {
    /// Marks the control dirty. Hosts may coalesce several requests into one frame.
    fn request_redraw(&self);

    /// Asks for one more frame callback so an animation can advance.
    fn schedule_frame(&self);
}

#[derive(Default)]
struct ManualFrameClockInner {
    redraw_requests: Cell<usize>,
    frame_pending: Cell<bool>,
}

/// Frame scheduler driven by hand, for tests and headless hosts.
///
/// Clones share state, so one handle can be given to the control while the
/// host keeps another to pump frames.
#[derive(Clone, Default)]
pub struct ManualFrameClock {
    inner: Rc<ManualFrameClockInner>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redraw_requests(&self) -> usize {
        self.inner.redraw_requests.get()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.inner.frame_pending.get()
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame_request(&self) -> bool {
        self.inner.frame_pending.replace(false)
    }

    /// Delivers frames every `interval_nanos` starting at `start_nanos` until no
    /// further frame is requested or `max_frames` is reached.
    ///
    /// Returns the number of frames delivered.
    pub fn run_frames(
        &self,
        start_nanos: u64,
        interval_nanos: u64,
        max_frames: usize,
        mut on_frame: impl FnMut(u64),
    ) -> usize {
        let mut time = start_nanos;
        let mut delivered = 0;
        while delivered < max_frames && self.take_frame_request() {
            on_frame(time);
            delivered += 1;
            time = time.saturating_add(interval_nanos);
        }
        if delivered == max_frames && self.is_frame_pending() {
            log::warn!("frame loop still pending after {max_frames} frames");
        }
        delivered
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_redraw(&self) {
        self.inner
            .redraw_requests
            .set(self.inner.redraw_requests.get() + 1);
    }

    fn schedule_frame(&self) {
        self.inner.frame_pending.set(true);
    }
}
