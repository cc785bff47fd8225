use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

/// Scroll position snapshot handed to every consumer on a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
}

/// Runs a callback on the next display refresh.
pub trait FrameScheduler {
    fn schedule(&self, frame: Box<dyn FnOnce()>);
}

/// `requestAnimationFrame`-backed scheduler. The pending frame is held until it
/// fires; dropping the last clone of the scheduler cancels it.
#[derive(Clone, Default)]
pub struct AnimationFrameScheduler {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule(&self, frame: Box<dyn FnOnce()>) {
        let pending = Rc::downgrade(&self.pending);
        let handle = request_animation_frame(move |_timestamp| {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().take();
            }
            frame();
        });
        *self.pending.borrow_mut() = Some(handle);
    }
}

type Consumer = Box<dyn FnMut(ScrollState)>;

struct Inner<S> {
    scheduler: S,
    source: Box<dyn Fn() -> f64>,
    ticking: Cell<bool>,
    consumers: RefCell<Vec<Consumer>>,
}

impl<S> Inner<S> {
    fn run_consumers(&self) {
        let state = ScrollState {
            offset: (self.source)(),
        };
        for consumer in self.consumers.borrow_mut().iter_mut() {
            consumer(state);
        }
    }

    fn run_frame(&self) {
        self.run_consumers();
        self.ticking.set(false);
    }
}

/// Relays an unbounded stream of scroll notifications to its consumers at most
/// once per display refresh. The offset is read when the frame runs, not when
/// the notification arrives.
///
/// A scheduled frame only holds a weak reference, so dropping every clone of
/// the dispatcher cancels a pending frame instead of running it.
pub struct ScrollDispatcher<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for ScrollDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: FrameScheduler + 'static> ScrollDispatcher<S> {
    pub fn new(scheduler: S, source: impl Fn() -> f64 + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                source: Box::new(source),
                ticking: Cell::new(false),
                consumers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe(&self, consumer: impl FnMut(ScrollState) + 'static) {
        self.inner.consumers.borrow_mut().push(Box::new(consumer));
    }

    /// Handles one raw scroll notification.
    pub fn notify(&self) {
        if self.inner.ticking.replace(true) {
            return;
        }
        let inner: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(Box::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.run_frame();
            }
        }));
    }

    /// Runs the consumers immediately, outside the frame cycle. Used once after
    /// mount so the page starts in sync with its scroll position. A frame that
    /// is already scheduled stays scheduled and keeps the gate closed.
    pub fn run_now(&self) {
        self.inner.run_consumers();
    }

    pub fn is_scheduled(&self) -> bool {
        self.inner.ticking.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects scheduled frames until the test fires them.
    #[derive(Clone, Default)]
    struct ManualFrames {
        queue: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl ManualFrames {
        fn fire(&self) {
            let frames: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for frame in frames {
                frame();
            }
        }

        fn queued(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl FrameScheduler for ManualFrames {
        fn schedule(&self, frame: Box<dyn FnOnce()>) {
            self.queue.borrow_mut().push(frame);
        }
    }

    fn dispatcher(
        frames: &ManualFrames,
        offset: &Rc<Cell<f64>>,
    ) -> (ScrollDispatcher<ManualFrames>, Rc<RefCell<Vec<f64>>>) {
        let source = Rc::clone(offset);
        let dispatcher = ScrollDispatcher::new(frames.clone(), move || source.get());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        dispatcher.subscribe(move |state| sink.borrow_mut().push(state.offset));
        (dispatcher, seen)
    }

    #[test]
    fn burst_of_events_runs_consumers_once_with_live_offset() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(0.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        for i in 0..100 {
            offset.set(f64::from(i) * 10.0);
            dispatcher.notify();
        }
        assert_eq!(frames.queued(), 1);

        // Layout moved again after the last event but before the refresh.
        offset.set(4_321.0);
        frames.fire();

        assert_eq!(*seen.borrow(), vec![4_321.0]);
        assert!(!dispatcher.is_scheduled());
    }

    #[test]
    fn every_consumer_sees_the_same_snapshot() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(250.0));
        let (dispatcher, first) = dispatcher(&frames, &offset);
        let second = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&second);
        dispatcher.subscribe(move |state| sink.borrow_mut().push(state.offset));

        dispatcher.notify();
        frames.fire();

        assert_eq!(*first.borrow(), vec![250.0]);
        assert_eq!(*second.borrow(), vec![250.0]);
    }

    #[test]
    fn a_new_frame_is_scheduled_after_the_previous_one_ran() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(0.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        dispatcher.notify();
        frames.fire();
        offset.set(80.0);
        dispatcher.notify();
        dispatcher.notify();
        assert_eq!(frames.queued(), 1);
        frames.fire();

        assert_eq!(*seen.borrow(), vec![0.0, 80.0]);
    }

    #[test]
    fn no_events_means_no_frames() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(0.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        frames.fire();
        assert!(seen.borrow().is_empty());
        assert!(!dispatcher.is_scheduled());
    }

    #[test]
    fn run_now_keeps_a_pending_frame_exclusive() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(30.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        dispatcher.notify();
        dispatcher.run_now();
        dispatcher.notify();

        assert_eq!(frames.queued(), 1);
        assert!(dispatcher.is_scheduled());
        frames.fire();
        assert_eq!(*seen.borrow(), vec![30.0, 30.0]);
        assert!(!dispatcher.is_scheduled());
    }

    #[test]
    fn dropping_the_dispatcher_cancels_a_pending_frame() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(0.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        dispatcher.notify();
        drop(dispatcher);
        frames.fire();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn run_now_bypasses_the_gate() {
        let frames = ManualFrames::default();
        let offset = Rc::new(Cell::new(12.0));
        let (dispatcher, seen) = dispatcher(&frames, &offset);

        dispatcher.run_now();
        assert_eq!(*seen.borrow(), vec![12.0]);
        assert_eq!(frames.queued(), 0);
    }
}
