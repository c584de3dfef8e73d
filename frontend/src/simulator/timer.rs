use gloo_timers::callback::Timeout;

/// One-shot delayed callbacks on the page's event loop.
pub trait TimerQueue {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelling a handle whose callback already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` backed timers.
#[derive(Default)]
pub struct BrowserTimers;

impl TimerQueue for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle.cancel());
    }
}

#[cfg(test)]
pub use manual::ManualTimers;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::TimerQueue;

    struct Pending {
        id: u64,
        due_ms: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now_ms: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Deterministic clock for tests. Time only moves on `advance`.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualTimers {
        pub fn now_ms(&self) -> u64 {
            self.queue.borrow().now_ms
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().pending.len()
        }

        /// Runs every callback due within the next `ms`, earliest first.
        pub fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due_ms <= target)
                        .min_by_key(|(_, p)| (p.due_ms, p.id))
                        .map(|(index, _)| index);
                    due.map(|index| {
                        let timer = queue.pending.remove(index);
                        queue.now_ms = timer.due_ms;
                        timer.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now_ms = target;
        }
    }

    impl TimerQueue for ManualTimers {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due_ms = queue.now_ms + u64::from(delay_ms);
            queue.pending.push(Pending {
                id,
                due_ms,
                callback,
            });
            id
        }

        fn cancel(&self, handle: u64) {
            self.queue.borrow_mut().pending.retain(|p| p.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_fire_in_due_order() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(300, "late"), (100, "early"), (200, "middle")] {
            let fired = fired.clone();
            timers.schedule(delay, Box::new(move || fired.borrow_mut().push(name)));
        }

        timers.advance(250);
        assert_eq!(*fired.borrow(), vec!["early", "middle"]);
        assert_eq!(timers.now_ms(), 250);

        timers.advance(50);
        assert_eq!(*fired.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancelled_callback_never_runs() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(false));
        let handle = {
            let fired = fired.clone();
            timers.schedule(10, Box::new(move || *fired.borrow_mut() = true))
        };
        timers.cancel(handle);
        timers.advance(1000);
        assert!(!*fired.borrow());
    }

    #[test]
    fn callback_may_schedule_more_work() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        {
            let inner_timers = timers.clone();
            let fired = fired.clone();
            timers.schedule(
                100,
                Box::new(move || {
                    fired.borrow_mut().push(inner_timers.now_ms());
                    let fired = fired.clone();
                    let clock = inner_timers.clone();
                    inner_timers.schedule(
                        100,
                        Box::new(move || fired.borrow_mut().push(clock.now_ms())),
                    );
                }),
            );
        }
        timers.advance(500);
        assert_eq!(*fired.borrow(), vec![100, 200]);
    }
}
