use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo-timers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Virtual clock for tests. Nothing fires until `advance` moves time past a
/// task's due point.
#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Scheduler;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        pending: Vec<(u64, u64, Task)>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Rc<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let id = self.id;
            self.queue.borrow_mut().pending.retain(|(task_id, _, _)| *task_id != id);
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().pending.len()
        }

        /// Moves the clock forward, firing due tasks in due order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let task = {
                    let mut queue = self.queue.borrow_mut();
                    let mut next: Option<(usize, u64, u64)> = None;
                    for (index, (id, due, _)) in queue.pending.iter().enumerate() {
                        if *due > target {
                            continue;
                        }
                        if next.map_or(true, |(_, d, i)| (*due, *id) < (d, i)) {
                            next = Some((index, *due, *id));
                        }
                    }
                    match next {
                        Some((index, due, _)) => {
                            let (_, _, task) = queue.pending.remove(index);
                            queue.now = due;
                            task
                        }
                        None => {
                            queue.now = target;
                            break;
                        }
                    }
                };
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.pending.push((id, due, task));
            ManualHandle {
                id,
                queue: self.queue.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn fires_once_due() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        let _late = scheduler.schedule(300, Box::new(move || log.borrow_mut().push("late")));
        let log = fired.clone();
        let _early = scheduler.schedule(100, Box::new(move || log.borrow_mut().push("early")));

        scheduler.advance(99);
        assert!(fired.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*fired.borrow(), vec!["early"]);
        scheduler.advance(500);
        assert_eq!(*fired.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now(), 600);
    }

    #[test]
    fn dropped_handle_never_fires() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(false));

        let flag = fired.clone();
        let handle = scheduler.schedule(10, Box::new(move || *flag.borrow_mut() = true));
        drop(handle);

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1_000);
        assert!(!*fired.borrow());
    }
}
