use gloo_timers::callback::Timeout;
use std::time::Duration;

/// One-shot timers. Dropping the returned handle cancels the task if it has not run yet.
pub trait Scheduler {
    type Handle: 'static;

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo; the `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}
