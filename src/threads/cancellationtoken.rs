use std::sync::{
    Arc,
    Condvar,
    Mutex,
    PoisonError
};
use std::time::Duration;

/// Shared one-way cancellation flag. Cancelling wakes every pending [`sleep`](CancellationToken::sleep).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        let (cancelled, wakeup) = &*self.state;
        *cancelled.lock().unwrap_or_else(PoisonError::into_inner) = true;
        wakeup.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleeps for `duration` unless cancelled first. Returns `false` on cancellation.
    pub fn sleep(&self, duration: Duration) -> bool {
        let (cancelled, wakeup) = &*self.state;
        let guard = cancelled.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = wakeup
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        !*guard
    }
}
