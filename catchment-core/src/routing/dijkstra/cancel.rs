use std::{
    fmt::Debug,
    sync::atomic::{AtomicBool, Ordering},
};

/// Cooperative cancellation, polled by the solver before each frontier
/// extraction. Implementations must be cheap to poll.
pub trait Cancellation: Debug + Sync {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
