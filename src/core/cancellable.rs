use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::core::error::ScanError;

/// Cooperative stop signal for a running scan.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// (or a signal handler) while the scan holds the other. The scan checks it
/// between directories and files.
#[derive(Debug, Clone, Default)]
pub struct Cancellable {
    cancelled: Arc<AtomicBool>,
}

impl Cancellable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns `Err(ScanError::Cancelled)` once [`cancel`](Self::cancel) was called.
    pub fn check(&self) -> Result<(), ScanError> {
        if self.is_cancelled() {
            Err(ScanError::Cancelled)
        } else {
            Ok(())
        }
    }
}
