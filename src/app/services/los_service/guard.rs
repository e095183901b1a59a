//! Single-flight guard for catalog loads

use std::sync::atomic::{AtomicBool, Ordering};

/// Claim on the loading flag, released on drop
#[derive(Debug)]
pub struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    /// Claim the flag, or `None` when a load is already in flight
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
