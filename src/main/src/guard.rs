use std::sync::atomic::{AtomicBool, Ordering};

/// Scoped hold on the shared "fetch in flight" flag.
///
/// The flag is raised on construction and lowered when the guard drops,
/// so every exit path out of a fetch cycle releases it.
pub struct FetchGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FetchGuard<'a> {
    pub fn hold(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        FetchGuard { flag }
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
