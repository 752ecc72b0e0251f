// Request lifecycle state.
// Tracks the nullable-loading tri-state plus the settled data/error pair.

use std::sync::Arc;

use crate::error::QuarryError;

/// Observable state of a request lifecycle.
///
/// `loading` is `None` before the first issue, `Some(true)` while a call is
/// in flight, and `Some(false)` once settled. After settlement exactly one of
/// `data`/`error` is populated; while a new call is in flight the previous
/// settlement's fields are preserved until the new one lands.
///
/// Errors are held behind `Arc` so the shared slot and a per-identity slot
/// can reference the same fault without cloning it.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    loading: Option<bool>,
    data: Option<T>,
    error: Option<Arc<QuarryError>>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestState<T> {
    /// State for a request that has never been issued.
    pub fn new() -> Self {
        Self {
            loading: None,
            data: None,
            error: None,
        }
    }

    /// Nullable loading flag: `None` unstarted, `Some(true)` in flight,
    /// `Some(false)` settled.
    pub fn loading(&self) -> Option<bool> {
        self.loading
    }

    /// Decoded payload of the most recent successful settlement.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Fault of the most recent failed settlement.
    pub fn error(&self) -> Option<&QuarryError> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the most recent call has settled (successfully or not).
    pub fn is_settled(&self) -> bool {
        self.loading == Some(false)
    }

    /// Mark a call in flight, keeping the previous settlement visible.
    pub(crate) fn begin(&mut self) {
        self.loading = Some(true);
    }

    /// Settle successfully.
    pub(crate) fn settle_ok(&mut self, data: T) {
        self.loading = Some(false);
        self.error = None;
        self.data = Some(data);
    }

    /// Settle with a fault.
    pub(crate) fn settle_err(&mut self, error: Arc<QuarryError>) {
        self.loading = Some(false);
        self.data = None;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unstarted() {
        let state: RequestState<i32> = RequestState::new();
        assert_eq!(state.loading(), None);
        assert!(state.data().is_none());
        assert!(!state.has_error());
        assert!(!state.is_settled());
    }

    #[test]
    fn settle_ok_is_exclusive_with_error() {
        let mut state = RequestState::new();
        state.begin();
        state.settle_err(Arc::new(QuarryError::Other("boom".into())));
        assert!(state.has_error());

        state.begin();
        assert_eq!(state.loading(), Some(true));
        // Previous error survives until the new settlement.
        assert!(state.has_error());

        state.settle_ok(7);
        assert_eq!(state.loading(), Some(false));
        assert_eq!(state.data(), Some(&7));
        assert!(!state.has_error());
    }

    #[test]
    fn settle_err_clears_data() {
        let mut state = RequestState::new();
        state.begin();
        state.settle_ok(7);

        state.begin();
        state.settle_err(Arc::new(QuarryError::Other("boom".into())));
        assert!(state.data().is_none());
        assert!(state.has_error());
        assert!(state.is_settled());
    }
}
