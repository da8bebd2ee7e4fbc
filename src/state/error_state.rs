// ============================================================================
// ERROR STATE - Messages shown by the error dialog
// ============================================================================
// Closed --report--> Open --report--> Open (list grows)
// Open/Closed --dismiss--> Closed (list emptied)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot handed to the error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorChannelState {
    pub open: bool,
    pub title: String,
    pub messages: Vec<String>,
}

/// Collects failures from every retrieval until the user dismisses them
#[derive(Clone)]
pub struct ErrorAggregator {
    inner: Rc<RefCell<ErrorChannelState>>,
}

impl ErrorAggregator {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ErrorChannelState {
                open: false,
                title: title.into(),
                messages: Vec::new(),
            })),
        }
    }

    /// Append a message and open the dialog. No dedup.
    pub fn report(&self, message: impl Into<String>) {
        let mut state = self.inner.borrow_mut();
        state.messages.push(message.into());
        state.open = true;
    }

    /// Only reachable from the dialog's close control
    pub fn dismiss(&self) {
        let mut state = self.inner.borrow_mut();
        state.messages.clear();
        state.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().open
    }

    pub fn messages(&self) -> Vec<String> {
        self.inner.borrow().messages.clone()
    }

    pub fn snapshot(&self) -> ErrorChannelState {
        self.inner.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_empty() {
        let errors = ErrorAggregator::new("An Error Occurred");
        let state = errors.snapshot();
        assert!(!state.open);
        assert!(state.messages.is_empty());
        assert_eq!(state.title, "An Error Occurred");
    }

    #[test]
    fn reports_accumulate_in_order() {
        let errors = ErrorAggregator::new("An Error Occurred");
        errors.report("Failed to fetch doctors");
        assert!(errors.is_open());
        errors.report("Failed to fetch patients");
        errors.report("Failed to fetch patients");
        assert_eq!(
            errors.messages(),
            vec![
                "Failed to fetch doctors".to_string(),
                "Failed to fetch patients".to_string(),
                "Failed to fetch patients".to_string(),
            ]
        );
    }

    #[test]
    fn dismiss_always_returns_to_closed_and_empty() {
        for count in [1, 5] {
            let errors = ErrorAggregator::new("An Error Occurred");
            for i in 0..count {
                errors.report(format!("error {}", i));
            }
            errors.dismiss();
            assert!(!errors.is_open());
            assert!(errors.messages().is_empty());
        }
    }

    #[test]
    fn clones_share_the_same_channel() {
        let errors = ErrorAggregator::new("t");
        let other = errors.clone();
        other.report("boom");
        assert!(errors.is_open());
        errors.dismiss();
        assert!(!other.is_open());
    }
}
