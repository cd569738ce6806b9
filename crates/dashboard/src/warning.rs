//! The "no data" outcome of a view.

use serde::Serialize;
use std::fmt;

/// Raised by a view whose filtered row set is empty.
///
/// This is not an error: the view's tables are still well formed, just
/// empty, and the presentation layer shows a "no data" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyResultWarning {
    pub view: &'static str,
}

impl EmptyResultWarning {
    pub fn new(view: &'static str) -> Self {
        Self { view }
    }
}

impl fmt::Display for EmptyResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No titles match the current filters ({} view)", self.view)
    }
}

/// Warning for a view computed over `matched` rows
pub(crate) fn warning_for(view: &'static str, matched: usize) -> Option<EmptyResultWarning> {
    (matched == 0).then(|| EmptyResultWarning::new(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_only_when_empty() {
        assert!(warning_for("overview", 3).is_none());

        let warning = warning_for("overview", 0).unwrap();
        assert_eq!(
            warning.to_string(),
            "No titles match the current filters (overview view)"
        );
    }
}
