use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::{ExpenseDraft, ExpenseRecord};

/// The spend ledger: recorded expenses plus the in-progress draft.
///
/// Records are append-only in creation order; display accessors reverse
/// them so the newest entry is shown first. A record has exactly two
/// states — absent and recorded — so there is no edit-in-place here,
/// only add and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub records: Vec<ExpenseRecord>,
    pub draft: ExpenseDraft,
}

impl Ledger {
    /// Empty ledger with a fresh draft dated `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: Vec::new(),
            draft: ExpenseDraft::empty(today),
        }
    }
}
