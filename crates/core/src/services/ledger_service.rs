use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::expense::{Currency, ExpenseDraft, ExpenseRecord};
use crate::models::ledger::Ledger;

use super::currency_service::CurrencyService;

/// Manages the spend ledger: record creation, deletion, and the
/// home-currency aggregate.
///
/// Pure business logic — no I/O, no prompts. Easy to test.
pub struct LedgerService {
    currency_service: CurrencyService,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Create a record from the ledger's draft.
    ///
    /// An incomplete draft (empty item, empty cost, cleared date) or a
    /// non-numeric cost is a no-op: no record is created, the draft
    /// keeps everything the user typed, and `None` is returned.
    ///
    /// On success the new record locks in the rate parsed from
    /// `rate_input` (invalid input locks in zero), the draft is reset to
    /// empty item/cost, JPY, and `today`, and the record's id is
    /// returned.
    pub fn add_expense(
        &self,
        ledger: &mut Ledger,
        rate_input: &str,
        today: NaiveDate,
    ) -> Option<Uuid> {
        if !ledger.draft.is_complete() {
            return None;
        }
        let cost = ledger.draft.cost.trim().parse::<f64>().ok()?;
        let date = ledger.draft.date?;

        let record = ExpenseRecord::new(
            ledger.draft.item.clone(),
            cost,
            ledger.draft.currency,
            date,
            self.currency_service.parse_rate(rate_input),
        );
        let id = record.id;
        ledger.records.push(record);
        ledger.draft = ExpenseDraft::empty(today);
        Some(id)
    }

    /// Remove the record with the given id.
    /// Idempotent: an unknown id is a no-op and reports `false`.
    pub fn delete_expense(&self, ledger: &mut Ledger, id: Uuid) -> bool {
        let before = ledger.records.len();
        ledger.records.retain(|r| r.id != id);
        ledger.records.len() != before
    }

    /// Total spend in whole TWD.
    ///
    /// JPY records contribute `cost × rate_at_time_of_entry` (the rate
    /// locked at creation — never the current global rate); TWD records
    /// contribute `cost` unchanged. Rounding happens once on the final
    /// sum, not per record.
    #[must_use]
    pub fn total_spent(&self, records: &[ExpenseRecord]) -> i64 {
        let total: f64 = records
            .iter()
            .map(|r| match r.currency {
                Currency::Jpy => r.cost * r.rate_at_time_of_entry,
                Currency::Twd => r.cost,
            })
            .sum();
        total.round() as i64
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
