use chrono::NaiveDate;
use url::Url;

use crate::errors::CoreError;

/// Blocking yes/no query shown to the user before destructive deletes.
///
/// The planner treats "no" (or a dismissed prompt) as a full abort: the
/// delete behaves as if it had never been invoked. Supplying a stub that
/// always confirms or always declines keeps the itinerary and ledger
/// logic independently testable.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Source of "today", used to default new expense-draft dates.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Fire-and-forget hand-off of a URL to an external mapping context.
///
/// Failures (e.g., no opener available) are reported so the caller can
/// log them; they are never surfaced to itinerary or ledger state.
pub trait MapNavigator: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), CoreError>;
}
