use serde::{Deserialize, Serialize};

/// Trip-wide user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The JPY→TWD exchange rate, kept exactly as the user entered it.
    ///
    /// This is a draft value for *future* ledger entries and the quick
    /// converter only — records lock in the rate that was current when
    /// they were created, and editing this never revalues them. Invalid
    /// input behaves as a rate of zero when parsed.
    pub exchange_rate: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exchange_rate: "0.225".to_string(),
        }
    }
}
