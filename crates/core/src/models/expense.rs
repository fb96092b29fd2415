use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency an expense was paid in.
///
/// TWD is the home currency: totals are aggregated into it, and TWD
/// records never have a rate applied to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "JPY")]
    Jpy,
    #[serde(rename = "TWD")]
    Twd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Jpy => write!(f, "JPY"),
            Currency::Twd => write!(f, "TWD"),
        }
    }
}

impl Currency {
    /// Display prefix used in front of amounts.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Jpy => "¥",
            Currency::Twd => "NT$",
        }
    }
}

/// One logged spend entry.
///
/// **Important**: `rate_at_time_of_entry` is captured when the record is
/// created and never changes afterwards, even if the global exchange
/// rate is later edited. Historical spend is not retroactively revalued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: Uuid,

    /// What the money was spent on (non-empty)
    pub item: String,

    /// Amount in `currency`-local units
    pub cost: f64,

    pub currency: Currency,

    /// Calendar date of the spend
    pub date: NaiveDate,

    /// JPY→TWD rate in effect when the record was created
    pub rate_at_time_of_entry: f64,
}

impl ExpenseRecord {
    pub fn new(
        item: impl Into<String>,
        cost: f64,
        currency: Currency,
        date: NaiveDate,
        rate_at_time_of_entry: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.into(),
            cost,
            currency,
            date,
            rate_at_time_of_entry,
        }
    }

    /// Home-currency value of this record, rounded to whole TWD.
    /// JPY records convert at their locked rate; TWD records pass through.
    #[must_use]
    pub fn twd_equivalent(&self) -> i64 {
        match self.currency {
            Currency::Jpy => (self.cost * self.rate_at_time_of_entry).round() as i64,
            Currency::Twd => self.cost.round() as i64,
        }
    }
}

/// The partially entered "add expense" form.
///
/// `cost` stays raw text until the record is created; a rejected add
/// leaves every field exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub item: String,

    /// Raw cost input, parsed when the record is created
    pub cost: String,

    pub currency: Currency,

    /// `None` when the user cleared the date field
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    /// Fresh draft: empty item/cost, JPY, dated today.
    #[must_use]
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            item: String::new(),
            cost: String::new(),
            currency: Currency::Jpy,
            date: Some(today),
        }
    }

    /// Presence check for record creation: item, cost, and date must all
    /// be filled in. Nothing further is validated here.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.item.is_empty() && !self.cost.is_empty() && self.date.is_some()
    }
}
