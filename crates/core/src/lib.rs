pub mod errors;
pub mod links;
pub mod models;
pub mod platform;
pub mod seed;
pub mod services;

use chrono::NaiveDate;
use models::{
    day::Day,
    expense::{Currency, ExpenseDraft, ExpenseRecord},
    ledger::Ledger,
    reference::{EmergencyContact, FlightSegment, SouvenirItem},
    settings::Settings,
    trip::Trip,
};
use platform::system::{StdinPrompt, SystemClock, SystemNavigator};
use platform::traits::{Clock, ConfirmationPrompt, MapNavigator};
use services::{
    currency_service::CurrencyService,
    itinerary_service::{ItineraryService, MoveDirection},
    ledger_service::LedgerService,
};
use uuid::Uuid;

use errors::CoreError;

/// Outcome of a confirmation-gated delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the target was removed.
    Deleted,
    /// The user declined the prompt; state is exactly as before the call.
    Declined,
    /// Nothing matched the given id; state unchanged, no prompt shown.
    NotFound,
}

/// Main entry point for the Trip Planner core library.
///
/// Holds the itinerary, the spend ledger, and the settings, plus the
/// injected collaborators (confirmation prompt, clock, map navigator)
/// that keep UI concerns out of the state logic.
///
/// Every public mutation is a single atomic state transition applied in
/// caller order — there is no background work and no suspension point,
/// so an external observer (such as a rendered view) always sees a
/// consistent before/after state.
#[must_use]
pub struct TripPlanner {
    trip: Trip,
    ledger: Ledger,
    settings: Settings,
    itinerary_service: ItineraryService,
    ledger_service: LedgerService,
    currency_service: CurrencyService,
    confirm: Box<dyn ConfirmationPrompt>,
    clock: Box<dyn Clock>,
    navigator: Box<dyn MapNavigator>,
    /// Tracks whether any mutation has occurred since construction.
    dirty: bool,
}

impl std::fmt::Debug for TripPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripPlanner")
            .field("days", &self.trip.days.len())
            .field("expenses", &self.ledger.records.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl TripPlanner {
    /// Create a planner over an injected trip with explicit collaborators.
    /// This is the constructor tests use with fixture trips and stub
    /// prompts/clocks/navigators.
    pub fn new(
        trip: Trip,
        confirm: Box<dyn ConfirmationPrompt>,
        clock: Box<dyn Clock>,
        navigator: Box<dyn MapNavigator>,
    ) -> Self {
        let today = clock.today();
        Self {
            trip,
            ledger: Ledger::new(today),
            settings: Settings::default(),
            itinerary_service: ItineraryService::new(),
            ledger_service: LedgerService::new(),
            currency_service: CurrencyService::new(),
            confirm,
            clock,
            navigator,
            dirty: false,
        }
    }

    /// Create a planner over the built-in Nagoya winter trip, wired to
    /// the host system (terminal prompt, UTC clock, default URL opener).
    pub fn with_default_trip() -> Self {
        Self::new(
            seed::nagoya_winter_trip(),
            Box::new(StdinPrompt),
            Box::new(SystemClock),
            Box::new(SystemNavigator),
        )
    }

    // ── Itinerary ───────────────────────────────────────────────────

    /// All days in itinerary order.
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.trip.days
    }

    /// Look up a day by id.
    #[must_use]
    pub fn day(&self, day_id: u32) -> Option<&Day> {
        self.trip.day(day_id)
    }

    /// Move the event at `index` one slot up or down within its day.
    /// Unknown days and boundary moves are silent no-ops; returns `true`
    /// only when the order changed.
    pub fn move_event(&mut self, day_id: u32, index: usize, direction: MoveDirection) -> bool {
        let moved = self
            .itinerary_service
            .move_event(&mut self.trip, day_id, index, direction);
        if moved {
            self.dirty = true;
        }
        moved
    }

    /// Delete an event, gated by the confirmation prompt.
    /// Declining the prompt leaves the itinerary exactly as it was; an
    /// unknown day or event id never shows a prompt at all.
    pub fn delete_event(&mut self, day_id: u32, event_id: &str) -> DeleteOutcome {
        let exists = self
            .trip
            .day(day_id)
            .is_some_and(|d| d.event_position(event_id).is_some());
        if !exists {
            return DeleteOutcome::NotFound;
        }
        if !self.confirm.confirm("確定刪除此行程？") {
            return DeleteOutcome::Declined;
        }

        self.itinerary_service
            .delete_event(&mut self.trip, day_id, event_id);
        self.dirty = true;
        DeleteOutcome::Deleted
    }

    // ── Expense Draft ───────────────────────────────────────────────

    /// The in-progress "add expense" form.
    #[must_use]
    pub fn draft(&self) -> &ExpenseDraft {
        &self.ledger.draft
    }

    pub fn set_draft_item(&mut self, item: impl Into<String>) {
        self.ledger.draft.item = item.into();
    }

    /// Raw cost text; parsed only when the record is created.
    pub fn set_draft_cost(&mut self, cost: impl Into<String>) {
        self.ledger.draft.cost = cost.into();
    }

    pub fn set_draft_currency(&mut self, currency: Currency) {
        self.ledger.draft.currency = currency;
    }

    /// `None` models a cleared date field; creation then no-ops.
    pub fn set_draft_date(&mut self, date: Option<NaiveDate>) {
        self.ledger.draft.date = date;
    }

    // ── Expense Ledger ──────────────────────────────────────────────

    /// Create a record from the draft, locking in the current exchange
    /// rate. An incomplete draft is a no-op that keeps the form as
    /// typed; on success the draft resets (empty item/cost, JPY, today)
    /// and the new record's id is returned.
    pub fn add_expense(&mut self) -> Option<Uuid> {
        let today = self.clock.today();
        let id = self
            .ledger_service
            .add_expense(&mut self.ledger, &self.settings.exchange_rate, today)?;
        self.dirty = true;
        Some(id)
    }

    /// Delete a record, gated by the confirmation prompt.
    pub fn delete_expense(&mut self, id: Uuid) -> DeleteOutcome {
        if !self.ledger.records.iter().any(|r| r.id == id) {
            return DeleteOutcome::NotFound;
        }
        if !self.confirm.confirm("確定刪除此筆帳目？") {
            return DeleteOutcome::Declined;
        }

        self.ledger_service.delete_expense(&mut self.ledger, id);
        self.dirty = true;
        DeleteOutcome::Deleted
    }

    /// Recorded expenses, newest first (display order).
    #[must_use]
    pub fn expenses(&self) -> Vec<&ExpenseRecord> {
        let mut records: Vec<&ExpenseRecord> = self.ledger.records.iter().collect();
        records.reverse(); // internal storage is creation-ordered
        records
    }

    /// Look up a single record by id.
    #[must_use]
    pub fn expense(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.ledger.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.ledger.records.len()
    }

    /// Total spend in whole TWD, each record converted at its own
    /// locked rate and the sum rounded once at the end.
    #[must_use]
    pub fn total_spent(&self) -> i64 {
        self.ledger_service.total_spent(&self.ledger.records)
    }

    // ── Exchange Rate & Quick Converter ─────────────────────────────

    /// Store a new JPY→TWD rate input, kept exactly as entered. Applies
    /// to future records and the quick converter only — existing
    /// records keep the rate they locked in at creation.
    pub fn set_exchange_rate(&mut self, input: impl Into<String>) {
        self.settings.exchange_rate = input.into();
        self.dirty = true;
    }

    /// The raw rate input as entered.
    #[must_use]
    pub fn exchange_rate_input(&self) -> &str {
        &self.settings.exchange_rate
    }

    /// The rate as a number; invalid input parses as zero.
    #[must_use]
    pub fn exchange_rate(&self) -> f64 {
        self.currency_service.parse_rate(&self.settings.exchange_rate)
    }

    /// Quick converter: JPY amount (raw text) at the current rate,
    /// formatted as whole TWD. Returns "0" for empty or invalid input.
    #[must_use]
    pub fn convert(&self, amount_input: &str) -> String {
        self.currency_service
            .convert(amount_input, &self.settings.exchange_rate)
    }

    // ── Reference Info ──────────────────────────────────────────────

    #[must_use]
    pub fn flights(&self) -> &[FlightSegment] {
        &self.trip.flights
    }

    #[must_use]
    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.trip.contacts
    }

    #[must_use]
    pub fn souvenirs(&self) -> &[SouvenirItem] {
        &self.trip.souvenirs
    }

    // ── External Navigation ─────────────────────────────────────────

    /// Open the external map service for a free-text place query.
    /// Fire-and-forget: an empty query does nothing, and opener
    /// failures are logged without touching planner state.
    pub fn navigate_to(&self, query: &str) {
        let Some(url) = links::maps_search_url(query) else {
            return;
        };
        if let Err(e) = self.navigator.open(&url) {
            tracing::warn!(%url, error = %e, "map navigation failed");
        }
    }

    /// Navigate to a day's hotel, unless it is a continued stay or the
    /// trip-end "home" entry.
    pub fn navigate_to_hotel(&self, day_id: u32) {
        let Some(day) = self.trip.day(day_id) else {
            return;
        };
        if day.hotel.is_navigable() {
            self.navigate_to(&day.hotel.map_query());
        }
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all expense records as a JSON string.
    pub fn export_expenses_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.records).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize expenses to JSON: {e}"))
        })
    }

    /// Export all expense records as a CSV string.
    /// Columns: id, item, cost, currency, date, rate_at_time_of_entry
    #[must_use]
    pub fn export_expenses_to_csv(&self) -> String {
        let mut csv = String::from("id,item,cost,currency,date,rate_at_time_of_entry\n");
        for record in &self.ledger.records {
            // Escape CSV: quote fields containing commas, quotes, or newlines
            let item = &record.item;
            let escaped_item = if item.contains(',') || item.contains('"') || item.contains('\n') {
                format!("\"{}\"", item.replace('"', "\"\""))
            } else {
                item.clone()
            };
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                record.id,
                escaped_item,
                record.cost,
                record.currency,
                record.date,
                record.rate_at_time_of_entry,
            ));
        }
        csv
    }

    /// Import expense records from a JSON string, appending them to the
    /// ledger. Imported records keep their recorded rates — the current
    /// global rate is not applied. Returns the number imported.
    pub fn import_expenses_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let records: Vec<ExpenseRecord> = serde_json::from_str(json)?;
        let count = records.len();
        if count > 0 {
            self.ledger.records.extend(records);
            self.dirty = true;
        }
        Ok(count)
    }

    // ── Modified State ──────────────────────────────────────────────

    /// Returns `true` if anything has been mutated since construction.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.dirty
    }
}
