pub mod currency_service;
pub mod itinerary_service;
pub mod ledger_service;
