//! Outbound link builders for the reference panels and map navigation.

use url::Url;

/// Bank of Taiwan posted-rates page, linked next to the rate editor.
pub const RATE_LOOKUP_URL: &str = "https://rate.bot.com.tw/xrt?Lang=zh-TW";

const MAPS_SEARCH_ENDPOINT: &str = "https://www.google.com/maps/search/";

/// Build a Google Maps search URL for a free-text place query.
///
/// The query goes through the generic `q`-style search parameter, which
/// works for any place string. Returns `None` for an empty query.
#[must_use]
pub fn maps_search_url(query: &str) -> Option<Url> {
    if query.trim().is_empty() {
        return None;
    }
    Url::parse_with_params(MAPS_SEARCH_ENDPOINT, &[("api", "1"), ("query", query)]).ok()
}

/// `tel:` link for a phone number, as used by the emergency-contact
/// cards.
#[must_use]
pub fn tel_link(phone: &str) -> String {
    format!("tel:{phone}")
}
