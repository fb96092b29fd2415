/// JPY→TWD conversion over raw user input.
///
/// Both the quick converter and the rate capture work on text exactly as
/// entered; nothing here ever fails or panics on bad input.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw exchange-rate input.
    ///
    /// Empty or non-numeric input behaves as a rate of zero — for the
    /// quick converter and for the rate locked into new records alike.
    #[must_use]
    pub fn parse_rate(&self, input: &str) -> f64 {
        input.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Convert a whole-unit amount at the given rate, rounding to the
    /// nearest whole unit of the target currency.
    #[must_use]
    pub fn convert_amount(&self, amount: f64, rate: f64) -> i64 {
        (amount * rate).round() as i64
    }

    /// Quick converter over raw text: JPY amount × current rate input,
    /// formatted as whole TWD. Returns "0" for an empty or non-numeric
    /// amount.
    #[must_use]
    pub fn convert(&self, amount_input: &str, rate_input: &str) -> String {
        match amount_input.trim().parse::<f64>() {
            Ok(amount) => self
                .convert_amount(amount, self.parse_rate(rate_input))
                .to_string(),
            Err(_) => "0".to_string(),
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
