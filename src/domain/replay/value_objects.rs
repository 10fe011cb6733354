use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::domain::errors::{AppError, ReplayResult};

/// Raw values of the replay form, exactly as typed by the user.
///
/// Dates are in the `datetime-local` representation (`2024-12-01T00:00`),
/// symbols are a single comma separated string and the limit is unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterForm {
    pub exchange: String,
    pub from_date: String,
    pub to_date: String,
    pub symbols: String,
    pub limit: String,
}

impl FilterForm {
    /// Derive the request parameters. Only the limit can fail here; everything
    /// else is a plain text transformation.
    pub fn to_parameters(&self) -> ReplayResult<FilterParameters> {
        Ok(FilterParameters {
            exchange: self.exchange.clone(),
            from_date: datetime_local_to_wire(&self.from_date),
            to_date: datetime_local_to_wire(&self.to_date),
            symbols: split_symbols(&self.symbols),
            limit: parse_limit(&self.limit)?,
        })
    }
}

/// Filter parameters of a single replay invocation. Built fresh every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParameters {
    pub exchange: String,
    pub from_date: String,
    pub to_date: String,
    pub symbols: Vec<String>,
    pub limit: i64,
}

/// `2024-01-01T00:00` -> `2024-01-01 00:00`
pub fn datetime_local_to_wire(value: &str) -> String {
    value.replacen('T', " ", 1)
}

/// Split on commas and trim each entry. Empty entries are kept.
pub fn split_symbols(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn parse_limit(raw: &str) -> ReplayResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::ValidationError(format!("limit must be a positive integer, got '{}'", raw))
    })
}

/// Exchange ids offered as suggestions in the form. Any other id is still
/// accepted and passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum KnownExchange {
    Bitmex,
    BinanceFutures,
    OkexSwap,
    HuobiDmLinearSwap,
    Bybit,
    KucoinFutures,
    Hyperliquid,
    BitgetFutures,
    CoinbaseInternational,
}

impl KnownExchange {
    pub fn ids() -> Vec<&'static str> {
        Self::iter().map(<&'static str>::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn form(symbols: &str, limit: &str) -> FilterForm {
        FilterForm {
            exchange: "bitmex".into(),
            from_date: "2024-01-01T00:00".into(),
            to_date: "2024-01-01T00:10".into(),
            symbols: symbols.into(),
            limit: limit.into(),
        }
    }

    #[test]
    fn symbols_are_trimmed_and_keep_case() {
        assert_eq!(split_symbols("BTC, eth , LTC"), vec!["BTC", "eth", "LTC"]);
    }

    #[test]
    fn empty_symbol_entries_survive() {
        assert_eq!(split_symbols("XBTUSD,,ETHUSD,"), vec!["XBTUSD", "", "ETHUSD", ""]);
        assert_eq!(split_symbols(""), vec![""]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(split_symbols("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn datetime_local_separator_is_replaced() {
        assert_eq!(datetime_local_to_wire("2024-01-01T00:00"), "2024-01-01 00:00");
        assert_eq!(datetime_local_to_wire("2024-01-01 00:00"), "2024-01-01 00:00");
    }

    #[test]
    fn form_converts_to_parameters() {
        let params = form("XBTUSD", "50").to_parameters().unwrap();
        assert_eq!(params.from_date, "2024-01-01 00:00");
        assert_eq!(params.to_date, "2024-01-01 00:10");
        assert_eq!(params.symbols, vec!["XBTUSD"]);
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn non_numeric_limit_is_a_validation_error() {
        let err = form("XBTUSD", "fifty").to_parameters().unwrap_err();
        assert_eq!(
            err,
            AppError::ValidationError("limit must be a positive integer, got 'fifty'".into())
        );
    }

    #[test]
    fn known_exchange_ids_are_kebab_case() {
        for exchange in KnownExchange::iter() {
            assert_eq!(KnownExchange::from_str(exchange.as_ref()).unwrap(), exchange);
        }
        let ids = KnownExchange::ids();
        assert_eq!(ids[0], "bitmex");
        assert!(ids.contains(&"huobi-dm-linear-swap"));
        assert!(ids.contains(&"coinbase-international"));
    }
}
