use chrono::NaiveDateTime;

use super::value_objects::FilterParameters;
use crate::domain::errors::{AppError, ReplayResult};

const WIRE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Boundary checks applied before a request leaves the page
#[derive(Debug, Clone, Default)]
pub struct FilterValidationService;

impl FilterValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, params: &FilterParameters) -> ReplayResult<()> {
        if params.exchange.trim().is_empty() {
            return Err(AppError::ValidationError("exchange must not be empty".to_string()));
        }

        if params.limit < 1 {
            return Err(AppError::ValidationError(format!(
                "limit must be a positive integer, got '{}'",
                params.limit
            )));
        }

        let from = parse_wire_datetime(&params.from_date)
            .ok_or_else(|| invalid_date("from_date", &params.from_date))?;
        let to = parse_wire_datetime(&params.to_date)
            .ok_or_else(|| invalid_date("to_date", &params.to_date))?;

        if from > to {
            return Err(AppError::ValidationError(format!(
                "from_date '{}' is later than to_date '{}'",
                params.from_date, params.to_date
            )));
        }

        // Symbols go out exactly as split, empty entries included.
        Ok(())
    }
}

/// Accepts `YYYY-MM-DD HH:MM` and `YYYY-MM-DD HH:MM:SS`
pub fn parse_wire_datetime(value: &str) -> Option<NaiveDateTime> {
    WIRE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn invalid_date(field: &str, raw: &str) -> AppError {
    AppError::ValidationError(format!("invalid {} '{}'", field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FilterParameters {
        FilterParameters {
            exchange: "bitmex".into(),
            from_date: "2024-12-01 00:00".into(),
            to_date: "2024-12-01 00:10".into(),
            symbols: vec!["XBTUSD".into(), "".into()],
            limit: 50,
        }
    }

    #[test]
    fn accepts_defaults_and_empty_symbol_entries() {
        assert!(FilterValidationService::new().validate(&params()).is_ok());
    }

    #[test]
    fn accepts_seconds_precision() {
        let mut p = params();
        p.from_date = "2024-12-01 00:00:30".into();
        assert!(FilterValidationService::new().validate(&p).is_ok());
    }

    #[test]
    fn rejects_non_positive_limit() {
        let mut p = params();
        p.limit = 0;
        let err = FilterValidationService::new().validate(&p).unwrap_err();
        assert_eq!(err.message(), "limit must be a positive integer, got '0'");
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut p = params();
        p.to_date = "2024-13-01 00:00".into();
        let err = FilterValidationService::new().validate(&p).unwrap_err();
        assert_eq!(err.message(), "invalid to_date '2024-13-01 00:00'");

        let mut p = params();
        p.from_date = "".into();
        let err = FilterValidationService::new().validate(&p).unwrap_err();
        assert_eq!(err.message(), "invalid from_date ''");
    }

    #[test]
    fn rejects_reversed_range() {
        let mut p = params();
        p.from_date = "2024-12-02 00:00".into();
        assert!(matches!(
            FilterValidationService::new().validate(&p),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_blank_exchange() {
        let mut p = params();
        p.exchange = "  ".into();
        assert!(FilterValidationService::new().validate(&p).is_err());
    }
}
