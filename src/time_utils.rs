use chrono::DateTime;

/// `HH:MM:SS.mmm` (UTC) for a millisecond epoch timestamp.
pub fn format_log_time(timestamp_ms: u64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms as i64) {
        Some(dt) => dt.format("%H:%M:%S%.3f").to_string(),
        None => format!("{:06}", timestamp_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::format_log_time;

    #[test]
    fn formats_utc_clock_with_millis() {
        assert_eq!(format_log_time(0), "00:00:00.000");
        // 2024-12-01 00:10:05.250 UTC
        assert_eq!(format_log_time(1_733_011_805_250), "00:10:05.250");
    }

    #[test]
    fn out_of_range_falls_back_to_raw_value() {
        assert_eq!(format_log_time(i64::MAX as u64), i64::MAX.to_string());
    }
}
