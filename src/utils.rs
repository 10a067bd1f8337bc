//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Local, Utc};

/// Render a probability in `[0, 1]` as a percentage with one decimal,
/// e.g. `0.9134` → `"91.3%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Short local wall-clock time for the "Analyzed at" line.
pub fn format_received_at(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Current time; stamped onto responses as they arrive.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.9134), "91.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn received_at_is_clock_time() {
        let text = format_received_at(&now());
        assert_eq!(text.len(), 8);
        assert_eq!(text.matches(':').count(), 2);
    }
}
