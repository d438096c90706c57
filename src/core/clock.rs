//! Timestamp formatting

use chrono::{Local, SecondsFormat};

/// Current local time as an ISO-8601 string (microsecond precision)
pub fn iso_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_iso_now_parses_back() {
        let stamp = iso_now();
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn test_iso_now_is_monotonic_enough() {
        let a = iso_now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = iso_now();

        let ta = DateTime::parse_from_rfc3339(&a).unwrap();
        let tb = DateTime::parse_from_rfc3339(&b).unwrap();
        assert!(tb >= ta);
    }
}
