//! Fixed constants shared by the conversion pipeline.
//!
//! The five date/time patterns are part of the external contract: schemas
//! produced by earlier releases carry these exact literals, and downstream
//! validators key on them. They are emitted verbatim into `pattern` keywords
//! and never compiled by this crate.

/// Schema dialect declared at the root of every emitted document.
pub const DRAFT4_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// RAML `date-only`: `yyyy-mm-dd`.
pub const DATE_ONLY_PATTERN: &str = r"^(\d{4})-(\d{2})-(\d{2})$";

/// RAML `time-only`: `hh:mm:ss` with optional fractional seconds.
pub const TIME_ONLY_PATTERN: &str = r"^(\d{2})(:)(\d{2})(:)(\d{2})(\.\d+)?$";

/// RAML `datetime-only`: date and time joined by `T`, no timezone.
pub const DATE_TIME_ONLY_PATTERN: &str =
    r"^(\d{4})-(\d{2})-(\d{2})(T)(\d{2})(:)(\d{2})(:)(\d{2})(\.\d+)?$";

/// RAML `datetime` in the default `rfc3339` format.
pub const RFC3339_DATETIME_PATTERN: &str = r"^(\d{4})-(\d{2})-(\d{2})(T)(\d{2})(:)(\d{2})(:)(\d{2})(\.\d+)?(Z|([+-])(\d{2})(:)?(\d{2}))$";

/// RAML `datetime` in `rfc2616` format (HTTP-date, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`).
pub const RFC2616_DATETIME_PATTERN: &str = r"^(Mon|Tue|Wed|Thu|Fri|Sat|Sun),\s\d{2}\s(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s\d{4}\s(\d{2})(:)(\d{2})(:)(\d{2})\sGMT$";

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            DATE_ONLY_PATTERN,
            TIME_ONLY_PATTERN,
            DATE_TIME_ONLY_PATTERN,
            RFC3339_DATETIME_PATTERN,
            RFC2616_DATETIME_PATTERN,
        ] {
            Regex::new(pattern).expect("pattern should be a valid regex");
        }
    }

    #[test]
    fn test_date_only_pattern_matches() {
        let re = Regex::new(DATE_ONLY_PATTERN).unwrap();
        assert!(re.is_match("2015-05-23"));
        assert!(!re.is_match("2015-05-23T21:00:00"));
        assert!(!re.is_match("not a date"));
    }

    #[test]
    fn test_time_only_pattern_matches() {
        let re = Regex::new(TIME_ONLY_PATTERN).unwrap();
        assert!(re.is_match("12:30:00"));
        assert!(re.is_match("12:30:00.090"));
        assert!(!re.is_match("2015-05-23"));
    }

    #[test]
    fn test_datetime_only_pattern_matches() {
        let re = Regex::new(DATE_TIME_ONLY_PATTERN).unwrap();
        assert!(re.is_match("2015-07-04T21:00:00"));
        assert!(!re.is_match("2015-07-04T21:00:00Z"));
    }

    #[test]
    fn test_rfc3339_pattern_matches() {
        let re = Regex::new(RFC3339_DATETIME_PATTERN).unwrap();
        assert!(re.is_match("2016-02-28T16:41:41.090Z"));
        assert!(re.is_match("2016-02-28T16:41:41+05:00"));
        assert!(!re.is_match("2016-02-28T16:41:41"));
    }

    #[test]
    fn test_rfc2616_pattern_matches() {
        let re = Regex::new(RFC2616_DATETIME_PATTERN).unwrap();
        assert!(re.is_match("Sun, 06 Nov 1994 08:49:37 GMT"));
        assert!(!re.is_match("2016-02-28T16:41:41.090Z"));
    }
}
