use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// a time of day with a single digit hour, eg: `7:30`
    static ref REGEX_SINGLE_DIGIT_HOUR: Regex = Regex::new(r"^(\d):(\d{2})$").unwrap();
}

/// Zero pads the hour of a `H:MM` time of day string, eg: `7:30` to `07:30`.
///
/// Anything that is not a single digit hour followed by a two digit minute
/// is returned unchanged, so already padded and invalid values pass through.
pub fn pad_time(time: &str) -> String {
    match REGEX_SINGLE_DIGIT_HOUR.captures(time) {
        Some(captures) => format!("0{}:{}", &captures[1], &captures[2]),
        None => String::from(time),
    }
}

/// `pad_time` for optional fields, `None` passes through
pub fn pad_time_opt(time: Option<String>) -> Option<String> {
    time.map(|t| pad_time(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_hours() {
        assert_eq!(pad_time("7:30"), "07:30");
        assert_eq!(pad_time("0:00"), "00:00");
        assert_eq!(pad_time("9:05"), "09:05");
    }

    #[test]
    fn leaves_padded_and_invalid_values_unchanged() {
        assert_eq!(pad_time("07:30"), "07:30");
        assert_eq!(pad_time("23:59"), "23:59");
        // single digit minutes are not a paddable shape
        assert_eq!(pad_time("7:5"), "7:5");
        assert_eq!(pad_time("morning"), "morning");
        assert_eq!(pad_time(""), "");
    }

    #[test]
    fn padding_is_idempotent() {
        let once = pad_time("8:15");
        assert_eq!(pad_time(&once), once);
    }
}
