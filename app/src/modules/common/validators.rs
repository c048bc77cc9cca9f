use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Matches a `HH:MM` time of day, tolerating a single digit hour
    /// since hours are zero padded before persistence
    pub static ref REGEX_TIME_OF_DAY: Regex =
        Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

/// `REGEX_TIME_OF_DAY` as a custom validator, for the double option
/// fields of update DTOs where the regex rule cannot be attached
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    if REGEX_TIME_OF_DAY.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_time_of_day"))
    }
}
