use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A named grade level, tied to one suggested-interval column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeLevel {
    Hard,
    Good,
    Easy,
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeLevel::Hard => "Hard",
            GradeLevel::Good => "Good",
            GradeLevel::Easy => "Easy",
        };
        f.write_str(label)
    }
}

/// A parsed review response token.
///
/// Tokens are capitalized before matching, so `good` and `GOOD` both parse
/// as `Grade(Good)`. Anything that is neither a known word nor `<digits>d`
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Reschedule by the row's suggested interval for this grade.
    Grade(GradeLevel),
    /// Reschedule by an explicit number of days.
    Days(u32),
    /// Push a due card to tomorrow without counting it as seen.
    Bury,
    /// Refresh the touch key only, sending the card to the back of today.
    Cycle,
    /// Mark the card suspended.
    Suspend,
}

impl FromStr for Response {
    type Err = ModelError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let normalized = capitalize(token);
        match normalized.as_str() {
            "Hard" => Ok(Response::Grade(GradeLevel::Hard)),
            "Good" => Ok(Response::Grade(GradeLevel::Good)),
            "Easy" => Ok(Response::Grade(GradeLevel::Easy)),
            "Bury" => Ok(Response::Bury),
            "Cycle" => Ok(Response::Cycle),
            "Suspend" => Ok(Response::Suspend),
            other => {
                parse_days(other).ok_or_else(|| ModelError::UnknownResponse(token.to_string()))
            }
        }
    }
}

fn parse_days(token: &str) -> Option<Response> {
    let digits = token.strip_suffix('d')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(Response::Days)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_grades_parse_case_insensitively() {
        assert_eq!("good".parse::<Response>().unwrap(), Response::Grade(GradeLevel::Good));
        assert_eq!("HARD".parse::<Response>().unwrap(), Response::Grade(GradeLevel::Hard));
        assert_eq!("Easy".parse::<Response>().unwrap(), Response::Grade(GradeLevel::Easy));
    }

    #[test]
    fn actions_parse() {
        assert_eq!("bury".parse::<Response>().unwrap(), Response::Bury);
        assert_eq!("Cycle".parse::<Response>().unwrap(), Response::Cycle);
        assert_eq!("suspend".parse::<Response>().unwrap(), Response::Suspend);
    }

    #[test]
    fn explicit_days_parse() {
        assert_eq!("3d".parse::<Response>().unwrap(), Response::Days(3));
        assert_eq!("14d".parse::<Response>().unwrap(), Response::Days(14));
        // Suffix case folds like the named words do.
        assert_eq!("3D".parse::<Response>().unwrap(), Response::Days(3));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("ok".parse::<Response>().is_err());
        assert!("d".parse::<Response>().is_err());
        assert!("3x".parse::<Response>().is_err());
        assert!("-3d".parse::<Response>().is_err());
        assert!("".parse::<Response>().is_err());
    }
}
