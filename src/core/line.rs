//! core::line
//!
//! Line specifiers for file views (`#10` or `#10-20` URL fragments).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A line specifier that is not `N` or `N-M`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid line '{value}': {reason}. use a line number like 10 or an increasing range like 10-20")]
pub struct InvalidLine {
    /// The rejected input.
    pub value: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// A single line or an increasing range of lines.
///
/// # Example
///
/// ```
/// use gitb::core::line::LineSpec;
///
/// assert_eq!("10".parse::<LineSpec>().unwrap(), LineSpec::Single(10));
/// assert_eq!("10-20".parse::<LineSpec>().unwrap(), LineSpec::Range(10, 20));
/// assert!("20-10".parse::<LineSpec>().is_err());
/// assert!("a10-20".parse::<LineSpec>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpec {
    /// One line.
    Single(u32),
    /// From the first line to the second, first < second.
    Range(u32, u32),
}

impl FromStr for LineSpec {
    type Err = InvalidLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidLine {
            value: s.to_string(),
            reason,
        };

        match s.split_once('-') {
            None => parse_line_number(s).map(LineSpec::Single).map_err(invalid),
            Some((start, end)) => {
                let start = parse_line_number(start).map_err(invalid)?;
                let end = parse_line_number(end).map_err(invalid)?;
                if start >= end {
                    return Err(invalid("range must be increasing"));
                }
                Ok(LineSpec::Range(start, end))
            }
        }
    }
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSpec::Single(line) => write!(f, "{}", line),
            LineSpec::Range(start, end) => write!(f, "{}-{}", start, end),
        }
    }
}

/// Parse a positive decimal line number. Signs and whitespace are rejected.
fn parse_line_number(s: &str) -> Result<u32, &'static str> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a line number");
    }
    match s.parse::<u32>() {
        Ok(0) => Err("line numbers start at 1"),
        Ok(n) => Ok(n),
        Err(_) => Err("line number too large"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        assert_eq!("100".parse::<LineSpec>(), Ok(LineSpec::Single(100)));
    }

    #[test]
    fn range() {
        assert_eq!("10-20".parse::<LineSpec>(), Ok(LineSpec::Range(10, 20)));
    }

    #[test]
    fn display_matches_input_form() {
        assert_eq!(LineSpec::Single(7).to_string(), "7");
        assert_eq!(LineSpec::Range(10, 20).to_string(), "10-20");
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("a10-20".parse::<LineSpec>().is_err());
        assert!("ten".parse::<LineSpec>().is_err());
        assert!("+5".parse::<LineSpec>().is_err());
        assert!(" 5".parse::<LineSpec>().is_err());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!("".parse::<LineSpec>().is_err());
        assert!("10-".parse::<LineSpec>().is_err());
        assert!("-20".parse::<LineSpec>().is_err());
        assert!("1-2-3".parse::<LineSpec>().is_err());
    }

    #[test]
    fn rejects_non_increasing_range() {
        let err = "20-10".parse::<LineSpec>().unwrap_err();
        assert_eq!(err.reason, "range must be increasing");
        assert!("10-10".parse::<LineSpec>().is_err());
    }

    #[test]
    fn rejects_zero() {
        assert!("0".parse::<LineSpec>().is_err());
        assert!("0-5".parse::<LineSpec>().is_err());
    }
}
