//! Fixed-length digit sequences used for both the secret and guesses.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Sequence of decimal digits, each in `0..=9`. Repeats are allowed.
///
/// SmallVec keeps the usual 4 digits inline without a heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Digits(SmallVec<[u8; 4]>);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitsParseError {
    #[error("expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("'{0}' is not a digit")]
    NotADigit(char),
    #[error("{0} is not in 0..=9")]
    OutOfRange(u8),
}

impl Digits {
    /// Build from raw values.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let digits: SmallVec<[u8; 4]> = values.into_iter().collect();
        assert!(digits.iter().all(|&d| d <= 9), "Digits must be in 0..=9");
        Self(digits)
    }

    /// Parse a string of exactly `expected` ASCII digits.
    ///
    /// ```
    /// use guessing_games::games::digits::{Digits, DigitsParseError};
    ///
    /// assert_eq!(Digits::parse("0420", 4).unwrap().as_slice(), &[0, 4, 2, 0]);
    /// assert_eq!(
    ///     Digits::parse("123", 4),
    ///     Err(DigitsParseError::WrongLength { expected: 4, actual: 3 })
    /// );
    /// ```
    pub fn parse(s: &str, expected: usize) -> Result<Self, DigitsParseError> {
        let digits: Self = s.parse()?;
        if digits.len() != expected {
            return Err(DigitsParseError::WrongLength {
                expected,
                actual: digits.len(),
            });
        }
        Ok(digits)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Digits {
    type Err = DigitsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(DigitsParseError::NotADigit(c))
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<Vec<u8>> for Digits {
    type Error = DigitsParseError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        match values.iter().find(|&&d| d > 9) {
            Some(&d) => Err(DigitsParseError::OutOfRange(d)),
            None => Ok(Self(SmallVec::from_vec(values))),
        }
    }
}

impl From<Digits> for Vec<u8> {
    fn from(digits: Digits) -> Self {
        digits.0.into_vec()
    }
}

impl Index<usize> for Digits {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_leading_zeros() {
        let digits = Digits::parse("0071", 4).unwrap();

        assert_eq!(digits.as_slice(), &[0, 0, 7, 1]);
        assert_eq!(digits.to_string(), "0071");
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(Digits::parse("12a4", 4), Err(DigitsParseError::NotADigit('a')));
        assert_eq!(Digits::parse("-123", 4), Err(DigitsParseError::NotADigit('-')));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Digits::parse("12345", 4),
            Err(DigitsParseError::WrongLength { expected: 4, actual: 5 })
        );
        assert_eq!(
            Digits::parse("", 4),
            Err(DigitsParseError::WrongLength { expected: 4, actual: 0 })
        );
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        // Full-width digit is numeric but not a decimal ASCII digit
        assert!(Digits::parse("１２３４", 4).is_err());
    }

    #[test]
    fn test_index() {
        let digits = Digits::new([3, 4, 5, 6]);
        assert_eq!(digits[2], 5);
    }

    #[test]
    #[should_panic(expected = "Digits must be in 0..=9")]
    fn test_new_rejects_large_values() {
        Digits::new([1, 10]);
    }

    #[test]
    fn test_try_from_rejects_large_values() {
        assert_eq!(
            Digits::try_from(vec![1, 2, 12, 4]),
            Err(DigitsParseError::OutOfRange(12))
        );
        assert_eq!(Digits::try_from(vec![0, 9]).unwrap().as_slice(), &[0, 9]);
    }

    #[test]
    fn test_deserialize_validates_range() {
        let digits: Digits = serde_json::from_str("[1,2,3,4]").unwrap();
        assert_eq!(digits, Digits::new([1, 2, 3, 4]));

        let err = serde_json::from_str::<Digits>("[12]").unwrap_err();
        assert!(err.to_string().contains("12 is not in 0..=9"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_string(&Digits::new([0, 4, 2, 0])).unwrap();
        assert_eq!(json, "[0,4,2,0]");
    }
}
