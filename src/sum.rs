use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sum two strictly negative integers.
///
/// Returns `None` when either operand is zero or positive. The sum is
/// widened to `i128` so it is exact for every pair of `i64` operands.
pub const fn sum_negative(a: i64, b: i64) -> Option<i128> {
    Sign::Negative.sum(a, b)
}

/// Sum two strictly positive integers.
///
/// Returns `None` when either operand is zero or negative.
pub const fn sum_positive(a: i64, b: i64) -> Option<i128> {
    Sign::Positive.sum(a, b)
}

/// Which sign precondition both operands must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub const fn admits(self, n: i64) -> bool {
        match self {
            Self::Negative => n < 0,
            Self::Positive => n > 0,
        }
    }

    pub const fn sum(self, a: i64, b: i64) -> Option<i128> {
        if self.admits(a) && self.admits(b) {
            Some(a as i128 + b as i128)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::Positive => write!(f, "positive"),
        }
    }
}

impl FromStr for Sign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "negative" | "neg" | "-" => Ok(Self::Negative),
            "positive" | "pos" | "+" => Ok(Self::Positive),
            _ => Err(Error::parse(format!("unknown sign {s:?}"))),
        }
    }
}

/// One evaluated call: the operands, the sign checked, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub sign: Sign,
    pub a: i64,
    pub b: i64,
    pub sum: Option<i128>,
}

impl Evaluation {
    pub fn new(sign: Sign, a: i64, b: i64) -> Self {
        Self {
            sign,
            a,
            b,
            sum: sign.sum(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_pair_sums() {
        assert_eq!(sum_negative(-5, -5), Some(-10));
        assert_eq!(sum_negative(-1, -1), Some(-2));
    }

    #[test]
    fn negative_rejects_zero_and_mixed_signs() {
        assert_eq!(sum_negative(5, 5), None);
        assert_eq!(sum_negative(5, -2), None);
        assert_eq!(sum_negative(-5, 2), None);
        assert_eq!(sum_negative(0, 0), None);
        assert_eq!(sum_negative(0, -1), None);
        assert_eq!(sum_negative(-1, 0), None);
    }

    #[test]
    fn positive_pair_sums() {
        assert_eq!(sum_positive(2, 2), Some(4));
        assert_eq!(sum_positive(1, 1), Some(2));
    }

    #[test]
    fn positive_rejects_zero_and_mixed_signs() {
        assert_eq!(sum_positive(-2, -2), None);
        assert_eq!(sum_positive(2, -2), None);
        assert_eq!(sum_positive(-2, 2), None);
        assert_eq!(sum_positive(0, 0), None);
        assert_eq!(sum_positive(0, 1), None);
        assert_eq!(sum_positive(1, 0), None);
    }

    #[test]
    fn sums_past_i64_range_are_exact() {
        assert_eq!(sum_positive(i64::MAX, 1), Some(i64::MAX as i128 + 1));
        assert_eq!(sum_negative(i64::MIN, -1), Some(i64::MIN as i128 - 1));
        assert_eq!(sum_positive(i64::MAX - 1, 1), Some(i64::MAX as i128));
        assert_eq!(sum_negative(i64::MIN + 1, -1), Some(i64::MIN as i128));
    }

    #[test]
    fn sign_sum_agrees_with_admits() {
        for a in -3i64..=3 {
            for b in -3i64..=3 {
                for sign in [Sign::Negative, Sign::Positive] {
                    let expected = (sign.admits(a) && sign.admits(b)).then(|| (a + b) as i128);
                    assert_eq!(sign.sum(a, b), expected, "{sign} {a} {b}");
                }
            }
        }
    }

    #[test]
    fn admits_excludes_zero() {
        assert!(Sign::Negative.admits(-1));
        assert!(!Sign::Negative.admits(0));
        assert!(Sign::Positive.admits(1));
        assert!(!Sign::Positive.admits(0));
    }

    #[test]
    fn sign_parses_aliases() {
        assert_eq!("NEG".parse::<Sign>().unwrap(), Sign::Negative);
        assert_eq!("-".parse::<Sign>().unwrap(), Sign::Negative);
        assert_eq!("Positive".parse::<Sign>().unwrap(), Sign::Positive);
        assert_eq!("+".parse::<Sign>().unwrap(), Sign::Positive);
        let err = "Zero".parse::<Sign>().unwrap_err();
        assert!(err.to_string().contains("\"Zero\""), "got: {err}");
    }

    #[test]
    fn evaluation_serializes_no_result_as_null() {
        let eval = Evaluation::new(Sign::Positive, -2, 2);
        let json = serde_json::to_string(&eval).unwrap();
        assert_eq!(json, r#"{"sign":"positive","a":-2,"b":2,"sum":null}"#);
    }
}
