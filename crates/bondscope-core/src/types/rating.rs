//! Credit rating labels.

use serde::{Deserialize, Serialize};

/// Agency-style letter grade attached to a bond.
///
/// Ratings are descriptive: no analytics read them. Notches (`AA+`, `BBB-`)
/// and anything else that is not a plain letter grade are kept verbatim in
/// [`CreditRating::Other`] so the original label round-trips.
///
/// # Examples
///
/// ```
/// use bondscope_core::CreditRating;
///
/// assert_eq!(CreditRating::parse("aa"), CreditRating::AA);
/// assert_eq!(CreditRating::parse("BBB-").to_string(), "BBB-");
/// assert!(CreditRating::A.is_investment_grade());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreditRating {
    /// Highest quality
    AAA,
    /// AA
    AA,
    /// A
    A,
    /// BBB (lowest investment grade)
    BBB,
    /// BB
    BB,
    /// B
    B,
    /// CCC
    CCC,
    /// In default
    D,
    /// No rating
    #[default]
    NotRated,
    /// Any other label, kept as given.
    Other(String),
}

impl CreditRating {
    /// Parses a rating label. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "AAA" => Self::AAA,
            "AA" => Self::AA,
            "A" => Self::A,
            "BBB" => Self::BBB,
            "BB" => Self::BB,
            "B" => Self::B,
            "CCC" => Self::CCC,
            "D" => Self::D,
            "" | "NR" | "NOT RATED" => Self::NotRated,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AAA => "AAA",
            Self::AA => "AA",
            Self::A => "A",
            Self::BBB => "BBB",
            Self::BB => "BB",
            Self::B => "B",
            Self::CCC => "CCC",
            Self::D => "D",
            Self::NotRated => "NR",
            Self::Other(s) => s,
        }
    }

    /// Returns true for BBB and above. Unknown labels are not investment grade.
    #[must_use]
    pub fn is_investment_grade(&self) -> bool {
        matches!(self, Self::AAA | Self::AA | Self::A | Self::BBB)
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for CreditRating {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for CreditRating {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<CreditRating> for String {
    fn from(r: CreditRating) -> Self {
        r.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_grades() {
        assert_eq!(CreditRating::parse("AAA"), CreditRating::AAA);
        assert_eq!(CreditRating::parse("bbb"), CreditRating::BBB);
        assert_eq!(CreditRating::parse(" A "), CreditRating::A);
        assert_eq!(CreditRating::parse("NR"), CreditRating::NotRated);
        assert_eq!(CreditRating::parse(""), CreditRating::NotRated);
    }

    #[test]
    fn test_parse_other_keeps_label() {
        let rating = CreditRating::parse("Baa2");
        assert_eq!(rating, CreditRating::Other("Baa2".to_string()));
        assert_eq!(rating.label(), "Baa2");
        assert!(!rating.is_investment_grade());
    }

    #[test]
    fn test_investment_grade() {
        assert!(CreditRating::AAA.is_investment_grade());
        assert!(CreditRating::BBB.is_investment_grade());
        assert!(!CreditRating::BB.is_investment_grade());
        assert!(!CreditRating::NotRated.is_investment_grade());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CreditRating::AA).unwrap();
        assert_eq!(json, "\"AA\"");

        let parsed: CreditRating = serde_json::from_str("\"A+\"").unwrap();
        assert_eq!(parsed, CreditRating::Other("A+".to_string()));
    }
}
