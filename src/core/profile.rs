use thiserror::Error;

/// Number of features a customer profile carries: age, income, score.
pub const FEATURE_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{field} must be a whole number")]
    NotNumeric { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}

/// One customer's raw attributes, validated on construction.
///
/// `age` and `income` must be positive; `score` must be in `(0, 100]`.
/// A value that violates these bounds never becomes a `CustomerProfile`,
/// so downstream code can treat every profile as well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerProfile {
    pub age: u32,
    pub income: u32,
    pub score: u32,
}

impl CustomerProfile {
    pub fn new(age: u32, income: u32, score: u32) -> Result<CustomerProfile, ProfileError> {
        if age == 0 {
            return Err(ProfileError::OutOfRange { field: "age" });
        }
        if income == 0 {
            return Err(ProfileError::OutOfRange { field: "income" });
        }
        if score == 0 || score > 100 {
            return Err(ProfileError::OutOfRange { field: "score" });
        }
        Ok(CustomerProfile { age, income, score })
    }

    /// Parses the three form fields as submitted. Non-numeric input
    /// (including negative values, which cannot be whole `u32`s) fails the
    /// same way an out-of-range value does.
    pub fn parse(age: &str, income: &str, score: &str) -> Result<CustomerProfile, ProfileError> {
        CustomerProfile::new(
            parse_field("age", age)?,
            parse_field("income", income)?,
            parse_field("score", score)?,
        )
    }

    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.age as f64, self.income as f64, self.score as f64]
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, ProfileError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ProfileError::NotNumeric { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_inside_bounds() {
        let p = CustomerProfile::new(25, 40, 60).unwrap();
        assert_eq!(p.features(), [25.0, 40.0, 60.0]);
    }

    #[test]
    fn accepts_score_boundary_of_100() {
        assert!(CustomerProfile::new(25, 40, 100).is_ok());
    }

    #[test]
    fn rejects_zero_age() {
        assert_eq!(
            CustomerProfile::new(0, 40, 60),
            Err(ProfileError::OutOfRange { field: "age" })
        );
    }

    #[test]
    fn rejects_zero_income() {
        assert_eq!(
            CustomerProfile::new(25, 0, 60),
            Err(ProfileError::OutOfRange { field: "income" })
        );
    }

    #[test]
    fn rejects_score_outside_range() {
        assert!(CustomerProfile::new(25, 40, 0).is_err());
        assert!(CustomerProfile::new(25, 40, 101).is_err());
    }

    #[test]
    fn parses_trimmed_form_fields() {
        let p = CustomerProfile::parse(" 25 ", "40", "60").unwrap();
        assert_eq!(p, CustomerProfile::new(25, 40, 60).unwrap());
    }

    #[test]
    fn parse_rejects_non_numeric_and_negative_input() {
        assert_eq!(
            CustomerProfile::parse("abc", "40", "60"),
            Err(ProfileError::NotNumeric { field: "age" })
        );
        assert_eq!(
            CustomerProfile::parse("-1", "40", "60"),
            Err(ProfileError::NotNumeric { field: "age" })
        );
        assert_eq!(
            CustomerProfile::parse("25", "40", "6.5"),
            Err(ProfileError::NotNumeric { field: "score" })
        );
    }
}
