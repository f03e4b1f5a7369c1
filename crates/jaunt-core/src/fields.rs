//! Validated value types for trips and their activities.
//!
//! Every field a user can supply is wrapped in a small newtype whose
//! constructor checks the raw input once; deserializing goes through the
//! same checks. Code holding one of these values never needs to
//! re-validate it: an invalid value cannot exist.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Raised by value-type constructors when raw input breaks a field rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The description was empty after trimming.
    #[error("description must not be blank")]
    EmptyDescription,

    /// The description contains a character outside letters, digits, and
    /// spaces.
    #[error("description contains disallowed character {0:?}")]
    DisallowedCharacter(char),

    /// The priority is outside the 1 to 3 scale.
    #[error("priority {0} is out of range (expected 1 to 3)")]
    PriorityOutOfRange(u8),

    /// The cost amount was below zero.
    #[error("cost must not be negative, got {0}")]
    NegativeCost(f64),

    /// The cost amount was NaN or infinite.
    #[error("cost must be a finite amount, got {0}")]
    NonFiniteCost(f64),

    /// The country name was empty after trimming.
    #[error("country must not be blank")]
    EmptyCountry,

    /// The country name contains a character outside letters, digits, and
    /// spaces.
    #[error("country contains disallowed character {0:?}")]
    DisallowedCountryCharacter(char),

    /// A trip needs at least one traveller.
    #[error("people count must be at least 1")]
    ZeroPeople,

    /// A trip needs at least one day.
    #[error("trip length must be at least 1 day")]
    ZeroDays,

    /// The budget amount was below zero.
    #[error("budget must not be negative, got {0}")]
    NegativeBudget(f64),

    /// The budget amount was NaN or infinite.
    #[error("budget must be a finite amount, got {0}")]
    NonFiniteBudget(f64),
}

/// First character of a trimmed name that is neither alphanumeric nor a
/// space, if any.
fn disallowed_char(name: &str) -> Option<char> {
    name.chars().find(|c| !c.is_alphanumeric() && *c != ' ')
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

/// Free-text name of a trip or an activity.
///
/// Descriptions are the identity key for duplicate detection, so two values
/// compare equal exactly when their text matches. Input is trimmed, must be
/// non-empty, and may only contain letters, digits, and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let text = raw.into().trim().to_owned();
        if text.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if let Some(bad) = disallowed_char(&text) {
            return Err(ValidationError::DisallowedCharacter(bad));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Importance of an activity, from 1 (lowest) to 3 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Lowest allowed priority.
    pub const MIN: u8 = 1;
    /// Highest allowed priority.
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::PriorityOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One star per priority level, as shown in activity listings.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.0))
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Cost
// ---------------------------------------------------------------------------

/// What an activity costs, in the trip currency.
///
/// Displays with two decimal places, the way money is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Cost(f64);

impl Cost {
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteCost(amount));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeCost(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Cost {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

/// How long an activity takes, in whole minutes.
///
/// The unsigned representation makes the non-negativity rule structural, so
/// construction cannot fail. Zero is allowed; a zero-minute activity ends
/// the moment it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(u32);

impl Duration {
    pub fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

/// Destination country of a trip. Same character rules as [`Description`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let text = raw.into().trim().to_owned();
        if text.is_empty() {
            return Err(ValidationError::EmptyCountry);
        }
        if let Some(bad) = disallowed_char(&text) {
            return Err(ValidationError::DisallowedCountryCharacter(bad));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// How many travellers share the trip. At least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct People(u32);

impl People {
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::ZeroPeople);
        }
        Ok(Self(count))
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for People {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<People> for u32 {
    fn from(people: People) -> Self {
        people.0
    }
}

impl fmt::Display for People {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

/// How many days the trip lasts. At least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Days(u32);

impl Days {
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::ZeroDays);
        }
        Ok(Self(count))
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Days {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Days> for u32 {
    fn from(days: Days) -> Self {
        days.0
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

/// Spending ceiling for the whole trip. Same numeric rules as [`Cost`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteBudget(amount));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeBudget(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Budget> for f64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_trims_surrounding_whitespace() {
        let description = Description::new("  Museum Visit  ").unwrap();
        assert_eq!(description.as_str(), "Museum Visit");
    }

    #[test]
    fn rejects_blank_description() {
        let err = Description::new("   ").unwrap_err();
        assert!(
            matches!(err, ValidationError::EmptyDescription),
            "expected blank rejection, got: {err}"
        );
    }

    #[test]
    fn rejects_punctuation_in_description() {
        let err = Description::new("Fish & Chips").unwrap_err();
        assert!(
            matches!(err, ValidationError::DisallowedCharacter('&')),
            "expected charset rejection, got: {err}"
        );
    }

    #[test]
    fn descriptions_compare_by_text() {
        let a = Description::new("Museum").unwrap();
        let b = Description::new("Museum").unwrap();
        let c = Description::new("Harbor").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn priority_accepts_the_whole_scale() {
        for value in Priority::MIN..=Priority::MAX {
            assert!(Priority::new(value).is_ok(), "priority {value} should be valid");
        }
    }

    #[test]
    fn rejects_priorities_off_the_scale() {
        for value in [0, 4, 200] {
            let err = Priority::new(value).unwrap_err();
            assert!(
                matches!(err, ValidationError::PriorityOutOfRange(v) if v == value),
                "expected range rejection for {value}, got: {err}"
            );
        }
    }

    #[test]
    fn priority_renders_one_star_per_level() {
        assert_eq!(Priority::new(1).unwrap().stars(), "★");
        assert_eq!(Priority::new(3).unwrap().stars(), "★★★");
    }

    #[test]
    fn cost_displays_two_decimals() {
        assert_eq!(Cost::new(10.0).unwrap().to_string(), "10.00");
        assert_eq!(Cost::new(9.5).unwrap().to_string(), "9.50");
    }

    #[test]
    fn rejects_negative_cost() {
        let err = Cost::new(-1.0).unwrap_err();
        assert!(
            matches!(err, ValidationError::NegativeCost(_)),
            "expected negative rejection, got: {err}"
        );
    }

    #[test]
    fn rejects_non_finite_cost() {
        for amount in [f64::NAN, f64::INFINITY] {
            let err = Cost::new(amount).unwrap_err();
            assert!(
                matches!(err, ValidationError::NonFiniteCost(_)),
                "expected finiteness rejection, got: {err}"
            );
        }
    }

    #[test]
    fn zero_cost_is_allowed() {
        assert_eq!(Cost::new(0.0).unwrap().to_string(), "0.00");
    }

    #[test]
    fn country_follows_description_charset() {
        assert!(Country::new("New Zealand").is_ok());
        let err = Country::new("(Sweden)").unwrap_err();
        assert!(
            matches!(err, ValidationError::DisallowedCountryCharacter('(')),
            "expected charset rejection, got: {err}"
        );
    }

    #[test]
    fn rejects_zero_people_and_days() {
        assert!(matches!(
            People::new(0).unwrap_err(),
            ValidationError::ZeroPeople
        ));
        assert!(matches!(Days::new(0).unwrap_err(), ValidationError::ZeroDays));
    }

    #[test]
    fn budget_displays_two_decimals() {
        assert_eq!(Budget::new(970.0).unwrap().to_string(), "970.00");
    }

    #[test]
    fn rejects_negative_budget() {
        let err = Budget::new(-0.01).unwrap_err();
        assert!(
            matches!(err, ValidationError::NegativeBudget(_)),
            "expected negative rejection, got: {err}"
        );
    }

    #[test]
    fn duration_keeps_its_minute_count() {
        assert_eq!(Duration::new(90).minutes(), 90);
        assert_eq!(Duration::new(0).minutes(), 0);
    }

    #[test]
    fn values_serialize_transparently() {
        let description = Description::new("Museum").unwrap();
        assert_eq!(serde_json::to_string(&description).unwrap(), "\"Museum\"");
        let priority = Priority::new(2).unwrap();
        assert_eq!(serde_json::to_string(&priority).unwrap(), "2");
    }

    #[test]
    fn deserialization_runs_the_same_checks() {
        let err = serde_json::from_str::<Priority>("9").unwrap_err();
        assert!(
            err.to_string().contains("out of range"),
            "unexpected error: {err}"
        );
        assert!(serde_json::from_str::<Description>("\" \"").is_err());
        assert!(serde_json::from_str::<Country>("\"(Sweden)\"").is_err());
        assert!(serde_json::from_str::<Cost>("-5.0").is_err());
        assert!(serde_json::from_str::<Budget>("-1.0").is_err());
        assert!(serde_json::from_str::<People>("0").is_err());
        assert!(serde_json::from_str::<Days>("0").is_err());
    }

    #[test]
    fn valid_values_deserialize_and_normalize() {
        let priority: Priority = serde_json::from_str("2").unwrap();
        assert_eq!(priority.value(), 2);
        // Stored text goes through the constructor, trimming included.
        let description: Description = serde_json::from_str("\"  Museum  \"").unwrap();
        assert_eq!(description.as_str(), "Museum");
    }
}
