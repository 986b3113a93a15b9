use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-negative whole-number key that seeds every derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Number", into = "u32")]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EmployeeId> for u32 {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for EmployeeId {
    type Error = WorkforceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| WorkforceError::InvalidIdentifier(value.to_string()))
    }
}

impl TryFrom<f64> for EmployeeId {
    type Error = WorkforceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
            return Err(WorkforceError::InvalidIdentifier(value.to_string()));
        }
        Ok(Self(value as u32))
    }
}

impl TryFrom<serde_json::Number> for EmployeeId {
    type Error = WorkforceError;

    fn try_from(value: serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(signed) = value.as_i64() {
            return Self::try_from(signed);
        }
        if let Some(unsigned) = value.as_u64() {
            return u32::try_from(unsigned)
                .map(Self)
                .map_err(|_| WorkforceError::InvalidIdentifier(value.to_string()));
        }
        match value.as_f64() {
            Some(float) => Self::try_from(float),
            None => Err(WorkforceError::InvalidIdentifier(value.to_string())),
        }
    }
}

impl FromStr for EmployeeId {
    type Err = WorkforceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        // Accepts `digits` or `digits.000`; signs, exponents and inf/nan are rejected.
        let invalid = || WorkforceError::InvalidIdentifier(raw.to_string());
        let trimmed = raw.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (trimmed, None),
        };
        if whole.is_empty() || !whole.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|byte| byte == b'0') {
                return Err(invalid());
            }
        }
        whole.parse::<u32>().map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed department catalog. Variant order is the assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Finance,
    Product,
    Design,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
}

impl Department {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Engineering,
            Self::Marketing,
            Self::Sales,
            Self::HumanResources,
            Self::Finance,
            Self::Product,
            Self::Design,
            Self::CustomerSupport,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::HumanResources => "Human Resources",
            Self::Finance => "Finance",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::CustomerSupport => "Customer Support",
        }
    }
}

impl FromStr for Department {
    type Err = WorkforceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| WorkforceError::UnknownDepartment(raw.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole-star performance rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, WorkforceError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(WorkforceError::InvalidRating(value))
        }
    }

    /// Maps a `0..100` seed onto the rating scale: `clamp(seed / 20 + 1, 1, 5)`.
    pub(crate) fn from_seed(seed: u64) -> Self {
        let stepped = (seed / 20 + 1).clamp(u64::from(Self::MIN), u64::from(Self::MAX));
        Self(stepped as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = WorkforceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl FromStr for Rating {
    type Err = WorkforceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| WorkforceError::InvalidRatingText(raw.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub(crate) fn from_seed(seed: u64) -> Self {
        if seed < 30 {
            Self::Completed
        } else if seed < 80 {
            Self::InProgress
        } else {
            Self::Planned
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Completed => "A successful project that improved team efficiency by 30%",
            Self::InProgress => "A critical project that aims to streamline our core processes",
            Self::Planned => {
                "A critical project that will begin next quarter to enhance our capabilities"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u64,
    pub name: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub description: &'static str,
}

pub const POSITIVE_FEEDBACK: &str =
    "Excellent work on the recent project. Consistently meets or exceeds expectations.";
pub const CONSTRUCTIVE_FEEDBACK: &str =
    "Shows potential but needs improvement in communication and meeting deadlines.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub reviewer: String,
    pub rating: Rating,
    pub comment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkforceError {
    InvalidIdentifier(String),
    InvalidRating(i64),
    InvalidRatingText(String),
    UnknownDepartment(String),
    InvalidDate(String),
    DateOutOfRange(NaiveDate),
}

impl fmt::Display for WorkforceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkforceError::InvalidIdentifier(raw) => write!(
                f,
                "invalid identifier '{}': expected a non-negative whole number",
                raw
            ),
            WorkforceError::InvalidRating(value) => {
                write!(f, "rating {} is outside the 1-5 scale", value)
            }
            WorkforceError::InvalidRatingText(raw) => {
                write!(f, "rating '{}' is not a whole number", raw)
            }
            WorkforceError::UnknownDepartment(raw) => write!(f, "unknown department '{}'", raw),
            WorkforceError::InvalidDate(raw) => {
                write!(f, "failed to parse '{}' as YYYY-MM-DD", raw)
            }
            WorkforceError::DateOutOfRange(reference) => write!(
                f,
                "date arithmetic from {} leaves the supported calendar range",
                reference
            ),
        }
    }
}

impl std::error::Error for WorkforceError {}

pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, WorkforceError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| WorkforceError::InvalidDate(raw.to_string()))
}
