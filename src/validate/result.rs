use serde::Serialize;

/// Outcome of a validation call. Built fresh per call and never mutated by
/// the validators afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationDetails>,
}

/// Why a validation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidationDetails {
    /// Independent failures collected by the aggregate response check.
    Errors { errors: Vec<String> },
    /// Required fields that were absent, and those present but `null`.
    Fields {
        missing: Vec<String>,
        null: Vec<String>,
    },
    /// Fields whose runtime type did not match the schema.
    Schema { mismatches: Vec<TypeMismatch> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMismatch {
    pub field: String,
    pub expected: String,
    /// `None` when the field was absent.
    pub actual: Option<&'static str>,
}

/// Result of [`super::has_required_fields`]. `missing` keeps the order of
/// the requested field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationResult {
    pub valid: bool,
    pub missing: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn passed(message: &str) -> Self {
        Self {
            valid: true,
            message: Some(message.to_owned()),
            details: None,
        }
    }

    #[must_use]
    pub fn failed(message: String, details: ValidationDetails) -> Self {
        Self {
            valid: false,
            message: Some(message),
            details: Some(details),
        }
    }

    /// Valid iff `errors` is empty.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            return Self::passed("Response validation passed");
        }
        let message = format!("Response validation failed with {} error(s)", errors.len());
        Self::failed(message, ValidationDetails::Errors { errors })
    }

    /// Human-readable failure reasons. Empty for a passing result.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        match (&self.details, self.valid) {
            (Some(details), _) => details.describe(),
            (None, true) => Vec::new(),
            (None, false) => self.message.iter().cloned().collect(),
        }
    }

    /// Folds two results into one error list; valid iff both are.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        if self.valid && other.valid {
            return self;
        }
        let mut errors = self.reasons();
        errors.extend(other.reasons());
        Self::from_errors(errors)
    }
}

impl ValidationDetails {
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        match self {
            Self::Errors { errors } => errors.clone(),
            Self::Fields { missing, null } => missing
                .iter()
                .map(|field| format!("Missing required field '{}'", field))
                .chain(
                    null.iter()
                        .map(|field| format!("Required field '{}' is null", field)),
                )
                .collect(),
            Self::Schema { mismatches } => mismatches.iter().map(TypeMismatch::describe).collect(),
        }
    }
}

impl TypeMismatch {
    #[must_use]
    pub fn describe(&self) -> String {
        self.actual.map_or_else(
            || {
                format!(
                    "Field '{}' expected type {}, but it is missing",
                    self.field, self.expected
                )
            },
            |actual| {
                format!(
                    "Field '{}' expected type {}, got {}",
                    self.field, self.expected, actual
                )
            },
        )
    }
}
