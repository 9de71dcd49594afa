use thiserror::Error;

/// Rejection of a submitted form; nothing is appended when this is returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("no {kind} named '{name}' in the catalogue")]
    NotInCatalog { kind: &'static str, name: String },
    #[error("{format} export is not available for {target}")]
    UnsupportedExport { format: &'static str, target: &'static str },
    #[error("'{path}' must be a relative folder inside the export directory")]
    OutsideExportDir { path: String },
}

/// Fail with `MissingField` when `value` is empty or whitespace
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Trim optional free text, mapping blank input to None
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
