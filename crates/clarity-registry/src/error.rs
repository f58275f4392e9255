//! Error types for the template registry

use thiserror::Error;

use crate::entities::TemplateId;

/// Registry-specific errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Caller is not the owner of template {0}")]
    NotAuthorized(TemplateId),

    #[error("Template not found: {0}")]
    TemplateNotFound(TemplateId),

    #[error("Version {version} not found for template {template_id}")]
    VersionNotFound {
        template_id: TemplateId,
        version: String,
    },

    /// Reserved for callers that pre-assign ids; no current operation
    /// produces it.
    #[error("Template already exists: {0}")]
    TemplateAlreadyExists(TemplateId),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Version {version} already published for template {template_id}")]
    VersionAlreadyExists {
        template_id: TemplateId,
        version: String,
    },

    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    #[error("Field {field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("At most {max} tags are allowed")]
    TagLimitExceeded { max: usize },

    #[error("Compatibility lists must be non-empty and within bounds")]
    InvalidCompatibility,

    #[error("Template already has the maximum of {max} versions")]
    VersionLimitExceeded { max: usize },

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
