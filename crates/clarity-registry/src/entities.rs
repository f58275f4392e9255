//! Core data structures for the template registry

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::hash::ContentHash;

/// Logical clock value supplied by the execution environment per call
pub type BlockHeight = u64;

pub const MAX_TITLE_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_LEN: usize = 20;
pub const MAX_URL_LEN: usize = 100;
pub const MAX_CLARITY_VERSIONS: usize = 5;
pub const MAX_CLARITY_VERSION_LEN: usize = 10;
pub const MAX_PLATFORMS: usize = 3;
pub const MAX_PLATFORM_LEN: usize = 20;
pub const MAX_RELEASE_NOTES_LEN: usize = 200;
pub const MAX_VERSIONS_PER_TEMPLATE: usize = 20;
pub const MIN_VERSION_LEN: usize = 3;
pub const MAX_VERSION_LEN: usize = 10;

/// Sequential identifier for a template, assigned at registration.
///
/// Ids start at 1 and are never reused; deactivation is a soft state,
/// not removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u64);

impl From<u64> for TemplateId {
    fn from(id: u64) -> Self {
        TemplateId(id)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a caller, as assigned by the execution environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(pub String);

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Principal(s)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Principal(s.to_string())
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Caller-supplied template metadata, shared by registration and
/// metadata updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDetails {
    /// Human-readable title
    pub title: String,

    /// What the template does
    pub description: String,

    /// Free-form discovery tags, in caller order
    pub tags: Vec<String>,

    /// Optional link to documentation
    pub documentation_url: Option<String>,

    /// Optional link to the source repository
    pub repository_url: Option<String>,
}

impl TemplateDetails {
    /// Create details with the required fields
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            documentation_url: None,
            repository_url: None,
        }
    }

    /// Set the discovery tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the documentation URL
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Set the repository URL
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    /// Validate all field bounds. Lengths are counted in characters,
    /// not bytes.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(RegistryError::EmptyField("title"));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(RegistryError::FieldTooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        if self.description.is_empty() {
            return Err(RegistryError::EmptyField("description"));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(RegistryError::FieldTooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        if self.tags.len() > MAX_TAGS {
            return Err(RegistryError::TagLimitExceeded { max: MAX_TAGS });
        }
        for tag in &self.tags {
            if tag.chars().count() > MAX_TAG_LEN {
                return Err(RegistryError::FieldTooLong {
                    field: "tag",
                    max: MAX_TAG_LEN,
                });
            }
        }

        for (field, url) in [
            ("documentation_url", &self.documentation_url),
            ("repository_url", &self.repository_url),
        ] {
            if let Some(url) = url {
                if url.chars().count() > MAX_URL_LEN {
                    return Err(RegistryError::FieldTooLong {
                        field,
                        max: MAX_URL_LEN,
                    });
                }
            }
        }

        Ok(())
    }
}

/// A registered template with registry-managed state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Sequential id assigned at registration
    pub id: TemplateId,

    /// Human-readable title
    pub title: String,

    /// What the template does
    pub description: String,

    /// Free-form discovery tags
    pub tags: Vec<String>,

    /// Current owner; the only identity allowed to mutate this template
    pub owner: Principal,

    /// Block height at registration, immutable afterwards
    pub created_at: BlockHeight,

    /// Block height of the most recent mutation of this template or its
    /// dependent records
    pub last_updated: BlockHeight,

    /// Optional link to documentation
    pub documentation_url: Option<String>,

    /// Optional link to the source repository
    pub repository_url: Option<String>,

    /// Soft activation state; informational only, no operation is gated on it
    pub is_active: bool,
}

impl Template {
    /// Create a freshly registered template owned by `owner`
    pub fn new(
        id: TemplateId,
        details: TemplateDetails,
        owner: Principal,
        height: BlockHeight,
    ) -> Self {
        Self {
            id,
            title: details.title,
            description: details.description,
            tags: details.tags,
            owner,
            created_at: height,
            last_updated: height,
            documentation_url: details.documentation_url,
            repository_url: details.repository_url,
            is_active: true,
        }
    }

    /// Replace the caller-supplied metadata, leaving ownership and
    /// activation state untouched
    pub fn apply_details(&mut self, details: TemplateDetails) {
        self.title = details.title;
        self.description = details.description;
        self.tags = details.tags;
        self.documentation_url = details.documentation_url;
        self.repository_url = details.repository_url;
    }
}

/// Compatibility record: which Clarity versions and platforms a template
/// targets. One-to-one with its template, created atomically with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Supported Clarity language versions, 1 to 5 entries
    pub clarity_versions: Vec<String>,

    /// Supported platforms, 1 to 3 entries
    pub platforms: Vec<String>,
}

impl Compatibility {
    pub fn new(clarity_versions: Vec<String>, platforms: Vec<String>) -> Self {
        Self {
            clarity_versions,
            platforms,
        }
    }

    /// Validate that both lists are non-empty and within bounds
    pub fn validate(&self) -> Result<()> {
        if self.clarity_versions.is_empty() || self.clarity_versions.len() > MAX_CLARITY_VERSIONS {
            return Err(RegistryError::InvalidCompatibility);
        }
        if self.platforms.is_empty() || self.platforms.len() > MAX_PLATFORMS {
            return Err(RegistryError::InvalidCompatibility);
        }

        for entry in &self.clarity_versions {
            if entry.chars().count() > MAX_CLARITY_VERSION_LEN {
                return Err(RegistryError::FieldTooLong {
                    field: "clarity_version",
                    max: MAX_CLARITY_VERSION_LEN,
                });
            }
        }
        for entry in &self.platforms {
            if entry.chars().count() > MAX_PLATFORM_LEN {
                return Err(RegistryError::FieldTooLong {
                    field: "platform",
                    max: MAX_PLATFORM_LEN,
                });
            }
        }

        Ok(())
    }
}

/// A published version of a template.
///
/// Immutable once written, except for the one-way `is_deprecated` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersion {
    /// Hash of the template content this version refers to
    pub content_hash: ContentHash,

    /// Notes accompanying the release
    pub release_notes: String,

    /// Block height at publication, immutable
    pub published_at: BlockHeight,

    /// One-way flag marking the version as superseded
    pub is_deprecated: bool,
}

impl TemplateVersion {
    /// Create a freshly published, non-deprecated version record
    pub fn new(
        content_hash: ContentHash,
        release_notes: impl Into<String>,
        height: BlockHeight,
    ) -> Self {
        Self {
            content_hash,
            release_notes: release_notes.into(),
            published_at: height,
            is_deprecated: false,
        }
    }
}
