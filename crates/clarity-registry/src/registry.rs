//! High-level registry operations

use tracing::{debug, info};

use crate::entities::{
    BlockHeight, Compatibility, MAX_RELEASE_NOTES_LEN, MAX_VERSION_LEN, MAX_VERSIONS_PER_TEMPLATE,
    MIN_VERSION_LEN, Principal, Template, TemplateDetails, TemplateId, TemplateVersion,
};
use crate::error::{RegistryError, Result};
use crate::hash::ContentHash;
use crate::storage::RegistryStore;

/// The template registry: validated state transitions over the persisted
/// collections, gated by template ownership.
///
/// The caller identity and the current block height are passed explicitly
/// to every operation that needs them; the registry holds no ambient state.
/// Validation always precedes the first write, so a failed call leaves the
/// store untouched.
pub struct Registry<S: RegistryStore> {
    store: S,
}

impl<S: RegistryStore> Registry<S> {
    /// Create a registry over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // === Mutating operations ===

    /// Register a new template owned by `caller` and return its id.
    ///
    /// Ids are sequential starting at 1; the compatibility record and an
    /// empty version index are created together with the template.
    pub async fn register_template(
        &self,
        caller: &Principal,
        height: BlockHeight,
        details: TemplateDetails,
        compatibility: Compatibility,
    ) -> Result<TemplateId> {
        details.validate()?;
        compatibility.validate()?;

        let id = TemplateId(self.store.template_counter().await? + 1);
        let template = Template::new(id, details, caller.clone(), height);

        self.store.put_template(&template).await?;
        self.store.put_compatibility(id, &compatibility).await?;
        self.store.put_version_index(id, &[]).await?;
        self.store.set_template_counter(id.0).await?;

        info!(%id, owner = %caller, "registered template");
        Ok(id)
    }

    /// Replace a template's caller-supplied metadata.
    ///
    /// Ownership, creation height, activation state, and version data are
    /// untouched.
    pub async fn update_metadata(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
        details: TemplateDetails,
    ) -> Result<()> {
        let mut template = self.owned_template(id, caller).await?;
        details.validate()?;

        template.apply_details(details);
        template.last_updated = height;
        self.store.put_template(&template).await?;

        debug!(%id, "updated template metadata");
        Ok(())
    }

    /// Replace a template's compatibility record wholesale
    pub async fn update_compatibility(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
        compatibility: Compatibility,
    ) -> Result<()> {
        let mut template = self.owned_template(id, caller).await?;
        compatibility.validate()?;

        template.last_updated = height;
        self.store.put_compatibility(id, &compatibility).await?;
        self.store.put_template(&template).await?;

        debug!(%id, "updated template compatibility");
        Ok(())
    }

    /// Publish a named version bound permanently to `content_hash`.
    ///
    /// The (template, version) pair is unique for the lifetime of the
    /// registry, and the version index is capped at
    /// [`MAX_VERSIONS_PER_TEMPLATE`] entries with no eviction.
    pub async fn publish_version(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
        version: &str,
        content_hash: ContentHash,
        release_notes: impl Into<String>,
    ) -> Result<()> {
        let mut template = self.owned_template(id, caller).await?;
        validate_version(version)?;

        let release_notes = release_notes.into();
        if release_notes.chars().count() > MAX_RELEASE_NOTES_LEN {
            return Err(RegistryError::FieldTooLong {
                field: "release_notes",
                max: MAX_RELEASE_NOTES_LEN,
            });
        }

        if self.store.version(id, version).await?.is_some() {
            return Err(RegistryError::VersionAlreadyExists {
                template_id: id,
                version: version.to_string(),
            });
        }

        let mut index = self.store.version_index(id).await?;
        if index.len() >= MAX_VERSIONS_PER_TEMPLATE {
            return Err(RegistryError::VersionLimitExceeded {
                max: MAX_VERSIONS_PER_TEMPLATE,
            });
        }

        let record = TemplateVersion::new(content_hash, release_notes, height);
        index.push(version.to_string());
        template.last_updated = height;

        self.store.put_version(id, version, &record).await?;
        self.store.put_version_index(id, &index).await?;
        self.store.put_template(&template).await?;

        info!(%id, version, "published template version");
        Ok(())
    }

    /// Mark a published version as deprecated.
    ///
    /// The flag is one-way and the operation is idempotent: deprecating an
    /// already-deprecated version succeeds without effect.
    pub async fn deprecate_version(
        &self,
        caller: &Principal,
        id: TemplateId,
        version: &str,
    ) -> Result<()> {
        self.owned_template(id, caller).await?;

        let mut record =
            self.store
                .version(id, version)
                .await?
                .ok_or_else(|| RegistryError::VersionNotFound {
                    template_id: id,
                    version: version.to_string(),
                })?;

        if !record.is_deprecated {
            record.is_deprecated = true;
            self.store.put_version(id, version, &record).await?;
        }

        debug!(%id, version, "deprecated template version");
        Ok(())
    }

    /// Transfer a template to a new owner.
    ///
    /// Transferring to the caller itself is allowed.
    pub async fn transfer_ownership(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
        new_owner: Principal,
    ) -> Result<()> {
        let mut template = self.owned_template(id, caller).await?;

        template.owner = new_owner;
        template.last_updated = height;
        self.store.put_template(&template).await?;

        info!(%id, owner = %template.owner, "transferred template ownership");
        Ok(())
    }

    /// Mark a template as inactive; a no-op if already inactive
    pub async fn deactivate_template(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
    ) -> Result<()> {
        self.set_active(caller, height, id, false).await
    }

    /// Mark a template as active again; a no-op if already active
    pub async fn reactivate_template(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
    ) -> Result<()> {
        self.set_active(caller, height, id, true).await
    }

    async fn set_active(
        &self,
        caller: &Principal,
        height: BlockHeight,
        id: TemplateId,
        active: bool,
    ) -> Result<()> {
        let mut template = self.owned_template(id, caller).await?;

        template.is_active = active;
        template.last_updated = height;
        self.store.put_template(&template).await?;

        debug!(%id, active, "toggled template activation");
        Ok(())
    }

    /// Fetch a template and check that `caller` is its current owner
    async fn owned_template(&self, id: TemplateId, caller: &Principal) -> Result<Template> {
        let template = self
            .store
            .template(id)
            .await?
            .ok_or(RegistryError::TemplateNotFound(id))?;

        if template.owner != *caller {
            return Err(RegistryError::NotAuthorized(id));
        }

        Ok(template)
    }

    // === Read accessors ===

    /// Total number of templates ever registered
    pub async fn template_count(&self) -> Result<u64> {
        self.store.template_counter().await
    }

    /// Look up a template by id
    pub async fn template(&self, id: TemplateId) -> Result<Option<Template>> {
        self.store.template(id).await
    }

    /// Look up a template's compatibility record
    pub async fn compatibility(&self, id: TemplateId) -> Result<Option<Compatibility>> {
        self.store.compatibility(id).await
    }

    /// Look up a specific published version
    pub async fn version(&self, id: TemplateId, version: &str) -> Result<Option<TemplateVersion>> {
        self.store.version(id, version).await
    }

    /// Version strings for a template in publication order; empty for an
    /// unknown template
    pub async fn version_index(&self, id: TemplateId) -> Result<Vec<String>> {
        self.store.version_index(id).await
    }

    /// Whether `principal` currently owns the template; false if the
    /// template does not exist
    pub async fn is_owner(&self, id: TemplateId, principal: &Principal) -> Result<bool> {
        Ok(self
            .store
            .template(id)
            .await?
            .is_some_and(|template| template.owner == *principal))
    }
}

/// Syntactic version check: length between [`MIN_VERSION_LEN`] and
/// [`MAX_VERSION_LEN`] characters, with at least one '.' separator.
///
/// Deliberately shallow: numeric components are not parsed, so labels like
/// "2.0-rc1" remain valid.
fn validate_version(version: &str) -> Result<()> {
    let len = version.chars().count();
    if len < MIN_VERSION_LEN || len > MAX_VERSION_LEN || !version.contains('.') {
        return Err(RegistryError::InvalidVersion(version.to_string()));
    }
    Ok(())
}
