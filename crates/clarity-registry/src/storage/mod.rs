//! Storage abstraction for registry data

use async_trait::async_trait;

use crate::entities::{Compatibility, Template, TemplateId, TemplateVersion};
use crate::error::Result;

pub mod memory;

pub use memory::MemoryStore;

/// Persistence seam over the registry's four collections and its counter.
///
/// Any backend that preserves these keys and value shapes is compliant;
/// durability and per-call transaction mechanics belong to the backend.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Number of templates ever registered; also the last assigned id
    async fn template_counter(&self) -> Result<u64>;

    async fn set_template_counter(&self, value: u64) -> Result<()>;

    async fn template(&self, id: TemplateId) -> Result<Option<Template>>;

    async fn put_template(&self, template: &Template) -> Result<()>;

    async fn compatibility(&self, id: TemplateId) -> Result<Option<Compatibility>>;

    async fn put_compatibility(&self, id: TemplateId, compatibility: &Compatibility)
    -> Result<()>;

    async fn version(&self, id: TemplateId, version: &str) -> Result<Option<TemplateVersion>>;

    async fn put_version(
        &self,
        id: TemplateId,
        version: &str,
        record: &TemplateVersion,
    ) -> Result<()>;

    /// Version strings for a template in publication order; empty if the
    /// template has none (or does not exist)
    async fn version_index(&self, id: TemplateId) -> Result<Vec<String>>;

    async fn put_version_index(&self, id: TemplateId, index: &[String]) -> Result<()>;
}
