//! In-memory store for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::entities::{Compatibility, Template, TemplateId, TemplateVersion};
use crate::error::{RegistryError, Result};
use crate::storage::RegistryStore;

#[derive(Debug, Default)]
struct Collections {
    counter: u64,
    templates: HashMap<TemplateId, Template>,
    compatibility: HashMap<TemplateId, Compatibility>,
    versions: HashMap<(TemplateId, String), TemplateVersion>,
    version_index: HashMap<TemplateId, Vec<String>>,
}

/// In-memory storage implementation for testing
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| RegistryError::Storage("Lock poisoned".into()))
    }

    /// Clear all collections and reset the counter (useful for testing)
    pub fn clear(&self) {
        *self.collections.lock().unwrap() = Collections::default();
    }

    /// Check whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        let collections = self.collections.lock().unwrap();
        collections.counter == 0 && collections.templates.is_empty()
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn template_counter(&self) -> Result<u64> {
        Ok(self.lock()?.counter)
    }

    async fn set_template_counter(&self, value: u64) -> Result<()> {
        self.lock()?.counter = value;
        Ok(())
    }

    async fn template(&self, id: TemplateId) -> Result<Option<Template>> {
        Ok(self.lock()?.templates.get(&id).cloned())
    }

    async fn put_template(&self, template: &Template) -> Result<()> {
        self.lock()?.templates.insert(template.id, template.clone());
        Ok(())
    }

    async fn compatibility(&self, id: TemplateId) -> Result<Option<Compatibility>> {
        Ok(self.lock()?.compatibility.get(&id).cloned())
    }

    async fn put_compatibility(
        &self,
        id: TemplateId,
        compatibility: &Compatibility,
    ) -> Result<()> {
        self.lock()?.compatibility.insert(id, compatibility.clone());
        Ok(())
    }

    async fn version(&self, id: TemplateId, version: &str) -> Result<Option<TemplateVersion>> {
        Ok(self.lock()?.versions.get(&(id, version.to_string())).cloned())
    }

    async fn put_version(
        &self,
        id: TemplateId,
        version: &str,
        record: &TemplateVersion,
    ) -> Result<()> {
        self.lock()?
            .versions
            .insert((id, version.to_string()), record.clone());
        Ok(())
    }

    async fn version_index(&self, id: TemplateId) -> Result<Vec<String>> {
        Ok(self.lock()?.version_index.get(&id).cloned().unwrap_or_default())
    }

    async fn put_version_index(&self, id: TemplateId, index: &[String]) -> Result<()> {
        self.lock()?.version_index.insert(id, index.to_vec());
        Ok(())
    }
}
