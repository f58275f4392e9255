//! # Clarity Registry
//!
//! A registry for publishing and versioning reusable Clarity smart-contract
//! templates that provides:
//! - Sequential template ids with single-owner authorization on every mutation
//! - An immutable, append-only version history per template, each version
//!   bound permanently to a 32-byte content hash
//! - Structured compatibility records (Clarity versions and platforms)
//! - One-way version deprecation and soft activation toggling
//!
//! ## Core Concepts
//!
//! - **Templates** carry metadata only; content lives elsewhere and is
//!   referenced by hash
//! - **Versions** are immutable once published; only the deprecation flag
//!   may flip, and only to true
//! - **Owners** gate every mutating operation and can transfer a template
//!   wholesale
//! - **Logical time** (the current block height) and the caller identity are
//!   supplied explicitly by the execution environment on each call
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use clarity_registry::{Compatibility, ContentHash, Registry, TemplateDetails};
//! use clarity_registry::storage::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::new(MemoryStore::new());
//! let alice = "alice".into();
//!
//! // Register a template at block height 100
//! let details = TemplateDetails::new("Vault", "A minimal token vault")
//!     .with_tags(vec!["defi".to_string()]);
//! let compatibility = Compatibility::new(
//!     vec!["2.1".to_string()],
//!     vec!["stacks".to_string()],
//! );
//! let id = registry.register_template(&alice, 100, details, compatibility).await?;
//!
//! // Publish a version bound to the content's hash
//! let hash = ContentHash::of(b"(define-public (deposit) ...)");
//! registry.publish_version(&alice, 101, id, "1.0.0", hash, "Initial release").await?;
//!
//! println!("Registered template {id} with version 1.0.0");
//! # Ok(())
//! # }
//! ```

pub mod entities;
pub mod error;
pub mod hash;
pub mod registry;
pub mod storage;

pub use entities::{
    BlockHeight, Compatibility, Principal, Template, TemplateDetails, TemplateId, TemplateVersion,
};
pub use error::{RegistryError, Result};
pub use hash::ContentHash;
pub use registry::Registry;
pub use storage::{MemoryStore, RegistryStore};
