//! Template catalog for Voice Matrix assistants.
//!
//! This crate provides a [`TemplateRegistry`] that implements
//! [`assistant_core::TemplateCatalog`]. Templates are checked when they are
//! registered, then shared read-only.
//!
//! # Built-in Templates
//!
//! - `appointment-booking` - Inbound receptionist for booking appointments.
//! - `customer-support` - Tier-one support for product and account questions.
//! - `lead-qualification` - Outbound caller that qualifies leads.
//! - `restaurant-reservations` - Host taking table reservations.
//!
//! Additional templates can be loaded from a directory of JSON files with
//! [`TemplateRegistry::load_dir`].
//!
//! # Example
//!
//! ```rust
//! use template_catalog::{default_catalog, TemplateCatalog};
//!
//! let catalog = default_catalog().unwrap();
//! let template = catalog.get("appointment-booking").unwrap();
//! println!("{} v{}", template.name, template.version);
//! ```

mod builtin;
mod error;
mod registry;

pub use builtin::{register_builtin, BUILTIN_TEMPLATES};
pub use error::CatalogError;
pub use registry::TemplateRegistry;

pub use assistant_core::TemplateCatalog;

/// Create a new registry with all built-in templates registered.
pub fn default_catalog() -> Result<TemplateRegistry, CatalogError> {
    let mut registry = TemplateRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}
