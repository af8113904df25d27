//! Template registry for looking up templates by id.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use assistant_core::{AssistantError, Industry, Template, TemplateCatalog};
use tracing::{debug, info, warn};

use crate::error::CatalogError;

/// In-memory catalog of templates.
///
/// Templates are checked when registered and handed out as shared,
/// read-only `Arc`s. Iteration order is by template id.
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Arc<Template>>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// The template must pass [`Template::check`]. If a template with the
    /// same id already exists, it is replaced.
    pub fn register(&mut self, template: Template) -> Result<(), CatalogError> {
        template
            .check()
            .map_err(|defect| CatalogError::InvalidTemplate {
                id: template.id.clone(),
                defect,
            })?;
        self.insert(template);
        Ok(())
    }

    /// Parse, check and register a template from JSON text. Errors name
    /// `origin`.
    pub fn register_json(
        &mut self,
        json: &str,
        origin: impl Into<PathBuf>,
    ) -> Result<(), CatalogError> {
        let path = origin.into();
        let template: Template = match serde_json::from_str(json) {
            Ok(template) => template,
            Err(source) => return Err(CatalogError::Parse { path, source }),
        };
        if let Err(defect) = template.check() {
            return Err(CatalogError::InvalidFile {
                path,
                id: template.id.clone(),
                defect,
            });
        }
        self.insert(template);
        Ok(())
    }

    fn insert(&mut self, template: Template) {
        let id = template.id.clone();
        let version = template.version.clone();
        if let Some(previous) = self.templates.insert(id.clone(), Arc::new(template)) {
            warn!(
                template = %id,
                previous = %previous.version,
                version = %version,
                "Replacing registered template"
            );
        } else {
            info!(template = %id, version = %version, "Registering template");
        }
    }

    /// Register every `*.json` file in a directory.
    ///
    /// Returns the number of templates loaded. Files are read in name order
    /// so later duplicates deterministically win.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in &paths {
            debug!("Loading template file {}", path.display());
            let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            self.register_json(&json, path)?;
        }

        info!(dir = %dir.display(), count = paths.len(), "Loaded template directory");
        Ok(paths.len())
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Check if a template is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Active templates, by id.
    pub fn list_active(&self) -> Vec<Arc<Template>> {
        self.templates
            .values()
            .filter(|t| t.is_active())
            .cloned()
            .collect()
    }

    /// Active templates applicable to an industry, by id.
    pub fn list_for_industry(&self, industry: Industry) -> Vec<Arc<Template>> {
        self.templates
            .values()
            .filter(|t| t.is_active() && t.serves(industry))
            .cloned()
            .collect()
    }
}

impl TemplateCatalog for TemplateRegistry {
    fn get(&self, id: &str) -> Result<Arc<Template>, AssistantError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| AssistantError::TemplateNotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Arc<Template>> {
        self.templates.values().cloned().collect()
    }
}
