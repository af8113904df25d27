//! Template catalog routes.

use assistant_core::{Complexity, Industry, Template, TemplateCategory};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Filters for the template list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub industry: Option<Industry>,
}

/// What the template picker needs to show.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub version: String,
    pub category: TemplateCategory,
    pub industries: Vec<Industry>,
    pub complexity: Complexity,
    pub summary: String,
    /// Ids of the segments the customer fills in.
    pub dynamic_segments: Vec<String>,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            version: template.version.clone(),
            category: template.category.clone(),
            industries: template.industries.clone(),
            complexity: template.complexity,
            summary: template.documentation.summary.clone(),
            dynamic_segments: template
                .dynamic_segments()
                .map(|segment| segment.id.clone())
                .collect(),
        }
    }
}

/// List active templates, optionally for one industry.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<TemplateSummary>> {
    let summaries = state
        .catalog
        .list()
        .iter()
        .filter(|template| template.is_active())
        .filter(|template| query.industry.map_or(true, |industry| template.serves(industry)))
        .map(|template| TemplateSummary::from(template.as_ref()))
        .collect();

    Json(summaries)
}

/// Get a full template by id.
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>> {
    let template = state.catalog.get(&id)?;
    Ok(Json(template.as_ref().clone()))
}
