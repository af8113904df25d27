//! Templates shipped with Voice Matrix.

use crate::error::CatalogError;
use crate::registry::TemplateRegistry;

/// Built-in template sources as `(file name, JSON)` pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "appointment-booking.json",
        include_str!("../templates/appointment-booking.json"),
    ),
    (
        "customer-support.json",
        include_str!("../templates/customer-support.json"),
    ),
    (
        "lead-qualification.json",
        include_str!("../templates/lead-qualification.json"),
    ),
    (
        "restaurant-reservations.json",
        include_str!("../templates/restaurant-reservations.json"),
    ),
];

/// Register every built-in template.
pub fn register_builtin(registry: &mut TemplateRegistry) -> Result<(), CatalogError> {
    for (name, json) in BUILTIN_TEMPLATES {
        registry.register_json(json, *name)?;
    }
    Ok(())
}
