//! Validation, prompt assembly and deployment of template-based assistants.
//!
//! This crate turns an [`AssistantDraft`](assistant_core::AssistantDraft)
//! into a live assistant in three steps:
//!
//! - [`validate_values`] / [`validate_segment`] - Check supplied values against segment rules
//! - [`assemble`] / [`render_preview`] - Join segments into the system prompt
//! - [`build`] / [`build_from_catalog`] - Produce a [`DeployableAssistant`](assistant_core::DeployableAssistant)
//! - [`Deployer`] - Build, then hand off to a deployment client and record the outcome
//!
//! # Architecture
//!
//! ```text
//! AssistantDraft (name, template id, segment values, overrides)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         DEPLOYER                            │
//! │                                                             │
//! │  1. Look up template (TemplateCatalog)                      │
//! │         ↓                                                   │
//! │  2. Validate name + every dynamic segment                   │
//! │     • any blocking violation → ValidationFailed, stop       │
//! │         ↓                                                   │
//! │  3. Assemble prompt (declared order, blanks dropped)        │
//! │         ↓                                                   │
//! │  4. Merge voice / conversation overrides                    │
//! │         ↓                                                   │
//! │  5. DeploymentClient::deploy (or update when live)          │
//! │         ↓                                                   │
//! │  6. Record remote id / phone number or failure reason       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant_builder::Deployer;
//! use assistant_core::{AssistantConfiguration, AssistantDraft};
//! use template_catalog::default_catalog;
//! use vapi_client::VapiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let deployer = Deployer::new(default_catalog()?, VapiClient::from_env()?);
//!
//!     let draft = AssistantDraft::new("Premier Dental", "appointment-booking")
//!         .with_value("business-name-services", "Premier Dental Care - cleanings and exams");
//!     let mut config = AssistantConfiguration::new(draft);
//!
//!     let receipt = deployer.deploy(&mut config).await?;
//!     println!("Assistant live as {}", receipt.remote_id);
//!     Ok(())
//! }
//! ```

mod assembler;
mod builder;
mod deployer;
mod validator;

#[cfg(test)]
mod test_support;

pub use assembler::{assemble, render_preview, SEGMENT_SEPARATOR};
pub use builder::{build, build_from_catalog};
pub use deployer::Deployer;
pub use validator::{validate_name, validate_segment, validate_values, MAX_NAME_LENGTH, NAME_FIELD};
