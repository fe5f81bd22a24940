//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{CategoryIndexResource, PromptIndexResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        view: R::view(),
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<PromptIndexResource>(),
        build_resource::<CategoryIndexResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        // Prompts in one category
        RawResourceTemplate {
            uri_template: "copilot-prompts://{category}".to_string(),
            name: "Prompts by Category".to_string(),
            title: Some("Prompts in a Category".to_string()),
            description: Some(
                "All prompts in a specific category (e.g. copilot-prompts://testing)".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
        // Single prompt details
        RawResourceTemplate {
            uri_template: "copilot-prompts://prompt/{prompt_id}".to_string(),
            name: "Prompt Details".to_string(),
            title: Some("Details of One Prompt".to_string()),
            description: Some(
                "Detailed information about a specific prompt by its id".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all static resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![PromptIndexResource::URI, CategoryIndexResource::URI]
}
