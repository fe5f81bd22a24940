//! Catalog record and per-query result types.
//!
//! [`PromptRecord`] is the stored shape; everything else here is derived on
//! the fly for a single query and never persisted.

use serde::Serialize;

use super::data::PromptDef;
use super::links;

/// One reusable prompt definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRecord {
    /// Stable identifier, used in URLs and lookups.
    pub id: String,

    /// Human-readable display name.
    pub title: String,

    /// What the prompt is for.
    pub description: String,

    /// Free-form lowercase-hyphenated classification label.
    pub category: String,

    /// Capability names the prompt declares it may invoke. Semantically a
    /// set; stored in definition order and duplicate-free.
    pub tools: Vec<String>,
}

impl PromptRecord {
    /// Canonical source URL of the prompt file.
    pub fn source_url(&self) -> String {
        links::source_url(&self.id)
    }

    /// Whether every tool in `required` appears in this record's tool set.
    pub fn supports_all_tools<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|tool| self.tools.iter().any(|t| t == tool.as_ref()))
    }
}

impl From<&PromptDef> for PromptRecord {
    fn from(def: &PromptDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            category: def.category.to_string(),
            tools: def.tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A record matched by a search or filter query, augmented with its source
/// URL and, for tool-subset queries, the matched tool subset.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tools: Vec<String>,

    /// Tools from the request that this record supports. Only present for
    /// tool-subset queries; equal to the deduplicated request when matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_tools: Option<Vec<String>>,

    pub url: String,
}

impl SearchResult {
    pub(crate) fn from_record(record: &PromptRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            tools: record.tools.clone(),
            matching_tools: None,
            url: record.source_url(),
        }
    }

    pub(crate) fn with_matching_tools(record: &PromptRecord, matching: Vec<String>) -> Self {
        Self {
            matching_tools: Some(matching),
            ..Self::from_record(record)
        }
    }
}

/// Full detail view of one record, as returned by direct id lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tools: Vec<String>,
    pub url: String,
    pub install_url: String,
}

impl PromptDetails {
    pub(crate) fn from_record(record: &PromptRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            tools: record.tools.clone(),
            url: record.source_url(),
            install_url: links::install_url(&record.id),
        }
    }
}

/// Installation links and usage instructions for one record.
#[derive(Debug, Clone, Serialize)]
pub struct InstallationInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub installation: InstallationLinks,
    pub usage_instructions: Vec<String>,
}

/// The three ways to reach a prompt file for installation.
#[derive(Debug, Clone, Serialize)]
pub struct InstallationLinks {
    /// VS Code install redirect.
    pub primary_url: String,

    /// VS Code Insiders install redirect.
    pub alternate_url: String,

    /// Raw prompt file on GitHub.
    pub raw_url: String,
}

impl InstallationInfo {
    pub(crate) fn from_record(record: &PromptRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            installation: InstallationLinks {
                primary_url: links::install_url(&record.id),
                alternate_url: links::insiders_install_url(&record.id),
                raw_url: links::raw_url(&record.id),
            },
            usage_instructions: vec![
                format!("Use `/{}` in VS Code chat", record.id),
                "Run `Chat: Run Prompt` command".to_string(),
                "Hit the run button while you have a prompt open".to_string(),
            ],
        }
    }
}
