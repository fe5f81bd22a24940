//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the substitution
//! logic used to instantiate prompt texts.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
///
/// Substitution is plain `{{variable}}` replacement. Optional arguments
/// fall back to their entry in `defaults`; a required argument with no
/// provided value is an error.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Fallback values for optional arguments.
    pub defaults: HashMap<String, String>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut rendered = self.template.clone();

        for arg in &self.arguments {
            let placeholder = format!("{{{{{}}}}}", arg.name);

            let value = arguments
                .get(&arg.name)
                .filter(|v| !v.is_empty())
                .or_else(|| self.defaults.get(&arg.name));

            match value {
                Some(value) => rendered = rendered.replace(&placeholder, value),
                None if arg.required.unwrap_or(false) => {
                    return Err(PromptError::missing_argument(&arg.name));
                }
                None => rendered = rendered.replace(&placeholder, ""),
            }
        }

        Ok(rendered)
    }
}
