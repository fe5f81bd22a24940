//! Prompt Registry - central registration of all prompts.
//!
//! This module provides dynamic prompt registration without modifying service.rs.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    DocumentationSetupPrompt, FindDevelopmentPromptsPrompt, GithubWorkflowPrompt, PromptDefinition,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        defaults: P::defaults()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<FindDevelopmentPromptsPrompt>(),
        build_template::<GithubWorkflowPrompt>(),
        build_template::<DocumentationSetupPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        FindDevelopmentPromptsPrompt::NAME,
        GithubWorkflowPrompt::NAME,
        DocumentationSetupPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 3);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"find_development_prompts"));
        assert!(names.contains(&"setup_github_workflow_prompts"));
        assert!(names.contains(&"documentation_prompts_setup"));
    }

    #[test]
    fn test_prompt_names() {
        let names = prompt_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"find_development_prompts"));
    }

    #[test]
    fn test_defaults_carried_into_template() {
        let prompts = get_all_prompts();
        let development = prompts
            .iter()
            .find(|p| p.name == "find_development_prompts")
            .unwrap();
        assert_eq!(development.defaults.get("language").map(String::as_str), Some("any"));
        assert_eq!(development.defaults.get("framework").map(String::as_str), Some("any"));
    }
}
