//! Development prompt discovery workflow.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guides a client through finding development prompts for a language and
/// framework.
pub struct FindDevelopmentPromptsPrompt;

impl PromptDefinition for FindDevelopmentPromptsPrompt {
    const NAME: &'static str = "find_development_prompts";
    const DESCRIPTION: &'static str =
        "Find development-related prompts for specific languages or frameworks";

    fn template() -> &'static str {
        "Find GitHub Copilot prompts suitable for {{language}} development with {{framework}} framework.\n\
         \n\
         Use the search_prompts tool to find relevant prompts in the \"development\", \"best-practices\", and \"testing\" categories.\n\
         \n\
         Consider prompts that might help with:\n\
         - Project scaffolding and setup\n\
         - Best practices and code quality\n\
         - Testing frameworks and patterns\n\
         - Documentation generation\n\
         - Code review and refactoring\n\
         \n\
         Provide installation instructions and usage examples for the most relevant prompts."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "language".to_string(),
                title: None,
                description: Some("The programming language to find prompts for".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "framework".to_string(),
                title: None,
                description: Some("The framework to find prompts for".to_string()),
                required: Some(false),
            },
        ]
    }

    fn defaults() -> &'static [(&'static str, &'static str)] {
        &[("language", "any"), ("framework", "any")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_development_prompts_metadata() {
        assert_eq!(FindDevelopmentPromptsPrompt::NAME, "find_development_prompts");
        assert!(!FindDevelopmentPromptsPrompt::DESCRIPTION.is_empty());

        let args = FindDevelopmentPromptsPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "language");
        assert_eq!(args[0].required, Some(false));

        assert_eq!(FindDevelopmentPromptsPrompt::defaults().len(), 2);
    }
}
