//! Documentation prompt discovery workflow.

use super::PromptDefinition;

/// Guides a client through finding documentation-related prompts.
pub struct DocumentationSetupPrompt;

impl PromptDefinition for DocumentationSetupPrompt {
    const NAME: &'static str = "documentation_prompts_setup";
    const DESCRIPTION: &'static str = "Find and recommend documentation-related prompts";

    fn template() -> &'static str {
        "Find GitHub Copilot prompts that help with documentation tasks.\n\
         \n\
         Search for prompts in the \"documentation\" category and recommend the best ones for:\n\
         - API documentation\n\
         - Code documentation\n\
         - Project specifications\n\
         - Architectural decisions\n\
         - Component documentation\n\
         - README and guide generation\n\
         \n\
         Provide installation instructions and examples of when to use each prompt type."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_setup_metadata() {
        assert_eq!(DocumentationSetupPrompt::NAME, "documentation_prompts_setup");
        assert!(DocumentationSetupPrompt::arguments().is_empty());
        assert!(DocumentationSetupPrompt::template().contains("documentation"));
    }
}
