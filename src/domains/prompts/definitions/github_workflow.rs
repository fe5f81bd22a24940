//! GitHub workflow prompt discovery workflow.

use super::PromptDefinition;

/// Guides a client through finding GitHub workflow and project-management
/// prompts.
pub struct GithubWorkflowPrompt;

impl PromptDefinition for GithubWorkflowPrompt {
    const NAME: &'static str = "setup_github_workflow_prompts";
    const DESCRIPTION: &'static str =
        "Find prompts for GitHub workflow automation and project management";

    fn template() -> &'static str {
        "Find GitHub Copilot prompts that help with GitHub workflows and project management.\n\
         \n\
         Search for prompts in the \"github\" and \"project-management\" categories that can help with:\n\
         - Creating and managing GitHub issues\n\
         - Pull request workflows\n\
         - Implementation planning\n\
         - Specification documentation\n\
         - Project organization\n\
         \n\
         Provide a curated list with installation instructions and explain how these prompts can streamline GitHub workflows."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_workflow_metadata() {
        assert_eq!(GithubWorkflowPrompt::NAME, "setup_github_workflow_prompts");
        assert!(GithubWorkflowPrompt::arguments().is_empty());
        assert!(GithubWorkflowPrompt::template().contains("project-management"));
    }
}
