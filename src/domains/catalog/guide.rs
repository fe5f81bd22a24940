//! Usage-guide rendering.
//!
//! Builds one Markdown document over the whole catalog (or one category of
//! it). Pure string building: identical input, byte-identical output.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::links;
use super::record::PromptRecord;
use super::store::CatalogStore;

impl CatalogStore {
    /// Render the usage guide, optionally restricted to one category.
    ///
    /// Sections are ordered by category label, records within a section by
    /// title. The trailing general-instructions block is emitted regardless
    /// of filtering.
    pub fn usage_guide(&self, category: Option<&str>) -> String {
        let mut grouped: BTreeMap<&str, Vec<&PromptRecord>> = BTreeMap::new();
        for record in self.records() {
            if category.is_some_and(|c| record.category != c) {
                continue;
            }
            grouped.entry(&record.category).or_default().push(record);
        }

        let mut guide = String::from(
            "# Awesome GitHub Copilot Prompts Usage Guide\n\
             \n\
             This guide provides information about available GitHub Copilot prompts from the awesome-copilot repository.\n\
             \n",
        );

        for (label, mut records) in grouped {
            records.sort_by(|a, b| a.title.cmp(&b.title));

            let _ = writeln!(guide, "## {} Prompts\n", heading_case(label));

            for record in records {
                let _ = writeln!(guide, "### {}", record.title);
                let _ = writeln!(guide, "**ID:** `{}`", record.id);
                let _ = writeln!(guide, "**Description:** {}\n", record.description);

                if !record.tools.is_empty() {
                    guide.push_str("**Required Tools:**\n");
                    let tools: Vec<String> =
                        record.tools.iter().map(|t| format!("`{t}`")).collect();
                    guide.push_str(&tools.join(", "));
                    guide.push_str("\n\n");
                }

                guide.push_str("**Installation:**\n");
                let _ = writeln!(guide, "- [Install in VS Code]({})", links::install_url(&record.id));
                let _ = writeln!(guide, "- [View Source]({})\n", links::source_url(&record.id));

                guide.push_str("**Usage:**\n");
                let _ = writeln!(
                    guide,
                    "Use `/{}` in VS Code chat or run the `Chat: Run Prompt` command.\n",
                    record.id
                );

                guide.push_str("---\n\n");
            }
        }

        guide.push_str(
            "## General Usage Instructions\n\
             \n\
             1. **Install a prompt:** Click the installation link for any prompt above\n\
             2. **Use in VS Code:** Type `/prompt-name` in the chat interface\n\
             3. **Run command:** Use `Chat: Run Prompt` command from the command palette\n\
             4. **Direct execution:** Hit the run button while viewing a prompt file\n\
             \n\
             For more information, visit the [awesome-copilot repository](https://github.com/github/awesome-copilot).",
        );

        guide
    }
}

/// Capitalize the first letter of every alphabetic run.
///
/// Turns "project-management" into "Project-Management", matching how the
/// upstream guide capitalizes its section headings.
fn heading_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_boundary = true;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::data::PromptDef;

    const FIXTURE: &[PromptDef] = &[
        PromptDef {
            id: "zeta-prompt",
            title: "Zeta",
            description: "Second by title within the same category",
            category: "testing",
            tools: &["codebase", "search"],
        },
        PromptDef {
            id: "alpha-prompt",
            title: "Alpha",
            description: "First by title within the same category",
            category: "testing",
            tools: &[],
        },
        PromptDef {
            id: "doc-prompt",
            title: "Docs",
            description: "Lone documentation entry",
            category: "documentation",
            tools: &["editFiles"],
        },
    ];

    #[test]
    fn test_heading_case() {
        assert_eq!(heading_case("testing"), "Testing");
        assert_eq!(heading_case("best-practices"), "Best-Practices");
        assert_eq!(heading_case("project-management"), "Project-Management");
    }

    #[test]
    fn test_sections_sorted_by_category_then_title() {
        let store = CatalogStore::from_definitions(FIXTURE);
        let guide = store.usage_guide(None);

        let documentation = guide.find("## Documentation Prompts").unwrap();
        let testing = guide.find("## Testing Prompts").unwrap();
        assert!(documentation < testing);

        let alpha = guide.find("### Alpha").unwrap();
        let zeta = guide.find("### Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_empty_tool_list_renders_no_tools_block() {
        let store = CatalogStore::from_definitions(FIXTURE);
        let guide = store.usage_guide(None);

        let alpha_section = &guide[guide.find("### Alpha").unwrap()..guide.find("### Zeta").unwrap()];
        assert!(!alpha_section.contains("**Required Tools:**"));

        let zeta_section = &guide[guide.find("### Zeta").unwrap()..];
        assert!(zeta_section.contains("**Required Tools:**"));
        assert!(zeta_section.contains("`codebase`, `search`"));
    }

    #[test]
    fn test_category_filter_restricts_sections() {
        let store = CatalogStore::from_definitions(FIXTURE);
        let guide = store.usage_guide(Some("documentation"));
        assert!(guide.contains("## Documentation Prompts"));
        assert!(!guide.contains("## Testing Prompts"));
        // The general block is appended regardless of filtering.
        assert!(guide.contains("## General Usage Instructions"));
    }

    #[test]
    fn test_unknown_category_keeps_general_block_only() {
        let store = CatalogStore::from_definitions(FIXTURE);
        let guide = store.usage_guide(Some("no-such-category"));
        assert!(!guide.contains("### "));
        assert!(guide.contains("## General Usage Instructions"));
    }

    #[test]
    fn test_guide_is_byte_identical_across_calls() {
        let store = CatalogStore::new();
        assert_eq!(store.usage_guide(None), store.usage_guide(None));
        assert_eq!(
            store.usage_guide(Some("testing")),
            store.usage_guide(Some("testing"))
        );
    }

    #[test]
    fn test_record_section_layout() {
        let store = CatalogStore::from_definitions(FIXTURE);
        let guide = store.usage_guide(Some("documentation"));
        assert!(guide.contains("### Docs\n**ID:** `doc-prompt`\n**Description:** Lone documentation entry\n"));
        assert!(guide.contains("Use `/doc-prompt` in VS Code chat or run the `Chat: Run Prompt` command."));
        assert!(guide.contains("- [Install in VS Code](https://vscode.dev/redirect?url="));
        assert!(guide.contains("- [View Source](https://github.com/github/awesome-copilot/blob/main/prompts/doc-prompt.prompt.md)"));
    }
}
