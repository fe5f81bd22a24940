//! Query operations over the catalog store.
//!
//! Every operation is a pure linear scan in definition order. The catalog is
//! small enough that a full scan beats any index, and the scan keeps the
//! semantics obvious.

use std::collections::BTreeMap;

use super::error::CatalogError;
use super::record::{InstallationInfo, PromptDetails, SearchResult};
use super::store::CatalogStore;

/// Mapping from category label to the number of records carrying it.
pub type CategorySummary = BTreeMap<String, usize>;

impl CatalogStore {
    /// Search records by case-insensitive substring of title, description,
    /// or category.
    ///
    /// `category`, when supplied, must equal the record's category exactly
    /// (case-sensitive); an unknown category yields an empty result, not an
    /// error. An empty query matches every record that passes the category
    /// filter.
    pub fn search_prompts(&self, query: &str, category: Option<&str>) -> Vec<SearchResult> {
        let needle = query.to_lowercase();

        self.records()
            .iter()
            .filter(|record| category.is_none_or(|c| record.category == c))
            .filter(|record| {
                record.title.to_lowercase().contains(&needle)
                    || record.description.to_lowercase().contains(&needle)
                    || record.category.to_lowercase().contains(&needle)
            })
            .map(SearchResult::from_record)
            .collect()
    }

    /// Find records whose tool set contains every requested tool.
    ///
    /// An empty requirement matches every record (the empty set is a subset
    /// of any set). Each match carries `matching_tools`, the deduplicated
    /// requirement in request order; since a match supports all of them,
    /// that is exactly the intersection with the record's tool set.
    pub fn filter_by_tools(&self, required_tools: &[String]) -> Vec<SearchResult> {
        let mut wanted: Vec<&str> = Vec::with_capacity(required_tools.len());
        for tool in required_tools {
            if !wanted.contains(&tool.as_str()) {
                wanted.push(tool);
            }
        }

        self.records()
            .iter()
            .filter(|record| record.supports_all_tools(&wanted))
            .map(|record| {
                let matching = wanted.iter().map(|t| t.to_string()).collect();
                SearchResult::with_matching_tools(record, matching)
            })
            .collect()
    }

    /// Detailed view of one record; fails with the missing id when absent.
    pub fn prompt_details(&self, id: &str) -> Result<PromptDetails, CatalogError> {
        self.get(id)
            .map(PromptDetails::from_record)
            .ok_or_else(|| CatalogError::not_found(id))
    }

    /// Installation links and usage instructions for one record.
    pub fn installation_info(&self, id: &str) -> Result<InstallationInfo, CatalogError> {
        self.get(id)
            .map(InstallationInfo::from_record)
            .ok_or_else(|| CatalogError::not_found(id))
    }

    /// Count records per distinct category.
    pub fn categories(&self) -> CategorySummary {
        let mut summary = CategorySummary::new();
        for record in self.records() {
            *summary.entry(record.category.clone()).or_insert(0) += 1;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::data::{PROMPT_CATALOG, PromptDef};

    /// The reduced three-record catalog used across the query tests.
    const FIXTURE: &[PromptDef] = &[
        PromptDef {
            id: "create-spring-boot-java-project",
            title: "Create Spring Boot Java project prompt",
            description: "Create Spring Boot Java project skeleton",
            category: "development",
            tools: &["changes", "codebase", "editFiles", "findTestFiles", "problems", "runCommands", "runTests", "search", "searchResults", "terminalLastCommand", "testFailure", "usages"],
        },
        PromptDef {
            id: "csharp-nunit",
            title: "NUnit Best Practices",
            description: "Get best practices for NUnit unit testing, including data-driven tests",
            category: "testing",
            tools: &["changes", "codebase", "editFiles", "problems", "search"],
        },
        PromptDef {
            id: "create-llms",
            title: "Create LLMs.txt File from Repository Structure",
            description: "Create an llms.txt file from scratch based on repository structure following the llms.txt specification at https://llmstxt.org/",
            category: "documentation",
            tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
        },
    ];

    fn fixture_store() -> CatalogStore {
        CatalogStore::from_definitions(FIXTURE)
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_spring_finds_exactly_one() {
        let store = fixture_store();
        let results = store.search_prompts("spring", None);
        assert_eq!(ids(&results), ["create-spring-boot-java-project"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = fixture_store();
        assert_eq!(store.search_prompts("SPRING", None).len(), 1);
        assert_eq!(store.search_prompts("nunit", None).len(), 1);
    }

    #[test]
    fn test_search_matches_category_text() {
        let store = fixture_store();
        let results = store.search_prompts("testing", None);
        // "testing" appears in csharp-nunit's category and description, and
        // nowhere in the other two records.
        assert_eq!(ids(&results), ["csharp-nunit"]);
    }

    #[test]
    fn test_empty_query_returns_catalog_in_definition_order() {
        let store = fixture_store();
        let results = store.search_prompts("", None);
        assert_eq!(
            ids(&results),
            ["create-spring-boot-java-project", "csharp-nunit", "create-llms"]
        );
    }

    #[test]
    fn test_category_filter_is_case_sensitive_equality() {
        let store = fixture_store();
        assert_eq!(store.search_prompts("", Some("testing")).len(), 1);
        assert!(store.search_prompts("", Some("Testing")).is_empty());
        assert!(store.search_prompts("", Some("unknown-category")).is_empty());
    }

    #[test]
    fn test_category_filtered_search_is_subset_of_unfiltered() {
        let store = CatalogStore::new();
        for query in ["", "create", "best practices"] {
            let unfiltered = store.search_prompts(query, None);
            for category in ["documentation", "testing", "github"] {
                let filtered = store.search_prompts(query, Some(category));
                for result in &filtered {
                    assert_eq!(result.category, category);
                    assert!(unfiltered.iter().any(|r| r.id == result.id));
                }
            }
        }
    }

    #[test]
    fn test_filter_by_tools_subset_match() {
        let store = fixture_store();
        let required = vec!["codebase".to_string(), "editFiles".to_string()];
        let results = store.filter_by_tools(&required);
        // All three fixture records list both codebase and editFiles.
        assert_eq!(
            ids(&results),
            ["create-spring-boot-java-project", "csharp-nunit", "create-llms"]
        );
        for result in &results {
            assert_eq!(
                result.matching_tools.as_deref(),
                Some(&["codebase".to_string(), "editFiles".to_string()][..])
            );
        }
    }

    #[test]
    fn test_filter_by_tools_excludes_partial_support() {
        let store = fixture_store();
        let required = vec!["codebase".to_string(), "runTests".to_string()];
        // Only the Spring Boot record lists runTests.
        assert_eq!(
            ids(&store.filter_by_tools(&required)),
            ["create-spring-boot-java-project"]
        );
    }

    #[test]
    fn test_filter_by_empty_tools_matches_everything() {
        let store = fixture_store();
        assert_eq!(store.filter_by_tools(&[]).len(), store.len());
    }

    #[test]
    fn test_filter_narrows_as_requirements_grow() {
        let store = CatalogStore::new();
        let broad = store.filter_by_tools(&["codebase".to_string()]);
        let narrow =
            store.filter_by_tools(&["codebase".to_string(), "editFiles".to_string()]);
        assert!(narrow.len() <= broad.len());
        for result in &narrow {
            assert!(broad.iter().any(|r| r.id == result.id));
        }
    }

    #[test]
    fn test_filter_deduplicates_requested_tools() {
        let store = fixture_store();
        let required = vec!["codebase".to_string(), "codebase".to_string()];
        let results = store.filter_by_tools(&required);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].matching_tools.as_deref(),
            Some(&["codebase".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_tool_yields_empty_not_error() {
        let store = fixture_store();
        assert!(store.filter_by_tools(&["no-such-tool".to_string()]).is_empty());
    }

    #[test]
    fn test_prompt_details_found() {
        let store = fixture_store();
        let details = store.prompt_details("csharp-nunit").unwrap();
        assert_eq!(details.id, "csharp-nunit");
        assert_eq!(details.category, "testing");
        assert!(details.url.ends_with("csharp-nunit.prompt.md"));
        assert!(details.install_url.starts_with("https://vscode.dev/redirect?url="));
    }

    #[test]
    fn test_prompt_details_not_found() {
        let store = fixture_store();
        let err = store.prompt_details("nonexistent-id").unwrap_err();
        assert!(err.to_string().contains("nonexistent-id"));
    }

    #[test]
    fn test_installation_info_not_found() {
        let store = fixture_store();
        assert!(store.installation_info("nonexistent-id").is_err());
    }

    #[test]
    fn test_categories_counts() {
        let store = fixture_store();
        let summary = store.categories();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary["testing"], 1);
        assert_eq!(summary["development"], 1);
        assert_eq!(summary["documentation"], 1);
    }

    #[test]
    fn test_categories_counts_sum_to_catalog_size() {
        let store = CatalogStore::new();
        let summary = store.categories();
        assert_eq!(summary.values().sum::<usize>(), PROMPT_CATALOG.len());
    }
}
