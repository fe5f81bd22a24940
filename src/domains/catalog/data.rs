//! The literal prompt catalog.
//!
//! One entry per prompt file in the upstream awesome-copilot repository.
//! Definition order is load-bearing: every listing and scan operation
//! reports results in this order.

/// A single catalog entry as written down in this file.
///
/// Static source form of [`PromptRecord`](super::record::PromptRecord);
/// the store builds owned records from these at startup.
#[derive(Clone, Copy, Debug)]
pub struct PromptDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tools: &'static [&'static str],
}

/// The full catalog, in definition order.
pub const PROMPT_CATALOG: &[PromptDef] = &[
    PromptDef {
        id: "aspnet-minimal-api-openapi",
        title: "ASP.NET Minimal API with OpenAPI",
        description: "Create ASP.NET Minimal API endpoints with proper OpenAPI documentation",
        category: "development",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "az-cost-optimize",
        title: "Azure Cost Optimize",
        description: "Analyze Azure resources used in the app (IaC files and/or resources in a target rg) and optimize costs - creating GitHub issues for identified optimizations",
        category: "cloud",
        tools: &["changes", "codebase", "editFiles", "githubRepo", "problems"],
    },
    PromptDef {
        id: "comment-code-generate-a-tutorial",
        title: "Comment Code Generate A Tutorial",
        description: "Transform this Python script into a polished, beginner-friendly project by refactoring the code, adding clear instructional comments, and generating a complete markdown tutorial",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "create-architectural-decision-record",
        title: "Create Architectural Decision Record",
        description: "Create an Architectural Decision Record (ADR) document for AI-optimized decision documentation",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "create-github-issue-feature-from-specification",
        title: "Create GitHub Issue from Specification",
        description: "Create GitHub Issue for feature request from specification file using feature_request.yml template",
        category: "project-management",
        tools: &["changes", "codebase", "editFiles", "githubRepo", "problems"],
    },
    PromptDef {
        id: "create-github-issues-feature-from-implementation-plan",
        title: "Create GitHub Issue from Implementation Plan",
        description: "Create GitHub Issues from implementation plan phases using feature_request.yml or chore_request.yml templates",
        category: "project-management",
        tools: &["changes", "codebase", "editFiles", "githubRepo", "problems"],
    },
    PromptDef {
        id: "create-github-issues-for-unmet-specification-requirements",
        title: "Create GitHub Issues for Unmet Specification Requirements",
        description: "Create GitHub Issues for unimplemented requirements from specification files using feature_request.yml template",
        category: "project-management",
        tools: &["changes", "codebase", "editFiles", "githubRepo", "problems"],
    },
    PromptDef {
        id: "create-implementation-plan",
        title: "Create Implementation Plan",
        description: "Create a new implementation plan file for new features, refactoring existing code or upgrading packages, design, architecture or infrastructure",
        category: "planning",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "create-llms",
        title: "Create LLMs.txt File from Repository Structure",
        description: "Create an llms.txt file from scratch based on repository structure following the llms.txt specification at https://llmstxt.org/",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "create-oo-component-documentation",
        title: "Generate Standard OO Component Documentation",
        description: "Create comprehensive, standardized documentation for object-oriented components following industry best practices and architectural documentation standards",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "create-specification",
        title: "Create Specification",
        description: "Create a new specification file for the solution, optimized for Generative AI consumption",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "create-spring-boot-java-project",
        title: "Create Spring Boot Java project prompt",
        description: "Create Spring Boot Java project skeleton",
        category: "development",
        tools: &["changes", "codebase", "editFiles", "findTestFiles", "problems", "runCommands", "runTests", "search", "searchResults", "terminalLastCommand", "testFailure", "usages"],
    },
    PromptDef {
        id: "create-spring-boot-kotlin-project",
        title: "Create Spring Boot Kotlin project prompt",
        description: "Create Spring Boot Kotlin project skeleton",
        category: "development",
        tools: &["changes", "codebase", "editFiles", "findTestFiles", "problems", "runCommands", "runTests", "search", "searchResults", "terminalLastCommand", "testFailure", "usages"],
    },
    PromptDef {
        id: "csharp-async",
        title: "C# Async Programming Best Practices",
        description: "Get best practices for C# async programming",
        category: "best-practices",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "csharp-docs",
        title: "C# Documentation Best Practices",
        description: "Ensure that C# types are documented with XML comments and follow best practices for documentation",
        category: "best-practices",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "csharp-mstest",
        title: "MSTest Best Practices",
        description: "Get best practices for MSTest unit testing, including data-driven tests",
        category: "testing",
        tools: &["changes", "codebase", "editFiles", "problems", "search"],
    },
    PromptDef {
        id: "csharp-nunit",
        title: "NUnit Best Practices",
        description: "Get best practices for NUnit unit testing, including data-driven tests",
        category: "testing",
        tools: &["changes", "codebase", "editFiles", "problems", "search"],
    },
    PromptDef {
        id: "csharp-xunit",
        title: "XUnit Best Practices",
        description: "Get best practices for XUnit unit testing, including data-driven tests",
        category: "testing",
        tools: &["changes", "codebase", "editFiles", "problems", "search"],
    },
    PromptDef {
        id: "dotnet-best-practices",
        title: ".NET/C# Best Practices",
        description: "Ensure .NET/C# code meets best practices for the solution/project",
        category: "best-practices",
        tools: &[],
    },
    PromptDef {
        id: "dotnet-design-pattern-review",
        title: ".NET/C# Design Pattern Review",
        description: "Review the C#/.NET code for design pattern implementation and suggest improvements",
        category: "code-review",
        tools: &[],
    },
    PromptDef {
        id: "ef-core",
        title: "Entity Framework Core Best Practices",
        description: "Get best practices for Entity Framework Core",
        category: "best-practices",
        tools: &["changes", "codebase", "editFiles", "problems", "runCommands"],
    },
    PromptDef {
        id: "gen-specs-as-issues",
        title: "Product Manager Assistant: Feature Identification and Specification",
        description: "This workflow guides you through a systematic approach to identify missing features, prioritize them, and create detailed specifications for implementation",
        category: "project-management",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "javascript-typescript-jest",
        title: "Javascript Typescript Jest",
        description: "Best practices for writing JavaScript/TypeScript tests using Jest, including mocking strategies, test structure, and common patterns",
        category: "testing",
        tools: &[],
    },
    PromptDef {
        id: "multi-stage-dockerfile",
        title: "Multi Stage Dockerfile",
        description: "Create optimized multi-stage Dockerfiles for any language or framework",
        category: "devops",
        tools: &["codebase"],
    },
    PromptDef {
        id: "my-issues",
        title: "My Issues",
        description: "List my issues in the current repository",
        category: "github",
        tools: &["githubRepo", "github", "get_issue", "get_issue_comments", "get_me", "list_issues"],
    },
    PromptDef {
        id: "my-pull-requests",
        title: "My Pull Requests",
        description: "List my pull requests in the current repository",
        category: "github",
        tools: &["githubRepo", "github", "get_me", "get_pull_request", "get_pull_request_comments", "get_pull_request_diff", "get_pull_request_files", "get_pull_request_reviews", "get_pull_request_status", "list_pull_requests", "request_copilot_review"],
    },
    PromptDef {
        id: "next-intl-add-language",
        title: "Next Intl Add Language",
        description: "Add new language to a Next.js + next-intl application",
        category: "development",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "suggest-awesome-github-copilot-chatmodes",
        title: "Suggest Awesome GitHub Copilot Chatmodes",
        description: "Suggest relevant GitHub Copilot chatmode files from the awesome-copilot repository based on current repository context and chat history, avoiding duplicates with existing chatmodes in this repository",
        category: "meta",
        tools: &["changes", "codebase", "editFiles", "fetch", "findTestFiles", "githubRepo", "new", "openSimpleBrowser", "problems", "runCommands", "runTasks", "runTests", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI", "github"],
    },
    PromptDef {
        id: "suggest-awesome-github-copilot-prompts",
        title: "Suggest Awesome GitHub Copilot Prompts",
        description: "Suggest relevant GitHub Copilot prompt files from the awesome-copilot repository based on current repository context and chat history, avoiding duplicates with existing prompts in this repository",
        category: "meta",
        tools: &["changes", "codebase", "editFiles", "fetch", "findTestFiles", "githubRepo", "new", "openSimpleBrowser", "problems", "runCommands", "runTasks", "runTests", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI", "github"],
    },
    PromptDef {
        id: "update-avm-modules-in-bicep",
        title: "Update Azure Verified Modules in Bicep Files",
        description: "Update Azure Verified Modules (AVM) to latest versions in Bicep files",
        category: "cloud",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
    PromptDef {
        id: "update-implementation-plan",
        title: "Update Implementation Plan",
        description: "Update an existing implementation plan file with new or update requirements to provide new features, refactoring existing code or upgrading packages, design, architecture or infrastructure",
        category: "planning",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "update-llms",
        title: "Update LLMs.txt File",
        description: "Update the llms.txt file in the root folder to reflect changes in documentation or specifications following the llms.txt specification at https://llmstxt.org/",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "update-markdown-file-index",
        title: "Update Markdown File Index",
        description: "Update a markdown file section with an index/table of files from a specified folder",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "findTestFiles", "githubRepo", "openSimpleBrowser", "problems", "runCommands", "runTasks", "runTests", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "update-oo-component-documentation",
        title: "Update Standard OO Component Documentation",
        description: "Update existing object-oriented component documentation following industry best practices and architectural documentation standards",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "extensions", "fetch", "githubRepo", "openSimpleBrowser", "problems", "runTasks", "search", "searchResults", "terminalLastCommand", "terminalSelection", "testFailure", "usages", "vscodeAPI"],
    },
    PromptDef {
        id: "update-specification",
        title: "Update Specification",
        description: "Update an existing specification file for the solution, optimized for Generative AI consumption based on new requirements or updates to any existing code",
        category: "documentation",
        tools: &["changes", "codebase", "editFiles", "problems"],
    },
];
