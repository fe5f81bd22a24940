//! Deterministic URL builders for catalog entries.
//!
//! Every URL is a pure string template parameterized only by the record id.

/// GitHub blob URL of the prompt file.
pub fn source_url(id: &str) -> String {
    format!("https://github.com/github/awesome-copilot/blob/main/prompts/{id}.prompt.md")
}

/// Raw file URL of the prompt file.
pub fn raw_url(id: &str) -> String {
    format!("https://raw.githubusercontent.com/github/awesome-copilot/main/prompts/{id}.prompt.md")
}

/// VS Code install redirect for the prompt file.
pub fn install_url(id: &str) -> String {
    let target = format!("vscode:chat-prompt/install?url={}", raw_url(id));
    format!(
        "https://vscode.dev/redirect?url={}",
        urlencoding::encode(&target)
    )
}

/// VS Code Insiders install redirect for the prompt file.
pub fn insiders_install_url(id: &str) -> String {
    let target = format!("vscode-insiders:chat-prompt/install?url={}", raw_url(id));
    format!(
        "https://insiders.vscode.dev/redirect?url={}",
        urlencoding::encode(&target)
    )
}
