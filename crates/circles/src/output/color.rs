//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan    (member labels)
//!   - Value:     yellow  (weights and distances)
//!   - Success:   green   (stored friendships)
//!   - Error:     red     (rejected input)
//!   - Muted:     dimmed  ("nothing found" messages, path arrows)
//!   - Emphasis:  bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Render `User <n>` in the member color.
pub(crate) fn member(index: usize, config: &OutputConfig) -> String {
    let text = format!("User {index}");
    if !config.use_colors {
        return text;
    }
    text.cyan().to_string()
}

/// Render a weight or distance in the value color.
pub(crate) fn value(amount: impl std::fmt::Display, config: &OutputConfig) -> String {
    let text = amount.to_string();
    if !config.use_colors {
        return text;
    }
    text.yellow().to_string()
}

/// Bold section header.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Dimmed text for empty results and connectors.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Connector placed between members on a path.
pub(crate) fn arrow(config: &OutputConfig) -> String {
    let glyph = if config.use_unicode { "→" } else { "->" };
    dimmed(glyph, config)
}
