//! Output formatting for CLI commands.
//!
//! Every [`Response`] can be rendered as human-readable text or as JSON for
//! programmatic use. Rendering writes to any [`Write`] so the interactive
//! shell and one-shot commands share the same code.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::session::Response;
use circles_graph::{Isolation, Recommendation, Route};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{arrow, bold, dimmed, member, success, value};

/// Output mode for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for programmatic use
    Json,
}

/// Configuration for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Whether to use Unicode connectors instead of ASCII.
    pub use_unicode: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_colors: bool, use_unicode: bool) -> Self {
        Self {
            use_colors,
            use_unicode,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `CIRCLES_COLOR`: Set to "0" or "false" to disable colors (default: true)
    /// - `CIRCLES_UNICODE`: Set to "1" or "true" for Unicode path arrows (default: false)
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("CIRCLES_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        let use_unicode = match env::var("CIRCLES_UNICODE") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "CIRCLES_UNICODE",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        Self {
            use_colors,
            use_unicode,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            use_unicode: false,
        }
    }
}

/// Render a response in the requested mode.
///
/// # Errors
///
/// Returns an error if writing fails or JSON serialization fails.
pub fn write_response<W: Write>(
    w: &mut W,
    response: &Response,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, response),
        OutputMode::Text => write_text(w, response, config),
    }
}

/// Print a response to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_response(response: &Response, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_response(&mut handle, response, mode, &OutputConfig::from_env())
}

/// Write any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn write_text<W: Write>(w: &mut W, response: &Response, config: &OutputConfig) -> io::Result<()> {
    match response {
        Response::FriendshipAdded {
            a,
            b,
            weight,
            previous,
        } => write_friendship(w, *a, *b, *weight, *previous, config),
        Response::Network { rows } => write_matrix(w, rows, config),
        Response::Path { start, end, route } => {
            write_route(w, *start, *end, route.as_ref(), config)
        }
        Response::Recommendations { user, items } => {
            write_recommendations(w, *user, items, config)
        }
        Response::Isolated { isolation } => write_isolated(w, isolation, config),
    }
}

fn write_friendship<W: Write>(
    w: &mut W,
    a: usize,
    b: usize,
    weight: u32,
    previous: Option<u32>,
    config: &OutputConfig,
) -> io::Result<()> {
    let line = match previous {
        None => format!(
            "Friendship added between {} and {} with weight {}.",
            member(a, config),
            member(b, config),
            value(weight, config)
        ),
        Some(old) => format!(
            "Friendship between {} and {} updated from weight {} to {}.",
            member(a, config),
            member(b, config),
            value(old, config),
            value(weight, config)
        ),
    };
    writeln!(w, "{}", success(&line, config))
}

fn write_matrix<W: Write>(w: &mut W, rows: &[Vec<u32>], config: &OutputConfig) -> io::Result<()> {
    writeln!(w, "{}", bold("Adjacency Matrix:", config))?;

    let cell_width = rows
        .iter()
        .flatten()
        .map(|weight| weight.to_string().len())
        .max()
        .unwrap_or(1);

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|&weight| {
                let cell = format!("{weight:>cell_width$}");
                if weight == 0 {
                    dimmed(&cell, config)
                } else {
                    value(cell, config)
                }
            })
            .collect();
        writeln!(w, "{}", cells.join(" "))?;
    }
    Ok(())
}

fn write_route<W: Write>(
    w: &mut W,
    start: usize,
    end: usize,
    route: Option<&Route>,
    config: &OutputConfig,
) -> io::Result<()> {
    let Some(route) = route else {
        return writeln!(
            w,
            "{}",
            dimmed(
                &format!("No path exists between User {start} and User {end}"),
                config
            )
        );
    };

    writeln!(
        w,
        "Shortest path from {} to {}: {} steps",
        member(start, config),
        member(end, config),
        value(route.distance, config)
    )?;

    let separator = format!(" {} ", arrow(config));
    let hops: Vec<String> = route.path.iter().map(|&m| member(m, config)).collect();
    writeln!(w, "Path: {}", hops.join(&separator))
}

fn write_recommendations<W: Write>(
    w: &mut W,
    user: usize,
    items: &[Recommendation],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        bold(&format!("Friend Recommendations for User {user}:"), config)
    )?;

    if items.is_empty() {
        return writeln!(w, "{}", dimmed("No recommendations found.", config));
    }

    for item in items {
        writeln!(
            w,
            "{} {} (via {})",
            arrow(config),
            member(item.candidate, config),
            member(item.via, config)
        )?;
    }
    Ok(())
}

fn write_isolated<W: Write>(
    w: &mut W,
    isolation: &Isolation,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Isolated Users:", config))?;

    match isolation {
        Isolation::None => writeln!(w, "{}", dimmed("No isolated users found.", config)),
        Isolation::Members(members) => {
            for &m in members {
                writeln!(w, "{} is isolated.", member(m, config))?;
            }
            Ok(())
        }
    }
}
