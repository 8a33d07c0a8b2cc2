//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for malformed
//! values. Range checks against the network size happen in the engine, since
//! the member count is not known while individual arguments are parsed.

use circles_graph::MAX_MEMBERS;

use super::args::EdgeArg;

/// Validate the member count.
///
/// Must be a whole number from 1 to [`MAX_MEMBERS`].
pub fn validate_member_count(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let count: usize = s
        .parse()
        .map_err(|_| format!("Member count must be a whole number, got '{s}'"))?;

    if count == 0 {
        return Err("Member count must be at least 1".to_string());
    }

    if count > MAX_MEMBERS {
        return Err(format!("Member count must be at most {MAX_MEMBERS}, got {count}"));
    }

    Ok(count)
}

/// Parse a friendship in `A,B,WEIGHT` form.
///
/// Examples: `0,1,4`, `2, 3, 10`
///
/// Only the shape is checked here. Negative or out-of-range values parse
/// successfully and are rejected by the engine with a precise reason.
pub fn parse_edge(s: &str) -> Result<EdgeArg, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [a, b, weight] = parts[..] else {
        return Err(format!(
            "Invalid friendship '{s}'. Expected format: A,B,WEIGHT (e.g., 0,1,4)"
        ));
    };

    let number = |field: &str, text: &str| {
        text.parse::<i64>()
            .map_err(|_| format!("Friendship {field} must be a whole number, got '{text}'"))
    };

    Ok(EdgeArg {
        a: number("member", a)?,
        b: number("member", b)?,
        weight: number("weight", weight)?,
    })
}
