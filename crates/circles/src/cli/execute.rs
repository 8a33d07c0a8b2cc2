//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::{Context, Result};
use std::io;

use super::args::EdgeArg;
use crate::output::{self, OutputConfig, OutputMode};
use crate::session::{Request, Session};
use crate::shell::Shell;

/// Build a session and apply every `--edge` in order.
///
/// # Errors
///
/// Returns an error naming the first friendship the engine rejects.
pub fn build_session(members: usize, edges: &[EdgeArg]) -> Result<Session> {
    let mut session = Session::new(members)?;

    for edge in edges {
        session
            .handle(Request::from(*edge))
            .with_context(|| format!("Invalid --edge {edge}"))?;
    }

    if !edges.is_empty() {
        tracing::info!(members, friendships = edges.len(), "Seeded network");
    }
    Ok(session)
}

/// Execute a one-shot query command
pub fn execute_request(
    members: Option<usize>,
    edges: &[EdgeArg],
    request: Request,
    output_mode: OutputMode,
) -> Result<()> {
    let members = members.context("--members is required when running a command")?;
    let mut session = build_session(members, edges)?;

    let response = session.handle(request)?;
    output::print_response(&response, output_mode)?;

    Ok(())
}

/// Execute the interactive shell
pub fn execute_shell(
    members: Option<usize>,
    edges: &[EdgeArg],
    output_mode: OutputMode,
) -> Result<()> {
    let mut shell = Shell::new(
        io::stdin().lock(),
        io::stdout().lock(),
        output_mode,
        OutputConfig::from_env(),
    );

    let members = match members {
        Some(members) => members,
        None => match shell.read_member_count()? {
            Some(members) => members,
            None => {
                tracing::debug!("Input closed before a member count was entered");
                return Ok(());
            }
        },
    };

    let mut session = build_session(members, edges)?;
    shell.run(&mut session)?;

    Ok(())
}
