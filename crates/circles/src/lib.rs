//! Circles - an interactive shell over a weighted friendship network.
//!
//! This crate provides both the `circles` CLI application and a small library
//! exposing the request/response session and menu loop, so the shell can be
//! driven from tests or embedded elsewhere. All graph logic lives in
//! [`circles_graph`].

#![forbid(unsafe_code)]

// Public CLI module (needed by binary)
pub mod cli;

pub mod output;
pub mod session;
pub mod shell;
