//! Interactive menu loop.
//!
//! The shell reads a menu choice, prompts for that action's integers,
//! forwards a [`Request`] to the [`Session`], and renders the [`Response`].
//! Bad input never ends the loop; only the exit choice or end of input does.
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use circles_graph::{Error as GraphError, MAX_MEMBERS};

use crate::output::{self, OutputConfig, OutputMode, color};
use crate::session::{Request, Session};

const MENU: &str = "\
Menu:
1. Add friendship
2. Display social network
3. Find shortest path
4. Recommend friends
5. Isolated users
6. Exit";

/// One entry of the six-item menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create or re-weight a friendship.
    AddFriendship,
    /// Print the weight matrix.
    Display,
    /// Lightest route between two members.
    ShortestPath,
    /// Friends-of-friends for a member.
    Recommend,
    /// Members without friendships.
    Isolated,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Parse a menu number (`1` to `6`), ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddFriendship),
            "2" => Some(Self::Display),
            "3" => Some(Self::ShortestPath),
            "4" => Some(Self::Recommend),
            "5" => Some(Self::Isolated),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What came back from a prompt asking for `N` integers.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer<const N: usize> {
    Numbers([i64; N]),
    Invalid(String),
    Closed,
}

/// Line-oriented menu shell over arbitrary input and output streams.
pub struct Shell<R, W> {
    input: R,
    output: W,
    mode: OutputMode,
    config: OutputConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, mode: OutputMode, config: OutputConfig) -> Self {
        Self {
            input,
            output,
            mode,
            config,
        }
    }

    /// Prompt until a usable member count is entered.
    ///
    /// Returns `None` if input ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn read_member_count(&mut self) -> io::Result<Option<usize>> {
        loop {
            match self.ask::<1>("Enter the number of users in the social network: ")? {
                Answer::Closed => return Ok(None),
                Answer::Invalid(reason) => self.reject(&reason)?,
                Answer::Numbers([count]) => match usize::try_from(count) {
                    Ok(count) if (1..=MAX_MEMBERS).contains(&count) => return Ok(Some(count)),
                    _ => self.reject(&format!(
                        "the network needs between 1 and {MAX_MEMBERS} users"
                    ))?,
                },
            }
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails. Invalid
    /// user input is reported and the loop continues.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        let last = session.members() - 1;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;

            let choice = match self.ask_line("Enter your choice: ")? {
                None => break,
                Some(line) => MenuChoice::parse(&line),
            };
            let Some(choice) = choice else {
                tracing::debug!("Unknown menu choice");
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            let request = match choice {
                MenuChoice::Exit => break,
                MenuChoice::Display => Request::Display,
                MenuChoice::Isolated => Request::Isolated,
                MenuChoice::AddFriendship => {
                    let prompt = format!(
                        "Enter two user IDs to connect (0 to {last}) and weight of the connection: "
                    );
                    match self.ask::<3>(&prompt)? {
                        Answer::Numbers([a, b, weight]) => Request::AddFriendship { a, b, weight },
                        Answer::Invalid(reason) => {
                            self.reject(&reason)?;
                            continue;
                        }
                        Answer::Closed => break,
                    }
                }
                MenuChoice::ShortestPath => {
                    match self.ask::<2>("Enter the start and end user IDs for shortest path: ")? {
                        Answer::Numbers([start, end]) => Request::ShortestPath { start, end },
                        Answer::Invalid(reason) => {
                            self.reject(&reason)?;
                            continue;
                        }
                        Answer::Closed => break,
                    }
                }
                MenuChoice::Recommend => {
                    match self.ask::<1>("Enter the user ID to get friend recommendations: ")? {
                        Answer::Numbers([user]) => Request::Recommend { user },
                        Answer::Invalid(reason) => {
                            self.reject(&reason)?;
                            continue;
                        }
                        Answer::Closed => break,
                    }
                }
            };

            match session.handle(request) {
                Ok(response) => {
                    writeln!(self.output)?;
                    output::write_response(&mut self.output, &response, self.mode, &self.config)?;
                }
                Err(GraphError::InvalidArgument(reason)) => {
                    self.reject(&reason.to_string())?;
                }
            }
        }

        writeln!(self.output, "Exiting program.")?;
        self.output.flush()
    }

    /// Print a prompt and read one line, or `None` at end of input.
    fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Print a prompt and read exactly `N` integers from one line.
    fn ask<const N: usize>(&mut self, prompt: &str) -> io::Result<Answer<N>> {
        let Some(line) = self.ask_line(prompt)? else {
            return Ok(Answer::Closed);
        };
        Ok(parse_numbers(&line))
    }

    fn reject(&mut self, reason: &str) -> io::Result<()> {
        tracing::warn!(reason, "Rejected shell input");
        let message = format!("Invalid input ({reason}). Please try again.");
        writeln!(self.output, "{}", color::error(&message, &self.config))
    }
}

fn parse_numbers<const N: usize>(line: &str) -> Answer<N> {
    let mut numbers = Vec::with_capacity(N);
    for token in line.split_whitespace() {
        match token.parse::<i64>() {
            Ok(n) => numbers.push(n),
            Err(_) => return Answer::Invalid(format!("'{token}' is not a whole number")),
        }
    }

    let found = numbers.len();
    match <[i64; N]>::try_from(numbers) {
        Ok(values) => Answer::Numbers(values),
        Err(_) => Answer::Invalid(format!(
            "expected {N} number{}, got {found}",
            if N == 1 { "" } else { "s" }
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(members: usize, script: &str) -> String {
        let mut session = Session::new(members).unwrap();
        let mut out = Vec::new();
        let mut shell = Shell::new(
            Cursor::new(script.as_bytes()),
            &mut out,
            OutputMode::Text,
            OutputConfig::new(false, false),
        );
        shell.run(&mut session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1\n"), Some(MenuChoice::AddFriendship));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers::<3>("0 1 4\n"), Answer::Numbers([0, 1, 4]));
        assert_eq!(parse_numbers::<2>(" -1\t2 "), Answer::Numbers([-1, 2]));
        assert_eq!(
            parse_numbers::<2>("0 x"),
            Answer::Invalid("'x' is not a whole number".to_string())
        );
        assert_eq!(
            parse_numbers::<2>("0"),
            Answer::Invalid("expected 2 numbers, got 1".to_string())
        );
        assert_eq!(
            parse_numbers::<1>(""),
            Answer::Invalid("expected 1 number, got 0".to_string())
        );
    }

    #[test]
    fn test_exit_choice() {
        let out = run_script(2, "6\n");
        assert!(out.contains("1. Add friendship"));
        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_script(2, "");
        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_end_of_input_mid_prompt_exits() {
        let out = run_script(2, "1\n");
        assert!(out.contains("Enter two user IDs to connect (0 to 1)"));
        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_unknown_choice_reprompts() {
        let out = run_script(2, "9\n6\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_member_count_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut shell = Shell::new(
            Cursor::new("zero\n0\n4\n".as_bytes()),
            &mut out,
            OutputMode::Text,
            OutputConfig::new(false, false),
        );
        assert_eq!(shell.read_member_count().unwrap(), Some(4));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_member_count_too_large_reprompts() {
        let mut out = Vec::new();
        let mut shell = Shell::new(
            Cursor::new("4294967296\n3\n".as_bytes()),
            &mut out,
            OutputMode::Text,
            OutputConfig::new(false, false),
        );
        assert_eq!(shell.read_member_count().unwrap(), Some(3));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!(
            "Invalid input (the network needs between 1 and {MAX_MEMBERS} users)"
        )));
    }

    #[test]
    fn test_member_count_end_of_input() {
        let mut out = Vec::new();
        let mut shell = Shell::new(
            Cursor::new("".as_bytes()),
            &mut out,
            OutputMode::Text,
            OutputConfig::new(false, false),
        );
        assert_eq!(shell.read_member_count().unwrap(), None);
    }
}
