// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `meshwright shell` interactive REPL.
//!
//! Each line is `<skill> [json-args]`. The envelope is printed after a
//! colored status line; `list`, `help` and `exit` are handled locally.

use colored::Colorize;
use meshwright_core::MeshwrightError;
use meshwright_skill::ToolRegistry;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands;

const HELP: &str = "\
Usage: <skill> [json-args]
  e.g. create_primitive {\"primitive_type\": \"sphere\", \"size\": 3.0}
Commands:
  list        show available skills
  help        show this message
  exit, quit  leave the shell";

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Empty,
    Help,
    List,
    Exit,
    Invoke { skill: &'a str, args: Option<&'a str> },
}

pub fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim())),
        None => (line, None),
    };
    match head {
        "" => Line::Empty,
        "help" | "?" => Line::Help,
        "list" => Line::List,
        "exit" | "quit" => Line::Exit,
        skill => Line::Invoke {
            skill,
            args: rest.filter(|r| !r.is_empty()),
        },
    }
}

/// Runs the REPL until EOF, Ctrl-C, or `exit`.
pub async fn run_shell(registry: &ToolRegistry, pretty: bool) -> Result<(), MeshwrightError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| MeshwrightError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("meshwright shell: {} skills loaded, type `help` for usage", registry.len());

    loop {
        let line = match rl.readline("meshwright> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                return Err(MeshwrightError::Internal(format!("readline error: {e}")));
            }
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        match parse_line(&line) {
            Line::Empty => {}
            Line::Help => println!("{HELP}"),
            Line::List => print!("{}", commands::render_list(registry)),
            Line::Exit => break,
            Line::Invoke { skill, args } => {
                debug!(skill, "shell invocation");
                match commands::invoke(registry, skill, args, pretty).await {
                    Ok(result) => {
                        let status = if result.is_error {
                            "error".red().bold()
                        } else {
                            "success".green().bold()
                        };
                        println!("{status} {}", result.rendered);
                    }
                    Err(e) => println!("{} {e}", "failed".yellow().bold()),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_commands() {
        assert_eq!(parse_line("   "), Line::Empty);
        assert_eq!(parse_line("help"), Line::Help);
        assert_eq!(parse_line("?"), Line::Help);
        assert_eq!(parse_line(" list "), Line::List);
        assert_eq!(parse_line("quit"), Line::Exit);
    }

    #[test]
    fn parses_skill_with_arguments() {
        assert_eq!(
            parse_line(r#"subdivide_surface {"object_name": "Cube.001", "subdivision_level": 2}"#),
            Line::Invoke {
                skill: "subdivide_surface",
                args: Some(r#"{"object_name": "Cube.001", "subdivision_level": 2}"#),
            }
        );
    }

    #[test]
    fn parses_skill_without_arguments() {
        assert_eq!(
            parse_line("create_primitive   "),
            Line::Invoke {
                skill: "create_primitive",
                args: None,
            }
        );
        assert_eq!(
            parse_line("create_primitive\t "),
            Line::Invoke {
                skill: "create_primitive",
                args: None,
            }
        );
    }
}
