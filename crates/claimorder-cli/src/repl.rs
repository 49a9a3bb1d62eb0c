//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The session holds a single in-memory claim collection. Nothing is saved
//! when the REPL exits.

use crate::cli::{ClaimArgs, ReferenceArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimorder_domain::{ClaimCollection, ClaimNumber, INDEPENDENT};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("ClaimOrder REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Editor(e.to_string()))?
        .auto_add_history(true)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Editor(format!("Failed to initialize editor: {}", e)))?;

    let mut claims = ClaimCollection::new();

    loop {
        match editor.readline("claimorder> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut claims, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Claim(ClaimArgs),
    Add(ReferenceArgs),
    Delete(ReferenceArgs),
    Print,
    Show(ClaimNumber),
    List,
}

/// Execute a REPL command against the session's claims.
fn execute_repl_command(
    cmd: ReplCommand,
    claims: &mut ClaimCollection,
    formatter: &Formatter,
) -> Result<()> {
    debug!(?cmd, "Executing REPL command");

    match cmd {
        ReplCommand::Claim(args) => commands::execute_claim(args, claims, formatter),
        ReplCommand::Add(args) => commands::execute_add(args, claims, formatter),
        ReplCommand::Delete(args) => commands::execute_delete(args, claims, formatter),
        ReplCommand::Print => commands::execute_print(claims, formatter),
        ReplCommand::Show(number) => commands::execute_show(number, claims, formatter),
        ReplCommand::List => commands::execute_list(claims, formatter),
        ReplCommand::Exit | ReplCommand::Help => Ok(()),
    }
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0].to_lowercase().as_str() {
        "exit" | "quit" | "x" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "claim" | "c" => parse_claim_command(&parts[1..]),
        "add" | "a" => parse_reference_command(&parts[1..], "add").map(ReplCommand::Add),
        "delete" | "d" => parse_reference_command(&parts[1..], "delete").map(ReplCommand::Delete),
        "print" | "p" => Ok(ReplCommand::Print),
        "list" | "ls" => Ok(ReplCommand::List),
        "show" => {
            let number = parts
                .get(1)
                .ok_or_else(|| CliError::InvalidInput("Usage: show <number>".to_string()))?;
            Ok(ReplCommand::Show(parse_claim_number(number)?))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Please enter a, d, p, or x (type 'help' for all commands).",
            parts[0]
        ))),
    }
}

fn parse_claim_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() || args.len() > 2 {
        return Err(CliError::InvalidInput("Usage: claim <number> [parent]".to_string()));
    }

    let number = parse_claim_number(args[0])?;
    let parent = match args.get(1) {
        Some(p) => Some(parse_parent_number(p)?).filter(|&p| p != INDEPENDENT),
        None => None,
    };

    Ok(ReplCommand::Claim(ClaimArgs { number, parent }))
}

fn parse_reference_command(args: &[&str], verb: &str) -> Result<ReferenceArgs> {
    if args.len() < 2 {
        return Err(CliError::InvalidInput(format!("Usage: {} <number> <reference>", verb)));
    }

    Ok(ReferenceArgs {
        number: parse_claim_number(args[0])?,
        // References may contain spaces ("US 1,234,567 to Smith").
        reference: args[1..].join(" "),
    })
}

/// Parse a claim number. Zero is left for the domain to reject.
fn parse_claim_number(s: &str) -> Result<ClaimNumber> {
    s.parse()
        .map_err(|_| CliError::InvalidInput(format!("'{}' is not a valid claim number", s)))
}

fn parse_parent_number(s: &str) -> Result<ClaimNumber> {
    s.parse().map_err(|_| {
        CliError::InvalidInput(format!(
            "'{}' is not a valid parent claim (use 0 if independent)",
            s
        ))
    })
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  claim <number> [parent]        - Add a claim (parent 0 or omitted: independent)");
    println!("  add <number> <reference>       - Add a reference to a claim and below (a)");
    println!("  delete <number> <reference>    - Delete a reference from a claim and below (d)");
    println!("  print                          - Order the claims and print them (p)");
    println!("  show <number>                  - Print one claim");
    println!("  list                           - Print claims in their current order");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, x, q               - Exit REPL");
    println!();
}
