//! Order command implementation.
//!
//! Reads a JSON array of claims, builds the collection in file order,
//! propagates each listed reference from its claim, then prints the display
//! order.
//!
//! ```json
//! [
//!   { "number": 1, "references": ["Smith"] },
//!   { "number": 2, "parent": 1, "references": ["Jones"] }
//! ]
//! ```

use crate::cli::OrderArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimorder_domain::{ClaimCollection, ClaimNumber};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// One claim entry in an order input file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimEntry {
    /// Claim number
    pub number: ClaimNumber,

    /// Parent claim; omitted or 0 for an independent claim
    #[serde(default)]
    pub parent: Option<ClaimNumber>,

    /// References to propagate from this claim
    #[serde(default)]
    pub references: Vec<String>,
}

/// Execute the order command.
pub fn execute_order(args: OrderArgs, formatter: &Formatter) -> Result<()> {
    let json = read_input(&args, io::stdin())?;
    println!("{}", render_order(&json, formatter)?);
    Ok(())
}

/// Read the order input from `--file`, or from `stdin` when `--stdin` is set.
pub fn read_input<R: Read>(args: &OrderArgs, mut stdin: R) -> Result<String> {
    if let Some(file_path) = &args.file {
        Ok(fs::read_to_string(file_path)?)
    } else if args.stdin {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(CliError::InvalidInput("Must specify either --file or --stdin".to_string()))
    }
}

/// Parse the JSON claim entries and format them in display order.
pub fn render_order(json: &str, formatter: &Formatter) -> Result<String> {
    let entries: Vec<ClaimEntry> = serde_json::from_str(json)?;
    let mut claims = build_collection(&entries)?;

    info!(claims = claims.len(), "Ordering claims");
    formatter.format_claims(claims.compute_display_order())
}

/// Build a collection from entries: every claim first, then every reference.
///
/// References are applied after all claims exist so that a reference listed
/// on a parent reaches dependents declared later in the file.
pub fn build_collection(entries: &[ClaimEntry]) -> Result<ClaimCollection> {
    let mut claims = ClaimCollection::new();

    for entry in entries {
        claims.create_claim(entry.number, entry.parent)?;
    }

    for entry in entries {
        for reference in &entry.references {
            claims.propagate_add_reference(entry.number, reference)?;
        }
    }

    Ok(claims)
}
