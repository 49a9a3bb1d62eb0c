//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use claimorder_domain::Claim;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_claims_json(claims),
            OutputFormat::Table => self.format_claims_table(claims),
            OutputFormat::Plain => self.format_claims_plain(claims),
        }
    }

    /// Format a single claim.
    pub fn format_claim(&self, claim: &Claim) -> Result<String> {
        self.format_claims(std::slice::from_ref(claim))
    }

    fn format_claims_json(&self, claims: &[Claim]) -> Result<String> {
        Ok(serde_json::to_string_pretty(claims)?)
    }

    fn format_claims_table(&self, claims: &[Claim]) -> Result<String> {
        if claims.is_empty() {
            return Ok(self.colorize("No claims found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Claim", "Parent", "Group", "References"]);

        for claim in claims {
            let parent = claim.parent.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
            builder.push_record([
                claim.number.to_string(),
                parent,
                claim.group_order().to_string(),
                claim.references().join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn format_claims_plain(&self, claims: &[Claim]) -> Result<String> {
        if claims.is_empty() {
            return Ok(self.colorize("No claims found.", "yellow"));
        }

        let lines: Vec<String> = claims.iter().map(ToString::to_string).collect();
        Ok(lines.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the result of creating a claim.
    pub fn claim_created(&self, claim: &Claim) -> String {
        match claim.parent {
            Some(parent) => self.success(&format!(
                "Claim {} added (depends from claim {})",
                claim.number, parent
            )),
            None => self.success(&format!("Claim {} added (independent)", claim.number)),
        }
    }

    /// Format the result of a propagated reference edit.
    pub fn propagation_result(&self, operation: &str, reference: &str, count: usize) -> String {
        self.success(&format!("{} '{}' on {} claim(s)", operation, reference, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
