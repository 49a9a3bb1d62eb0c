//! Claim command implementation.

use crate::cli::ClaimArgs;
use crate::error::Result;
use crate::output::Formatter;
use claimorder_domain::ClaimCollection;
use tracing::info;

/// Execute the claim command: register a new claim under its parent.
pub fn execute_claim(
    args: ClaimArgs,
    claims: &mut ClaimCollection,
    formatter: &Formatter,
) -> Result<()> {
    if let Some(parent) = args.parent {
        if !claims.contains(parent) {
            let message = format!(
                "Claim {} is not defined yet; claim {} will not inherit from it",
                parent, args.number
            );
            println!("{}", formatter.warning(&message));
        }
    }

    let claim = claims.create_claim(args.number, args.parent)?;
    info!(claim = claim.number, parent = ?claim.parent, "Claim created");
    println!("{}", formatter.claim_created(claim));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use claimorder_domain::ClaimError;

    #[test]
    fn test_claim_is_linked_to_parent() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let mut claims = ClaimCollection::new();

        execute_claim(ClaimArgs { number: 1, parent: None }, &mut claims, &formatter).unwrap();
        execute_claim(ClaimArgs { number: 2, parent: Some(1) }, &mut claims, &formatter).unwrap();

        assert_eq!(claims.get(1).unwrap().dependents(), [2]);
    }

    #[test]
    fn test_zero_claim_is_rejected() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let mut claims = ClaimCollection::new();

        let result = execute_claim(ClaimArgs { number: 0, parent: None }, &mut claims, &formatter);
        assert!(matches!(result, Err(CliError::Claim(ClaimError::InvalidNumber(0)))));
        assert!(claims.is_empty());
    }
}
