//! Print, show and list command implementations.

use crate::error::Result;
use crate::output::Formatter;
use claimorder_domain::{ClaimCollection, ClaimNumber};

/// Execute the print command: reorder the claims for display and print them.
pub fn execute_print(claims: &mut ClaimCollection, formatter: &Formatter) -> Result<()> {
    let ordered = claims.compute_display_order();
    println!("{}", formatter.format_claims(ordered)?);
    Ok(())
}

/// Execute the show command: print a single claim.
pub fn execute_show(
    number: ClaimNumber,
    claims: &ClaimCollection,
    formatter: &Formatter,
) -> Result<()> {
    let claim = claims.get(number)?;
    println!("{}", formatter.format_claim(claim)?);
    Ok(())
}

/// Execute the list command: print the claims in their current sequence.
pub fn execute_list(claims: &ClaimCollection, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_claims(claims.as_slice())?);
    Ok(())
}
