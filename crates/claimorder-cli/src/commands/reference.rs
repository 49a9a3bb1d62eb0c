//! Reference add/delete command implementations.

use crate::cli::ReferenceArgs;
use crate::error::Result;
use crate::output::Formatter;
use claimorder_domain::ClaimCollection;
use tracing::info;

/// Execute the add command: add a reference to a claim and its dependents.
pub fn execute_add(
    args: ReferenceArgs,
    claims: &mut ClaimCollection,
    formatter: &Formatter,
) -> Result<()> {
    let visited = claims.propagate_add_reference(args.number, &args.reference)?;
    info!(claim = args.number, reference = %args.reference, visited, "Reference added");
    println!("{}", formatter.propagation_result("Added", &args.reference, visited));
    Ok(())
}

/// Execute the delete command: remove a reference from a claim and its dependents.
pub fn execute_delete(
    args: ReferenceArgs,
    claims: &mut ClaimCollection,
    formatter: &Formatter,
) -> Result<()> {
    let visited = claims.propagate_delete_reference(args.number, &args.reference)?;
    info!(claim = args.number, reference = %args.reference, visited, "Reference deleted");
    println!("{}", formatter.propagation_result("Deleted", &args.reference, visited));
    Ok(())
}
