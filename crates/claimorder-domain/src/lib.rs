//! ClaimOrder Domain Layer
//!
//! This crate contains the core model for ordering dependent claims by the
//! references applied to them. It has no I/O and defines the fundamental
//! concepts that the frontend crate builds upon.
//!
//! ## Key Concepts
//!
//! - **Claim**: A numbered record, optionally dependent on a parent claim,
//!   carrying an ordered list of references
//! - **Reference**: An opaque textual identifier (a rejection or citation)
//! - **Dependent**: A claim whose declared parent is another claim; reference
//!   edits on the parent cascade down to every dependent
//! - **Group order**: The rank of a claim's exact reference sequence, numbered
//!   by first appearance
//!
//! ## Display Order
//!
//! ```
//! use claimorder_domain::ClaimCollection;
//!
//! let mut claims = ClaimCollection::new();
//! claims.create_claim(1, None).unwrap();
//! claims.create_claim(2, Some(1)).unwrap();
//! claims.create_claim(3, None).unwrap();
//!
//! claims.propagate_add_reference(1, "Smith").unwrap();
//!
//! let order: Vec<u32> = claims.compute_display_order().iter().map(|c| c.number).collect();
//! assert_eq!(order, vec![3, 1, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod collection;
pub mod error;
pub mod grouping;
pub mod propagation;

// Re-exports for convenience
pub use claim::{Claim, ClaimNumber, INDEPENDENT};
pub use collection::ClaimCollection;
pub use error::ClaimError;
