//! Claim module - a numbered claim and the references applied to it

use crate::ClaimError;
use serde::Serialize;
use std::fmt;

/// Number identifying a claim within a collection
pub type ClaimNumber = u32;

/// Parent number used by independent claims
///
/// A claim declared with this parent is never linked as a dependent, even
/// though the value is also a valid `u32`.
pub const INDEPENDENT: ClaimNumber = 0;

/// A single claim in a claim hierarchy
///
/// The reference list keeps insertion order and never holds the same
/// reference twice. Dependents are back-links by number only; the owning
/// [`ClaimCollection`](crate::ClaimCollection) resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    /// Claim number (always > 0)
    pub number: ClaimNumber,

    /// Declared parent, `None` for an independent claim
    pub parent: Option<ClaimNumber>,

    references: Vec<String>,

    #[serde(skip)]
    dependents: Vec<ClaimNumber>,

    group_order: u32,
}

impl Claim {
    /// Create a new claim with no references
    ///
    /// A parent of `Some(0)` is normalised to `None`.
    ///
    /// # Errors
    /// Returns [`ClaimError::InvalidNumber`] if `number` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use claimorder_domain::Claim;
    ///
    /// let claim = Claim::new(2, Some(1)).unwrap();
    /// assert_eq!(claim.parent, Some(1));
    /// assert!(Claim::new(0, None).is_err());
    /// ```
    pub fn new(number: ClaimNumber, parent: Option<ClaimNumber>) -> Result<Self, ClaimError> {
        if number == 0 {
            return Err(ClaimError::InvalidNumber(number));
        }

        Ok(Self {
            number,
            parent: parent.filter(|&p| p != INDEPENDENT),
            references: Vec::new(),
            dependents: Vec::new(),
            group_order: 0,
        })
    }

    /// References applied to this claim, in the order they were added
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Numbers of the claims registered as depending on this one
    pub fn dependents(&self) -> &[ClaimNumber] {
        &self.dependents
    }

    /// Group rank computed by the last grouping pass (0 before any pass)
    pub fn group_order(&self) -> u32 {
        self.group_order
    }

    /// Whether this claim has no parent
    pub fn is_independent(&self) -> bool {
        self.parent.is_none()
    }

    /// Append a reference unless it is already present
    ///
    /// Returns `true` if the reference was added.
    pub fn add_reference(&mut self, reference: &str) -> bool {
        if self.references.iter().any(|r| r == reference) {
            return false;
        }
        self.references.push(reference.to_string());
        true
    }

    /// Remove a reference if present
    ///
    /// Returns `true` if the reference was removed. Missing references are a
    /// no-op.
    pub fn remove_reference(&mut self, reference: &str) -> bool {
        match self.references.iter().position(|r| r == reference) {
            Some(index) => {
                self.references.remove(index);
                true
            }
            None => false,
        }
    }

    /// Record `child` as a dependent of this claim
    ///
    /// No duplicate or cycle check is made here.
    pub fn register_dependent(&mut self, child: ClaimNumber) {
        self.dependents.push(child);
    }

    pub(crate) fn set_group_order(&mut self, group_order: u32) {
        self.group_order = group_order;
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Claim {}: {}", self.number, self.references.join(", "))
    }
}
