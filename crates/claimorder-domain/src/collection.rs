//! Claim collection - owns the claims and their current display sequence

use crate::{Claim, ClaimError, ClaimNumber, INDEPENDENT};
use tracing::{debug, warn};

/// An ordered collection of claims
///
/// Claims are appended in caller order and never removed. Lookups resolve a
/// claim number to the first claim carrying it. The sort operations reorder
/// the sequence in place.
#[derive(Debug, Clone, Default)]
pub struct ClaimCollection {
    claims: Vec<Claim>,
}

impl ClaimCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of claims in the collection
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the collection holds no claims
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate over the claims in their current sequence
    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    /// The claims in their current sequence
    pub fn as_slice(&self) -> &[Claim] {
        &self.claims
    }

    /// Whether a claim with this number exists
    pub fn contains(&self, number: ClaimNumber) -> bool {
        self.index_of(number).is_some()
    }

    /// Look up a claim by number
    ///
    /// # Errors
    /// Returns [`ClaimError::NotFound`] if no claim carries `number`.
    pub fn get(&self, number: ClaimNumber) -> Result<&Claim, ClaimError> {
        self.index_of(number)
            .map(|index| &self.claims[index])
            .ok_or(ClaimError::NotFound(number))
    }

    /// Look up a claim by number for editing
    ///
    /// Edits made through this handle affect only the claim itself; use the
    /// propagation operations to reach its dependents.
    ///
    /// # Errors
    /// Returns [`ClaimError::NotFound`] if no claim carries `number`.
    pub fn get_mut(&mut self, number: ClaimNumber) -> Result<&mut Claim, ClaimError> {
        match self.index_of(number) {
            Some(index) => Ok(&mut self.claims[index]),
            None => Err(ClaimError::NotFound(number)),
        }
    }

    /// Append a claim, linking it under its declared parent
    ///
    /// The claim is registered as a dependent of its parent when the parent
    /// number is non-zero and the parent is already in the collection. A
    /// parent that has not been added yet leaves the claim unlinked.
    pub fn add_claim(&mut self, claim: Claim) {
        if let Some(parent) = claim.parent.filter(|&p| p != INDEPENDENT) {
            match self.index_of(parent) {
                Some(index) => {
                    debug!(claim = claim.number, parent, "Registered dependent claim");
                    self.claims[index].register_dependent(claim.number);
                }
                None => {
                    warn!(
                        claim = claim.number,
                        parent, "Parent claim not found; claim added without a parent link"
                    );
                }
            }
        }

        self.claims.push(claim);
    }

    /// Construct a claim and append it to the collection
    ///
    /// # Errors
    /// Returns [`ClaimError::InvalidNumber`] if `number` is 0. The collection
    /// is left untouched in that case.
    pub fn create_claim(
        &mut self,
        number: ClaimNumber,
        parent: Option<ClaimNumber>,
    ) -> Result<&Claim, ClaimError> {
        let claim = Claim::new(number, parent)?;
        self.add_claim(claim);

        let last = self.claims.len() - 1;
        Ok(&self.claims[last])
    }

    /// Stable sort by claim number, ascending
    pub fn sort_by_number(&mut self) {
        self.claims.sort_by_key(|c| c.number);
    }

    /// Stable sort by how many references each claim carries, ascending
    pub fn sort_by_reference_count(&mut self) {
        self.claims.sort_by_key(|c| c.references().len());
    }

    /// Stable sort by the group order from the last grouping pass, ascending
    pub fn sort_by_group_order(&mut self) {
        self.claims.sort_by_key(|c| c.group_order());
    }

    /// Reorder the collection for display and return the result
    ///
    /// Sorts by number, then by reference count, recomputes the groups and
    /// finally sorts by group order. Claims sharing an identical reference
    /// sequence end up adjacent, ordered by where that sequence first
    /// appeared.
    pub fn compute_display_order(&mut self) -> &[Claim] {
        self.sort_by_number();
        self.sort_by_reference_count();
        let groups = self.assign_group_orders();
        self.sort_by_group_order();

        debug!(claims = self.claims.len(), groups, "Computed display order");
        &self.claims
    }

    pub(crate) fn index_of(&self, number: ClaimNumber) -> Option<usize> {
        self.claims.iter().position(|c| c.number == number)
    }

    pub(crate) fn claims_mut(&mut self) -> &mut [Claim] {
        &mut self.claims
    }
}

impl<'a> IntoIterator for &'a ClaimCollection {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(claims: &ClaimCollection) -> Vec<ClaimNumber> {
        claims.iter().map(|c| c.number).collect()
    }

    #[test]
    fn test_create_claim_links_parent() {
        let mut claims = ClaimCollection::new();
        claims.create_claim(1, None).unwrap();
        claims.create_claim(2, Some(1)).unwrap();
        claims.create_claim(3, Some(1)).unwrap();

        assert_eq!(claims.get(1).unwrap().dependents(), [2, 3]);
        assert!(claims.get(2).unwrap().dependents().is_empty());
    }

    #[test]
    fn test_invalid_claim_leaves_collection_untouched() {
        let mut claims = ClaimCollection::new();
        claims.create_claim(1, None).unwrap();

        assert_eq!(claims.create_claim(0, Some(1)), Err(ClaimError::InvalidNumber(0)));
        assert_eq!(claims.len(), 1);
        assert!(claims.get(1).unwrap().dependents().is_empty());
    }

    #[test]
    fn test_zero_parent_never_links() {
        let mut claims = ClaimCollection::new();
        claims.create_claim(1, None).unwrap();
        claims.create_claim(2, Some(INDEPENDENT)).unwrap();

        assert!(claims.get(1).unwrap().dependents().is_empty());
        assert!(claims.get(2).unwrap().is_independent());
    }

    #[test]
    fn test_missing_parent_leaves_claim_unlinked() {
        let mut claims = ClaimCollection::new();
        claims.create_claim(2, Some(1)).unwrap();
        claims.create_claim(1, None).unwrap();

        assert_eq!(claims.get(2).unwrap().parent, Some(1));
        assert!(claims.get(1).unwrap().dependents().is_empty());
    }

    #[test]
    fn test_lookup_missing_claim() {
        let claims = ClaimCollection::new();
        assert_eq!(claims.get(5), Err(ClaimError::NotFound(5)));
        assert!(!claims.contains(5));
    }

    #[test]
    fn test_lookup_returns_first_duplicate() {
        let mut claims = ClaimCollection::new();
        claims.create_claim(1, None).unwrap();
        claims.create_claim(1, None).unwrap();
        claims.get_mut(1).unwrap().add_reference("A");

        assert_eq!(claims.as_slice()[0].references(), ["A"]);
        assert!(claims.as_slice()[1].references().is_empty());
    }

    #[test]
    fn test_sort_by_number() {
        let mut claims = ClaimCollection::new();
        for n in [3, 1, 2] {
            claims.create_claim(n, None).unwrap();
        }

        claims.sort_by_number();
        assert_eq!(numbers(&claims), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_reference_count_is_stable() {
        let mut claims = ClaimCollection::new();
        for n in [4, 2, 3, 1] {
            claims.create_claim(n, None).unwrap();
        }
        claims.get_mut(4).unwrap().add_reference("A");
        claims.get_mut(3).unwrap().add_reference("A");
        claims.get_mut(3).unwrap().add_reference("B");

        claims.sort_by_reference_count();
        assert_eq!(numbers(&claims), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_display_order_groups_identical_references() {
        let mut claims = ClaimCollection::new();
        for n in 1..=5 {
            claims.create_claim(n, None).unwrap();
        }
        claims.get_mut(1).unwrap().add_reference("A");
        claims.get_mut(2).unwrap().add_reference("B");
        claims.get_mut(3).unwrap().add_reference("A");
        claims.get_mut(4).unwrap().add_reference("A");
        claims.get_mut(4).unwrap().add_reference("B");

        let order: Vec<ClaimNumber> = claims
            .compute_display_order()
            .iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(order, vec![5, 1, 3, 2, 4]);
    }

    #[test]
    fn test_display_order_on_empty_collection() {
        let mut claims = ClaimCollection::new();
        assert!(claims.compute_display_order().is_empty());
    }
}
