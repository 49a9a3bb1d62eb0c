//! Reference-order grouping
//!
//! Claims whose reference sequences are equal element for element, in the
//! same order, form a group. Groups are numbered from 1 in the order their
//! sequence first appears in the collection. `[A, B]` and `[B, A]` are
//! different groups.

use crate::ClaimCollection;
use tracing::debug;

impl ClaimCollection {
    /// Assign each claim the group order of its reference sequence
    ///
    /// Each claim is compared against every claim before it in the current
    /// sequence, so the pass is quadratic in the number of claims. Returns
    /// the number of distinct groups found.
    ///
    /// # Examples
    ///
    /// ```
    /// use claimorder_domain::ClaimCollection;
    ///
    /// let mut claims = ClaimCollection::new();
    /// for n in 1..=3 {
    ///     claims.create_claim(n, None).unwrap();
    /// }
    /// claims.get_mut(2).unwrap().add_reference("A");
    ///
    /// assert_eq!(claims.assign_group_orders(), 2);
    /// let groups: Vec<u32> = claims.iter().map(|c| c.group_order()).collect();
    /// assert_eq!(groups, vec![1, 2, 1]);
    /// ```
    pub fn assign_group_orders(&mut self) -> u32 {
        let claims = self.claims_mut();
        let mut groups = 0;

        for i in 0..claims.len() {
            let earlier = (0..i).find(|&j| claims[j].references() == claims[i].references());
            let group_order = match earlier {
                Some(j) => claims[j].group_order(),
                None => {
                    groups += 1;
                    groups
                }
            };
            claims[i].set_group_order(group_order);
        }

        debug!(claims = claims.len(), groups, "Assigned group orders");
        groups
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClaimCollection, ClaimNumber};

    fn collection(refs: &[(ClaimNumber, &[&str])]) -> ClaimCollection {
        let mut claims = ClaimCollection::new();
        for (number, references) in refs {
            claims.create_claim(*number, None).unwrap();
            for r in *references {
                claims.get_mut(*number).unwrap().add_reference(r);
            }
        }
        claims
    }

    fn group_of(claims: &ClaimCollection, number: ClaimNumber) -> u32 {
        claims.get(number).unwrap().group_order()
    }

    #[test]
    fn test_grouping_is_order_sensitive() {
        let mut claims = collection(&[
            (1, &["A"]),
            (2, &["A", "B"]),
            (3, &["A"]),
            (4, &["B", "A"]),
        ]);

        assert_eq!(claims.assign_group_orders(), 3);
        assert_eq!(group_of(&claims, 1), group_of(&claims, 3));
        assert_ne!(group_of(&claims, 1), group_of(&claims, 2));
        assert_ne!(group_of(&claims, 2), group_of(&claims, 4));
        assert_ne!(group_of(&claims, 1), group_of(&claims, 4));
    }

    #[test]
    fn test_groups_numbered_by_first_appearance() {
        let mut claims = collection(&[(5, &["B"]), (1, &[]), (2, &["B"]), (3, &["C"]), (4, &[])]);
        claims.assign_group_orders();

        let groups: Vec<u32> = claims.iter().map(|c| c.group_order()).collect();
        assert_eq!(groups, vec![1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_first_claim_is_group_one() {
        let mut claims = collection(&[(1, &[])]);
        assert_eq!(claims.assign_group_orders(), 1);
        assert_eq!(group_of(&claims, 1), 1);
    }

    #[test]
    fn test_grouping_empty_collection() {
        let mut claims = ClaimCollection::new();
        assert_eq!(claims.assign_group_orders(), 0);
    }

    #[test]
    fn test_regrouping_follows_current_sequence() {
        let mut claims = collection(&[(2, &["A"]), (1, &[])]);
        claims.assign_group_orders();
        assert_eq!(group_of(&claims, 2), 1);

        claims.sort_by_number();
        claims.assign_group_orders();
        assert_eq!(group_of(&claims, 1), 1);
        assert_eq!(group_of(&claims, 2), 2);
    }
}
