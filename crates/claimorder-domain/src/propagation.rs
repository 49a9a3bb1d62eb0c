//! Dependency propagation - cascading reference edits down a claim hierarchy
//!
//! An edit on a claim applies to the claim itself and to every claim that
//! depends on it, directly or transitively. The cascade is depth-first and
//! follows dependents in the order they were registered.
//!
//! Each cascade is planned before anything is mutated. The plan walks the
//! hierarchy read-only, resolving every dependent number and tracking the
//! current ancestor path, so a missing dependent or a cycle is reported as an
//! error and leaves every claim unchanged.
//!
//! A claim reachable along several paths (a dependent registered twice, or
//! shared through duplicate claim numbers) is expanded only once. The plan
//! and the visited count therefore cover distinct claims.

use crate::{Claim, ClaimCollection, ClaimError, ClaimNumber};
use tracing::debug;

impl ClaimCollection {
    /// Add a reference to a claim and to all of its dependents
    ///
    /// Returns the number of distinct claims the cascade visited. Claims that
    /// already carry the reference are visited but left unchanged.
    ///
    /// # Errors
    /// - [`ClaimError::NotFound`] if `number` or any dependent number does not
    ///   resolve
    /// - [`ClaimError::CyclicDependency`] if the hierarchy below `number`
    ///   loops back on itself
    ///
    /// # Examples
    ///
    /// ```
    /// use claimorder_domain::ClaimCollection;
    ///
    /// let mut claims = ClaimCollection::new();
    /// claims.create_claim(1, None).unwrap();
    /// claims.create_claim(2, Some(1)).unwrap();
    ///
    /// assert_eq!(claims.propagate_add_reference(1, "Smith").unwrap(), 2);
    /// assert_eq!(claims.get(2).unwrap().references(), ["Smith"]);
    /// ```
    pub fn propagate_add_reference(
        &mut self,
        number: ClaimNumber,
        reference: &str,
    ) -> Result<usize, ClaimError> {
        self.cascade(number, |claim| claim.add_reference(reference))
    }

    /// Remove a reference from a claim and from all of its dependents
    ///
    /// Returns the number of distinct claims the cascade visited. Claims
    /// without the reference are visited but left unchanged.
    ///
    /// # Errors
    /// Same conditions as [`propagate_add_reference`](Self::propagate_add_reference).
    pub fn propagate_delete_reference(
        &mut self,
        number: ClaimNumber,
        reference: &str,
    ) -> Result<usize, ClaimError> {
        self.cascade(number, |claim| claim.remove_reference(reference))
    }

    /// Numbers of `number` and its transitive dependents, in cascade order
    ///
    /// Each claim appears once, at its first depth-first position.
    ///
    /// # Errors
    /// See [`propagate_add_reference`](Self::propagate_add_reference).
    pub fn cascade_order(&self, number: ClaimNumber) -> Result<Vec<ClaimNumber>, ClaimError> {
        let plan = self.plan_cascade(number)?;
        Ok(plan
            .into_iter()
            .map(|index| self.as_slice()[index].number)
            .collect())
    }

    fn cascade<F>(&mut self, number: ClaimNumber, mut edit: F) -> Result<usize, ClaimError>
    where
        F: FnMut(&mut Claim) -> bool,
    {
        let plan = self.plan_cascade(number)?;

        let claims = self.claims_mut();
        let mut changed = 0;
        for &index in &plan {
            if edit(&mut claims[index]) {
                changed += 1;
            }
        }

        debug!(
            claim = number,
            visited = plan.len(),
            changed,
            "Propagated reference edit"
        );
        Ok(plan.len())
    }

    fn plan_cascade(&self, number: ClaimNumber) -> Result<Vec<usize>, ClaimError> {
        let root = self.index_of(number).ok_or(ClaimError::NotFound(number))?;

        let mut plan = Vec::new();
        let mut planned = vec![false; self.len()];
        // Ancestor path of the claim currently being expanded, root first.
        let mut path: Vec<ClaimNumber> = Vec::new();
        // (index, depth) pairs still to visit; depth is the length of `path`
        // above the entry.
        let mut stack = vec![(root, 0usize)];

        while let Some((index, depth)) = stack.pop() {
            let claim = &self.as_slice()[index];
            path.truncate(depth);
            if path.contains(&claim.number) {
                return Err(ClaimError::CyclicDependency(claim.number));
            }
            // Off the path and planned means its whole subtree is planned too.
            if planned[index] {
                continue;
            }
            planned[index] = true;
            path.push(claim.number);
            plan.push(index);

            // Reverse so the first registered dependent is visited first.
            for &child in claim.dependents().iter().rev() {
                let child_index = self
                    .index_of(child)
                    .ok_or(ClaimError::NotFound(child))?;
                stack.push((child_index, depth + 1));
            }
        }

        Ok(plan)
    }
}
