//! Cart ledger.

use crate::ids::VariantId;
use serde::{Deserialize, Serialize};

/// An ordered log of variant ids, one entry per unit in the cart.
///
/// Ids are not checked against the catalog. Neither operation can fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLedger {
    entries: Vec<VariantId>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a variant.
    pub fn add_to_cart(&mut self, variant_id: VariantId) {
        self.entries.push(variant_id);
    }

    /// Remove one unit of a variant.
    ///
    /// Only the first matching entry is dropped; the rest keep their order.
    /// Removing an id that is not in the cart leaves it unchanged.
    pub fn remove_from_cart(&mut self, variant_id: VariantId) {
        let mut removed = false;
        self.entries.retain(|&id| {
            if !removed && id == variant_id {
                removed = true;
                return false;
            }
            true
        });
    }

    /// Number of units in the cart.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of units of one variant.
    pub fn count_of(&self, variant_id: VariantId) -> usize {
        self.entries.iter().filter(|&&id| id == variant_id).count()
    }

    /// Whether the cart holds at least one unit of a variant.
    pub fn contains(&self, variant_id: VariantId) -> bool {
        self.entries.contains(&variant_id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GREEN: VariantId = VariantId::new(2234);
    const BLUE: VariantId = VariantId::new(2235);

    #[test]
    fn test_add_to_cart() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(GREEN);
        cart.add_to_cart(GREEN);
        cart.add_to_cart(BLUE);

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.count_of(GREEN), 2);
        assert_eq!(cart.entries(), &[GREEN, GREEN, BLUE]);
    }

    #[test]
    fn test_remove_drops_single_unit() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(GREEN);
        cart.add_to_cart(GREEN);

        cart.remove_from_cart(GREEN);
        assert_eq!(cart.entries(), &[GREEN]);
    }

    #[test]
    fn test_remove_first_match_keeps_order() {
        let mut cart = CartLedger::new();
        for id in [BLUE, GREEN, BLUE, GREEN] {
            cart.add_to_cart(id);
        }

        cart.remove_from_cart(GREEN);
        assert_eq!(cart.entries(), &[BLUE, BLUE, GREEN]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(BLUE);

        cart.remove_from_cart(GREEN);
        assert_eq!(cart.entries(), &[BLUE]);
        assert!(!cart.contains(GREEN));
    }

    #[test]
    fn test_remove_from_empty_cart() {
        let mut cart = CartLedger::new();
        cart.remove_from_cart(GREEN);
        assert!(cart.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Remove(u64),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u64..4).prop_map(Op::Add), (0u64..4).prop_map(Op::Remove)]
    }

    proptest! {
        /// Length equals adds minus removals of ids present at call time.
        #[test]
        fn prop_count_tracks_successful_removals(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut cart = CartLedger::new();
            let mut adds = 0usize;
            let mut removals = 0usize;

            for op in ops {
                match op {
                    Op::Add(id) => {
                        cart.add_to_cart(VariantId::new(id));
                        adds += 1;
                    }
                    Op::Remove(id) => {
                        let id = VariantId::new(id);
                        let before = cart.count_of(id);
                        if cart.contains(id) {
                            removals += 1;
                        }
                        cart.remove_from_cart(id);
                        prop_assert_eq!(cart.count_of(id), before.saturating_sub(1));
                    }
                }
            }

            prop_assert_eq!(cart.count(), adds - removals);
        }
    }
}
