//! Bundle weight and capacity rules.
//!
//! A bundle holds one unit of "weight": each item occupies the reciprocal of
//! its stack size limit and a nested bundle a flat 1/16 on top of its own
//! contents' weight. The math is exact fractions; any rounding here would
//! desync the speculative state from the back-end's.

use num_rational::Ratio;
use num_traits::{One, Zero};

use super::item_stack::ItemStack;

/// The flat surcharge a bundle weighs when nested inside another bundle.
pub const NESTED_BUNDLE_WEIGHT: Ratio<i32> = Ratio::new_raw(1, 16);

/// Computes the total weight of a bundle's contents.
#[must_use]
pub fn bundle_weight(contents: &[ItemStack]) -> Ratio<i32> {
    contents.iter().fold(Ratio::zero(), |total, entry| {
        total + unit_weight(entry) * Ratio::from_integer(entry.count())
    })
}

/// Computes the weight of a single unit of the given stack.
fn unit_weight(stack: &ItemStack) -> Ratio<i32> {
    if let Some(contents) = stack.bundle_contents() {
        NESTED_BUNDLE_WEIGHT + bundle_weight(contents)
    } else {
        Ratio::new(1, stack.max_stack_size())
    }
}

/// Returns how many units of `candidate` still fit into a bundle already
/// carrying `weight`. Never negative.
#[must_use]
pub fn capacity_for(weight: Ratio<i32>, candidate: &ItemStack) -> i32 {
    let free = Ratio::one() - weight;
    (free / unit_weight(candidate)).to_integer().max(0)
}

#[cfg(test)]
mod test {
    use num_rational::Ratio;

    use super::{bundle_weight, capacity_for};
    use crate::inventory::ItemStack;

    #[test]
    fn weight_scales_with_count_and_stack_size() {
        let contents = [ItemStack::new(8, 32)];
        assert_eq!(bundle_weight(&contents), Ratio::new(1, 2));

        let contents = [ItemStack::new(8, 16), ItemStack::new(9, 8).with_max_stack_size(16)];
        assert_eq!(bundle_weight(&contents), Ratio::new(3, 4));
    }

    #[test]
    fn nested_bundle_adds_a_sixteenth() {
        let inner = ItemStack::bundle(100, vec![ItemStack::new(8, 16)]);
        assert_eq!(bundle_weight(&[inner]), Ratio::new(5, 16));
    }

    #[test]
    fn capacity_is_the_free_weight_in_candidate_units() {
        let candidate = ItemStack::new(8, 64);
        assert_eq!(capacity_for(Ratio::new(3, 4), &candidate), 16);
        assert_eq!(capacity_for(Ratio::new(0, 1), &candidate), 64);
    }

    #[test]
    fn capacity_clamps_at_zero_when_overweight() {
        let candidate = ItemStack::new(8, 64);
        assert_eq!(capacity_for(Ratio::new(17, 16), &candidate), 0);
    }

    #[test]
    fn unstackable_item_fills_a_bundle_alone() {
        let candidate = ItemStack::new(200, 1).with_max_stack_size(1);
        assert_eq!(capacity_for(Ratio::new(0, 1), &candidate), 1);
        assert_eq!(capacity_for(Ratio::new(1, 64), &candidate), 0);
    }
}
