//! The item stack value type used by the simulation.

use trestle_protocol::packets::game::SlotData;

/// A stack of items: identity, count and optional bundle contents.
///
/// Treated as a value type with explicit copy semantics. The engine never
/// shares one instance between the authoritative inventory and the
/// speculative overlay; every crossing is a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    /// The back-end item identity; 0 means air.
    item: i32,
    count: i32,
    max_stack_size: i32,
    bundle: Option<Vec<ItemStack>>,
}

impl ItemStack {
    /// Creates the empty stack.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: 0,
            count: 0,
            max_stack_size: 64,
            bundle: None,
        }
    }

    /// Creates a stack of the given item with the default stack size limit.
    #[must_use]
    pub const fn new(item: i32, count: i32) -> Self {
        Self {
            item,
            count,
            max_stack_size: 64,
            bundle: None,
        }
    }

    /// Overrides the stack size limit (this drives bundle weight math).
    #[must_use]
    pub fn with_max_stack_size(mut self, max_stack_size: i32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    /// Creates a bundle item holding the given contents.
    ///
    /// Bundles never stack with each other. Index 0 of the contents is the
    /// most recently inserted entry.
    #[must_use]
    pub fn bundle(item: i32, contents: Vec<ItemStack>) -> Self {
        Self {
            item,
            count: 1,
            max_stack_size: 1,
            bundle: Some(contents),
        }
    }

    /// Returns the item identity.
    #[must_use]
    pub const fn item(&self) -> i32 {
        self.item
    }

    /// Returns the stack count.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// Returns the stack size limit for this item.
    #[must_use]
    pub const fn max_stack_size(&self) -> i32 {
        self.max_stack_size
    }

    /// Returns whether this stack is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item == 0 || self.count <= 0
    }

    /// Adds to the stack count.
    pub fn grow(&mut self, amount: i32) {
        self.count += amount;
    }

    /// Removes from the stack count.
    pub fn shrink(&mut self, amount: i32) {
        self.count -= amount;
    }

    /// Sets the stack count.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    /// Returns an independent copy with a different count.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> Self {
        let mut copy = self.clone();
        copy.count = count;
        copy
    }

    /// Returns whether the two stacks could share a slot.
    ///
    /// False whenever either side is empty; otherwise the item identity and
    /// auxiliary data must match exactly. Counts are irrelevant.
    #[must_use]
    pub fn can_stack(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.item == other.item && self.bundle == other.bundle
    }

    /// Returns whether this stack is a bundle.
    #[must_use]
    pub const fn is_bundle(&self) -> bool {
        self.bundle.is_some()
    }

    /// The bundle's contents, most recently inserted first.
    #[must_use]
    pub fn bundle_contents(&self) -> Option<&[ItemStack]> {
        self.bundle.as_deref()
    }

    /// Mutable bundle contents for in-place insertion and removal.
    pub fn bundle_contents_mut(&mut self) -> Option<&mut Vec<ItemStack>> {
        self.bundle.as_mut()
    }
}

impl From<&ItemStack> for SlotData {
    fn from(stack: &ItemStack) -> Self {
        if stack.is_empty() {
            Self::empty()
        } else {
            Self::new(stack.item, stack.count)
        }
    }
}

#[cfg(test)]
mod test {
    use super::ItemStack;
    use trestle_protocol::packets::game::SlotData;

    #[test]
    fn empty_never_stacks() {
        let dirt = ItemStack::new(8, 12);
        assert!(!ItemStack::empty().can_stack(&dirt));
        assert!(!dirt.can_stack(&ItemStack::empty()));
        assert!(!ItemStack::empty().can_stack(&ItemStack::empty()));
    }

    #[test]
    fn stacking_ignores_count_but_not_identity() {
        let a = ItemStack::new(8, 1);
        let b = ItemStack::new(8, 60);
        let c = ItemStack::new(9, 1);
        assert!(a.can_stack(&b));
        assert!(!a.can_stack(&c));
    }

    #[test]
    fn bundles_with_different_contents_do_not_stack() {
        let a = ItemStack::bundle(100, vec![ItemStack::new(8, 3)]);
        let b = ItemStack::bundle(100, vec![ItemStack::new(9, 3)]);
        assert!(!a.can_stack(&b));
    }

    #[test]
    fn drained_stack_reads_as_empty() {
        let mut stack = ItemStack::new(8, 1);
        stack.shrink(1);
        assert!(stack.is_empty());
        assert_eq!(SlotData::from(&stack), SlotData::empty());
    }

    #[test]
    fn snapshot_carries_identity_and_count() {
        let stack = ItemStack::new(8, 17);
        assert_eq!(SlotData::from(&stack), SlotData::new(8, 17));
    }
}
