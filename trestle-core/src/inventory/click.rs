//! The click vocabulary the engine plans in.

use trestle_protocol::packets::game::ClickType;

/// The slot value sent when the player clicks outside the open window.
pub const OUTSIDE_SLOT: i32 = -999;

/// A single inventory click, in the engine's own vocabulary.
///
/// Each variant maps onto exactly one (mode, button) pair on the wire; the
/// split into distinct variants keeps the simulation free of button-number
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// Pick up or merge a whole stack.
    Left,
    /// Pick up half a stack, or place one item.
    Right,
    /// Shift-click: move the stack to the other inventory section.
    LeftShift,
    /// Drop one item from the hovered slot to the ground.
    DropOne,
    /// Drop the whole hovered stack to the ground.
    DropAll,
    /// Left-click outside the window, dropping the whole held stack.
    LeftOutside,
    /// Right-click outside the window, dropping one held item.
    RightOutside,
    /// Swap the hovered slot with hotbar slot `0..=8`.
    SwapToHotbar(u8),
    /// Left-click a bundle in a slot with a stack held: pour from the
    /// cursor into the bundle.
    LeftBundle,
    /// Left-click a slot with a bundle held: pull the slot's stack into the
    /// held bundle.
    LeftBundleFromCursor,
    /// Right-click a bundle: pour one entry out of a held bundle, or take
    /// the selected entry out of the clicked one.
    RightBundle,
}

impl Click {
    /// The click mode this maps to on the wire.
    #[must_use]
    pub const fn click_type(self) -> ClickType {
        match self {
            Self::Left
            | Self::Right
            | Self::LeftOutside
            | Self::RightOutside
            | Self::LeftBundle
            | Self::LeftBundleFromCursor
            | Self::RightBundle => ClickType::Pickup,
            Self::LeftShift => ClickType::QuickMove,
            Self::DropOne | Self::DropAll => ClickType::Throw,
            Self::SwapToHotbar(_) => ClickType::Swap,
        }
    }

    /// The button number this maps to on the wire.
    #[must_use]
    pub const fn button(self) -> i8 {
        match self {
            Self::Left
            | Self::LeftOutside
            | Self::LeftShift
            | Self::DropOne
            | Self::LeftBundle
            | Self::LeftBundleFromCursor => 0,
            Self::Right | Self::RightOutside | Self::DropAll | Self::RightBundle => 1,
            Self::SwapToHotbar(hotbar) => hotbar as i8,
        }
    }

    /// Whether the click targets the ground rather than a slot.
    #[must_use]
    pub const fn is_outside(self) -> bool {
        matches!(self, Self::LeftOutside | Self::RightOutside)
    }

    /// Whether the click throws from the hovered slot (these clicks carry no
    /// item field under legacy sequencing).
    #[must_use]
    pub const fn is_drop(self) -> bool {
        matches!(self, Self::DropOne | Self::DropAll)
    }
}

/// One planned click against a concrete slot.
#[derive(Debug, Clone, Copy)]
pub struct ClickAction {
    /// The click performed.
    pub click: Click,
    /// The slot it targets, or [`OUTSIDE_SLOT`].
    pub slot: i32,
    /// Whether the action was appended past a rejected one.
    pub force: bool,
}

#[cfg(test)]
mod test {
    use super::Click;
    use trestle_protocol::packets::game::ClickType;

    #[test]
    fn wire_mapping() {
        assert_eq!(Click::Left.click_type(), ClickType::Pickup);
        assert_eq!(Click::Left.button(), 0);
        assert_eq!(Click::Right.button(), 1);
        assert_eq!(Click::LeftShift.click_type(), ClickType::QuickMove);
        assert_eq!(Click::DropOne.click_type(), ClickType::Throw);
        assert_eq!(Click::DropAll.button(), 1);
        assert_eq!(Click::SwapToHotbar(4).click_type(), ClickType::Swap);
        assert_eq!(Click::SwapToHotbar(4).button(), 4);
    }

    #[test]
    fn outside_clicks_are_flagged() {
        assert!(Click::LeftOutside.is_outside());
        assert!(Click::RightOutside.is_outside());
        assert!(!Click::Left.is_outside());
    }
}
