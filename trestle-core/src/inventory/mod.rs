//! This module contains the inventory transaction engine.

pub mod bundle;
mod click;
mod click_plan;
mod container;
mod item_stack;
mod layout;
mod simulated;

pub use click::{Click, ClickAction, OUTSIDE_SLOT};
pub use click_plan::{ClickPlan, ClickPlanError, SequencingMode};
pub use container::{ContainerKind, Inventory};
pub use item_stack::ItemStack;
pub use layout::{CraftingSlotLayout, GenericSlotLayout, SlotKind, SlotLayout};
