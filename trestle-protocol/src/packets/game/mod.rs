//! Play-phase packets emitted by the transaction engine.

mod s_container_click;
mod s_select_bundle_item;
mod s_set_creative_mode_slot;
mod slot_data;

pub use s_container_click::{ClickType, SContainerClick, SlotChange};
pub use s_select_bundle_item::SSelectBundleItem;
pub use s_set_creative_mode_slot::SSetCreativeModeSlot;
pub use slot_data::SlotData;
