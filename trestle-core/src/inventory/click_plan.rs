//! Planning and execution of container transactions.
//!
//! A [`ClickPlan`] accumulates clicks, simulating each against a speculative
//! overlay as it is appended so that later clicks can read the as-if-executed
//! state. Execution replays the whole sequence from a clean overlay, emits
//! one click packet per action, and only then commits the final overlay state
//! into the authoritative inventory. The speculative end state must match
//! what the back-end computes from the same packets, bit for bit; any
//! disagreement costs a full window resynchronization later.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use thiserror::Error;

use trestle_protocol::packets::game::{
    SContainerClick, SSelectBundleItem, SSetCreativeModeSlot, SlotChange, SlotData,
};

use crate::session::PacketSink;

use super::bundle;
use super::click::{Click, ClickAction, OUTSIDE_SLOT};
use super::container::{ContainerKind, Inventory};
use super::item_stack::ItemStack;
use super::layout::{SlotKind, SlotLayout};
use super::simulated::SimulatedInventory;

/// Errors raised by [`ClickPlan`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClickPlanError {
    /// The plan has begun executing; it accepts no further actions and
    /// cannot be executed again.
    #[error("click plan is frozen; it has already been executed")]
    PlanFrozen,
}

/// How the targeted back-end expects click packets to be sequenced.
///
/// Determined per connection from prior server responses, so the value used
/// during execution may differ from the one in effect while the plan was
/// being built. It is threaded explicitly so both simulation passes stay
/// pure functions of (state, actions, mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencingMode {
    /// The back-end validates against the post-action cursor and the state
    /// id as of each click.
    Modern,
    /// The back-end expects the pre-action slot snapshot and advances its
    /// state id out of band on crafting-grid mutations, which the plan has
    /// to mirror locally.
    Legacy,
}

/// An ordered sequence of clicks against one open container.
///
/// The plan holds exclusive access to the authoritative [`Inventory`] for
/// its whole lifetime; planning, execution and commit are synchronous and
/// never interleave with another plan on the same inventory. A plan executes
/// at most once and is discarded afterwards.
pub struct ClickPlan<'a> {
    actions: SmallVec<[ClickAction; 4]>,
    overlay: SimulatedInventory,
    /// Change sink; active only while an execution pass wants per-action
    /// (or, for creative mode, per-plan) slot snapshots.
    changed_items: Option<FxHashMap<i32, SlotData>>,
    desired_bundle_slot: usize,
    executing: bool,
    inventory: &'a mut Inventory,
    layout: &'a dyn SlotLayout,
    sink: &'a mut dyn PacketSink,
}

impl<'a> ClickPlan<'a> {
    /// Creates an empty plan bound to one inventory, slot layout and
    /// outbound sink.
    pub fn new(
        inventory: &'a mut Inventory,
        layout: &'a dyn SlotLayout,
        sink: &'a mut dyn PacketSink,
    ) -> Self {
        Self {
            actions: SmallVec::new(),
            overlay: SimulatedInventory::new(),
            changed_items: None,
            desired_bundle_slot: 0,
            executing: false,
            inventory,
            layout,
            sink,
        }
    }

    /// Selects which bundle content entry a [`Click::RightBundle`] takes.
    pub fn set_desired_bundle_slot(&mut self, index: usize) {
        self.desired_bundle_slot = index;
    }

    /// Appends a click and simulates it against the speculative state.
    ///
    /// # Errors
    /// Returns [`ClickPlanError::PlanFrozen`] if execution has begun.
    pub fn add(&mut self, click: Click, slot: i32) -> Result<(), ClickPlanError> {
        self.add_force(click, slot, false)
    }

    /// Appends a click with an explicit force flag.
    ///
    /// The flag is carried on the action but not consumed anywhere yet.
    ///
    /// # Errors
    /// Returns [`ClickPlanError::PlanFrozen`] if execution has begun.
    pub fn add_force(&mut self, click: Click, slot: i32, force: bool) -> Result<(), ClickPlanError> {
        if self.executing {
            return Err(ClickPlanError::PlanFrozen);
        }
        let slot = if click.is_outside() { OUTSIDE_SLOT } else { slot };
        let action = ClickAction { click, slot, force };
        self.actions.push(action);
        self.simulate_action(action);
        Ok(())
    }

    /// Reads the speculative item in `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is [`OUTSIDE_SLOT`] or out of range.
    #[must_use]
    pub fn item(&self, slot: i32) -> &ItemStack {
        self.overlay.item(self.inventory, slot)
    }

    /// Reads the speculative held stack.
    #[must_use]
    pub fn cursor(&self) -> &ItemStack {
        self.overlay.cursor(self.inventory)
    }

    /// Whether the speculative item in `slot` is empty.
    #[must_use]
    pub fn is_empty(&self, slot: i32) -> bool {
        self.item(slot).is_empty()
    }

    /// Whether `candidate` could share `slot` with its speculative contents.
    #[must_use]
    pub fn can_stack(&self, slot: i32, candidate: &ItemStack) -> bool {
        self.item(slot).can_stack(candidate)
    }

    /// The slots this plan touches: every targeted slot except output slots
    /// and the outside sentinel, plus the hotbar destination of any swap.
    #[must_use]
    pub fn affected_slots(&self) -> FxHashSet<i32> {
        let mut slots = FxHashSet::default();
        for action in &self.actions {
            if action.slot != OUTSIDE_SLOT && self.layout.slot_kind(action.slot) != SlotKind::Output
            {
                slots.insert(action.slot);
                if let Click::SwapToHotbar(hotbar) = action.click {
                    slots.insert(self.inventory.offset_for_hotbar(hotbar));
                }
            }
        }
        slots
    }

    /// Replays the plan from a clean overlay, emits one click packet per
    /// action, and commits the final state.
    ///
    /// `refresh` requests a full window refresh from the back-end once the
    /// plan is done; it is also latched on automatically when any action
    /// touches a slot the back-end may disagree about.
    ///
    /// # Errors
    /// Returns [`ClickPlanError::PlanFrozen`] on a second execution.
    pub fn execute(&mut self, mut refresh: bool, mode: SequencingMode) -> Result<(), ClickPlanError> {
        if self.executing {
            return Err(ClickPlanError::PlanFrozen);
        }
        self.executing = true;
        self.overlay.reset();

        let count = self.actions.len();
        for index in 0..count {
            let action = self.actions[index];
            let last = index + 1 == count;

            if action.slot != OUTSIDE_SLOT
                && self.layout.slot_kind(action.slot) != SlotKind::Normal
            {
                refresh = true;
            }

            self.changed_items = Some(FxHashMap::default());

            let (state_id, carried_item) = match mode {
                SequencingMode::Modern => {
                    let state_id = self.inventory.state_id();
                    self.simulate_action(action);
                    // The packet's item field is the post-action cursor.
                    (state_id, SlotData::from(self.cursor()))
                }
                SequencingMode::Legacy => {
                    let snapshot = if action.click.is_drop() || action.slot == OUTSIDE_SLOT {
                        SlotData::empty()
                    } else {
                        SlotData::from(self.item(action.slot))
                    };
                    let state_id = self.state_id_hack(action);
                    self.simulate_action(action);
                    let carried_item = if last && refresh {
                        SlotData::refresh()
                    } else {
                        snapshot
                    };
                    (state_id, carried_item)
                }
            };

            let changed_slots = self.take_changed_slots();
            self.sink.send_container_click(SContainerClick {
                container_id: self.inventory.container_id(),
                state_id,
                slot: action.slot as i16,
                button: action.click.button(),
                click_type: action.click.click_type(),
                changed_slots,
                carried_item,
            });
        }

        self.commit();
        Ok(())
    }

    /// Replays the plan and emits one creative set-slot packet per changed
    /// slot instead of click packets, for back-ends with no transaction
    /// concept in the privileged mode.
    ///
    /// # Errors
    /// Returns [`ClickPlanError::PlanFrozen`] on a second execution.
    pub fn execute_for_creative_mode(&mut self) -> Result<(), ClickPlanError> {
        if self.executing {
            return Err(ClickPlanError::PlanFrozen);
        }
        self.executing = true;
        self.overlay.reset();
        // One shared sink for the whole plan; only final snapshots go out.
        self.changed_items = Some(FxHashMap::default());

        for index in 0..self.actions.len() {
            let action = self.actions[index];
            self.simulate_action(action);
        }

        for change in self.take_changed_slots() {
            self.sink.send_set_creative_mode_slot(SSetCreativeModeSlot {
                slot: change.slot,
                item: change.data,
            });
        }

        self.commit();
        Ok(())
    }

    /// Simulates one action against the overlay, exactly as the back-end
    /// will apply it.
    fn simulate_action(&mut self, action: ClickAction) {
        match action.click {
            Click::LeftOutside => {
                self.set_cursor(ItemStack::empty());
                return;
            }
            Click::RightOutside => {
                if !self.cursor().is_empty() {
                    let mut cursor = self.cursor().clone();
                    cursor.shrink(1);
                    self.set_cursor(cursor);
                }
                return;
            }
            _ => {}
        }

        if self.layout.slot_kind(action.slot) == SlotKind::Output {
            self.simulate_output_click(action);
            return;
        }

        match action.click {
            Click::Left => {
                let clicked = self.item(action.slot).clone();
                let cursor = self.cursor().clone();
                if cursor.can_stack(&clicked) {
                    let mut merged = clicked;
                    merged.grow(cursor.count());
                    self.set_cursor(ItemStack::empty());
                    self.set_item(action.slot, merged);
                } else {
                    self.set_cursor(clicked);
                    self.set_item(action.slot, cursor);
                }
            }
            Click::Right => {
                let clicked = self.item(action.slot).clone();
                let cursor = self.cursor().clone();
                if cursor.is_empty() && !clicked.is_empty() {
                    // The larger half ends up on the cursor.
                    let half = clicked.count() / 2;
                    self.set_cursor(clicked.copy_with_count(clicked.count() - half));
                    self.set_item(action.slot, clicked.copy_with_count(half));
                } else if !cursor.is_empty() && clicked.is_empty() {
                    let mut cursor = cursor;
                    let placed = cursor.copy_with_count(1);
                    cursor.shrink(1);
                    self.set_cursor(cursor);
                    self.set_item(action.slot, placed);
                } else if cursor.can_stack(&clicked) {
                    let mut cursor = cursor;
                    let mut clicked = clicked;
                    cursor.shrink(1);
                    clicked.grow(1);
                    self.set_cursor(cursor);
                    self.set_item(action.slot, clicked);
                } else if !cursor.is_empty() && !clicked.is_empty() {
                    // Distinct items swap wholesale, same as a left click.
                    self.set_cursor(clicked);
                    self.set_item(action.slot, cursor);
                }
            }
            Click::LeftBundle => self.pour_into_bundle(action.slot),
            Click::LeftBundleFromCursor => self.pull_into_held_bundle(action.slot),
            Click::RightBundle => self.take_one_from_bundle(action.slot),
            Click::SwapToHotbar(hotbar) => {
                let hotbar_slot = self.inventory.offset_for_hotbar(hotbar);
                let clicked = self.item(action.slot).clone();
                let swapped = self.item(hotbar_slot).clone();
                self.set_item(action.slot, swapped);
                self.set_item(hotbar_slot, clicked);
            }
            Click::DropOne => {
                if !self.is_empty(action.slot) {
                    let mut clicked = self.item(action.slot).clone();
                    clicked.shrink(1);
                    self.set_item(action.slot, clicked);
                }
            }
            Click::DropAll => self.set_item(action.slot, ItemStack::empty()),
            // The broader item-moving behavior of a shift click on a normal
            // slot is resolved by the back-end; nothing to speculate here.
            Click::LeftShift => {}
            Click::LeftOutside | Click::RightOutside => {}
        }
    }

    /// Takes from a server-computed result slot and consumes ingredients.
    fn simulate_output_click(&mut self, action: ClickAction) {
        match action.click {
            Click::Left | Click::Right => {
                let clicked = self.item(action.slot).clone();
                let cursor = self.cursor().clone();
                if cursor.is_empty() {
                    self.set_cursor(clicked);
                } else if cursor.can_stack(&clicked) {
                    let mut cursor = cursor;
                    cursor.grow(clicked.count());
                    self.set_cursor(cursor);
                }
                self.reduce_crafting_grid(false);
                self.set_item(action.slot, ItemStack::empty());
            }
            Click::LeftShift => self.reduce_crafting_grid(true),
            _ => {}
        }
    }

    /// Pours as much of the cursor as fits into the bundle in `slot`.
    fn pour_into_bundle(&mut self, slot: i32) {
        let cursor = self.cursor().clone();
        if cursor.is_empty() {
            return;
        }
        let mut clicked = self.item(slot).clone();
        let Some(contents) = clicked.bundle_contents_mut() else {
            return;
        };
        let moved = bundle::capacity_for(bundle::bundle_weight(contents), &cursor)
            .min(cursor.count());
        if moved <= 0 {
            return;
        }
        contents.insert(0, cursor.copy_with_count(moved));
        let mut cursor = cursor;
        cursor.shrink(moved);
        self.set_cursor(cursor);
        self.set_item(slot, clicked);
    }

    /// Pulls as much of `slot` as fits into the bundle held on the cursor.
    fn pull_into_held_bundle(&mut self, slot: i32) {
        let clicked = self.item(slot).clone();
        if clicked.is_empty() {
            return;
        }
        let mut cursor = self.cursor().clone();
        let Some(contents) = cursor.bundle_contents_mut() else {
            return;
        };
        let moved = bundle::capacity_for(bundle::bundle_weight(contents), &clicked)
            .min(clicked.count());
        if moved <= 0 {
            return;
        }
        contents.insert(0, clicked.copy_with_count(moved));
        let mut clicked = clicked;
        clicked.shrink(moved);
        self.set_item(slot, clicked);
        self.set_cursor(cursor);
    }

    /// Right click involving a bundle: pour one entry out of a held bundle,
    /// or take the desired entry out of the bundle in `slot`.
    fn take_one_from_bundle(&mut self, slot: i32) {
        let cursor = self.cursor().clone();
        if cursor.is_bundle() && !cursor.is_empty() {
            let mut cursor = cursor;
            let Some(contents) = cursor.bundle_contents_mut() else {
                return;
            };
            if contents.is_empty() {
                return;
            }
            let poured = contents.remove(0);
            self.set_item(slot, poured);
            self.set_cursor(cursor);
            return;
        }

        let mut clicked = self.item(slot).clone();
        let index = self.desired_bundle_slot;
        let Some(contents) = clicked.bundle_contents_mut() else {
            return;
        };
        if index >= contents.len() {
            return;
        }
        let taken = contents.remove(index);
        if self.executing {
            // The back-end needs to know which sub-slot was chosen before
            // the click referencing it arrives.
            self.sink.send_select_bundle_item(SSelectBundleItem {
                slot,
                selected_item_index: index as i32,
            });
        }
        self.set_cursor(taken);
        self.set_item(slot, clicked);
    }

    /// Consumes ingredients from the crafting grid after a craft is taken.
    ///
    /// `make_all` consumes as many crafts as the scarcest ingredient allows
    /// instead of a single one.
    fn reduce_crafting_grid(&mut self, make_all: bool) {
        let grid_size = self.layout.grid_size();
        if grid_size == -1 {
            return;
        }

        let crafted = if make_all {
            let mut crafted = 0;
            for slot in 1..=grid_size {
                let item = self.item(slot);
                if !item.is_empty() {
                    crafted = if crafted == 0 {
                        item.count()
                    } else {
                        crafted.min(item.count())
                    };
                }
            }
            crafted
        } else {
            1
        };

        for slot in 1..=grid_size {
            if !self.is_empty(slot) {
                let mut item = self.item(slot).clone();
                item.shrink(crafted);
                self.set_item(slot, item);
            }
        }
    }

    /// Resolves the state id to send for this action under legacy
    /// sequencing, mirroring the increments the back-end applies internally
    /// on crafting-grid mutations.
    fn state_id_hack(&mut self, action: ClickAction) -> i32 {
        let state_id = if self.inventory.next_state_id() != -1 {
            self.inventory.next_state_id()
        } else {
            self.inventory.state_id()
        };

        if self.inventory.container_kind() == ContainerKind::Crafting
            && self.layout.is_crafting_grid(action.slot)
        {
            let increments = match action.click {
                Click::Left => {
                    let clicked = self.item(action.slot);
                    // Replacing a non-stackable occupant raises an extra
                    // internal removal event on the back-end.
                    if !clicked.is_empty() && !self.cursor().can_stack(clicked) {
                        2
                    } else {
                        1
                    }
                }
                Click::Right | Click::SwapToHotbar(_) => 1,
                other => {
                    log::debug!(
                        "no state id rule for {other:?} inside the crafting grid; assuming one increment"
                    );
                    1
                }
            };
            self.inventory.increment_state_id(increments);
        }

        state_id
    }

    /// Writes a speculative slot value, recording it in the active change
    /// sink.
    fn set_item(&mut self, slot: i32, item: ItemStack) {
        if let Some(changed) = self.changed_items.as_mut() {
            changed.insert(slot, SlotData::from(&item));
        }
        self.overlay.set_item(slot, item);
    }

    /// Writes the speculative cursor. Cursor contents are never reported in
    /// the change sink; the protocol has no per-slot field for them.
    fn set_cursor(&mut self, item: ItemStack) {
        self.overlay.set_cursor(item);
    }

    /// Drains the active change sink into a slot-ordered change list.
    fn take_changed_slots(&mut self) -> Vec<SlotChange> {
        let mut changed: Vec<SlotChange> = self
            .changed_items
            .take()
            .into_iter()
            .flatten()
            .map(|(slot, data)| SlotChange {
                slot: slot as i16,
                data,
            })
            .collect();
        changed.sort_by_key(|change| change.slot);
        changed
    }

    /// Writes the final overlay state into the authoritative inventory.
    fn commit(&mut self) {
        if let Some(cursor) = self.overlay.take_cursor() {
            self.inventory.set_cursor(cursor);
        }
        for (slot, item) in self.overlay.drain_slots() {
            self.inventory.set_item(slot, item);
        }
    }
}
