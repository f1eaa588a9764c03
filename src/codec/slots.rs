//! Slot codes used by the gear planner's binary format.
//!
//! These follow the game's inventory slot numbering, so they are not the
//! [`EquipmentSlot`] ordinals. Code 4 (shirt) and 19 (tabard) have no slot in
//! the build model and are never mapped.

use crate::build::EquipmentSlot;

/// The single slot/code table used in both directions, in [`EquipmentSlot`]
/// declaration order so a slot's ordinal indexes its entry.
pub static SLOT_CODES: [(EquipmentSlot, u8); 17] = [
    (EquipmentSlot::Head, 1),
    (EquipmentSlot::Neck, 2),
    (EquipmentSlot::Shoulder, 3),
    (EquipmentSlot::Back, 15),
    (EquipmentSlot::Chest, 5),
    (EquipmentSlot::Wrist, 9),
    (EquipmentSlot::Hands, 10),
    (EquipmentSlot::Waist, 6),
    (EquipmentSlot::Legs, 7),
    (EquipmentSlot::Feet, 8),
    (EquipmentSlot::Finger1, 11),
    (EquipmentSlot::Finger2, 12),
    (EquipmentSlot::Trinket1, 13),
    (EquipmentSlot::Trinket2, 14),
    (EquipmentSlot::MainHand, 16),
    (EquipmentSlot::OffHand, 17),
    (EquipmentSlot::Ranged, 18),
];

pub fn slot_code(slot: EquipmentSlot) -> u8 {
    SLOT_CODES[slot as usize].1
}

pub fn slot_for_code(code: u8) -> Option<EquipmentSlot> {
    SLOT_CODES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(slot, _)| *slot)
}
