//! Character build model shared by import and export.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::names::{CharacterClass, Race};

/// Highest level a Classic character can reach.
pub const MAX_CHARACTER_LEVEL: u32 = 60;

/// Equipment slots a build can fill. Shirt and tabard are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Head,
    Neck,
    Shoulder,
    Back,
    Chest,
    Wrist,
    Hands,
    Waist,
    Legs,
    Feet,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
    MainHand,
    OffHand,
    Ranged,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 17] = [
        EquipmentSlot::Head,
        EquipmentSlot::Neck,
        EquipmentSlot::Shoulder,
        EquipmentSlot::Back,
        EquipmentSlot::Chest,
        EquipmentSlot::Wrist,
        EquipmentSlot::Hands,
        EquipmentSlot::Waist,
        EquipmentSlot::Legs,
        EquipmentSlot::Feet,
        EquipmentSlot::Finger1,
        EquipmentSlot::Finger2,
        EquipmentSlot::Trinket1,
        EquipmentSlot::Trinket2,
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::Ranged,
    ];
}

/// An enchant, identified on the wire by its spell id.
///
/// `effect_id` is the enchant effect the item database resolved the spell to.
/// It is filled in on import and ignored on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchant {
    pub spell_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_id: Option<u32>,
}

impl Enchant {
    pub fn from_spell(spell_id: u32) -> Self {
        Self { spell_id, effect_id: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub item_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enchant: Option<Enchant>,
}

impl EquippedItem {
    pub fn new(item_id: u32) -> Self {
        Self { item_id, enchant: None }
    }

    pub fn with_enchant(mut self, enchant: Enchant) -> Self {
        self.enchant = Some(enchant);
        self
    }
}

/// At most one item per slot.
pub type Equipment = BTreeMap<EquipmentSlot, EquippedItem>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBuild {
    pub class: CharacterClass,
    pub race: Race,
    #[serde(default = "default_level")]
    pub level: u32,
    /// Dash-separated point allocation per tree, e.g. `05-3205-5005`.
    #[serde(default)]
    pub talents: String,
    #[serde(default)]
    pub equipment: Equipment,
}

fn default_level() -> u32 {
    MAX_CHARACTER_LEVEL
}

impl CharacterBuild {
    /// An empty max-level build.
    pub fn new(class: CharacterClass, race: Race) -> Self {
        Self {
            class,
            race,
            level: MAX_CHARACTER_LEVEL,
            talents: String::new(),
            equipment: Equipment::new(),
        }
    }

    pub fn equip(&mut self, slot: EquipmentSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.equipment.insert(slot, item)
    }

    pub fn item(&self, slot: EquipmentSlot) -> Option<&EquippedItem> {
        self.equipment.get(&slot)
    }
}
