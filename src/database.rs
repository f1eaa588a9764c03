//! Item and enchant lookups needed while importing a build.
//!
//! Gear planner links name enchants by the spell that applies them, while
//! builds refer to the enchant effect. [`ItemDatabase`] does that translation
//! and validates the imported equipment. [`ItemDb`] is a JSON-backed
//! implementation generated by `gear-planner generate db`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::build::{Equipment, EquipmentSlot};
use crate::error::{Error, Result};

pub trait ItemDatabase {
    /// Translate an enchant spell id to the enchant effect id it applies.
    fn enchant_effect_id(&self, spell_id: u32) -> Result<u32>;

    /// Resolve imported equipment against the database.
    fn lookup_equipment(&self, _equipment: &Equipment) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub name: String,
    /// Game inventory type (1 = head, 13 = one-hand, ...); 0 when unknown.
    #[serde(default)]
    pub inventory_type: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDb {
    #[serde(default)]
    pub items: HashMap<u32, ItemInfo>,
    /// Enchant spell id -> enchant effect id.
    #[serde(default)]
    pub enchants: HashMap<u32, u32>,
}

impl ItemDb {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let db = Self::from_json(&std::fs::read_to_string(path)?)?;
        debug!(
            "Loaded item database {}: {} items, {} enchants",
            path.display(),
            db.items.len(),
            db.enchants.len()
        );
        Ok(db)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    pub fn item(&self, item_id: u32) -> Option<&ItemInfo> {
        self.items.get(&item_id)
    }

    /// Reverse of [`ItemDatabase::enchant_effect_id`]. Several spells can
    /// apply the same effect; the lowest spell id wins.
    pub fn enchant_spell_id(&self, effect_id: u32) -> Option<u32> {
        self.enchants
            .iter()
            .filter(|(_, effect)| **effect == effect_id)
            .map(|(spell, _)| *spell)
            .min()
    }
}

impl ItemDatabase for ItemDb {
    fn enchant_effect_id(&self, spell_id: u32) -> Result<u32> {
        self.enchants
            .get(&spell_id)
            .copied()
            .ok_or(Error::UnknownEnchant(spell_id))
    }

    /// Items must exist once an item table is loaded. Items whose inventory
    /// type cannot go in their slot are only reported.
    fn lookup_equipment(&self, equipment: &Equipment) -> Result<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        for (slot, equipped) in equipment {
            let info = self.items.get(&equipped.item_id).ok_or(Error::UnknownItem {
                slot: *slot,
                item_id: equipped.item_id,
            })?;
            if info.inventory_type != 0 && !fits_slot(info.inventory_type, *slot) {
                warn!(
                    "{} ({}) has inventory type {} and does not fit {:?}",
                    info.name, equipped.item_id, info.inventory_type, slot
                );
            }
        }
        Ok(())
    }
}

/// Whether an item of the given inventory type can be equipped in `slot`.
pub fn fits_slot(inventory_type: u8, slot: EquipmentSlot) -> bool {
    use EquipmentSlot::*;
    match inventory_type {
        1 => slot == Head,
        2 => slot == Neck,
        3 => slot == Shoulder,
        5 | 20 => slot == Chest,
        6 => slot == Waist,
        7 => slot == Legs,
        8 => slot == Feet,
        9 => slot == Wrist,
        10 => slot == Hands,
        11 => matches!(slot, Finger1 | Finger2),
        12 => matches!(slot, Trinket1 | Trinket2),
        // One-hand weapons
        13 => matches!(slot, MainHand | OffHand),
        14 | 22 | 23 => slot == OffHand,
        15 | 25 | 26 | 28 => slot == Ranged,
        16 => slot == Back,
        17 | 21 => slot == MainHand,
        _ => false,
    }
}
