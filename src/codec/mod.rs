//! Wowhead gear planner links.
//!
//! A link looks like
//! `https://www.wowhead.com/classic/gear-planner/<class>/<race>/<blob>` where
//! the blob is the URL-safe base64 form of a [`payload::Payload`].

pub mod base64url;
pub mod payload;
pub mod reader;
pub mod slots;
pub mod talents;

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::build::{CharacterBuild, Enchant, Equipment, EquippedItem};
use crate::database::ItemDatabase;
use crate::error::{Error, Result};
use crate::names::{CharacterClass, Race};
use payload::{ItemRecord, MAX_ENCHANT_SPELL_ID, MAX_ITEM_ID, Payload};
use talents::TalentNibbles;

pub const DEFAULT_HOST: &str = "www.wowhead.com";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"classic/gear-planner/([a-z\-]+)/([a-z\-]+)/([a-zA-Z0-9_\-]+)")
        .expect("invalid regex")
});

/// Encodes builds into gear planner links and decodes them back.
#[derive(Debug, Clone)]
pub struct GearPlannerCodec {
    host: String,
}

impl Default for GearPlannerCodec {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl GearPlannerCodec {
    /// `host` is only used when exporting; imports accept any host.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Render a build as a gear planner link.
    pub fn encode(&self, build: &CharacterBuild) -> Result<String> {
        let level = u8::try_from(build.level)
            .ok()
            .filter(|l| *l > 0)
            .ok_or(Error::UnrepresentableLevel(build.level))?;

        let mut equipped: Vec<_> = build.equipment.iter().collect();
        equipped.sort_by_key(|(slot, _)| slots::slot_code(**slot));

        let mut items = Vec::with_capacity(equipped.len());
        for (slot, item) in equipped {
            if item.item_id > MAX_ITEM_ID {
                return Err(Error::UnrepresentableItemId { slot: *slot, item_id: item.item_id });
            }
            let enchant_spell_id = item.enchant.map(|e| e.spell_id);
            if let Some(spell_id) = enchant_spell_id.filter(|id| *id > MAX_ENCHANT_SPELL_ID) {
                return Err(Error::UnrepresentableEnchant { slot: *slot, spell_id });
            }
            items.push(ItemRecord {
                slot_code: slots::slot_code(*slot),
                item_id: item.item_id,
                enchant_spell_id,
                random_enchant: false,
            });
        }

        let payload = Payload {
            level,
            talents: TalentNibbles::from_talent_string(&build.talents)?,
            items,
        };
        let blob = base64url::encode(&payload.to_bytes()?);

        Ok(format!(
            "https://{}/classic/gear-planner/{}/{}/{}",
            self.host,
            build.class.slug(),
            build.race.slug(),
            blob
        ))
    }

    /// Parse a gear planner link, translating enchant spell ids to effect ids
    /// through `db` and handing the resulting equipment to
    /// [`ItemDatabase::lookup_equipment`].
    pub fn decode(&self, url: &str, db: &dyn ItemDatabase) -> Result<CharacterBuild> {
        let caps = URL_RE
            .captures(url)
            .ok_or_else(|| Error::InvalidFormat { url: url.to_string() })?;
        let class = CharacterClass::from_slug(&caps[1])?;
        let race = Race::from_slug(&caps[2])?;

        let data = base64url::decode(&caps[3])?;
        let payload = Payload::parse(&data)?;
        debug!(%class, %race, items = payload.items.len(), "Decoded gear planner link");

        let equipment = resolve_items(&payload.items, db)?;
        db.lookup_equipment(&equipment)?;

        Ok(CharacterBuild {
            class,
            race,
            level: u32::from(payload.level),
            talents: payload.talents.to_talent_string(),
            equipment,
        })
    }
}

/// Map item records onto slots. Records for slots the build does not model
/// (shirt, tabard) are dropped.
fn resolve_items(records: &[ItemRecord], db: &dyn ItemDatabase) -> Result<Equipment> {
    let mut equipment = Equipment::new();
    for record in records {
        let Some(slot) = slots::slot_for_code(record.slot_code) else {
            debug!(slot_code = record.slot_code, item_id = record.item_id, "Skipping unmapped slot");
            continue;
        };

        let mut item = EquippedItem::new(record.item_id);
        if let Some(spell_id) = record.enchant_spell_id {
            item.enchant = Some(Enchant {
                spell_id,
                effect_id: Some(db.enchant_effect_id(spell_id)?),
            });
        }

        if let Some(previous) = equipment.insert(slot, item) {
            warn!(
                ?slot,
                previous = previous.item_id,
                item_id = item.item_id,
                "Duplicate slot record, keeping the last"
            );
        }
    }
    Ok(equipment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::EquipmentSlot;
    use crate::database::ItemDb;

    fn warrior() -> CharacterBuild {
        let mut build = CharacterBuild::new(CharacterClass::Warrior, Race::Orc);
        build.talents = "30305001302-05050005525010051".to_string();
        build.equip(EquipmentSlot::Head, EquippedItem::new(12640));
        build.equip(EquipmentSlot::Back, EquippedItem::new(13397));
        build
    }

    #[test]
    fn test_encode_prefix() {
        let url = GearPlannerCodec::default().encode(&warrior()).unwrap();
        assert!(url.starts_with("https://www.wowhead.com/classic/gear-planner/warrior/orc/"));

        let url = GearPlannerCodec::new("www.example.org").encode(&warrior()).unwrap();
        assert!(url.starts_with("https://www.example.org/classic/gear-planner/warrior/orc/"));
    }

    #[test]
    fn test_records_sorted_by_slot_code() {
        let mut build = CharacterBuild::new(CharacterClass::Mage, Race::Gnome);
        build.talents = "0".to_string();
        // Back has a lower ordinal than Chest but a higher slot code.
        build.equip(EquipmentSlot::Back, EquippedItem::new(2));
        build.equip(EquipmentSlot::Chest, EquippedItem::new(1));

        let url = GearPlannerCodec::default().encode(&build).unwrap();
        let blob = url.rsplit('/').next().unwrap();
        let payload = Payload::parse(&base64url::decode(blob).unwrap()).unwrap();
        let codes: Vec<u8> = payload.items.iter().map(|r| r.slot_code).collect();
        assert_eq!(codes, vec![5, 15]);
    }

    #[test]
    fn test_level_guard() {
        let mut build = warrior();
        build.level = 256;
        assert!(matches!(
            GearPlannerCodec::default().encode(&build),
            Err(Error::UnrepresentableLevel(256))
        ));
        build.level = 0;
        assert!(matches!(
            GearPlannerCodec::default().encode(&build),
            Err(Error::UnrepresentableLevel(0))
        ));
    }

    #[test]
    fn test_item_id_guard() {
        let mut build = warrior();
        build.equip(EquipmentSlot::Feet, EquippedItem::new(1 << 21));
        assert!(matches!(
            GearPlannerCodec::default().encode(&build),
            Err(Error::UnrepresentableItemId { slot: EquipmentSlot::Feet, item_id: 0x200000 })
        ));
    }

    #[test]
    fn test_enchant_guard() {
        let mut build = warrior();
        build.equip(
            EquipmentSlot::Chest,
            EquippedItem::new(11726).with_enchant(Enchant::from_spell(1 << 24)),
        );
        assert!(matches!(
            GearPlannerCodec::default().encode(&build),
            Err(Error::UnrepresentableEnchant { slot: EquipmentSlot::Chest, .. })
        ));
    }

    #[test]
    fn test_decode_round_trip() {
        let codec = GearPlannerCodec::default();
        let build = warrior();
        let decoded = codec.decode(&codec.encode(&build).unwrap(), &ItemDb::default()).unwrap();
        assert_eq!(decoded, build);
    }

    #[test]
    fn test_duplicate_slot_keeps_last() {
        let data = [6, 0, 60, 1, 0xF0, 0x01, 0, 0, 1, 0x01, 0, 0, 2];
        let url = format!(
            "https://www.wowhead.com/classic/gear-planner/mage/human/{}",
            base64url::encode(&data)
        );
        let build = GearPlannerCodec::default().decode(&url, &ItemDb::default()).unwrap();
        assert_eq!(build.equipment.len(), 1);
        assert_eq!(build.item(EquipmentSlot::Head).unwrap().item_id, 2);
    }
}
