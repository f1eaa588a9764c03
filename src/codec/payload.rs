//! Binary payload carried in the base64 part of a gear planner URL.
//!
//! ```text
//! byte 0      always 6
//! byte 1      always 0 (character appearance in the planner, unused here)
//! byte 2      level
//! byte 3      N, length of the talent bytes
//! 4..4+N      talent nibbles
//! 4+N..       item records until the end of the buffer
//! ```
//!
//! Each item record is 4 bytes, or 8 when the enchant flag is set:
//!
//! ```text
//! 0    slot code (low 6 bits) | random enchant (0x40) | enchanted (0x80)
//! 1    item id bits 20-16 (low 5 bits)
//! 2-3  item id bits 15-0
//! 4    reserved, enchanted records only
//! 5-7  enchant spell id, enchanted records only
//! ```

use tracing::debug;

use super::reader::ByteReader;
use super::talents::TalentNibbles;
use crate::error::{Error, Result};

pub const HEADER_MAGIC: u8 = 6;
pub const HEADER_APPEARANCE: u8 = 0;

pub const SLOT_CODE_MASK: u8 = 0b0011_1111;
pub const RANDOM_ENCHANT_FLAG: u8 = 0b0100_0000;
pub const ENCHANTED_FLAG: u8 = 0b1000_0000;
pub const ITEM_ID_HIGH_MASK: u8 = 0b0001_1111;

/// Largest item id the 21-bit field can hold.
pub const MAX_ITEM_ID: u32 = (1 << 21) - 1;
/// Largest enchant spell id the 24-bit field can hold.
pub const MAX_ENCHANT_SPELL_ID: u32 = (1 << 24) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRecord {
    pub slot_code: u8,
    pub item_id: u32,
    pub enchant_spell_id: Option<u32>,
    pub random_enchant: bool,
}

impl ItemRecord {
    pub fn encoded_len(&self) -> usize {
        if self.enchant_spell_id.is_some() { 8 } else { 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub level: u8,
    pub talents: TalentNibbles,
    pub items: Vec<ItemRecord>,
}

impl Payload {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        let _magic = reader.read_u8()?;
        let _appearance = reader.read_u8()?;
        let level = reader.read_u8()?;
        let talent_len = reader.read_u8()?;
        let talents = TalentNibbles::from_bytes(reader.read_bytes(usize::from(talent_len))?);
        debug!(level, talent_len, "Parsed gear planner header");

        let mut items = Vec::new();
        while !reader.is_empty() {
            let record = read_item(&mut reader)?;
            debug!(
                slot_code = record.slot_code,
                item_id = record.item_id,
                enchant = ?record.enchant_spell_id,
                "Parsed item record"
            );
            items.push(record);
        }

        Ok(Self { level, talents, items })
    }

    /// Serialize the payload. Item records are written in the given order.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let talent_bytes = self.talents.to_bytes();
        let talent_len =
            u8::try_from(talent_bytes.len()).map_err(|_| Error::TalentsTooLong(talent_bytes.len()))?;

        let items_len: usize = self.items.iter().map(ItemRecord::encoded_len).sum();
        let mut out = Vec::with_capacity(4 + talent_bytes.len() + items_len);
        out.extend_from_slice(&[HEADER_MAGIC, HEADER_APPEARANCE, self.level, talent_len]);
        out.extend_from_slice(&talent_bytes);

        for item in &self.items {
            write_item(&mut out, item);
        }
        Ok(out)
    }
}

fn read_item(reader: &mut ByteReader<'_>) -> Result<ItemRecord> {
    let slot_byte = reader.read_u8()?;
    // Bits 5-7 are the planner's gem count, which Classic items never have.
    let id_high = reader.read_u8()? & ITEM_ID_HIGH_MASK;
    let id_low = reader.read_u16()?;
    let item_id = (u32::from(id_high) << 16) | u32::from(id_low);

    let enchant_spell_id = if slot_byte & ENCHANTED_FLAG != 0 {
        let _reserved = reader.read_u8()?;
        Some(reader.read_u24()?)
    } else {
        None
    };

    Ok(ItemRecord {
        slot_code: slot_byte & SLOT_CODE_MASK,
        item_id,
        enchant_spell_id,
        random_enchant: slot_byte & RANDOM_ENCHANT_FLAG != 0,
    })
}

/// Ids are assumed to be range checked by the caller; excess bits are masked off.
fn write_item(out: &mut Vec<u8>, item: &ItemRecord) {
    let mut slot_byte = item.slot_code & SLOT_CODE_MASK;
    if item.random_enchant {
        slot_byte |= RANDOM_ENCHANT_FLAG;
    }
    if item.enchant_spell_id.is_some() {
        slot_byte |= ENCHANTED_FLAG;
    }

    let [_, id_high, id_mid, id_low] = item.item_id.to_be_bytes();
    out.extend_from_slice(&[slot_byte, id_high & ITEM_ID_HIGH_MASK, id_mid, id_low]);

    if let Some(spell_id) = item.enchant_spell_id {
        let [_, hi, mid, lo] = spell_id.to_be_bytes();
        out.extend_from_slice(&[0, hi, mid, lo]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(talents: &[u8]) -> Vec<u8> {
        let mut data = vec![HEADER_MAGIC, HEADER_APPEARANCE, 60, talents.len() as u8];
        data.extend_from_slice(talents);
        data
    }

    #[test]
    fn test_parse_enchanted_then_plain_record() {
        let mut data = header(&[0xF0]);
        data.extend_from_slice(&[0x91, 0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00]);
        data.extend_from_slice(&[0x02, 0x00, 0x00, 0x02]);

        let payload = Payload::parse(&data).unwrap();
        assert_eq!(payload.level, 60);
        assert_eq!(
            payload.items,
            vec![
                ItemRecord {
                    slot_code: 17,
                    item_id: 1,
                    enchant_spell_id: Some(256),
                    random_enchant: false,
                },
                ItemRecord {
                    slot_code: 2,
                    item_id: 2,
                    enchant_spell_id: None,
                    random_enchant: false,
                },
            ]
        );
    }

    #[test]
    fn test_item_id_uses_21_bits() {
        let mut data = header(&[0xF0]);
        // Gem count bits set in the high byte must be ignored.
        data.extend_from_slice(&[0x41, 0xFF, 0xAB, 0xCD]);

        let payload = Payload::parse(&data).unwrap();
        assert_eq!(payload.items[0].item_id, 0x1FABCD);
        assert_eq!(payload.items[0].slot_code, 1);
        assert!(payload.items[0].random_enchant);
    }

    #[test]
    fn test_truncated_record() {
        let mut data = header(&[0xF0]);
        data.extend_from_slice(&[0x01, 0x00, 0x4B]);
        assert!(matches!(
            Payload::parse(&data),
            Err(Error::TruncatedBuffer { offset: 7, needed: 2, available: 1 })
        ));

        let mut data = header(&[0xF0]);
        data.extend_from_slice(&[0x81, 0x00, 0x4B, 0x12, 0x00, 0x00]);
        assert!(matches!(Payload::parse(&data), Err(Error::TruncatedBuffer { .. })));
    }

    #[test]
    fn test_truncated_header_and_talents() {
        assert!(matches!(Payload::parse(&[6, 0]), Err(Error::TruncatedBuffer { .. })));
        assert!(matches!(
            Payload::parse(&[6, 0, 60, 3, 0x12]),
            Err(Error::TruncatedBuffer { offset: 4, needed: 3, available: 1 })
        ));
    }

    #[test]
    fn test_write_layout() {
        let payload = Payload {
            level: 60,
            talents: TalentNibbles::from_talent_string("0").unwrap(),
            items: vec![
                ItemRecord {
                    slot_code: 1,
                    item_id: 0x12_3456,
                    enchant_spell_id: None,
                    random_enchant: false,
                },
                ItemRecord {
                    slot_code: 16,
                    item_id: 19019,
                    enchant_spell_id: Some(20034),
                    random_enchant: false,
                },
            ],
        };
        let bytes = payload.to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![
                6, 0, 60, 1, 0x0F, //
                0x01, 0x12, 0x34, 0x56, //
                0x90, 0x00, 0x4A, 0x4B, 0x00, 0x00, 0x4E, 0x42,
            ]
        );
        assert_eq!(Payload::parse(&bytes).unwrap(), payload);
    }

    #[test]
    fn test_talents_too_long() {
        let talents = "1".repeat(600);
        let payload = Payload {
            level: 60,
            talents: TalentNibbles::from_bytes(talents.as_bytes()),
            items: Vec::new(),
        };
        assert!(matches!(payload.to_bytes(), Err(Error::TalentsTooLong(600))));
    }
}
