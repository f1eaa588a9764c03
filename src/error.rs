use thiserror::Error;

use crate::build::EquipmentSlot;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Invalid gear planner URL {url}, must look like \
         \"https://www.wowhead.com/classic/gear-planner/CLASS/RACE/XXXX\""
    )]
    InvalidFormat { url: String },

    #[error("Could not parse class: {0}")]
    UnknownClass(String),

    #[error("Could not parse race: {0}")]
    UnknownRace(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Truncated buffer: needed {needed} byte(s) at offset {offset}, only {available} left")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Item id {item_id} in {slot:?} does not fit in 21 bits")]
    UnrepresentableItemId { slot: EquipmentSlot, item_id: u32 },

    #[error("Enchant spell id {spell_id} in {slot:?} does not fit in 24 bits")]
    UnrepresentableEnchant { slot: EquipmentSlot, spell_id: u32 },

    #[error("Level {0} cannot be encoded (must be 1-255)")]
    UnrepresentableLevel(u32),

    #[error("Invalid talent string: {0}")]
    InvalidTalents(String),

    #[error("Talents take {0} bytes, at most 255 can be encoded")]
    TalentsTooLong(usize),

    #[error("Unknown enchant spell id: {0}")]
    UnknownEnchant(u32),

    #[error("Unknown item {item_id} in {slot:?}")]
    UnknownItem { slot: EquipmentSlot, item_id: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
