//! Wowhead Gear Planner codec
//!
//! Converts WoW Classic character builds (class, race, level, talents and
//! equipped items) to and from the compact base64 links used by the Wowhead
//! gear planner.

pub mod build;
pub mod codec;
pub mod config;
pub mod database;
pub mod error;
pub mod names;

pub use build::{CharacterBuild, Enchant, EquipmentSlot, EquippedItem, MAX_CHARACTER_LEVEL};
pub use codec::GearPlannerCodec;
pub use database::{ItemDatabase, ItemDb};
pub use error::{Error, Result};
pub use names::{CharacterClass, Race};
