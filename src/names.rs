//! Playable class and race names.
//!
//! Gear planner URLs identify the class and race by slug (`night-elf`).
//! Slugs resolve by stripping dashes and comparing against the display name
//! lower-cased with whitespace removed.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Druid,
    Hunter,
    Mage,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Dwarf,
    Gnome,
    Human,
    NightElf,
    Orc,
    Tauren,
    Troll,
    Undead,
}

/// Normalized name (lower-case, no whitespace) -> class.
static CLASS_BY_NAME: phf::Map<&'static str, CharacterClass> = phf_map! {
    "druid" => CharacterClass::Druid,
    "hunter" => CharacterClass::Hunter,
    "mage" => CharacterClass::Mage,
    "paladin" => CharacterClass::Paladin,
    "priest" => CharacterClass::Priest,
    "rogue" => CharacterClass::Rogue,
    "shaman" => CharacterClass::Shaman,
    "warlock" => CharacterClass::Warlock,
    "warrior" => CharacterClass::Warrior,
};

/// Normalized name (lower-case, no whitespace) -> race.
static RACE_BY_NAME: phf::Map<&'static str, Race> = phf_map! {
    "dwarf" => Race::Dwarf,
    "gnome" => Race::Gnome,
    "human" => Race::Human,
    "nightelf" => Race::NightElf,
    "orc" => Race::Orc,
    "tauren" => Race::Tauren,
    "troll" => Race::Troll,
    "undead" => Race::Undead,
};

/// Lower-case a display name and replace spaces with dashes.
fn slugify(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Strip slug dashes and any whitespace so it can be matched against the tables.
fn normalize(slug: &str) -> String {
    slug.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 9] = [
        CharacterClass::Druid,
        CharacterClass::Hunter,
        CharacterClass::Mage,
        CharacterClass::Paladin,
        CharacterClass::Priest,
        CharacterClass::Rogue,
        CharacterClass::Shaman,
        CharacterClass::Warlock,
        CharacterClass::Warrior,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Druid => "Druid",
            CharacterClass::Hunter => "Hunter",
            CharacterClass::Mage => "Mage",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Priest => "Priest",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Shaman => "Shaman",
            CharacterClass::Warlock => "Warlock",
            CharacterClass::Warrior => "Warrior",
        }
    }

    pub fn slug(self) -> String {
        slugify(self.name())
    }

    /// Resolve a URL slug or display name.
    pub fn from_slug(slug: &str) -> Result<Self> {
        CLASS_BY_NAME
            .get(normalize(slug).as_str())
            .copied()
            .ok_or_else(|| Error::UnknownClass(slug.to_string()))
    }
}

impl Race {
    pub const ALL: [Race; 8] = [
        Race::Dwarf,
        Race::Gnome,
        Race::Human,
        Race::NightElf,
        Race::Orc,
        Race::Tauren,
        Race::Troll,
        Race::Undead,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Race::Dwarf => "Dwarf",
            Race::Gnome => "Gnome",
            Race::Human => "Human",
            Race::NightElf => "Night Elf",
            Race::Orc => "Orc",
            Race::Tauren => "Tauren",
            Race::Troll => "Troll",
            Race::Undead => "Undead",
        }
    }

    pub fn slug(self) -> String {
        slugify(self.name())
    }

    /// Resolve a URL slug or display name.
    pub fn from_slug(slug: &str) -> Result<Self> {
        RACE_BY_NAME
            .get(normalize(slug).as_str())
            .copied()
            .ok_or_else(|| Error::UnknownRace(slug.to_string()))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
