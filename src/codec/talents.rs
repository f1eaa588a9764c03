//! Talent strings as 4-bit nibbles.
//!
//! Talent strings list the points spent in each talent, one digit per talent,
//! with `-` between trees (`05-3205-5005`). On the wire every tree is
//! terminated by a `0xF` nibble and the sequence is padded with a `0x0`
//! nibble to a whole number of bytes.

use crate::error::{Error, Result};

pub const SEPARATOR: u8 = 0xF;
pub const PAD: u8 = 0x0;
pub const MAX_TREES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentNibbles(Vec<u8>);

impl TalentNibbles {
    pub fn from_talent_string(talents: &str) -> Result<Self> {
        let trees: Vec<&str> = talents.split('-').collect();
        if trees.len() > MAX_TREES {
            return Err(Error::InvalidTalents(format!(
                "{talents:?} has {} trees, at most {MAX_TREES} allowed",
                trees.len()
            )));
        }

        let mut nibbles = Vec::with_capacity(talents.len() + 1);
        for tree in trees {
            for c in tree.chars() {
                let points = c.to_digit(10).ok_or_else(|| {
                    Error::InvalidTalents(format!("{talents:?} contains {c:?}"))
                })?;
                nibbles.push(points as u8);
            }
            nibbles.push(SEPARATOR);
        }
        Ok(Self(nibbles))
    }

    /// Unpack bytes high nibble first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().flat_map(|b| [b >> 4, b & 0x0F]).collect())
    }

    pub fn nibbles(&self) -> &[u8] {
        &self.0
    }

    /// Pack two nibbles per byte, padding an odd count with [`PAD`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(PAD))
            .collect()
    }

    pub fn to_talent_string(&self) -> String {
        let mut trees: Vec<&[u8]> = self.0.split(|n| *n == SEPARATOR).collect();
        // Whatever follows the last separator is padding unless it carries data.
        if matches!(trees.last(), Some(last) if last.is_empty() || *last == [PAD]) {
            trees.pop();
        }

        trees
            .iter()
            .take(MAX_TREES)
            .map(|tree| {
                tree.iter()
                    .filter_map(|n| char::from_digit(u32::from(*n), 16))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}
