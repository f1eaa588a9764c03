//! Builds the JSON item database from client CSV exports.
//!
//! Reads from the data directory:
//!   - ItemSparse.csv   (ID, Display_lang, InventoryType)
//!   - SpellEffect.csv  (SpellID, Effect, EffectMiscValue_0)
//!
//! Spell effects of type 53 (ENCHANT_ITEM) map an enchant spell to the enchant
//! effect it applies.

use super::csv_util::{column, parse_csv_line};
use gear_planner::database::{ItemDb, ItemInfo};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const EFFECT_ENCHANT_ITEM: u32 = 53;

pub fn run(data_dir: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = ItemDb::default();

    let items_path = data_dir.join("ItemSparse.csv");
    println!("Loading ItemSparse from {}...", items_path.display());
    let skipped = load_items(&items_path, &mut db)?;
    println!("Loaded {} items ({} skipped)", db.items.len(), skipped);

    let effects_path = data_dir.join("SpellEffect.csv");
    println!("Loading SpellEffect from {}...", effects_path.display());
    load_enchants(&effects_path, &mut db)?;
    println!("Loaded {} enchant spells", db.enchants.len());

    db.save(output)?;
    println!("Output: {}", output.display());
    Ok(())
}

fn read_rows(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => parse_csv_line(&line?),
        None => return Err(format!("{} is empty", path.display()).into()),
    };
    let mut rows = Vec::new();
    for line in lines {
        rows.push(parse_csv_line(&line?));
    }
    Ok((header, rows))
}

fn load_items(path: &Path, db: &mut ItemDb) -> Result<u32, Box<dyn std::error::Error>> {
    let (header, rows) = read_rows(path)?;
    let id_col = column(&header, "ID", "ItemSparse.csv")?;
    let name_col = column(&header, "Display_lang", "ItemSparse.csv")?;
    let inv_col = column(&header, "InventoryType", "ItemSparse.csv")?;

    let mut skipped = 0;
    for row in rows {
        match parse_item_row(&row, id_col, name_col, inv_col) {
            Some((id, info)) => {
                db.items.insert(id, info);
            }
            None => skipped += 1,
        }
    }
    Ok(skipped)
}

fn parse_item_row(
    row: &[String],
    id_col: usize,
    name_col: usize,
    inv_col: usize,
) -> Option<(u32, ItemInfo)> {
    let id: u32 = row.get(id_col)?.parse().ok()?;
    let name = row.get(name_col)?;
    if name.is_empty() {
        return None;
    }
    let inventory_type = row.get(inv_col).and_then(|v| v.parse().ok()).unwrap_or(0);
    Some((id, ItemInfo { name: name.clone(), inventory_type }))
}

fn load_enchants(path: &Path, db: &mut ItemDb) -> Result<(), Box<dyn std::error::Error>> {
    let (header, rows) = read_rows(path)?;
    let spell_col = column(&header, "SpellID", "SpellEffect.csv")?;
    let effect_col = column(&header, "Effect", "SpellEffect.csv")?;
    let misc_col = column(&header, "EffectMiscValue_0", "SpellEffect.csv")?;

    for row in rows {
        if let Some((spell_id, enchant_id)) = parse_enchant_row(&row, spell_col, effect_col, misc_col) {
            db.enchants.insert(spell_id, enchant_id);
        }
    }
    Ok(())
}

fn parse_enchant_row(
    row: &[String],
    spell_col: usize,
    effect_col: usize,
    misc_col: usize,
) -> Option<(u32, u32)> {
    let effect: u32 = row.get(effect_col)?.parse().ok()?;
    if effect != EFFECT_ENCHANT_ITEM {
        return None;
    }
    let spell_id: u32 = row.get(spell_col)?.parse().ok()?;
    let enchant_id: u32 = row.get(misc_col)?.parse().ok()?;
    (enchant_id != 0).then_some((spell_id, enchant_id))
}
