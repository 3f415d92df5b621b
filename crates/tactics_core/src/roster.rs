//! Typed roster entries and the combatants built from them at match start.

use std::collections::HashSet;

use glam::IVec2;
use serde::Deserialize;

use crate::grid::GridSpec;

/// One participant as handed over by the character-select screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub key: String,
    pub name: String,
}

impl RosterEntry {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}

/// A roster entry placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub key: String,
    pub name: String,
    pub cell: IVec2,
}

/// The characters offered on the select screen.
pub fn default_catalog() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("character1", "Warrior"),
        RosterEntry::new("character2", "Mage"),
        RosterEntry::new("character3", "Rogue"),
    ]
}

/// Starting cell for roster slot `index`: bottom row, two columns in from the left.
pub fn spawn_cell(index: usize, grid: &GridSpec) -> IVec2 {
    IVec2::new(index as i32 + 2, grid.height - 1)
}

pub fn validate_roster(entries: &[RosterEntry], grid: &GridSpec) -> Result<(), String> {
    if entries.is_empty() {
        return Err("Roster validation failed: roster is empty".to_string());
    }

    let mut keys = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.key.is_empty() {
            return Err(format!(
                "Roster validation failed: entry {} has an empty key",
                index
            ));
        }
        if !keys.insert(entry.key.as_str()) {
            return Err(format!(
                "Roster validation failed: duplicate key '{}'",
                entry.key
            ));
        }
        if !grid.contains(spawn_cell(index, grid)) {
            return Err(format!(
                "Roster validation failed: entry '{}' does not fit on a {}-wide board",
                entry.key, grid.width
            ));
        }
    }
    Ok(())
}

/// Validate `entries` and place them on their spawn cells.
pub fn build_combatants(entries: &[RosterEntry], grid: &GridSpec) -> Result<Vec<Combatant>, String> {
    validate_roster(entries, grid)?;
    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Combatant {
            key: entry.key.clone(),
            name: entry.name.clone(),
            cell: spawn_cell(index, grid),
        })
        .collect())
}
