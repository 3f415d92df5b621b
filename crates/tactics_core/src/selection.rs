//! Party picking for the character-select screen.

use crate::roster::RosterEntry;

pub struct CharacterSelection {
    catalog: Vec<RosterEntry>,
    /// Catalog indices in the order they were picked.
    picked: Vec<usize>,
}

impl CharacterSelection {
    pub fn new(catalog: Vec<RosterEntry>) -> Self {
        Self {
            catalog,
            picked: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &[RosterEntry] {
        &self.catalog
    }

    /// Pick or un-pick a catalog slot. Out-of-range slots are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.catalog.len() {
            log::debug!("Ignoring pick of slot {}: catalog has {}", index, self.catalog.len());
            return;
        }
        if let Some(pos) = self.picked.iter().position(|&i| i == index) {
            self.picked.remove(pos);
            log::info!("Removed '{}' from party", self.catalog[index].key);
        } else {
            self.picked.push(index);
            log::info!("Added '{}' to party", self.catalog[index].key);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.picked.contains(&index)
    }

    pub fn picked(&self) -> impl Iterator<Item = &RosterEntry> + '_ {
        self.picked.iter().map(move |&i| &self.catalog[i])
    }

    /// The party as roster entries, in pick order.
    pub fn confirm(&self) -> Result<Vec<RosterEntry>, String> {
        if self.picked.is_empty() {
            return Err("Character selection failed: no characters picked".to_string());
        }
        Ok(self.picked().cloned().collect())
    }
}
