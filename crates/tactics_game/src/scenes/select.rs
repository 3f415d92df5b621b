use tactics_core::input::{InputState, Key};
use tactics_core::roster::RosterEntry;
use tactics_core::selection::CharacterSelection;
use tactics_core::time::FrameClock;

use super::{Scene, SceneChange, SceneId, UiButton};

/// Number keys pick party members, Enter (or Continue) starts the battle,
/// Escape backs out to the main menu.
pub struct CharacterSelectScene {
    selection: CharacterSelection,
}

impl CharacterSelectScene {
    pub fn new(catalog: Vec<RosterEntry>) -> Self {
        Self {
            selection: CharacterSelection::new(catalog),
        }
    }

    fn confirm(&self) -> Option<SceneChange> {
        match self.selection.confirm() {
            Ok(party) => Some(SceneChange::Battle(party)),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
}

impl Scene for CharacterSelectScene {
    fn id(&self) -> SceneId {
        SceneId::CharacterSelect
    }

    fn button(&mut self, button: UiButton) -> Option<SceneChange> {
        match button {
            UiButton::Continue => self.confirm(),
            UiButton::Attack | UiButton::EndTurn => None,
        }
    }

    fn update(&mut self, input: &InputState, _clock: &FrameClock) -> Option<SceneChange> {
        if input.is_just_pressed(Key::Escape) {
            return Some(SceneChange::MainMenu);
        }
        if let Some(slot) = input.just_pressed_slot() {
            self.selection.toggle(slot);
        }
        if input.is_just_pressed(Key::Enter) {
            return self.confirm();
        }
        None
    }

    fn summary(&self) -> String {
        let picked: Vec<&str> = self.selection.picked().map(|e| e.name.as_str()).collect();
        let open = (0..self.selection.catalog().len())
            .filter(|&index| !self.selection.is_selected(index))
            .count();
        format!(
            "{} characters offered ({} unpicked), party [{}]",
            self.selection.catalog().len(),
            open,
            picked.join(", ")
        )
    }
}
