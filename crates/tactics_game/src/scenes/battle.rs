use glam::{IVec2, Vec2};

use tactics_core::grid::GridSpec;
use tactics_core::input::InputState;
use tactics_core::roster::RosterEntry;
use tactics_core::time::FrameClock;
use tactics_core::turn::{Emphasis, TurnGridController};

use super::{Scene, SceneChange, SceneId, UiButton};

/// What the renderer needs to draw one combatant this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantView {
    pub key: String,
    pub cell: IVec2,
    pub pixel: Vec2,
    pub alpha: f32,
}

pub struct BattleScene {
    turns: TurnGridController,
    emphasis: Vec<Emphasis>,
}

impl BattleScene {
    pub fn new(party: &[RosterEntry], grid: GridSpec) -> Result<Self, String> {
        let turns = TurnGridController::new(party, grid)?;
        let emphasis = turns.per_frame_highlight();
        Ok(Self { turns, emphasis })
    }

    pub fn view(&self) -> Vec<CombatantView> {
        self.turns
            .roster()
            .iter()
            .zip(self.turns.pixel_positions())
            .zip(&self.emphasis)
            .map(|((combatant, pixel), emphasis)| CombatantView {
                key: combatant.key.clone(),
                cell: combatant.cell,
                pixel,
                alpha: emphasis.alpha(),
            })
            .collect()
    }
}

impl Scene for BattleScene {
    fn id(&self) -> SceneId {
        SceneId::Battle
    }

    fn pointer_down(&mut self, pointer: Vec2) {
        self.turns.handle_pointer_down(pointer.x, pointer.y);
    }

    fn button(&mut self, button: UiButton) -> Option<SceneChange> {
        match button {
            UiButton::Attack => {
                self.turns.attack();
                None
            }
            UiButton::EndTurn => {
                self.turns.end_turn();
                None
            }
            UiButton::Continue => Some(SceneChange::GameOver),
        }
    }

    fn update(&mut self, _input: &InputState, _clock: &FrameClock) -> Option<SceneChange> {
        self.emphasis = self.turns.per_frame_highlight();
        None
    }

    fn summary(&self) -> String {
        let active = self.turns.active();
        let board: Vec<String> = self
            .view()
            .iter()
            .map(|v| format!("{}@({}, {}) a={:.1}", v.key, v.cell.x, v.cell.y, v.alpha))
            .collect();
        format!(
            "turn slot {} '{}' at ({}, {}), {}, {} combatants [{}]",
            self.turns.current_turn(),
            active.key,
            active.cell.x,
            active.cell.y,
            if self.turns.is_action_completed() {
                "moved"
            } else {
                "awaiting move"
            },
            board.len(),
            board.join("; ")
        )
    }
}
