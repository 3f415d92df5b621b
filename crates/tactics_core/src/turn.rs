//! Turn-based grid combat controller.
//!
//! One combatant is active per turn, chosen by a cyclic index into the roster.
//! A pointer click selects the active combatant and, if the target cell lies
//! inside the 5x5 box around it, moves it there. Each turn allows a single
//! move; `action_completed` latches after it and only `end_turn` resets it.
//! `attack` passes the turn but leaves the latch as it found it.
//!
//! Every input is soft: clicks out of range, repeated clicks and attacks with
//! nothing selected leave state untouched instead of reporting an error.

use glam::{IVec2, Vec2};

use crate::grid::GridSpec;
use crate::roster::{build_combatants, Combatant, RosterEntry};

/// Per-axis reach of a single move, in cells.
pub const MOVE_RANGE: u32 = 2;

const ACTIVE_ALPHA: f32 = 1.0;
const DIMMED_ALPHA: f32 = 0.5;

/// Visual emphasis for a combatant, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Dimmed,
}

impl Emphasis {
    pub fn alpha(self) -> f32 {
        match self {
            Self::Active => ACTIVE_ALPHA,
            Self::Dimmed => DIMMED_ALPHA,
        }
    }
}

/// What a pointer-down did. Informational only; state is already updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Moved { from: IVec2, to: IVec2 },
    OutOfRange { target: IVec2 },
    ActionSpent,
    /// The selection is some other combatant than the active one.
    NotActive,
}

#[derive(Debug, Clone)]
pub struct TurnGridController {
    grid: GridSpec,
    roster: Vec<Combatant>,
    current_turn: usize,
    selected: Option<usize>,
    action_completed: bool,
}

impl TurnGridController {
    /// Start a match. Fails only if the roster or grid is unusable.
    pub fn new(entries: &[RosterEntry], grid: GridSpec) -> Result<Self, String> {
        grid.validate()?;
        let roster = build_combatants(entries, &grid)?;
        log::info!(
            "Match started: {} combatants on a {}x{} board",
            roster.len(),
            grid.width,
            grid.height
        );
        Ok(Self {
            grid,
            roster,
            current_turn: 0,
            selected: None,
            action_completed: false,
        })
    }

    pub fn handle_pointer_down(&mut self, pixel_x: f32, pixel_y: f32) -> PointerOutcome {
        let target = self.grid.pixel_to_cell(Vec2::new(pixel_x, pixel_y));
        let active = self.current_turn;

        if self.selected.is_none() {
            self.selected = Some(active);
        }

        debug_assert!(
            self.selected == Some(active),
            "selection must be empty or the active combatant"
        );
        if self.selected != Some(active) {
            log::debug!(
                "Ignoring click at ({}, {}): selection is not the active combatant",
                target.x,
                target.y
            );
            return PointerOutcome::NotActive;
        }
        if self.action_completed {
            log::debug!(
                "Ignoring click at ({}, {}): action already taken this turn",
                target.x,
                target.y
            );
            return PointerOutcome::ActionSpent;
        }

        let from = self.roster[active].cell;
        // abs_diff cannot overflow on saturated far-off-board cells.
        let dx = target.x.abs_diff(from.x);
        let dy = target.y.abs_diff(from.y);
        if dx > MOVE_RANGE || dy > MOVE_RANGE {
            log::debug!(
                "Ignoring click at ({}, {}): out of range for '{}' at ({}, {})",
                target.x,
                target.y,
                self.roster[active].key,
                from.x,
                from.y
            );
            return PointerOutcome::OutOfRange { target };
        }

        self.roster[active].cell = target;
        self.action_completed = true;
        log::info!(
            "'{}' moved ({}, {}) -> ({}, {})",
            self.roster[active].key,
            from.x,
            from.y,
            target.x,
            target.y
        );
        PointerOutcome::Moved { from, to: target }
    }

    /// Stub attack by the selected combatant, then pass the turn.
    /// `action_completed` is not touched. Returns false (and changes
    /// nothing) when nobody is selected.
    pub fn attack(&mut self) -> bool {
        let Some(attacker) = self.selected else {
            log::debug!("Attack ignored: no combatant selected");
            return false;
        };
        log::info!("Attacking with '{}'", self.roster[attacker].key);
        self.advance_turn();
        true
    }

    pub fn end_turn(&mut self) {
        self.advance_turn();
        self.action_completed = false;
    }

    /// Emphasis per roster slot, index-aligned with `roster()`.
    pub fn per_frame_highlight(&self) -> Vec<Emphasis> {
        (0..self.roster.len())
            .map(|index| {
                if index == self.current_turn {
                    Emphasis::Active
                } else {
                    Emphasis::Dimmed
                }
            })
            .collect()
    }

    fn advance_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.roster.len();
        self.selected = None;
        log::info!(
            "Turn passes to '{}' (slot {})",
            self.roster[self.current_turn].key,
            self.current_turn
        );
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn active(&self) -> &Combatant {
        &self.roster[self.current_turn]
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_action_completed(&self) -> bool {
        self.action_completed
    }

    /// Pixel center of every combatant, for the rendering side.
    pub fn pixel_positions(&self) -> Vec<Vec2> {
        self.roster
            .iter()
            .map(|c| self.grid.cell_center(c.cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::default_catalog;

    fn abc() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("a", "A"),
            RosterEntry::new("b", "B"),
            RosterEntry::new("c", "C"),
        ]
    }

    fn controller() -> TurnGridController {
        TurnGridController::new(&abc(), GridSpec::default()).expect("valid match")
    }

    /// Pixel center of `cell` on the default 80px board.
    fn px(cell: IVec2) -> (f32, f32) {
        let center = GridSpec::default().cell_center(cell);
        (center.x, center.y)
    }

    #[test]
    fn end_turn_cycles_modulo_roster_length() {
        for n in 1..=5 {
            let entries: Vec<RosterEntry> = (0..n)
                .map(|i| RosterEntry::new(&format!("k{i}"), "x"))
                .collect();
            let mut turns = TurnGridController::new(&entries, GridSpec::default())
                .expect("valid match");
            for k in 1..=12 {
                turns.end_turn();
                assert_eq!(turns.current_turn(), k % n);
            }
        }
    }

    #[test]
    fn attack_without_selection_is_a_no_op() {
        let mut turns = controller();
        assert!(!turns.attack());
        assert_eq!(turns.current_turn(), 0);
        assert_eq!(turns.selected(), None);
        assert!(!turns.is_action_completed());
    }

    #[test]
    fn attack_after_move_passes_turn_and_keeps_latch() {
        let mut turns = controller();
        let (x, y) = px(IVec2::new(3, 8));
        turns.handle_pointer_down(x, y);
        assert_eq!(turns.selected(), Some(0));

        assert!(turns.attack());
        assert_eq!(turns.current_turn(), 1);
        assert_eq!(turns.selected(), None);
        assert!(turns.is_action_completed());

        // The latch still gates B until the turn is ended.
        let b = turns.active().cell;
        let (x, y) = px(b + IVec2::new(0, -1));
        assert_eq!(turns.handle_pointer_down(x, y), PointerOutcome::ActionSpent);
        assert_eq!(turns.active().cell, b);
    }

    #[test]
    fn attack_after_selection_without_move() {
        let mut turns = controller();
        let (x, y) = px(IVec2::new(9, 0));
        assert_eq!(
            turns.handle_pointer_down(x, y),
            PointerOutcome::OutOfRange { target: IVec2::new(9, 0) }
        );
        assert!(turns.attack());
        assert_eq!(turns.current_turn(), 1);
        assert_eq!(turns.selected(), None);
        assert!(!turns.is_action_completed());

        let b = turns.active().cell;
        let (x, y) = px(b + IVec2::new(1, -1));
        assert!(matches!(
            turns.handle_pointer_down(x, y),
            PointerOutcome::Moved { .. }
        ));
    }

    #[test]
    fn attack_without_selection_after_move_changes_nothing() {
        let mut turns = controller();
        let (x, y) = px(IVec2::new(3, 8));
        turns.handle_pointer_down(x, y);
        turns.attack();
        // Turn 1 has no selection yet.
        let before: Vec<IVec2> = turns.roster().iter().map(|c| c.cell).collect();
        assert!(!turns.attack());
        assert_eq!(turns.current_turn(), 1);
        assert_eq!(turns.selected(), None);
        assert!(turns.is_action_completed());
        let after: Vec<IVec2> = turns.roster().iter().map(|c| c.cell).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn end_turn_resets_latch_left_by_attack() {
        let mut turns = controller();
        let (x, y) = px(IVec2::new(3, 8));
        turns.handle_pointer_down(x, y);
        turns.attack();
        turns.end_turn();
        assert_eq!(turns.current_turn(), 2);
        assert!(!turns.is_action_completed());
    }

    #[test]
    fn first_click_selects_active_combatant() {
        let mut turns = controller();
        turns.end_turn();
        let (x, y) = px(IVec2::new(0, 0));
        let outcome = turns.handle_pointer_down(x, y);
        assert_eq!(turns.selected(), Some(1));
        assert_eq!(outcome, PointerOutcome::OutOfRange { target: IVec2::new(0, 0) });
    }

    #[test]
    fn move_applied_only_inside_five_by_five_box() {
        let start = IVec2::new(2, 9);
        for dx in -3..=3 {
            for dy in -3..=0 {
                let mut turns = controller();
                let target = start + IVec2::new(dx, dy);
                let (x, y) = px(target);
                turns.handle_pointer_down(x, y);

                let in_range = dx.abs() <= 2 && dy.abs() <= 2;
                let expected = if in_range { target } else { start };
                assert_eq!(turns.roster()[0].cell, expected, "offset ({dx}, {dy})");
                assert_eq!(turns.is_action_completed(), in_range);
            }
        }
    }

    #[test]
    fn second_click_after_move_is_gated() {
        let mut turns = controller();
        let (x, y) = px(IVec2::new(3, 8));
        turns.handle_pointer_down(x, y);
        let (x, y) = px(IVec2::new(4, 8));
        assert_eq!(turns.handle_pointer_down(x, y), PointerOutcome::ActionSpent);
        assert_eq!(turns.roster()[0].cell, IVec2::new(3, 8));
    }

    #[test]
    fn only_active_combatant_ever_moves() {
        let mut turns = controller();
        let before: Vec<IVec2> = turns.roster().iter().map(|c| c.cell).collect();
        let (x, y) = px(IVec2::new(4, 7));
        turns.handle_pointer_down(x, y);
        assert_eq!(turns.roster()[0].cell, IVec2::new(4, 7));
        assert_eq!(turns.roster()[1].cell, before[1]);
        assert_eq!(turns.roster()[2].cell, before[2]);
    }

    #[test]
    fn scenario_move_then_gate_then_end_turn() {
        let mut turns = controller();
        let a = turns.roster()[0].cell;

        let (x, y) = px(a + IVec2::new(2, -2));
        let outcome = turns.handle_pointer_down(x, y);
        assert_eq!(
            outcome,
            PointerOutcome::Moved {
                from: a,
                to: a + IVec2::new(2, -2)
            }
        );
        assert!(turns.is_action_completed());

        let (x, y) = px(a);
        turns.handle_pointer_down(x, y);
        assert_eq!(turns.roster()[0].cell, a + IVec2::new(2, -2));

        turns.end_turn();
        assert_eq!(turns.current_turn(), 1);
        assert!(!turns.is_action_completed());
        assert_eq!(turns.selected(), None);
    }

    #[test]
    fn scenario_three_cells_on_x_axis_is_rejected() {
        let mut turns = controller();
        let a = turns.roster()[0].cell;
        let (x, y) = px(a + IVec2::new(3, 0));
        turns.handle_pointer_down(x, y);
        assert_eq!(turns.roster()[0].cell, a);
        assert!(!turns.is_action_completed());
        assert_eq!(turns.current_turn(), 0);
    }

    #[test]
    fn selection_tracks_active_combatant_across_turns() {
        let mut turns = controller();
        for _ in 0..4 {
            let (x, y) = px(turns.active().cell);
            turns.handle_pointer_down(x, y);
            assert_eq!(turns.selected(), Some(turns.current_turn()));
            turns.end_turn();
            assert_eq!(turns.selected(), None);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "selection must be empty or the active combatant")]
    fn diverged_selection_is_caught() {
        let mut turns = controller();
        turns.selected = Some(2);
        turns.handle_pointer_down(0.0, 0.0);
    }

    #[test]
    fn extreme_and_nan_clicks_are_absorbed() {
        let mut turns = controller();
        let start = turns.active().cell;
        for (x, y) in [
            (-1.0e12, 0.0),
            (1.0e12, -1.0e12),
            (f32::NEG_INFINITY, f32::INFINITY),
            (f32::NAN, 0.0),
        ] {
            let outcome = turns.handle_pointer_down(x, y);
            assert!(
                matches!(outcome, PointerOutcome::OutOfRange { .. }),
                "({x}, {y}) gave {outcome:?}"
            );
        }
        assert_eq!(turns.active().cell, start);
        assert!(!turns.is_action_completed());
    }

    #[test]
    fn highlight_marks_only_active_slot() {
        let mut turns = controller();
        assert_eq!(
            turns.per_frame_highlight(),
            vec![Emphasis::Active, Emphasis::Dimmed, Emphasis::Dimmed]
        );
        turns.end_turn();
        turns.end_turn();
        let alphas: Vec<f32> = turns
            .per_frame_highlight()
            .into_iter()
            .map(Emphasis::alpha)
            .collect();
        assert_eq!(alphas, vec![0.5, 0.5, 1.0]);
    }

    #[test]
    fn pixel_positions_are_cell_centers() {
        let turns = TurnGridController::new(&default_catalog(), GridSpec::default())
            .expect("valid match");
        assert_eq!(turns.pixel_positions()[0], Vec2::new(200.0, 760.0));
    }

    #[test]
    fn empty_roster_fails_at_match_start() {
        let err = TurnGridController::new(&[], GridSpec::default()).expect_err("empty");
        assert!(err.contains("roster is empty"));
    }
}
