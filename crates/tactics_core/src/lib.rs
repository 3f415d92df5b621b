//! Engine-free game state for the tile tactics scenes.
//!
//! Nothing in this crate touches a window, a GPU or a file. Scenes in
//! `tactics_game` own these values and feed them input; the rendering side
//! only reads them back.

pub mod animation;
pub mod explore;
pub mod grid;
pub mod input;
pub mod roster;
pub mod selection;
pub mod time;
pub mod turn;
