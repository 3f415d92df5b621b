use glam::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use tactics_core::input::Key;

use crate::scenes::{SceneId, UiButton};

/// A scripted play session: which scene to start in and what the player does.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionScript {
    #[serde(default = "default_frame_dt_ms")]
    pub frame_dt_ms: u64,
    #[serde(default = "default_start")]
    pub start: SceneId,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Left click at a pixel position, released the following frame.
    PointerDown { x: f32, y: f32 },
    /// Key held for exactly one frame.
    Press { key: Key },
    Hold { key: Key, frames: u32 },
    Wait { frames: u32 },
    Button { button: UiButton },
}

/// Everything the host reports for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub keys: Vec<Key>,
    pub pointer_down: Option<Vec2>,
    pub button: Option<UiButton>,
}

impl SessionScript {
    pub fn expanded_frames(&self) -> Vec<FrameInput> {
        let mut out = Vec::new();
        for step in &self.steps {
            match step {
                ScriptStep::PointerDown { x, y } => out.push(FrameInput {
                    pointer_down: Some(Vec2::new(*x, *y)),
                    ..FrameInput::default()
                }),
                ScriptStep::Press { key } => out.push(FrameInput {
                    keys: vec![*key],
                    ..FrameInput::default()
                }),
                ScriptStep::Hold { key, frames } => {
                    for _ in 0..*frames {
                        out.push(FrameInput {
                            keys: vec![*key],
                            ..FrameInput::default()
                        });
                    }
                }
                ScriptStep::Wait { frames } => {
                    out.extend((0..*frames).map(|_| FrameInput::default()));
                }
                ScriptStep::Button { button } => out.push(FrameInput {
                    button: Some(*button),
                    ..FrameInput::default()
                }),
            }
        }
        out
    }

    pub fn frame_dt_us(&self) -> u64 {
        self.frame_dt_ms * 1000
    }
}

pub fn load_script_from_path(path: &Path) -> Result<SessionScript, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
    let script: SessionScript = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse script JSON {}: {e}", path.display()))?;
    validate_script(&script)?;
    Ok(script)
}

fn validate_script(script: &SessionScript) -> Result<(), String> {
    if script.frame_dt_ms == 0 {
        return Err("Script validation failed: frame_dt_ms must be > 0".to_string());
    }
    if script.steps.is_empty() {
        return Err("Script validation failed: steps list is empty".to_string());
    }
    Ok(())
}

const fn default_frame_dt_ms() -> u64 {
    16
}

const fn default_start() -> SceneId {
    SceneId::CharacterSelect
}
