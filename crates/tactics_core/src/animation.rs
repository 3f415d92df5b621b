//! Frame-based sprite animation types and deterministic tick logic.
//!
//! Clips are sequences of atlas frame names with per-frame durations. Timing
//! uses integer microseconds so advancement under the fixed-step clock never
//! drifts.

/// A single frame in an animation clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    pub frame_name: String,
    pub duration_us: u64,
}

/// A named sequence of frames that can loop or play once.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub frames: Vec<AnimationFrame>,
    pub looping: bool,
}

impl AnimationClip {
    /// Build a clip from numbered atlas frames: `<prefix><start..=end, zero padded>`.
    ///
    /// `walk.` with 0..=3 and padding 3 gives `walk.000` through `walk.003`.
    pub fn from_numbered_frames(
        prefix: &str,
        start: u32,
        end: u32,
        zero_pad: usize,
        frame_rate: u32,
        looping: bool,
    ) -> Self {
        let duration_us = 1_000_000 / u64::from(frame_rate.max(1));
        let frames = (start..=end)
            .map(|n| AnimationFrame {
                frame_name: format!("{prefix}{n:0zero_pad$}"),
                duration_us,
            })
            .collect();
        Self { frames, looping }
    }
}

/// Runtime state for one playing clip.
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub clip_name: String,
    pub frame_index: usize,
    pub elapsed_us: u64,
    pub finished: bool,
}

impl AnimationState {
    pub fn new(clip_name: &str) -> Self {
        Self {
            clip_name: clip_name.to_string(),
            frame_index: 0,
            elapsed_us: 0,
            finished: false,
        }
    }

    /// Advance by `dt_us` microseconds and return the current frame name.
    pub fn tick<'a>(&mut self, dt_us: u64, clip: &'a AnimationClip) -> &'a str {
        if clip.frames.is_empty() || self.finished {
            return if let Some(frame) = clip.frames.get(self.frame_index) {
                &frame.frame_name
            } else if let Some(frame) = clip.frames.last() {
                &frame.frame_name
            } else {
                ""
            };
        }

        self.elapsed_us += dt_us;

        loop {
            let current_frame = &clip.frames[self.frame_index];
            if self.elapsed_us < current_frame.duration_us {
                break;
            }

            self.elapsed_us -= current_frame.duration_us;
            self.frame_index += 1;

            if self.frame_index >= clip.frames.len() {
                if clip.looping {
                    self.frame_index = 0;
                } else {
                    self.frame_index = clip.frames.len() - 1;
                    self.elapsed_us = 0;
                    self.finished = true;
                    break;
                }
            }
        }

        &clip.frames[self.frame_index].frame_name
    }
}
