//! Fixed-timestep frame clock in integer microseconds.
//!
//! The host loop reports how much time a frame took; the clock hands out
//! whole `fixed_dt_us` steps from an accumulator. Nothing here reads the wall
//! clock, so a scripted session replays identically.

pub const DEFAULT_FIXED_DT_US: u64 = 16_667;
const MAX_ACCUMULATOR_US: u64 = 250_000;

#[derive(Debug, Clone)]
pub struct FrameClock {
    pub fixed_dt_us: u64,
    pub max_accumulator_us: u64,
    accumulator_us: u64,
    pub total_us: u64,
    pub fixed_step_count: u64,
    pub frame_count: u64,
    pub steps_this_frame: u32,
}

impl FrameClock {
    pub fn new(fixed_dt_us: u64) -> Self {
        Self {
            fixed_dt_us: fixed_dt_us.max(1),
            max_accumulator_us: MAX_ACCUMULATOR_US,
            accumulator_us: 0,
            total_us: 0,
            fixed_step_count: 0,
            frame_count: 0,
            steps_this_frame: 0,
        }
    }

    pub fn begin_frame(&mut self, real_dt_us: u64) {
        let mut real_dt_us = real_dt_us;
        // Spiral-of-death cap
        if real_dt_us > self.max_accumulator_us {
            log::warn!(
                "Frame took {:.1}ms, capping to {}ms",
                real_dt_us as f64 / 1000.0,
                self.max_accumulator_us / 1000
            );
            real_dt_us = self.max_accumulator_us;
        }
        self.accumulator_us += real_dt_us;
        self.steps_this_frame = 0;
        self.frame_count += 1;
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator_us >= self.fixed_dt_us {
            self.accumulator_us -= self.fixed_dt_us;
            self.total_us += self.fixed_dt_us;
            self.fixed_step_count += 1;
            self.steps_this_frame += 1;
            true
        } else {
            false
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DT_US)
    }
}
