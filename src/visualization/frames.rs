use log::{log_enabled, trace, Level};

use crate::simulation::engine::FrameObserver;
use crate::simulation::states::{NVec2, Universe};

/// Position mapped into display space, where `[-radius, radius]` on each axis
/// becomes `[-1, 1]`
pub fn display_coords(position: NVec2, radius: f64) -> NVec2 {
    position / radius
}

/// Frame sink that traces each body's display coordinates every
/// `interval` frames
#[derive(Debug, Clone)]
pub struct FrameLogger {
    interval: usize,
    frames: usize, // frames received
}

impl FrameLogger {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FrameObserver for FrameLogger {
    fn on_frame(&mut self, universe: &Universe, t: f64) {
        let frame = self.frames;
        self.frames += 1;

        if frame % self.interval != 0 || !log_enabled!(Level::Trace) {
            return;
        }

        trace!("frame {} at t = {:e}", frame, t);
        for b in &universe.bodies {
            let d = display_coords(b.position(), universe.radius);
            trace!("  {:<16} ({:+.4}, {:+.4})", b.label(), d.x, d.y);
        }
    }
}
