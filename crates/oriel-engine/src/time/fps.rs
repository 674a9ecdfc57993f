use std::time::{Duration, Instant};

/// Frame-rate and delta-time bookkeeping for a single window.
///
/// `tick()` is called once per presented frame. The rate is recomputed once
/// per second rather than per frame so the reported value is stable enough to
/// display.
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    start: Instant,
    last_tick: Instant,
    window_start: Instant,
    frames: u32,
    rate: f32,
}

const DT_MAX: Duration = Duration::from_millis(250);
const RATE_WINDOW: Duration = Duration::from_secs(1);

impl FpsCounter {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            window_start: now,
            frames: 0,
            rate: 0.0,
        }
    }

    /// Advances the counter; call once per buffer swap.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.last_tick = now;
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= RATE_WINDOW {
            self.rate = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
        }
    }

    /// Most recently computed frame rate. Zero until one full rate window has
    /// elapsed.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.rate
    }

    /// Seconds since the previous tick, clamped to keep downstream systems
    /// stable after long stalls.
    pub fn dt(&self) -> f32 {
        Instant::now()
            .saturating_duration_since(self.last_tick)
            .min(DT_MAX)
            .as_secs_f32()
    }

    /// Time since the counter was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_zero_before_first_window() {
        let mut fps = FpsCounter::new();
        fps.tick();
        fps.tick();
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn dt_is_non_negative_and_clamped() {
        let fps = FpsCounter::new();
        std::thread::sleep(Duration::from_millis(2));
        let dt = fps.dt();
        assert!(dt >= 0.0);
        assert!(dt <= DT_MAX.as_secs_f32());
    }

    #[test]
    fn elapsed_grows() {
        let fps = FpsCounter::new();
        std::thread::sleep(Duration::from_millis(2));
        assert!(fps.elapsed() >= Duration::from_millis(1));
    }
}
