//! Time-based fades for panels and the article overlay

/// Fade length in seconds
pub const FADE_DURATION: f64 = 0.5;

/// Vertical slide distance over a fade (pixels)
pub const FADE_RISE: f32 = 20.0;

/// A fade-and-slide started at a point in time. Entering content rises
/// into place from below; exiting content keeps rising as it fades out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    started_at: f64,
    duration: f64,
    exiting: bool,
}

impl Fade {
    pub fn start(now: f64) -> Self {
        Self { started_at: now, duration: FADE_DURATION, exiting: false }
    }

    pub fn exit(now: f64) -> Self {
        Self { exiting: true, ..Self::start(now) }
    }

    /// 0.0 at start, 1.0 once finished (eased out)
    pub fn progress(&self, now: f64) -> f32 {
        let t = ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32;
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= self.duration
    }

    pub fn opacity(&self, now: f64) -> f32 {
        let p = self.progress(now);
        if self.exiting { 1.0 - p } else { p }
    }

    /// Vertical offset from the content's resting place (positive is down)
    pub fn offset_y(&self, now: f64) -> f32 {
        let p = self.progress(now);
        if self.exiting { -FADE_RISE * p } else { FADE_RISE * (1.0 - p) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let fade = Fade::start(10.0);
        assert_eq!(fade.opacity(10.0), 0.0);
        assert_eq!(fade.offset_y(10.0), FADE_RISE);
        assert_eq!(fade.opacity(10.5), 1.0);
        assert_eq!(fade.offset_y(11.0), 0.0);
        assert!(fade.opacity(10.25) < 1.0);
        // Clock before start clamps
        assert_eq!(fade.opacity(9.0), 0.0);
    }

    #[test]
    fn test_fade_is_monotonic() {
        let fade = Fade::start(0.0);
        let mut last = -1.0;
        for i in 0..=10 {
            let p = fade.progress(i as f64 * 0.05);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_exit_fades_out_and_rises() {
        let fade = Fade::exit(2.0);
        assert_eq!(fade.opacity(2.0), 1.0);
        assert_eq!(fade.offset_y(2.0), 0.0);
        assert!(!fade.is_finished(2.25));
        assert!(fade.opacity(2.25) > 0.0 && fade.opacity(2.25) < 1.0);

        assert!(fade.is_finished(2.5));
        assert_eq!(fade.opacity(2.5), 0.0);
        assert_eq!(fade.offset_y(3.0), -FADE_RISE);
    }
}
