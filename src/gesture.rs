/// Activations required within the window before the unlock fires.
pub const UNLOCK_THRESHOLD: u32 = 5;
/// A gap longer than this between activations restarts the count.
pub const RESET_WINDOW_MS: f64 = 1000.0;

/// Turns rapid repeated activations of a single control (the nav logo) into
/// one unlock signal, guarding against accidental presses spread out over
/// time. Knows nothing about routing; the caller supplies the side effect.
///
/// State lives only for the lifetime of the page view.
#[derive(Debug, Clone, Default)]
pub struct GestureDetector {
    count: u32,
    last_activation: Option<f64>,
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one activation at `now_ms` (milliseconds, any monotonic or
    /// wall-clock origin). Returns `true` exactly when this activation is the
    /// one that unlocks, after which the count starts over.
    ///
    /// An activation arriving more than [`RESET_WINDOW_MS`] after the
    /// previous one always restarts the count at 1, even if it would have
    /// been the triggering one.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        match self.last_activation {
            Some(prev) if now_ms - prev <= RESET_WINDOW_MS => self.count += 1,
            _ => self.count = 1,
        }
        self.last_activation = Some(now_ms);

        if self.count >= UNLOCK_THRESHOLD {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(detector: &mut GestureDetector, times: &[f64]) -> Vec<bool> {
        times.iter().map(|t| detector.activate(*t)).collect()
    }

    #[test]
    fn test_five_rapid_activations_fire_once() {
        let mut detector = GestureDetector::new();
        let fired = run(&mut detector, &[0.0, 200.0, 400.0, 600.0, 800.0]);
        assert_eq!(fired, vec![false, false, false, false, true]);
        assert_eq!(detector.count(), 0);
    }

    #[test]
    fn test_slow_fifth_press_never_triggers() {
        let mut detector = GestureDetector::new();
        let fired = run(&mut detector, &[0.0, 200.0, 400.0, 600.0, 1700.0]);
        assert_eq!(fired, vec![false, false, false, false, false]);
        // the late press became a fresh count of 1
        assert_eq!(detector.count(), 1);
    }

    #[test]
    fn test_gap_always_restarts_count() {
        let mut detector = GestureDetector::new();
        // every press more than a window apart: count never leaves 1
        for t in [0.0, 1500.0, 3000.0, 4500.0, 6000.0, 7500.0] {
            assert!(!detector.activate(t));
            assert_eq!(detector.count(), 1);
        }
    }

    #[test]
    fn test_fires_once_per_five_within_window() {
        let mut detector = GestureDetector::new();
        // 10 activations 100ms apart: fires on the 5th and the 10th only
        let fired = run(
            &mut detector,
            &[
                0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0,
            ],
        );
        let fire_positions: Vec<usize> = fired
            .into_iter()
            .enumerate()
            .filter_map(|(i, f)| f.then_some(i))
            .collect();
        assert_eq!(fire_positions, vec![4, 9]);
    }

    #[test]
    fn test_exact_window_boundary_continues_count() {
        let mut detector = GestureDetector::new();
        // gaps of exactly 1000ms stay within the rolling window
        let fired = run(&mut detector, &[0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
        assert_eq!(fired, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_count_resumes_after_unlock() {
        let mut detector = GestureDetector::new();
        run(&mut detector, &[0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(detector.count(), 0);

        // the next press within the window starts a fresh count
        assert!(!detector.activate(500.0));
        assert_eq!(detector.count(), 1);
    }
}
