#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PulseMode {
    Running,
    Paused,
}

const PULSE_SPEED: f64 = 1.8;
const MAX_FRAME_DELTA: f64 = 0.25;
const FULL_CYCLE: f64 = 2.0 * std::f64::consts::PI;

/// Advances the marker-pulse counter from a wall-clock sample. The
/// first sample only records the tick; large frame gaps are clamped so
/// a background tab does not fast-forward the pulse.
pub fn advance_pulse(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: PulseMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).max(0.0).min(MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_counter = match mode {
        PulseMode::Running => (counter + delta * PULSE_SPEED).rem_euclid(FULL_CYCLE),
        PulseMode::Paused => counter.rem_euclid(FULL_CYCLE),
    };

    (next_counter, Some(now_seconds))
}

#[cfg(test)]
mod tests {
    use super::{advance_pulse, PulseMode, FULL_CYCLE, MAX_FRAME_DELTA, PULSE_SPEED};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let start = 0.75;
        let (counter, last_tick) = advance_pulse(start, None, 10.0, PulseMode::Running);

        assert_close(counter, start);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn running_mode_advances_and_wraps() {
        let start = FULL_CYCLE - 0.01;
        let (counter, _) = advance_pulse(start, Some(4.0), 4.1, PulseMode::Running);

        assert!(counter < start);
        assert_close(counter, (start + 0.1 * PULSE_SPEED).rem_euclid(FULL_CYCLE));
    }

    #[test]
    fn large_gaps_are_clamped() {
        let (counter, _) = advance_pulse(0.0, Some(0.0), 100.0, PulseMode::Running);
        assert_close(counter, MAX_FRAME_DELTA * PULSE_SPEED);
    }

    #[test]
    fn paused_mode_only_records_the_tick() {
        let (counter, last_tick) = advance_pulse(1.0, Some(5.0), 9.0, PulseMode::Paused);
        assert_close(counter, 1.0);
        assert_eq!(last_tick, Some(9.0));
    }
}
