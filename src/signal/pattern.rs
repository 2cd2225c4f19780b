use std::time::Duration;

/// One timed segment of a light signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalStep {
    /// How long this step lasts, in milliseconds (always positive)
    pub duration_ms: u64,
    /// Whether the light emits during this step
    pub on: bool,
}

impl SignalStep {
    pub const fn on(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            on: true,
        }
    }

    pub const fn off(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            on: false,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// ...---... followed by a long pause before the next repetition
pub const SOS_PATTERN: [SignalStep; 18] = [
    // S
    SignalStep::on(200),
    SignalStep::off(200),
    SignalStep::on(200),
    SignalStep::off(200),
    SignalStep::on(200),
    SignalStep::off(600),
    // O
    SignalStep::on(600),
    SignalStep::off(200),
    SignalStep::on(600),
    SignalStep::off(200),
    SignalStep::on(600),
    SignalStep::off(600),
    // S
    SignalStep::on(200),
    SignalStep::off(200),
    SignalStep::on(200),
    SignalStep::off(200),
    SignalStep::on(200),
    SignalStep::off(3000),
];

/// Step at `index`, wrapping around the end of the pattern
pub fn step_at(index: usize) -> SignalStep {
    SOS_PATTERN[index % SOS_PATTERN.len()]
}

/// Length of one full repetition of the pattern
pub fn cycle_duration() -> Duration {
    Duration::from_millis(SOS_PATTERN.iter().map(|s| s.duration_ms).sum())
}

/// Offset of each step's start from the beginning of a cycle
pub fn step_offsets() -> impl Iterator<Item = (Duration, SignalStep)> {
    SOS_PATTERN.into_iter().scan(Duration::ZERO, |elapsed, step| {
        let start = *elapsed;
        *elapsed += step.duration();
        Some((start, step))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_has_eighteen_steps() {
        assert_eq!(SOS_PATTERN.len(), 18);
    }

    #[test]
    fn test_every_duration_is_positive() {
        assert!(SOS_PATTERN.iter().all(|s| s.duration_ms > 0));
    }

    #[test]
    fn test_steps_alternate_on_and_off() {
        for (i, step) in SOS_PATTERN.iter().enumerate() {
            assert_eq!(step.on, i % 2 == 0, "Step {} has wrong polarity", i);
        }
    }

    #[test]
    fn test_flash_lengths_spell_sos() {
        let flashes: Vec<u64> = SOS_PATTERN
            .iter()
            .filter(|s| s.on)
            .map(|s| s.duration_ms)
            .collect();
        assert_eq!(flashes, vec![200, 200, 200, 600, 600, 600, 200, 200, 200]);
    }

    #[test]
    fn test_pattern_ends_with_long_pause() {
        assert_eq!(SOS_PATTERN[17], SignalStep::off(3000));
    }

    #[test]
    fn test_step_at_wraps() {
        for i in 0..18 {
            assert_eq!(step_at(i), step_at(i + 18));
            assert_eq!(step_at(i), step_at(i + 18 * 7));
        }
    }

    #[test]
    fn test_cycle_duration() {
        assert_eq!(cycle_duration(), Duration::from_millis(8400));
    }

    #[test]
    fn test_step_offsets_are_cumulative() {
        let offsets: Vec<u64> = step_offsets()
            .map(|(start, _)| start.as_millis() as u64)
            .take(8)
            .collect();
        assert_eq!(offsets, vec![0, 200, 400, 600, 800, 1000, 1600, 2200]);
    }
}
