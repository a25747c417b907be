use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Tiny sine-scramble generator. The scene only draws on it for a small
/// anchor jitter at construction time, so statistical quality doesn't
/// matter; being seedable does, since rebuilds must be reproducible
/// under test.
#[derive(Clone)]
pub struct SinRng {
    state: f32,
}

impl SinRng {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: 0.2132454 + (seed % 65_536) as f32 * 0.618034,
        }
    }

    pub fn from_entropy() -> Self {
        let t = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_nanos();

        Self::with_seed(t as u32)
    }

    /// Next float in `[0, bound)`.
    pub fn float(&mut self, bound: f32) -> f32 {
        let mut a = self.state;

        a = a.sin();
        a *= 12427.0;

        self.state = a;

        a.rem_euclid(bound)
    }

    /// Next float in `[-bound, bound)`.
    pub fn float_signed(&mut self, bound: f32) -> f32 {
        self.float(bound * 2.0) - bound
    }
}
