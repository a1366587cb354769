use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::viewport::ViewportController;

pub const DEFAULT_SEED: u64 = 1337;
pub const DEFAULT_SAMPLE_COUNT: usize = 3600;
/// Columns rendered even on narrow canvases.
pub const MIN_RENDER_STEPS: usize = 600;

const SILENCE_PROBABILITY: f64 = 0.28;
const AMPLITUDE_FLOOR: f64 = 0.02;

/// Synthetic amplitude envelope shaped like speech: quiet gaps between
/// voiced bursts. Visual only; it says nothing about the real audio.
#[derive(Debug, Clone, PartialEq)]
pub struct MockWaveform {
    samples: Vec<f64>,
}

impl Default for MockWaveform {
    fn default() -> Self {
        Self::generate(DEFAULT_SAMPLE_COUNT, DEFAULT_SEED)
    }
}

impl MockWaveform {
    pub fn generate(target_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(target_count);

        while samples.len() < target_count {
            let is_silence = rng.gen::<f64>() < SILENCE_PROBABILITY;
            let block_len = if is_silence {
                80 + (rng.gen::<f64>() * 140.0) as usize
            } else {
                170 + (rng.gen::<f64>() * 320.0) as usize
            };
            let phase1 = rng.gen::<f64>() * 2.0 * PI;
            let phase2 = rng.gen::<f64>() * 2.0 * PI;

            for i in 0..block_len {
                if samples.len() >= target_count {
                    break;
                }
                let t = i as f64 / (block_len.max(2) - 1) as f64;
                if is_silence {
                    let quiet = rng.gen_range(0.01..0.05);
                    samples.push(quiet + 0.01 * (10.0 * PI * t).sin());
                } else {
                    let envelope = (PI * t).sin();
                    let texture = 0.3 * (8.0 * PI * t + phase1).sin()
                        + 0.18 * (18.0 * PI * t + phase2).sin();
                    let pop = if rng.gen::<f64>() > 0.92 {
                        0.25 * rng.gen::<f64>()
                    } else {
                        0.0
                    };
                    let core = envelope * rng.gen_range(0.55..0.95) + texture.abs() + pop;
                    let air = 0.04 * rng.gen::<f64>();
                    samples.push((core + air).clamp(0.0, 1.0));
                }
            }
        }

        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Linear interpolation at a position in `[0, 1]` of the whole recording.
    pub fn sample_at(&self, normalized: f64) -> f64 {
        let Some(last) = self.samples.len().checked_sub(1) else {
            return 0.0;
        };
        let pos = normalized.clamp(0.0, 1.0) * last as f64;
        let idx = pos as usize;
        let frac = pos - idx as f64;
        let a = self.samples[idx];
        let b = self.samples[(idx + 1).min(last)];
        a + (b - a) * frac
    }

    /// Amplitude for `steps + 1` evenly spaced columns across the current view,
    /// with a small ripple so flat regions do not look dead.
    pub fn column_amplitudes(&self, viewport: &ViewportController, steps: usize) -> Vec<f64> {
        let steps = steps.max(1);
        let (view_start, view_end) = viewport.view();
        let duration = viewport.duration();
        (0..=steps)
            .map(|i| {
                let t_norm = i as f64 / steps as f64;
                let t_view = view_start + t_norm * (view_end - view_start);
                let global = if duration > 0.0 { t_view / duration } else { t_norm };
                let ripple = 0.06 * (16.0 * PI * t_norm).sin()
                    + 0.04 * (28.0 * PI * t_norm + 0.7).sin();
                (self.sample_at(global) + ripple).clamp(AMPLITUDE_FLOOR, 1.0)
            })
            .collect()
    }
}
