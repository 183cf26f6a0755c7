//! Seeded synthetic datasets for tests and examples.
//!
//! Each generator plays the role of the external data source: it produces a
//! feature matrix whose rows correspond 1:1 and in order to a target vector.
//! The signal is planted in the first channel or two so linear estimators can
//! recover it; the remaining channels carry pure noise. All randomness comes
//! from a caller-supplied seed.

use std::f32::consts::{PI, TAU};

use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::Dataset;

/// `n` angles evenly spaced over `[0, 2π)`.
pub fn evenly_spaced_angles(n: usize) -> Array1<f32> {
    Array1::from_iter((0..n).map(|k| k as f32 * TAU / n as f32))
}

/// Circular targets: uniform angles with their cos/sin planted in the first
/// two channels.
///
/// Channel 0 carries `cos θ` and channel 1 carries `sin θ`, each perturbed by
/// uniform noise of the given amplitude; any further channels are pure noise.
///
/// # Panics
///
/// If `n_channels < 2` or `n_trials == 0`.
pub fn synthetic_circular(n_trials: usize, n_channels: usize, seed: u64, noise: f32) -> Dataset {
    assert!(n_channels >= 2, "circular data needs at least two channels");
    let mut rng = StdRng::seed_from_u64(seed);

    let angles = Array1::from_iter((0..n_trials).map(|_| rng.gen::<f32>() * TAU - PI));

    let mut features = Array2::<f32>::zeros((n_trials, n_channels));
    for (i, &theta) in angles.iter().enumerate() {
        features[[i, 0]] = theta.cos() + noise * uniform_unit(&mut rng);
        features[[i, 1]] = theta.sin() + noise * uniform_unit(&mut rng);
        for j in 2..n_channels {
            features[[i, j]] = noise * uniform_unit(&mut rng);
        }
    }

    Dataset::new(features, angles).expect("generated shapes are consistent")
}

/// Binary targets: alternating labels with a separated first channel.
///
/// Labels alternate 0/1 by trial index, so any contiguous split keeps both
/// classes on both sides. Channel 0 sits at `±separation/2` by class with
/// bounded uniform noise of amplitude 0.5; further channels are pure noise.
///
/// # Panics
///
/// If `n_channels == 0` or `n_trials == 0`.
pub fn synthetic_binary(n_trials: usize, n_channels: usize, seed: u64, separation: f32) -> Dataset {
    assert!(n_channels >= 1, "binary data needs at least one channel");
    let mut rng = StdRng::seed_from_u64(seed);

    let labels = Array1::from_iter((0..n_trials).map(|i| (i % 2) as f32));

    let mut features = Array2::<f32>::zeros((n_trials, n_channels));
    for (i, &label) in labels.iter().enumerate() {
        let sign = label * 2.0 - 1.0;
        features[[i, 0]] = sign * separation / 2.0 + 0.5 * uniform_unit(&mut rng);
        for j in 1..n_channels {
            features[[i, j]] = 0.5 * uniform_unit(&mut rng);
        }
    }

    Dataset::new(features, labels).expect("generated shapes are consistent")
}

/// Ordinal targets: a linear ramp over `[-1, 1]` planted in channel 0.
///
/// Targets increase monotonically with trial index; channel 0 carries the
/// target plus uniform noise of the given amplitude, further channels are
/// pure noise.
///
/// # Panics
///
/// If `n_channels == 0` or `n_trials < 2`.
pub fn synthetic_ordinal(n_trials: usize, n_channels: usize, seed: u64, noise: f32) -> Dataset {
    assert!(n_channels >= 1, "ordinal data needs at least one channel");
    assert!(n_trials >= 2, "a ramp needs at least two trials");
    let mut rng = StdRng::seed_from_u64(seed);

    let targets =
        Array1::from_iter((0..n_trials).map(|i| -1.0 + 2.0 * i as f32 / (n_trials - 1) as f32));

    let mut features = Array2::<f32>::zeros((n_trials, n_channels));
    for (i, &t) in targets.iter().enumerate() {
        features[[i, 0]] = t + noise * uniform_unit(&mut rng);
        for j in 1..n_channels {
            features[[i, j]] = noise * uniform_unit(&mut rng);
        }
    }

    Dataset::new(features, targets).expect("generated shapes are consistent")
}

fn uniform_unit(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_seed_deterministic() {
        let a = synthetic_circular(20, 3, 42, 0.1);
        let b = synthetic_circular(20, 3, 42, 0.1);
        assert_eq!(a.features(), b.features());
        assert_eq!(a.targets(), b.targets());

        let c = synthetic_circular(20, 3, 43, 0.1);
        assert_ne!(a.targets(), c.targets());
    }

    #[test]
    fn circular_angles_are_in_one_period() {
        let ds = synthetic_circular(50, 2, 1, 0.0);
        assert!(ds.targets().iter().all(|&t| (-PI..PI).contains(&t)));
    }

    #[test]
    fn binary_labels_alternate() {
        let ds = synthetic_binary(10, 2, 9, 2.0);
        assert_eq!(ds.targets().to_vec(), vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn ordinal_targets_ramp_monotonically() {
        let ds = synthetic_ordinal(11, 2, 9, 0.1);
        let t = ds.targets();
        assert_eq!(t[0], -1.0);
        assert_eq!(t[10], 1.0);
        assert!(t.iter().zip(t.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn evenly_spaced_angles_cover_the_circle() {
        let a = evenly_spaced_angles(4);
        assert_eq!(a.len(), 4);
        assert_eq!(a[0], 0.0);
        assert!((a[2] - PI).abs() < 1e-6);
    }
}
