//! Instantaneous amplitude, phase and frequency from an analytic signal

use num_complex::Complex64;
use std::f64::consts::PI;

/// Instantaneous amplitude `|z[m]|`
pub fn envelope_of(analytic: &[Complex64]) -> Vec<f64> {
    analytic.iter().map(|z| z.norm()).collect()
}

/// Instantaneous phase `atan2(im, re)` in radians, range [-π, π]
pub fn phase_of(analytic: &[Complex64]) -> Vec<f64> {
    analytic.iter().map(|z| z.arg()).collect()
}

/// Remove 2π jumps between consecutive phase samples
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return unwrapped;
    };

    unwrapped.push(first);
    let mut offset = 0.0;
    for pair in phase.windows(2) {
        let diff = pair[1] - pair[0];
        if diff > PI {
            offset -= 2.0 * PI;
        } else if diff < -PI {
            offset += 2.0 * PI;
        }
        unwrapped.push(pair[1] + offset);
    }

    unwrapped
}

/// First difference of an unwrapped phase, converted to Hz.
///
/// Returns `len - 1` values; empty when fewer than two samples.
pub(crate) fn frequency_from_phase(unwrapped: &[f64], sample_rate: f64) -> Vec<f64> {
    unwrapped
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) * sample_rate / (2.0 * PI))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_phase() {
        let z = [
            Complex64::new(3.0, 4.0),
            Complex64::new(0.0, -2.0),
            Complex64::new(-1.0, 0.0),
        ];

        assert_eq!(envelope_of(&z), vec![5.0, 2.0, 1.0]);

        let phase = phase_of(&z);
        assert!((phase[1] + PI / 2.0).abs() < 1e-12);
        assert!((phase[2] - PI).abs() < 1e-12);
    }

    #[test]
    fn test_unwrap_removes_jumps() {
        // Linear ramp of 1 rad/sample, wrapped into [-π, π]
        let ramp: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let wrapped: Vec<f64> = ramp
            .iter()
            .map(|&p| Complex64::from_polar(1.0, p).arg())
            .collect();

        let unwrapped = unwrap_phase(&wrapped);
        for (a, b) in unwrapped.iter().zip(&ramp) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_unwrap_negative_ramp() {
        let ramp: Vec<f64> = (0..20).map(|i| -1.5 * i as f64).collect();
        let wrapped: Vec<f64> = ramp
            .iter()
            .map(|&p| Complex64::from_polar(1.0, p).arg())
            .collect();

        let unwrapped = unwrap_phase(&wrapped);
        for (a, b) in unwrapped.iter().zip(&ramp) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unwrap_empty() {
        assert!(unwrap_phase(&[]).is_empty());
    }

    #[test]
    fn test_frequency_from_phase() {
        // π/4 rad per sample at 8 Hz -> 1 Hz
        let phase: Vec<f64> = (0..5).map(|i| i as f64 * PI / 4.0).collect();
        let freq = frequency_from_phase(&phase, 8.0);

        assert_eq!(freq.len(), 4);
        for f in freq {
            assert!((f - 1.0).abs() < 1e-12);
        }
        assert!(frequency_from_phase(&[0.3], 8.0).is_empty());
    }
}
