//! Energy retention analysis for oscillator runs.

use serde::{Deserialize, Serialize};

/// Fraction of samples in each of the early and late averaging windows.
pub const WINDOW_FRACTION: f64 = 0.1;

/// Retention above which a run counts as self-sustaining.
pub const SELF_SUSTAINING_RETENTION: f64 = 0.8;

/// Retention above which a run counts as partially sustaining.
pub const PARTIAL_RETENTION: f64 = 0.5;

/// Classification of late-window energy against early-window energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainmentVerdict {
    /// Retention > 80 %.
    SelfSustaining,
    /// Retention > 50 %.
    PartiallySustaining,
    /// Retention ≤ 50 %.
    Decaying,
}

impl SustainmentVerdict {
    /// Classify an energy retention ratio.
    pub fn from_retention(retention: f64) -> Self {
        if retention > SELF_SUSTAINING_RETENTION {
            SustainmentVerdict::SelfSustaining
        } else if retention > PARTIAL_RETENTION {
            SustainmentVerdict::PartiallySustaining
        } else {
            SustainmentVerdict::Decaying
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SustainmentVerdict::SelfSustaining => "Self-sustaining",
            SustainmentVerdict::PartiallySustaining => "Partially sustaining",
            SustainmentVerdict::Decaying => "Decaying",
        }
    }
}

impl std::fmt::Display for SustainmentVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Energy statistics over a sequence of total-energy samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub initial: f64,
    pub final_energy: f64,
    /// Mean over the first 10 % of samples.
    pub early_mean: f64,
    /// Mean over the last 10 % of samples.
    pub late_mean: f64,
    /// `late_mean / early_mean`, or 0 when the early mean is not positive.
    pub retention: f64,
    pub verdict: SustainmentVerdict,
}

impl EnergyReport {
    /// Analyze total energy samples in time order.
    ///
    /// Each window holds at least one sample. Returns `None` when `energies`
    /// is empty.
    pub fn from_energies(energies: &[f64]) -> Option<Self> {
        let initial = *energies.first()?;
        let final_energy = *energies.last()?;

        let window = ((energies.len() as f64 * WINDOW_FRACTION) as usize).max(1);
        let mean = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
        let early_mean = mean(&energies[..window]);
        let late_mean = mean(&energies[energies.len() - window..]);

        let retention = if early_mean > 0.0 {
            late_mean / early_mean
        } else {
            0.0
        };

        Some(Self {
            initial,
            final_energy,
            early_mean,
            late_mean,
            retention,
            verdict: SustainmentVerdict::from_retention(retention),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds_are_strict() {
        assert_eq!(
            SustainmentVerdict::from_retention(0.81),
            SustainmentVerdict::SelfSustaining
        );
        assert_eq!(
            SustainmentVerdict::from_retention(0.8),
            SustainmentVerdict::PartiallySustaining
        );
        assert_eq!(
            SustainmentVerdict::from_retention(0.5),
            SustainmentVerdict::Decaying
        );
    }

    #[test]
    fn test_empty_energies() {
        assert!(EnergyReport::from_energies(&[]).is_none());
    }

    #[test]
    fn test_constant_energy_is_self_sustaining() {
        let report = EnergyReport::from_energies(&[2.0; 50]).unwrap();
        assert_eq!(report.retention, 1.0);
        assert_eq!(report.verdict, SustainmentVerdict::SelfSustaining);
    }

    #[test]
    fn test_windows() {
        // 20 samples → windows of 2.
        let energies: Vec<f64> = (0..20).map(|i| 20.0 - i as f64).collect();
        let report = EnergyReport::from_energies(&energies).unwrap();
        assert_eq!(report.initial, 20.0);
        assert_eq!(report.final_energy, 1.0);
        assert_eq!(report.early_mean, 19.5);
        assert_eq!(report.late_mean, 1.5);
        assert_eq!(report.verdict, SustainmentVerdict::Decaying);
    }

    #[test]
    fn test_single_sample() {
        let report = EnergyReport::from_energies(&[0.4]).unwrap();
        assert_eq!(report.early_mean, 0.4);
        assert_eq!(report.late_mean, 0.4);
    }

    #[test]
    fn test_zero_early_energy() {
        let report = EnergyReport::from_energies(&[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(report.retention, 0.0);
        assert_eq!(report.verdict, SustainmentVerdict::Decaying);
    }
}
