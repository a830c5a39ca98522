//! Per-agent constants.
//!
//! Each agent draws its personality once at creation: a defense/attack mix
//! and a pair of exponents that skew how it values soldiers against towers.

use std::time::Duration;

use rand::Rng;

use crate::eval::Exponents;

/// Weight of history in the interaction average.
pub const LAST_MOVE_WEIGHT: f64 = 0.87;
/// Fraction of the fastest opponent's pace the agent plays at.
pub const FASTER_THAN_USER: f64 = 0.87;
pub const TIMEOUT_MIN: Duration = Duration::from_millis(1200);
pub const TIMEOUT_MAX: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub last_move_weight: f64,
    pub faster_than_user: f64,
    pub timeout_min: Duration,
    pub timeout_max: Duration,
    /// Defensive share of the behaviour mix, in percent.
    pub defense: u32,
    /// Aggressive share of the behaviour mix, in percent.
    pub attack: u32,
    pub exponents: Exponents,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            last_move_weight: LAST_MOVE_WEIGHT,
            faster_than_user: FASTER_THAN_USER,
            timeout_min: TIMEOUT_MIN,
            timeout_max: TIMEOUT_MAX,
            defense: 50,
            attack: 50,
            exponents: Exponents::default(),
        }
    }
}

impl Tuning {
    /// Draws a personality.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let behaviour: f64 = rng.gen_range(0.3..1.0);
        let weight: f64 = rng.gen_range(0.7..1.3);
        let percent = (weight * 100.0).round();
        Tuning {
            defense: (behaviour * 100.0).round() as u32,
            attack: ((1.0 - behaviour) * 100.0).round() as u32,
            exponents: Exponents {
                soldier: percent / 100.0,
                tower: 100.0 / percent,
            },
            ..Tuning::default()
        }
    }

    /// Clamps a raw delay in milliseconds to the allowed wake-up window.
    pub fn clamp_delay(&self, millis: f64) -> Duration {
        let min = self.timeout_min.as_secs_f64() * 1000.0;
        let max = self.timeout_max.as_secs_f64() * 1000.0;
        if !millis.is_finite() || millis < min {
            return self.timeout_min;
        }
        if millis > max {
            return self.timeout_max;
        }
        Duration::from_millis(millis.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_is_neutral() {
        let t = Tuning::default();
        assert_eq!(t.exponents, Exponents::default());
        assert_eq!(t.timeout_min, Duration::from_millis(1200));
        assert_eq!(t.timeout_max, Duration::from_millis(6000));
    }

    #[test]
    fn random_draws_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let t = Tuning::random(&mut rng);
            assert!((30..=100).contains(&t.defense));
            assert!(t.attack <= 70);
            assert!((99..=101).contains(&(t.defense + t.attack)));
            assert!(t.exponents.soldier >= 0.7 && t.exponents.soldier <= 1.3);
            // The two exponents are reciprocal up to rounding.
            assert!((t.exponents.soldier * t.exponents.tower - 1.0).abs() < 1e-9);
            assert_eq!(t.last_move_weight, LAST_MOVE_WEIGHT);
        }
    }

    #[test]
    fn delay_is_clamped() {
        let t = Tuning::default();
        assert_eq!(t.clamp_delay(0.0), Duration::from_millis(1200));
        assert_eq!(t.clamp_delay(2500.0), Duration::from_millis(2500));
        assert_eq!(t.clamp_delay(60_000.0), Duration::from_millis(6000));
        assert_eq!(t.clamp_delay(f64::NAN), Duration::from_millis(1200));
    }
}
