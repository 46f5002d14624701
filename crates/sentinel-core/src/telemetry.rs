//! Per-tick telemetry update for one member.
//!
//! The environment is drifted first (with any role-keyed gas spike applied
//! before the CO drift), vitals respond to the *new* environment, status is
//! classified from the new raw values, and only then is everything rounded
//! for publication. Heart rate and SpO2 seek stress-dependent targets via
//! mean-reverting volatility: the further a signal sits from its target,
//! the larger the biased step, without ever forcing a deterministic pull.

use rand::Rng;

use sentinel_logic::hazard::HazardPolicy;
use sentinel_logic::risk::{classify, RiskThresholds};
use sentinel_logic::types::{Environment, MemberStatus, Role, Vitals};

use crate::drift::drift;

/// Tuning constants for the update.
pub mod tuning {
    /// CO drift band (ppm).
    pub const CO_MIN: f32 = 0.0;
    pub const CO_MAX: f32 = 200.0;
    /// CO volatility per tick.
    pub const CO_VOLATILITY: f32 = 2.0;

    /// Ambient temperature drift band (°C).
    pub const TEMP_MIN: f32 = 20.0;
    pub const TEMP_MAX: f32 = 60.0;
    /// Ambient temperature volatility per tick.
    pub const TEMP_VOLATILITY: f32 = 0.5;

    /// Heart rate band (bpm).
    pub const HR_MIN: f32 = 50.0;
    pub const HR_MAX: f32 = 200.0;
    /// Resting heart-rate target (bpm).
    pub const HR_REST_TARGET: f32 = 75.0;
    /// Added to the target under gas stress.
    pub const HR_GAS_PUSH: f32 = 30.0;
    /// Added to the target under heat stress.
    pub const HR_HEAT_PUSH: f32 = 20.0;
    /// Heart-rate volatility before the mean-reversion term.
    pub const HR_BASE_VOLATILITY: f32 = 3.0;

    /// SpO2 band (%).
    pub const SPO2_MIN: f32 = 70.0;
    pub const SPO2_MAX: f32 = 100.0;
    /// SpO2 target under normal air.
    pub const SPO2_NORMAL_TARGET: f32 = 98.0;
    /// SpO2 target once CO displaces enough oxygen.
    pub const SPO2_HYPOXIC_TARGET: f32 = 85.0;
    /// SpO2 volatility before the mean-reversion term.
    pub const SPO2_BASE_VOLATILITY: f32 = 1.0;

    /// CO level past which the heart-rate target rises.
    pub const GAS_STRESS_CO: f32 = 30.0;
    /// CO level past which SpO2 seeks the hypoxic target.
    pub const HYPOXIA_CO: f32 = 60.0;
    /// Ambient temperature past which heat stress applies.
    pub const HEAT_STRESS_TEMP: f32 = 40.0;
    /// CO level past which fatigue accrues at the working rate.
    pub const FATIGUE_STRESS_CO: f32 = 40.0;

    /// Mean-reversion gain — volatility grows by this per unit of distance
    /// from target.
    pub const TARGET_PULL: f32 = 0.1;

    /// Fatigue accrual per tick while gassed or overheated.
    pub const FATIGUE_FAST_RATE: f32 = 0.5;
    /// Fatigue accrual per tick at rest.
    pub const FATIGUE_SLOW_RATE: f32 = 0.05;
    /// Fatigue saturation point.
    pub const FATIGUE_CAP: f32 = 100.0;
}

/// New published state for one member after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub vitals: Vitals,
    pub environment: Environment,
    pub status: MemberStatus,
    /// Unrounded fatigue carried to the next tick.
    pub fatigue_exact: f32,
}

/// Advance one member's telemetry by a single tick.
///
/// Pure given the generator: state in, state out, no shared mutation. The
/// generator is consulted once for the hazard roll (only when the role has
/// a profile) and once per drifted signal.
pub fn advance_telemetry(
    rng: &mut impl Rng,
    vitals: &Vitals,
    environment: &Environment,
    fatigue_exact: f32,
    role: Role,
    policy: &HazardPolicy,
    thresholds: &RiskThresholds,
) -> TickOutcome {
    use tuning::*;

    // Role-keyed gas spike, rolled before the CO drift.
    let spike = match policy.profile(role) {
        Some(p) if rng.gen::<f32>() < p.gas_spike_chance => p.gas_spike_ppm,
        _ => 0.0,
    };

    let co = drift(
        rng,
        environment.carbon_monoxide as f32 + spike,
        CO_MIN,
        CO_MAX,
        CO_VOLATILITY,
    );
    let ambient = drift(
        rng,
        environment.temperature as f32,
        TEMP_MIN,
        TEMP_MAX,
        TEMP_VOLATILITY,
    );

    // Heart rate seeks a target raised by gas and heat stress (additive).
    let mut hr_target = HR_REST_TARGET;
    if co > GAS_STRESS_CO {
        hr_target += HR_GAS_PUSH;
    }
    if ambient > HEAT_STRESS_TEMP {
        hr_target += HR_HEAT_PUSH;
    }
    let hr_now = vitals.heart_rate as f32;
    let heart_rate = drift(
        rng,
        hr_now,
        HR_MIN,
        HR_MAX,
        HR_BASE_VOLATILITY + (hr_target - hr_now) * TARGET_PULL,
    );

    let spo2_target = if co > HYPOXIA_CO {
        SPO2_HYPOXIC_TARGET
    } else {
        SPO2_NORMAL_TARGET
    };
    let spo2_now = vitals.spo2 as f32;
    let spo2 = drift(
        rng,
        spo2_now,
        SPO2_MIN,
        SPO2_MAX,
        SPO2_BASE_VOLATILITY + (spo2_target - spo2_now) * TARGET_PULL,
    );

    // Fatigue only accrues, faster while gassed or overheated.
    let rate = if co > FATIGUE_STRESS_CO || ambient > HEAT_STRESS_TEMP {
        FATIGUE_FAST_RATE
    } else {
        FATIGUE_SLOW_RATE
    };
    let fatigue = (fatigue_exact + rate).min(FATIGUE_CAP);

    // Classify on the raw values, then round for publication.
    let status = classify(thresholds, co, heart_rate, spo2);

    TickOutcome {
        vitals: Vitals {
            heart_rate: heart_rate.round() as u32,
            spo2: spo2.round() as u32,
            fatigue_level: fatigue.round() as u32,
            body_temp: (ambient * 10.0).round() / 10.0,
        },
        environment: Environment {
            carbon_monoxide: co.round() as u32,
            temperature: ambient.round() as i32,
            smoke_density: (co / 2.0).round() as u32,
            is_safe: status.is_safe(),
        },
        status,
        fatigue_exact: fatigue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sentinel_logic::hazard::HazardProfile;

    fn baseline() -> (Vitals, Environment) {
        (Vitals::default(), Environment::default())
    }

    #[test]
    fn test_spike_hits_only_roles_with_a_profile() {
        let policy = HazardPolicy::standard();
        let thresholds = RiskThresholds::default();
        let (vitals, environment) = baseline();

        for role in [
            Role::SquadLeader,
            Role::Medic,
            Role::HazmatSpecialist,
            Role::Breacher,
            Role::Comms,
            Role::DronePilot,
        ] {
            // Every draw is 0.0, so the 5% roll always fires and every
            // drift takes its lowest step.
            let mut rng = StepRng::new(0, 0);
            let out = advance_telemetry(
                &mut rng,
                &vitals,
                &environment,
                10.0,
                role,
                &policy,
                &thresholds,
            );
            if role == Role::HazmatSpecialist {
                // 5 + 15 spike, then a -1.0 CO step.
                assert_eq!(out.environment.carbon_monoxide, 19, "{role:?}");
            } else {
                assert_eq!(out.environment.carbon_monoxide, 4, "{role:?}");
            }
        }
    }

    #[test]
    fn test_spike_never_fires_on_failed_roll() {
        let policy = HazardPolicy::standard();
        let thresholds = RiskThresholds::default();
        let (vitals, environment) = baseline();

        // Draws sit just below 1.0, far above the 5% chance.
        let mut rng = StepRng::new(u64::MAX, 0);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            10.0,
            Role::HazmatSpecialist,
            &policy,
            &thresholds,
        );
        // 5 + a (just under) +1.0 CO step, no spike.
        assert_eq!(out.environment.carbon_monoxide, 6);
    }

    #[test]
    fn test_fatigue_accrues_slowly_at_rest() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let (vitals, environment) = baseline();

        // Low draws keep CO and temperature under their stress levels, so
        // the rest rate applies.
        let mut rng = StepRng::new(0, 0);
        let mut fatigue = 10.0;
        for _ in 0..4 {
            let out = advance_telemetry(
                &mut rng,
                &vitals,
                &environment,
                fatigue,
                Role::Medic,
                &policy,
                &thresholds,
            );
            fatigue = out.fatigue_exact;
            assert_eq!(out.vitals.fatigue_level, 10, "rounded view moved early");
        }
        assert!((fatigue - 10.2).abs() < 1e-4);
    }

    #[test]
    fn test_fatigue_accrues_fast_when_gassed() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let vitals = Vitals::default();
        let environment = Environment {
            carbon_monoxide: 120,
            ..Default::default()
        };

        let mut rng = StdRng::seed_from_u64(3);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            40.0,
            Role::Breacher,
            &policy,
            &thresholds,
        );
        assert!((out.fatigue_exact - 40.5).abs() < 1e-4);
    }

    #[test]
    fn test_fatigue_saturates_at_cap() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let vitals = Vitals::default();
        let environment = Environment {
            carbon_monoxide: 150,
            ..Default::default()
        };

        let mut rng = StdRng::seed_from_u64(4);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            99.8,
            Role::Comms,
            &policy,
            &thresholds,
        );
        assert_eq!(out.fatigue_exact, 100.0);
        assert_eq!(out.vitals.fatigue_level, 100);
    }

    #[test]
    fn test_status_follows_raw_gas_level() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let vitals = Vitals::default();
        let environment = Environment {
            carbon_monoxide: 150,
            ..Default::default()
        };

        let mut rng = StdRng::seed_from_u64(5);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            10.0,
            Role::Medic,
            &policy,
            &thresholds,
        );
        assert_eq!(out.status, MemberStatus::Critical);
        assert!(!out.environment.is_safe);
    }

    #[test]
    fn test_smoke_density_is_half_the_gas() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let vitals = Vitals::default();
        let environment = Environment {
            carbon_monoxide: 80,
            ..Default::default()
        };

        // Zero draws: CO steps down by exactly 1.0 to 79, smoke rounds 39.5
        // up to 40.
        let mut rng = StepRng::new(0, 0);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            10.0,
            Role::Medic,
            &policy,
            &thresholds,
        );
        assert_eq!(out.environment.carbon_monoxide, 79);
        assert_eq!(out.environment.smoke_density, 40);
    }

    #[test]
    fn test_body_temp_tracks_ambient_to_one_decimal() {
        let policy = HazardPolicy::none();
        let thresholds = RiskThresholds::default();
        let (vitals, environment) = baseline();

        // Zero draws: ambient 28 steps down by 0.25 to 27.75, one decimal 27.8.
        let mut rng = StepRng::new(0, 0);
        let out = advance_telemetry(
            &mut rng,
            &vitals,
            &environment,
            10.0,
            Role::Medic,
            &policy,
            &thresholds,
        );
        assert!((out.vitals.body_temp - 27.8).abs() < 1e-4);
        assert_eq!(out.environment.temperature, 28);
    }

    #[test]
    fn test_same_seed_reproduces_outcome() {
        let policy = HazardPolicy::standard();
        let thresholds = RiskThresholds::default();
        let (vitals, environment) = baseline();

        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let out_a = advance_telemetry(
            &mut a,
            &vitals,
            &environment,
            10.0,
            Role::HazmatSpecialist,
            &policy,
            &thresholds,
        );
        let out_b = advance_telemetry(
            &mut b,
            &vitals,
            &environment,
            10.0,
            Role::HazmatSpecialist,
            &policy,
            &thresholds,
        );
        assert_eq!(out_a, out_b);
    }
}
