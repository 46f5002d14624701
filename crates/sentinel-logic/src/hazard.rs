//! Role-keyed gas-spike policy.
//!
//! Some roles work closer to the source of danger than the rest of the
//! squad. The policy table maps each such role to a chance-and-magnitude
//! profile consulted once per tick; roles absent from the table never
//! receive an injection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Per-tick injection odds and magnitude for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardProfile {
    /// Probability per tick that the spike fires, 0.0..=1.0.
    pub gas_spike_chance: f32,
    /// CO added when the spike fires (ppm).
    pub gas_spike_ppm: f32,
}

/// Lookup table from role to hazard profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HazardPolicy {
    profiles: HashMap<Role, HazardProfile>,
}

impl HazardPolicy {
    /// Empty policy — no role is ever spiked.
    pub fn none() -> Self {
        Self::default()
    }

    /// Standard field policy: hazmat specialists take a 15 ppm CO spike
    /// with 5% chance per tick while working the source.
    pub fn standard() -> Self {
        Self::default().with_profile(
            Role::HazmatSpecialist,
            HazardProfile {
                gas_spike_chance: 0.05,
                gas_spike_ppm: 15.0,
            },
        )
    }

    pub fn with_profile(mut self, role: Role, profile: HazardProfile) -> Self {
        self.profiles.insert(role, profile);
        self
    }

    pub fn profile(&self, role: Role) -> Option<HazardProfile> {
        self.profiles.get(&role).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_policy_covers_only_hazmat() {
        let policy = HazardPolicy::standard();
        let profile = policy
            .profile(Role::HazmatSpecialist)
            .expect("hazmat profile missing");
        assert!((profile.gas_spike_chance - 0.05).abs() < f32::EPSILON);
        assert!((profile.gas_spike_ppm - 15.0).abs() < f32::EPSILON);

        for role in [
            Role::SquadLeader,
            Role::Medic,
            Role::Breacher,
            Role::Comms,
            Role::DronePilot,
        ] {
            assert!(
                policy.profile(role).is_none(),
                "{role:?} should have no hazard profile"
            );
        }
    }

    #[test]
    fn test_with_profile_overrides() {
        let policy = HazardPolicy::none().with_profile(
            Role::Breacher,
            HazardProfile {
                gas_spike_chance: 1.0,
                gas_spike_ppm: 40.0,
            },
        );
        assert!(policy.profile(Role::Breacher).is_some());
        assert!(policy.profile(Role::HazmatSpecialist).is_none());
    }
}
