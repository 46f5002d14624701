//! Point-in-time squad projection for the advisory service.

use serde::{Deserialize, Serialize};

use sentinel_logic::types::MemberStatus;

use crate::member::Member;

/// Reduced per-member view sent to the advisory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub name: String,
    /// Role display label.
    pub role: String,
    pub hr: u32,
    pub spo2: u32,
    pub fatigue: u32,
    pub co_gas: u32,
    pub env_temp: i32,
    pub status: MemberStatus,
}

/// Whole-squad snapshot. Serializes as a bare array, the shape embedded in
/// the advisory prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamSnapshot {
    pub members: Vec<MemberSnapshot>,
}

impl TeamSnapshot {
    /// Copy the current squad into an owned projection.
    pub fn capture(members: &[Member]) -> Self {
        Self {
            members: members
                .iter()
                .map(|m| MemberSnapshot {
                    name: m.name.clone(),
                    role: m.role.label().to_string(),
                    hr: m.vitals.heart_rate,
                    spo2: m.vitals.spo2,
                    fatigue: m.vitals.fatigue_level,
                    co_gas: m.environment.carbon_monoxide,
                    env_temp: m.environment.temperature,
                    status: m.status,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
