//! Core telemetry value types — vitals, environment, status, roles.
//!
//! Plain serde-derived data shared by the engine and every consumer.
//! `Default` for the record types yields the at-rest baseline used to seed
//! new members at process start.

use serde::{Deserialize, Serialize};

/// Discrete safety status derived for each member every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    /// All monitored signals within nominal bounds.
    Safe,
    /// At least one signal past its warning threshold.
    Caution,
    /// At least one signal past its critical threshold.
    Critical,
    /// Telemetry link lost. Reachable in the type for connectivity loss,
    /// never produced by the simulation.
    Offline,
}

impl MemberStatus {
    pub fn is_safe(self) -> bool {
        self == MemberStatus::Safe
    }
}

/// Squad role. Determines hazard exposure (see [`crate::hazard`]) and the
/// label shown to consumers; nothing else in the engine branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    SquadLeader,
    Medic,
    HazmatSpecialist,
    Breacher,
    Comms,
    DronePilot,
}

impl Role {
    /// Display label as worn on the uniform patch.
    pub fn label(self) -> &'static str {
        match self {
            Role::SquadLeader => "Squad Leader",
            Role::Medic => "Medic",
            Role::HazmatSpecialist => "Hazmat Spec",
            Role::Breacher => "Breacher",
            Role::Comms => "Comms",
            Role::DronePilot => "Drone Pilot",
        }
    }
}

/// Physiological readings for one member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
    /// Blood oxygen saturation, percent.
    pub spo2: u32,
    /// Accumulated fatigue, 0–100. Non-decreasing within a session.
    pub fatigue_level: u32,
    /// Body temperature in °C, one decimal.
    pub body_temp: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            heart_rate: 75,
            spo2: 98,
            fatigue_level: 10,
            body_temp: 36.5,
        }
    }
}

/// Ambient conditions at one member's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Carbon monoxide concentration in ppm.
    pub carbon_monoxide: u32,
    /// Ambient temperature in °C.
    pub temperature: i32,
    /// Derived smoke reading, half the CO concentration.
    pub smoke_density: u32,
    /// Mirror of `status == SAFE`, kept for display convenience.
    pub is_safe: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            carbon_monoxide: 5,
            temperature: 28,
            smoke_density: 0,
            is_safe: true,
        }
    }
}
