//! Squad roster and simulation-wide constants.
//!
//! Both the engine and the native simtest harness read these.

use crate::types::Role;

/// Samples kept in each member's trend history.
pub const MAX_HISTORY_POINTS: usize = 20;

/// Seconds between simulation ticks while live.
pub const TICK_PERIOD_SECS: u64 = 1;

/// One roster slot — fixed identity assigned at process start.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
}

/// The standard six-member response squad.
pub const SQUAD_ROSTER: [RosterEntry; 6] = [
    RosterEntry {
        id: "NDRF-01",
        name: "Mohan",
        role: Role::SquadLeader,
    },
    RosterEntry {
        id: "NDRF-02",
        name: "Mari",
        role: Role::Medic,
    },
    RosterEntry {
        id: "NDRF-03",
        name: "Junaith",
        role: Role::HazmatSpecialist,
    },
    RosterEntry {
        id: "NDRF-04",
        name: "Dakshin",
        role: Role::Breacher,
    },
    RosterEntry {
        id: "NDRF-05",
        name: "Nithiin",
        role: Role::Comms,
    },
    RosterEntry {
        id: "NDRF-06",
        name: "Kiruba Sree",
        role: Role::DronePilot,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique() {
        for (i, a) in SQUAD_ROSTER.iter().enumerate() {
            for b in &SQUAD_ROSTER[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate roster id {}", a.id);
            }
        }
    }

    #[test]
    fn test_roster_has_one_hazmat_specialist() {
        let count = SQUAD_ROSTER
            .iter()
            .filter(|e| e.role == Role::HazmatSpecialist)
            .count();
        assert_eq!(count, 1);
    }
}
