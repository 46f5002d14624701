//! Mission archive - seeded past-operation records and outcome statistics.
//!
//! Read-only reference data for the archive view. Nothing in the live
//! simulation writes here.

use serde::{Deserialize, Serialize};

/// Outcome of a completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionOutcome {
    Success,
    Failure,
    PartialSuccess,
    Aborted,
}

/// One archived operation, as browsed in the archive view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub id: String,
    pub codename: String,
    pub location: String,
    /// ISO date of the operation.
    pub date: String,
    /// Human-readable duration, e.g. "4h 20m".
    pub duration: String,
    pub outcome: MissionOutcome,
    pub team_leader: String,
    pub casualties: u32,
    pub civilians_saved: u32,
    pub report_summary: String,
    /// Operational efficiency grade, 0-100.
    pub efficiency_score: u32,
}

/// Rollup across archive records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub total_operations: usize,
    pub successes: usize,
    pub partials: usize,
    /// Failed and aborted operations combined.
    pub failures: usize,
    pub civilians_saved: u32,
    /// Percent of operations that fully succeeded. Zero for an empty
    /// archive.
    pub success_rate: u32,
}

/// Aggregate archive records for the archive view header.
pub fn archive_stats(records: &[MissionRecord]) -> ArchiveStats {
    let mut stats = ArchiveStats {
        total_operations: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.outcome {
            MissionOutcome::Success => stats.successes += 1,
            MissionOutcome::PartialSuccess => stats.partials += 1,
            MissionOutcome::Failure | MissionOutcome::Aborted => stats.failures += 1,
        }
        stats.civilians_saved += record.civilians_saved;
    }

    if stats.total_operations > 0 {
        stats.success_rate =
            (stats.successes as f64 / stats.total_operations as f64 * 100.0).round() as u32;
    }
    stats
}

/// The seeded archive browsed by the archive view.
pub fn standard_archive() -> Vec<MissionRecord> {
    vec![
        MissionRecord {
            id: "OP-2023-001".to_string(),
            codename: "Operation Crimson Tide".to_string(),
            location: "Industrial Zone 4".to_string(),
            date: "2023-11-15".to_string(),
            duration: "4h 20m".to_string(),
            outcome: MissionOutcome::Success,
            team_leader: "Mohan".to_string(),
            casualties: 0,
            civilians_saved: 12,
            report_summary:
                "Successful extraction of factory workers during chemical leak. Zero casualties."
                    .to_string(),
            efficiency_score: 98,
        },
        MissionRecord {
            id: "OP-2023-014".to_string(),
            codename: "Operation Silent Echo".to_string(),
            location: "North Ridge Tunnel".to_string(),
            date: "2023-12-02".to_string(),
            duration: "1h 45m".to_string(),
            outcome: MissionOutcome::Aborted,
            team_leader: "Mohan".to_string(),
            casualties: 0,
            civilians_saved: 0,
            report_summary:
                "Mission aborted due to severe seismic instability. Team pulled back safely."
                    .to_string(),
            efficiency_score: 50,
        },
        MissionRecord {
            id: "OP-2024-003".to_string(),
            codename: "Operation Firebird".to_string(),
            location: "Downtown Highrise".to_string(),
            date: "2024-01-10".to_string(),
            duration: "6h 10m".to_string(),
            outcome: MissionOutcome::PartialSuccess,
            team_leader: "Mohan".to_string(),
            casualties: 1,
            civilians_saved: 45,
            report_summary:
                "Major structural fire. 45 saved, 1 casualty due to smoke inhalation. Team exhaustion high."
                    .to_string(),
            efficiency_score: 78,
        },
        MissionRecord {
            id: "OP-2024-008".to_string(),
            codename: "Operation Deep Dive".to_string(),
            location: "Flood Zone B".to_string(),
            date: "2024-02-28".to_string(),
            duration: "8h 00m".to_string(),
            outcome: MissionOutcome::Failure,
            team_leader: "Dakshin".to_string(),
            casualties: 3,
            civilians_saved: 2,
            report_summary:
                "Equipment failure led to inability to reach trapped victims before water levels peaked."
                    .to_string(),
            efficiency_score: 35,
        },
        MissionRecord {
            id: "OP-2024-012".to_string(),
            codename: "Operation Iron Shield".to_string(),
            location: "Metro Station 5".to_string(),
            date: "2024-03-15".to_string(),
            duration: "3h 30m".to_string(),
            outcome: MissionOutcome::Success,
            team_leader: "Mohan".to_string(),
            casualties: 0,
            civilians_saved: 150,
            report_summary: "Crowd control and evacuation during gas scare. executed perfectly."
                .to_string(),
            efficiency_score: 100,
        },
        MissionRecord {
            id: "OP-2024-015".to_string(),
            codename: "Operation Nightfall".to_string(),
            location: "Old Quarry".to_string(),
            date: "2024-04-01".to_string(),
            duration: "5h 15m".to_string(),
            outcome: MissionOutcome::Success,
            team_leader: "Junaith".to_string(),
            casualties: 0,
            civilians_saved: 4,
            report_summary: "Extraction of hikers from ravine. Drone support (Kiruba Sree) was crucial."
                .to_string(),
            efficiency_score: 95,
        },
    ]
}
