//! Squad member entity and roster construction.

use chrono::{DateTime, Local};
use serde::Serialize;

use sentinel_logic::constants::{RosterEntry, MAX_HISTORY_POINTS, SQUAD_ROSTER};
use sentinel_logic::history::{HistorySample, TelemetryHistory};
use sentinel_logic::types::{Environment, MemberStatus, Role, Vitals};

/// One monitored responder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub vitals: Vitals,
    pub environment: Environment,
    pub status: MemberStatus,
    /// Epoch milliseconds of the last applied tick.
    pub last_update: i64,
    pub history: TelemetryHistory,
    /// Unrounded fatigue; `vitals.fatigue_level` is its rounded published
    /// view. Kept exact so the slow accrual rate is not lost to rounding.
    #[serde(skip)]
    pub(crate) fatigue_exact: f32,
}

impl Member {
    /// Create a member at baseline readings with a flat pre-filled history.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        now: DateTime<Local>,
    ) -> Self {
        let vitals = Vitals::default();
        let environment = Environment::default();
        let seed = HistorySample {
            time: String::new(),
            heart_rate: vitals.heart_rate,
            gas: environment.carbon_monoxide,
        };
        Self {
            id: id.into(),
            name: name.into(),
            role,
            vitals,
            environment,
            status: MemberStatus::Safe,
            last_update: now.timestamp_millis(),
            history: TelemetryHistory::filled(MAX_HISTORY_POINTS, seed),
            fatigue_exact: vitals.fatigue_level as f32,
        }
    }

    fn from_roster(entry: &RosterEntry, now: DateTime<Local>) -> Self {
        Self::new(entry.id, entry.name, entry.role, now)
    }
}

/// The standard squad at baseline, in roster order.
pub fn default_team(now: DateTime<Local>) -> Vec<Member> {
    SQUAD_ROSTER
        .iter()
        .map(|entry| Member::from_roster(entry, now))
        .collect()
}
