//! Team engine - owns squad state and advances it one gated tick at a time.
//!
//! The engine is a plain owned value: an external driver decides when ticks
//! happen and supplies both the random generator and the wall clock. A tick
//! updates every member in one pass before returning, so readers never see
//! a partially updated squad.

use chrono::{DateTime, Local, Timelike};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use sentinel_logic::aggregate::{summarize, TeamSummary};
use sentinel_logic::hazard::HazardPolicy;
use sentinel_logic::history::HistorySample;
use sentinel_logic::risk::RiskThresholds;

use crate::alert::ManualAlert;
use crate::member::{default_team, Member};
use crate::snapshot::TeamSnapshot;
use crate::telemetry::advance_telemetry;

/// Whether the simulation is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Active,
    Paused,
}

/// Which screen the operator is on. Ticking is suspended off the live view,
/// so archive browsing freezes the squad exactly as last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Live,
    Archive,
}

/// Owned squad state plus the scheduler gate.
#[derive(Debug, Clone)]
pub struct TeamEngine {
    members: Vec<Member>,
    thresholds: RiskThresholds,
    hazards: HazardPolicy,
    run_state: RunState,
    view: ViewMode,
    alert: Option<ManualAlert>,
    ticks_applied: u64,
}

impl TeamEngine {
    /// Standard squad at baseline, active on the live view.
    pub fn new(now: DateTime<Local>) -> Self {
        Self::with_team(
            default_team(now),
            RiskThresholds::default(),
            HazardPolicy::standard(),
        )
    }

    /// Custom squad, thresholds, and hazard policy.
    pub fn with_team(
        members: Vec<Member>,
        thresholds: RiskThresholds,
        hazards: HazardPolicy,
    ) -> Self {
        Self {
            members,
            thresholds,
            hazards,
            run_state: RunState::Active,
            view: ViewMode::Live,
            alert: None,
            ticks_applied: 0,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Ticks applied since construction.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    pub fn set_run_state(&mut self, state: RunState) {
        self.run_state = state;
    }

    /// Flip active/paused; returns the new state. Takes effect at the next
    /// tick boundary.
    pub fn toggle_run_state(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Active => RunState::Paused,
            RunState::Paused => RunState::Active,
        };
        self.run_state
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// True only while active on the live view.
    pub fn should_tick(&self) -> bool {
        self.run_state == RunState::Active && self.view == ViewMode::Live
    }

    /// Advance every member by one tick. Returns false (leaving the squad
    /// untouched) when the gate is closed; there is no catch-up of skipped
    /// ticks.
    pub fn tick(&mut self, rng: &mut impl Rng, now: DateTime<Local>) -> bool {
        if !self.should_tick() {
            return false;
        }

        let time_label = format!("{}:{}:{}", now.hour(), now.minute(), now.second());
        let now_ms = now.timestamp_millis();

        for member in &mut self.members {
            let out = advance_telemetry(
                rng,
                &member.vitals,
                &member.environment,
                member.fatigue_exact,
                member.role,
                &self.hazards,
                &self.thresholds,
            );
            member.vitals = out.vitals;
            member.environment = out.environment;
            member.status = out.status;
            member.fatigue_exact = out.fatigue_exact;
            member.history.push(HistorySample {
                time: time_label.clone(),
                heart_rate: out.vitals.heart_rate,
                gas: out.environment.carbon_monoxide,
            });
            member.last_update = now_ms;
        }

        if self
            .alert
            .as_ref()
            .is_some_and(|alert| alert.is_expired(now_ms))
        {
            self.alert = None;
        }

        self.ticks_applied += 1;
        debug!(
            "tick {} applied to {} members",
            self.ticks_applied,
            self.members.len()
        );
        true
    }

    /// Current squad rollup for the command display.
    pub fn summary(&self) -> TeamSummary {
        summarize(
            self.members
                .iter()
                .map(|m| (m.status, m.environment.carbon_monoxide)),
        )
    }

    /// Point-in-time copy for the advisory service; safe to read while the
    /// next tick mutates the engine.
    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot::capture(&self.members)
    }

    /// Store a supervisor alert verbatim, replacing any prior one. The
    /// engine does not interpret the message.
    pub fn issue_alert(
        &mut self,
        member_id: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Local>,
    ) {
        self.alert = Some(ManualAlert::new(member_id, message, now.timestamp_millis()));
    }

    /// The issued alert while it is still within its display window.
    pub fn active_alert(&self, now_ms: i64) -> Option<&ManualAlert> {
        self.alert.as_ref().filter(|alert| !alert.is_expired(now_ms))
    }
}
