//! Sentinel Command Monitor
//!
//! Headless operations binary: drives the squad engine at the fixed tick
//! cadence, runs periodic advisory scans against the live snapshot, and
//! walks the command-post controls the way an operator would (pause,
//! archive review, manual alert).
//!
//! Usage:
//!   cargo run -p sentinel-monitor
//!   RUST_LOG=debug GEMINI_API_KEY=... cargo run -p sentinel-monitor

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tokio::time::{interval, MissedTickBehavior};

use sentinel_advisor::{AdvisoryClient, AdvisoryConfig, AdvisoryError};
use sentinel_core::archive::{archive_stats, standard_archive};
use sentinel_core::prelude::*;
use sentinel_logic::constants::TICK_PERIOD_SECS;

/// Read a duration override from the environment, falling back to `default`
/// when the variable is unset. A set-but-unparseable value is an error, not
/// a silent fallback.
fn env_secs(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{name} must be a whole number of seconds, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let run_secs = env_secs("SENTINEL_RUN_SECS", 45)?;
    let scan_secs = env_secs("SENTINEL_SCAN_SECS", 15)?;
    let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; advisory scans will use the fallback");
    }

    let engine = Arc::new(RwLock::new(TeamEngine::new(Local::now())));
    let advisor = Arc::new(AdvisoryClient::new(AdvisoryConfig::new(api_key)));

    info!(
        "monitor up: {} members, tick every {TICK_PERIOD_SECS}s, advisory scan every {scan_secs}s",
        engine.read().await.members().len()
    );

    let ticker = tokio::spawn(run_ticker(Arc::clone(&engine)));
    let scanner = tokio::spawn(run_scanner(
        Arc::clone(&engine),
        Arc::clone(&advisor),
        scan_secs,
    ));

    // Scripted shift: live run, pause, archive review, manual alert.
    tokio::time::sleep(Duration::from_secs(run_secs)).await;

    {
        let mut engine = engine.write().await;
        engine.set_run_state(RunState::Paused);
        let summary = engine.summary();
        info!(
            "paused: safe={} caution={} critical={} offline={} avg_gas={}ppm",
            summary.safe, summary.caution, summary.critical, summary.offline, summary.average_gas
        );
    }
    tokio::time::sleep(Duration::from_secs(3)).await;

    {
        let mut engine = engine.write().await;
        engine.set_run_state(RunState::Active);
        engine.set_view(ViewMode::Archive);
    }
    review_archive();
    tokio::time::sleep(Duration::from_secs(2)).await;

    {
        let mut engine = engine.write().await;
        engine.set_view(ViewMode::Live);
        // Flag the most gassed member for withdrawal.
        if let Some(id) = engine
            .members()
            .iter()
            .max_by_key(|m| m.environment.carbon_monoxide)
            .map(|m| m.id.clone())
        {
            engine.issue_alert(id, "Withdraw to staging and reassess", Local::now());
            if let Some(alert) = engine.active_alert(Local::now().timestamp_millis()) {
                info!("{}", alert.banner());
            }
        }
    }
    tokio::time::sleep(Duration::from_secs(5)).await;

    ticker.abort();
    scanner.abort();

    let engine = engine.read().await;
    let summary = engine.summary();
    info!(
        "shift complete after {} ticks: safe={} caution={} critical={} avg_gas={}ppm",
        engine.ticks_applied(),
        summary.safe,
        summary.caution,
        summary.critical,
        summary.average_gas
    );
    Ok(())
}

/// Advance the squad at the fixed cadence. Missed ticks are skipped, never
/// bursted to catch up.
async fn run_ticker(engine: Arc<RwLock<TeamEngine>>) {
    let mut rng = StdRng::from_entropy();
    let mut cadence = interval(Duration::from_secs(TICK_PERIOD_SECS));
    cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        cadence.tick().await;
        let mut engine = engine.write().await;
        if engine.tick(&mut rng, Local::now()) {
            let summary = engine.summary();
            if summary.critical > 0 {
                warn!(
                    "{} member(s) critical, avg gas {}ppm",
                    summary.critical, summary.average_gas
                );
            }
            let thresholds = *engine.thresholds();
            let worn = engine
                .members()
                .iter()
                .filter(|m| {
                    m.vitals.fatigue_level as f32 > thresholds.fatigue_warning
                        || m.environment.temperature as f32 > thresholds.temp_high
                })
                .count();
            if worn > 0 {
                debug!("{worn} member(s) past the fatigue or heat warning level");
            }
        }
    }
}

/// Periodic advisory scans. Snapshots under the read lock, then calls the
/// service with the lock released so a slow reply never stalls the ticker.
async fn run_scanner(engine: Arc<RwLock<TeamEngine>>, advisor: Arc<AdvisoryClient>, scan_secs: u64) {
    let mut cadence = interval(Duration::from_secs(scan_secs.max(1)));
    cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first interval tick fires immediately; let the squad move first.
    cadence.tick().await;

    loop {
        cadence.tick().await;
        let snapshot = engine.read().await.snapshot();
        match advisor.assess(&snapshot).await {
            Ok(assessment) => {
                info!(
                    "advisory risk {:?}: {}",
                    assessment.risk_level, assessment.summary
                );
                for action in &assessment.immediate_actions {
                    info!("  action: {action}");
                }
            }
            Err(AdvisoryError::ScanInFlight) => {
                warn!("advisory scan still in flight, skipping this cycle");
            }
            Err(err) => warn!("advisory scan error: {err}"),
        }
    }
}

/// Log the mission archive the way the archive view lays it out.
fn review_archive() {
    let records = standard_archive();
    let stats = archive_stats(&records);
    info!(
        "archive: {} operations, {}% success rate, {} civilians saved",
        stats.total_operations, stats.success_rate, stats.civilians_saved
    );
    for record in &records {
        info!(
            "  {} {} at {} [{:?}] led by {}: {}",
            record.date,
            record.codename,
            record.location,
            record.outcome,
            record.team_leader,
            record.report_summary
        );
    }
}
