//! Sentinel Headless Simulation Harness
//!
//! Validates pure squad logic and seed data without the network or a
//! runtime. Runs entirely in-process — no HTTP, no timers, no rendering.
//!
//! Usage:
//!   cargo run -p sentinel-simtest
//!   cargo run -p sentinel-simtest -- --verbose

use chrono::Local;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sentinel_advisor::gemini::{GenerateContentRequest, GenerateContentResponse};
use sentinel_advisor::{RiskAssessment, RiskLevel};
use sentinel_core::alert::ALERT_VISIBLE_MS;
use sentinel_core::archive::{archive_stats, standard_archive};
use sentinel_core::drift::drift;
use sentinel_core::engine::{RunState, TeamEngine, ViewMode};
use sentinel_core::telemetry::advance_telemetry;
use sentinel_logic::aggregate::summarize;
use sentinel_logic::constants::{MAX_HISTORY_POINTS, SQUAD_ROSTER};
use sentinel_logic::hazard::{HazardPolicy, HazardProfile};
use sentinel_logic::history::{HistorySample, TelemetryHistory};
use sentinel_logic::risk::{classify, RiskThresholds};
use sentinel_logic::types::{Environment, MemberStatus, Role, Vitals};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn rank(status: MemberStatus) -> u8 {
    match status {
        MemberStatus::Safe => 0,
        MemberStatus::Caution => 1,
        MemberStatus::Critical => 2,
        MemberStatus::Offline => 3,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Sentinel Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Roster and archive seed data
    results.extend(validate_roster_data(verbose));

    // 2. Drift and clamping
    results.extend(validate_drift(verbose));

    // 3. Risk classification sweep
    results.extend(validate_risk(verbose));

    // 4. Trend history window
    results.extend(validate_history(verbose));

    // 5. Role-keyed hazard injection
    results.extend(validate_hazard(verbose));

    // 6. Full squad simulation
    results.extend(validate_simulation(verbose));

    // 7. Scheduler gating and alerts
    results.extend(validate_scheduler(verbose));

    // 8. Team aggregation
    results.extend(validate_aggregation(verbose));

    // 9. Advisory wire shapes
    results.extend(validate_advisory(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Roster & Archive Data ────────────────────────────────────────────

fn validate_roster_data(_verbose: bool) -> Vec<TestResult> {
    println!("--- Roster & Archive Data ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "roster_six_members".into(),
        passed: SQUAD_ROSTER.len() == 6,
        detail: format!("{} roster slots", SQUAD_ROSTER.len()),
    });

    let mut unique = true;
    for (i, a) in SQUAD_ROSTER.iter().enumerate() {
        for b in &SQUAD_ROSTER[i + 1..] {
            if a.id == b.id {
                unique = false;
            }
        }
    }
    results.push(TestResult {
        name: "roster_unique_callsigns".into(),
        passed: unique,
        detail: "no duplicate ids".into(),
    });

    let well_formed = SQUAD_ROSTER
        .iter()
        .all(|e| e.id.starts_with("NDRF-") && !e.name.is_empty());
    results.push(TestResult {
        name: "roster_id_format".into(),
        passed: well_formed,
        detail: "all ids NDRF-prefixed, all names set".into(),
    });

    let hazmat = SQUAD_ROSTER
        .iter()
        .filter(|e| e.role == Role::HazmatSpecialist)
        .count();
    results.push(TestResult {
        name: "roster_one_hazmat_specialist".into(),
        passed: hazmat == 1,
        detail: format!("{} hazmat specialist(s)", hazmat),
    });

    let records = standard_archive();
    let stats = archive_stats(&records);
    results.push(TestResult {
        name: "archive_rollup".into(),
        passed: stats.total_operations == 6
            && stats.successes + stats.partials + stats.failures == stats.total_operations
            && stats.civilians_saved == 213
            && stats.success_rate == 50,
        detail: format!(
            "{} ops: {} success / {} partial / {} failed, {} civilians, {}% rate",
            stats.total_operations,
            stats.successes,
            stats.partials,
            stats.failures,
            stats.civilians_saved,
            stats.success_rate
        ),
    });

    let dated = records.iter().all(|r| !r.date.is_empty() && !r.id.is_empty());
    results.push(TestResult {
        name: "archive_records_complete".into(),
        passed: dated,
        detail: "every record carries an id and a date".into(),
    });

    results
}

// ── 2. Drift & Clamping ─────────────────────────────────────────────────

fn validate_drift(_verbose: bool) -> Vec<TestResult> {
    println!("--- Drift & Clamping ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(11);
    let mut current = 50.0f32;
    let mut in_band = true;
    for _ in 0..10_000 {
        current = drift(&mut rng, current, 0.0, 100.0, 10.0);
        if !(0.0..=100.0).contains(&current) {
            in_band = false;
        }
    }
    results.push(TestResult {
        name: "drift_stays_in_band".into(),
        passed: in_band,
        detail: "10000 chained steps stayed in [0,100]".into(),
    });

    let mut max_step = 0.0f32;
    for _ in 0..1_000 {
        let next = drift(&mut rng, 50.0, 0.0, 100.0, 2.0);
        max_step = max_step.max((next - 50.0).abs());
    }
    results.push(TestResult {
        name: "drift_step_bounded_by_volatility".into(),
        passed: max_step <= 1.0,
        detail: format!("largest step {:.4} of allowed 1.0", max_step),
    });

    let mut low = StepRng::new(0, 0);
    let lowest = drift(&mut low, 50.0, 0.0, 100.0, 10.0);
    results.push(TestResult {
        name: "drift_lowest_draw".into(),
        passed: (lowest - 45.0).abs() < 1e-4,
        detail: format!("zero draw from 50 → {:.4}", lowest),
    });

    let mut high = StepRng::new(u64::MAX, 0);
    let highest = drift(&mut high, 50.0, 0.0, 100.0, 10.0);
    results.push(TestResult {
        name: "drift_highest_draw".into(),
        passed: highest > 54.99 && highest <= 55.0,
        detail: format!("top draw from 50 → {:.4}", highest),
    });

    let mut rng2 = StdRng::seed_from_u64(12);
    let pinned = (0..100).all(|_| drift(&mut rng2, 7.0, 7.0, 7.0, 50.0) == 7.0);
    results.push(TestResult {
        name: "drift_degenerate_band_pins".into(),
        passed: pinned,
        detail: "min == max pins the signal regardless of volatility".into(),
    });

    results
}

// ── 3. Risk Classification ──────────────────────────────────────────────

fn validate_risk(verbose: bool) -> Vec<TestResult> {
    println!("--- Risk Classification ---");
    let mut results = Vec::new();
    let t = RiskThresholds::default();

    let boundary_cases: [(f32, f32, f32, MemberStatus); 12] = [
        (50.0, 75.0, 98.0, MemberStatus::Safe),
        (51.0, 75.0, 98.0, MemberStatus::Caution),
        (100.0, 75.0, 98.0, MemberStatus::Caution),
        (101.0, 75.0, 98.0, MemberStatus::Critical),
        (5.0, 140.0, 98.0, MemberStatus::Safe),
        (5.0, 141.0, 98.0, MemberStatus::Caution),
        (5.0, 170.0, 98.0, MemberStatus::Caution),
        (5.0, 171.0, 98.0, MemberStatus::Critical),
        (5.0, 75.0, 92.0, MemberStatus::Safe),
        (5.0, 75.0, 91.0, MemberStatus::Caution),
        (5.0, 75.0, 88.0, MemberStatus::Caution),
        (5.0, 75.0, 87.0, MemberStatus::Critical),
    ];
    let hits = boundary_cases
        .iter()
        .filter(|(co, hr, spo2, expected)| classify(&t, *co, *hr, *spo2) == *expected)
        .count();
    results.push(TestResult {
        name: "risk_threshold_boundaries".into(),
        passed: hits == boundary_cases.len(),
        detail: format!("{}/{} boundary cases classified", hits, boundary_cases.len()),
    });

    let critical_wins = classify(&t, 150.0, 180.0, 70.0) == MemberStatus::Critical
        && classify(&t, 5.0, 75.0, 87.0) == MemberStatus::Critical
        && classify(&t, 60.0, 75.0, 98.0) == MemberStatus::Caution;
    results.push(TestResult {
        name: "risk_worst_signal_wins".into(),
        passed: critical_wins,
        detail: "a single bad signal is enough to raise the status".into(),
    });

    let mut monotone = true;
    let mut last = 0u8;
    for co in 0..=200u32 {
        let r = rank(classify(&t, co as f32, 75.0, 98.0));
        if r < last {
            monotone = false;
        }
        last = r;
    }
    last = 0;
    for hr in 50..=200u32 {
        let r = rank(classify(&t, 5.0, hr as f32, 98.0));
        if r < last {
            monotone = false;
        }
        last = r;
    }
    last = 0;
    for spo2 in (70..=100u32).rev() {
        let r = rank(classify(&t, 5.0, 75.0, spo2 as f32));
        if r < last {
            monotone = false;
        }
        last = r;
    }
    results.push(TestResult {
        name: "risk_monotone_per_signal".into(),
        passed: monotone,
        detail: "status never improves as a signal worsens".into(),
    });

    if verbose {
        let mut counts = [0u32; 3];
        for co in 0..=200u32 {
            let status = classify(&t, co as f32, 75.0, 98.0);
            counts[rank(status) as usize] += 1;
        }
        println!("  CO sweep 0..=200ppm status distribution:");
        println!("    SAFE    : {}", counts[0]);
        println!("    CAUTION : {}", counts[1]);
        println!("    CRITICAL: {}", counts[2]);
    }

    results
}

// ── 4. Trend History ────────────────────────────────────────────────────

fn validate_history(_verbose: bool) -> Vec<TestResult> {
    println!("--- Trend History ---");
    let mut results = Vec::new();

    let seed = HistorySample {
        time: String::new(),
        heart_rate: 75,
        gas: 5,
    };

    let window = TelemetryHistory::filled(MAX_HISTORY_POINTS, seed.clone());
    results.push(TestResult {
        name: "history_seeds_full".into(),
        passed: window.len() == MAX_HISTORY_POINTS,
        detail: format!("{} samples at creation", window.len()),
    });

    let mut window = TelemetryHistory::filled(MAX_HISTORY_POINTS, seed.clone());
    let mut pinned = true;
    for n in 0..100u32 {
        window.push(HistorySample {
            time: format!("9:4:{n}"),
            heart_rate: 75 + n,
            gas: n,
        });
        if window.len() != MAX_HISTORY_POINTS {
            pinned = false;
        }
    }
    results.push(TestResult {
        name: "history_length_pinned".into(),
        passed: pinned && window.latest().map(|s| s.gas) == Some(99),
        detail: "100 pushes kept the window at capacity, newest retained".into(),
    });

    let mut window = TelemetryHistory::filled(5, seed.clone());
    for n in 1..=8u32 {
        window.push(HistorySample {
            time: String::new(),
            heart_rate: 75,
            gas: n,
        });
    }
    let gases: Vec<u32> = window.iter().map(|s| s.gas).collect();
    results.push(TestResult {
        name: "history_evicts_oldest_first".into(),
        passed: gases == vec![4, 5, 6, 7, 8],
        detail: format!("window after 8 pushes: {:?}", gases),
    });

    let mut window = TelemetryHistory::filled(0, seed);
    window.push(HistorySample {
        time: String::new(),
        heart_rate: 75,
        gas: 1,
    });
    results.push(TestResult {
        name: "history_zero_capacity".into(),
        passed: window.is_empty(),
        detail: "zero-capacity window accepts nothing".into(),
    });

    results
}

// ── 5. Hazard Injection ─────────────────────────────────────────────────

fn validate_hazard(_verbose: bool) -> Vec<TestResult> {
    println!("--- Hazard Injection ---");
    let mut results = Vec::new();

    let policy = HazardPolicy::standard();
    let covered = policy.profile(Role::HazmatSpecialist).is_some();
    let spared = [
        Role::SquadLeader,
        Role::Medic,
        Role::Breacher,
        Role::Comms,
        Role::DronePilot,
    ]
    .iter()
    .all(|r| policy.profile(*r).is_none());
    results.push(TestResult {
        name: "hazard_standard_targets_hazmat_only".into(),
        passed: covered && spared,
        detail: "standard policy profiles exactly the hazmat specialist".into(),
    });

    let thresholds = RiskThresholds::default();
    let vitals = Vitals::default();
    let environment = Environment::default();

    // Zero draws force a winning roll and the lowest drift step everywhere.
    let mut spiked = 0;
    let mut calm = 0;
    for role in [
        Role::SquadLeader,
        Role::Medic,
        Role::HazmatSpecialist,
        Role::Breacher,
        Role::Comms,
        Role::DronePilot,
    ] {
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
        match out.environment.carbon_monoxide {
            19 => spiked += 1,
            4 => calm += 1,
            _ => {}
        }
    }
    results.push(TestResult {
        name: "hazard_spike_role_isolated".into(),
        passed: spiked == 1 && calm == 5,
        detail: format!("{} spiked (19ppm), {} calm (4ppm)", spiked, calm),
    });

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
    results.push(TestResult {
        name: "hazard_failed_roll_no_spike".into(),
        passed: out.environment.carbon_monoxide == 6,
        detail: format!(
            "losing roll → {}ppm, spike withheld",
            out.environment.carbon_monoxide
        ),
    });

    let custom = HazardPolicy::none().with_profile(
        Role::Comms,
        HazardProfile {
            gas_spike_chance: 1.0,
            gas_spike_ppm: 40.0,
        },
    );
    let mut rng = StepRng::new(0, 0);
    let out = advance_telemetry(
        &mut rng,
        &vitals,
        &environment,
        10.0,
        Role::Comms,
        &custom,
        &thresholds,
    );
    results.push(TestResult {
        name: "hazard_custom_profile_applies".into(),
        passed: out.environment.carbon_monoxide == 44,
        detail: format!(
            "certain 40ppm spike on comms → {}ppm",
            out.environment.carbon_monoxide
        ),
    });

    results
}

// ── 6. Full Squad Simulation ────────────────────────────────────────────

fn validate_simulation(verbose: bool) -> Vec<TestResult> {
    println!("--- Full Squad Simulation ---");
    let mut results = Vec::new();

    let mut engine = TeamEngine::new(Local::now());
    let mut rng = StdRng::seed_from_u64(42);

    let mut in_bounds = true;
    let mut fatigue_monotone = true;
    let mut smoke_coupled = true;
    let mut flag_coupled = true;
    let mut offline_seen = false;
    let mut last_fatigue: Vec<u32> = engine
        .members()
        .iter()
        .map(|m| m.vitals.fatigue_level)
        .collect();

    for _ in 0..120 {
        engine.tick(&mut rng, Local::now());
        for (m, prev) in engine.members().iter().zip(&last_fatigue) {
            let v = &m.vitals;
            let e = &m.environment;
            if e.carbon_monoxide > 200
                || !(20..=60).contains(&e.temperature)
                || !(50..=200).contains(&v.heart_rate)
                || !(70..=100).contains(&v.spo2)
                || v.fatigue_level > 100
            {
                in_bounds = false;
            }
            if v.fatigue_level < *prev {
                fatigue_monotone = false;
            }
            if (e.smoke_density * 2).abs_diff(e.carbon_monoxide) > 2 {
                smoke_coupled = false;
            }
            if e.is_safe != (m.status == MemberStatus::Safe) {
                flag_coupled = false;
            }
            if m.status == MemberStatus::Offline {
                offline_seen = true;
            }
        }
        last_fatigue = engine
            .members()
            .iter()
            .map(|m| m.vitals.fatigue_level)
            .collect();
    }

    results.push(TestResult {
        name: "sim_bounds_held".into(),
        passed: in_bounds,
        detail: "all vitals and environment stayed in their bands".into(),
    });
    results.push(TestResult {
        name: "sim_fatigue_monotone".into(),
        passed: fatigue_monotone,
        detail: "fatigue never decreased over 120 ticks".into(),
    });
    results.push(TestResult {
        name: "sim_smoke_tracks_gas".into(),
        passed: smoke_coupled,
        detail: "smoke density stayed at half the CO level".into(),
    });
    results.push(TestResult {
        name: "sim_safety_flag_coupled".into(),
        passed: flag_coupled,
        detail: "environment.is_safe always mirrored the member status".into(),
    });
    results.push(TestResult {
        name: "sim_no_offline_status".into(),
        passed: !offline_seen,
        detail: "the simulation never classified anyone OFFLINE".into(),
    });

    let history_full = engine
        .members()
        .iter()
        .all(|m| m.history.len() == MAX_HISTORY_POINTS && m.history.iter().all(|s| !s.time.is_empty()));
    results.push(TestResult {
        name: "sim_history_full_and_stamped".into(),
        passed: history_full,
        detail: "every member carries a full window of stamped samples".into(),
    });

    results.push(TestResult {
        name: "sim_tick_count".into(),
        passed: engine.ticks_applied() == 120,
        detail: format!("{} ticks applied", engine.ticks_applied()),
    });

    let t0 = Local::now();
    let mut a = TeamEngine::new(t0);
    let mut b = TeamEngine::new(t0);
    let mut rng_a = StdRng::seed_from_u64(4242);
    let mut rng_b = StdRng::seed_from_u64(4242);
    for _ in 0..60 {
        a.tick(&mut rng_a, t0);
        b.tick(&mut rng_b, t0);
    }
    results.push(TestResult {
        name: "sim_seeded_run_reproduces".into(),
        passed: a.members() == b.members(),
        detail: "same seed, same squad, member for member".into(),
    });

    if verbose {
        println!("  Final squad state after 120 ticks:");
        for m in engine.members() {
            println!(
                "    {} {:12} hr={:3} spo2={:3} co={:3} fatigue={:3} {:?}",
                m.id,
                m.role.label(),
                m.vitals.heart_rate,
                m.vitals.spo2,
                m.environment.carbon_monoxide,
                m.vitals.fatigue_level,
                m.status
            );
        }
    }

    results
}

// ── 7. Scheduler & Alerts ───────────────────────────────────────────────

fn validate_scheduler(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scheduler & Alerts ---");
    let mut results = Vec::new();

    let mut engine = TeamEngine::new(Local::now());
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        engine.tick(&mut rng, Local::now());
    }
    let mid_run = engine.clone();

    engine.set_run_state(RunState::Paused);
    let mut gated = true;
    for _ in 0..20 {
        if engine.tick(&mut rng, Local::now()) {
            gated = false;
        }
    }
    results.push(TestResult {
        name: "scheduler_pause_freezes".into(),
        passed: gated && engine.members() == mid_run.members(),
        detail: "20 gated ticks left the squad untouched".into(),
    });

    engine.set_run_state(RunState::Active);
    engine.set_view(ViewMode::Archive);
    for _ in 0..20 {
        engine.tick(&mut rng, Local::now());
    }
    results.push(TestResult {
        name: "scheduler_archive_view_freezes".into(),
        passed: engine.members() == mid_run.members() && engine.ticks_applied() == 30,
        detail: format!("{} ticks applied across 70 attempts", engine.ticks_applied()),
    });

    engine.set_view(ViewMode::Live);
    let resumed = engine.tick(&mut rng, Local::now());
    results.push(TestResult {
        name: "scheduler_live_resumes".into(),
        passed: resumed && engine.ticks_applied() == 31,
        detail: "tick applies again on return to the live view".into(),
    });

    let now = Local::now();
    let issued_ms = now.timestamp_millis();
    engine.issue_alert("NDRF-04", "Rotate out for air", now);
    let visible = engine.active_alert(issued_ms + ALERT_VISIBLE_MS - 1).is_some();
    let expired = engine.active_alert(issued_ms + ALERT_VISIBLE_MS).is_none();
    results.push(TestResult {
        name: "alert_window_expires".into(),
        passed: visible && expired,
        detail: format!(
            "visible through {}ms, gone at {}ms",
            ALERT_VISIBLE_MS - 1,
            ALERT_VISIBLE_MS
        ),
    });

    engine.issue_alert("NDRF-02", "Check on Dakshin", now);
    let replaced =
        engine.active_alert(issued_ms).map(|a| a.member_id.as_str()) == Some("NDRF-02");
    results.push(TestResult {
        name: "alert_newest_replaces".into(),
        passed: replaced,
        detail: "a follow-up alert displaces the prior one".into(),
    });

    results
}

// ── 8. Team Aggregation ─────────────────────────────────────────────────

fn validate_aggregation(_verbose: bool) -> Vec<TestResult> {
    println!("--- Team Aggregation ---");
    let mut results = Vec::new();

    let summary = summarize([
        (MemberStatus::Safe, 10),
        (MemberStatus::Caution, 60),
        (MemberStatus::Critical, 110),
    ]);
    results.push(TestResult {
        name: "aggregate_buckets_and_mean".into(),
        passed: summary.safe == 1
            && summary.caution == 1
            && summary.critical == 1
            && summary.average_gas == 60,
        detail: format!("1/1/1 buckets, avg {}ppm", summary.average_gas),
    });

    let empty = summarize(std::iter::empty());
    results.push(TestResult {
        name: "aggregate_empty_team".into(),
        passed: empty.total() == 0 && empty.average_gas == 0,
        detail: "empty roster rolls up to zeroes".into(),
    });

    let rounded = summarize([(MemberStatus::Safe, 5), (MemberStatus::Safe, 6)]);
    results.push(TestResult {
        name: "aggregate_mean_rounds".into(),
        passed: rounded.average_gas == 6,
        detail: format!("5.5ppm mean rounds to {}", rounded.average_gas),
    });

    let mixed = summarize([(MemberStatus::Offline, 0), (MemberStatus::Safe, 10)]);
    results.push(TestResult {
        name: "aggregate_offline_separate".into(),
        passed: mixed.offline == 1 && mixed.safe == 1 && mixed.total() == 2,
        detail: "offline counts in its own bucket".into(),
    });

    results
}

// ── 9. Advisory Wire Shapes ─────────────────────────────────────────────

fn validate_advisory(_verbose: bool) -> Vec<TestResult> {
    println!("--- Advisory Wire Shapes ---");
    let mut results = Vec::new();

    let fallback = RiskAssessment::fallback();
    results.push(TestResult {
        name: "advisory_fallback_fixed".into(),
        passed: fallback.summary == "AI Connection failed. Proceed with manual protocol."
            && fallback.immediate_actions
                == vec!["Check communication lines", "Monitor vitals manually"]
            && fallback.risk_level == RiskLevel::Moderate,
        detail: "fallback text, actions, and MODERATE level all fixed".into(),
    });

    let snapshot = TeamEngine::new(Local::now()).snapshot();
    let request = match GenerateContentRequest::tactical(&snapshot) {
        Ok(r) => r,
        Err(e) => {
            results.push(TestResult {
                name: "advisory_request_builds".into(),
                passed: false,
                detail: format!("request build failed: {}", e),
            });
            return results;
        }
    };
    let body = serde_json::to_value(&request).unwrap_or_default();
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let schema = &body["generationConfig"]["responseSchema"];
    let squad_named = snapshot
        .members
        .iter()
        .all(|m| prompt.contains(&format!("\"name\":\"{}\"", m.name)));
    results.push(TestResult {
        name: "advisory_request_shape".into(),
        passed: squad_named
            && body["generationConfig"]["responseMimeType"] == "application/json"
            && schema["required"].as_array().map(|r| r.len()) == Some(3),
        detail: "prompt embeds every member by name, config pins the reply schema".into(),
    });

    let reply = serde_json::json!({
        "candidates": [
            { "content": { "parts": [{ "text": "{\"ok\":true}" }] } }
        ]
    })
    .to_string();
    let envelope: GenerateContentResponse = serde_json::from_str(&reply).unwrap_or_default();
    results.push(TestResult {
        name: "advisory_reply_envelope_walk".into(),
        passed: envelope.first_text() == Some("{\"ok\":true}"),
        detail: "first candidate text extracted from the envelope".into(),
    });

    let parsed: Result<RiskAssessment, _> = serde_json::from_str(
        r#"{"summary":"Gas rising near the breach.","immediateActions":["Ventilate Area"],"riskLevel":"HIGH"}"#,
    );
    let strict: Result<RiskAssessment, _> = serde_json::from_str(
        r#"{"summary":"s","immediateActions":[],"riskLevel":"CATASTROPHIC"}"#,
    );
    results.push(TestResult {
        name: "advisory_assessment_parses".into(),
        passed: parsed.map(|a| a.risk_level == RiskLevel::High).unwrap_or(false)
            && strict.is_err(),
        detail: "valid reply parses, out-of-set risk level is rejected".into(),
    });

    results
}
