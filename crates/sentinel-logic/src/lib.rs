//! Pure squad-monitoring logic for Sentinel.
//!
//! This crate contains all domain logic that is independent of any runtime,
//! clock, or random source. Functions take plain data and return results,
//! making them unit-testable and portable between the simulation engine,
//! the headless simtest harness, and any future ingestion backend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`aggregate`] | Squad-wide status counts and mean gas exposure |
//! | [`constants`] | Roster, history capacity, tick period |
//! | [`hazard`] | Role-keyed gas-spike policy table |
//! | [`history`] | Fixed-length sliding window of trend samples |
//! | [`risk`] | Threshold table and the member status classifier |
//! | [`types`] | Vitals, environment, status, and role value types |

pub mod aggregate;
pub mod constants;
pub mod hazard;
pub mod history;
pub mod risk;
pub mod types;
