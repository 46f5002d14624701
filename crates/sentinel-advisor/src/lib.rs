//! Advisory bridge to the Gemini tactical analysis service.
//!
//! Serializes a squad snapshot into a fixed instruction prompt, requests a
//! schema-constrained JSON reply, and validates that reply strictly. Every
//! failure — connect error, timeout, bad status, empty or malformed reply —
//! degrades to the same fixed fallback assessment, so the caller always
//! gets a usable result. The only error a caller ever sees is the busy
//! rejection when a scan is already in flight.

pub mod assessment;
pub mod client;
pub mod gemini;

pub use assessment::{RiskAssessment, RiskLevel};
pub use client::{AdvisoryClient, AdvisoryConfig, AdvisoryError};
