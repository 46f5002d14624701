//! Squad-wide rollups for the command display.

use serde::Serialize;

use crate::types::MemberStatus;

/// Status counts plus the squad's mean CO exposure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub safe: usize,
    pub caution: usize,
    pub critical: usize,
    pub offline: usize,
    /// Rounded mean CO across the squad (ppm). Zero for an empty squad.
    pub average_gas: u32,
}

impl TeamSummary {
    pub fn total(&self) -> usize {
        self.safe + self.caution + self.critical + self.offline
    }
}

/// Fold current (status, CO ppm) readings into a summary.
///
/// An empty squad yields all zeroes; the mean is guarded, never a division
/// by zero.
pub fn summarize<I>(readings: I) -> TeamSummary
where
    I: IntoIterator<Item = (MemberStatus, u32)>,
{
    let mut summary = TeamSummary::default();
    let mut total_gas: u64 = 0;
    let mut count: u64 = 0;

    for (status, co) in readings {
        match status {
            MemberStatus::Safe => summary.safe += 1,
            MemberStatus::Caution => summary.caution += 1,
            MemberStatus::Critical => summary.critical += 1,
            MemberStatus::Offline => summary.offline += 1,
        }
        total_gas += u64::from(co);
        count += 1;
    }

    if count > 0 {
        summary.average_gas = (total_gas as f64 / count as f64).round() as u32;
    }
    summary
}
