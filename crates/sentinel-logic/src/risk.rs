//! Risk classification over gas exposure and vitals.
//!
//! A pure, total function of (CO, heart rate, SpO2) evaluated in strict
//! priority order — critical rules first, then caution, else safe. Every
//! threshold lives in [`RiskThresholds`] so operational tuning never touches
//! the classification logic itself.

use serde::{Deserialize, Serialize};

use crate::types::MemberStatus;

/// Alarm thresholds for the classifier plus advisory levels flagged by
/// displays. All values compare against raw (unrounded) readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Heart rate above this raises a caution (bpm).
    pub heart_rate_high: f32,
    /// Heart rate above this is critical (bpm).
    pub heart_rate_critical: f32,
    /// SpO2 below this raises a caution (%).
    pub spo2_low: f32,
    /// SpO2 below this is critical (%).
    pub spo2_critical: f32,
    /// CO above this raises a caution (ppm).
    pub co_ppm_warning: f32,
    /// CO above this is critical (ppm).
    pub co_ppm_critical: f32,
    /// Fatigue level highlighted by displays (%). Not used for classification.
    pub fatigue_warning: f32,
    /// Ambient temperature highlighted by displays (°C). Not used for
    /// classification.
    pub temp_high: f32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            heart_rate_high: 140.0,
            heart_rate_critical: 170.0,
            spo2_low: 92.0,
            spo2_critical: 88.0,
            co_ppm_warning: 50.0,
            co_ppm_critical: 100.0,
            fatigue_warning: 75.0,
            temp_high: 45.0,
        }
    }
}

/// Classify a member from raw readings. First match wins: a reading past a
/// critical threshold outranks any number of caution-level readings.
pub fn classify(t: &RiskThresholds, co: f32, heart_rate: f32, spo2: f32) -> MemberStatus {
    if co > t.co_ppm_critical || heart_rate > t.heart_rate_critical || spo2 < t.spo2_critical {
        MemberStatus::Critical
    } else if co > t.co_ppm_warning || heart_rate > t.heart_rate_high || spo2 < t.spo2_low {
        MemberStatus::Caution
    } else {
        MemberStatus::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal() -> (f32, f32, f32) {
        (5.0, 75.0, 98.0)
    }

    fn rank(status: MemberStatus) -> u8 {
        match status {
            MemberStatus::Safe => 0,
            MemberStatus::Caution => 1,
            MemberStatus::Critical => 2,
            MemberStatus::Offline => 3,
        }
    }

    #[test]
    fn test_nominal_readings_are_safe() {
        let (co, hr, spo2) = nominal();
        let t = RiskThresholds::default();
        assert_eq!(classify(&t, co, hr, spo2), MemberStatus::Safe);
    }

    #[test]
    fn test_co_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(classify(&t, 50.0, 75.0, 98.0), MemberStatus::Safe);
        assert_eq!(classify(&t, 51.0, 75.0, 98.0), MemberStatus::Caution);
        assert_eq!(
            classify(&t, 100.0, 75.0, 98.0),
            MemberStatus::Caution,
            "CO exactly at the critical threshold is not yet critical"
        );
        assert_eq!(classify(&t, 101.0, 75.0, 98.0), MemberStatus::Critical);
    }

    #[test]
    fn test_heart_rate_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(classify(&t, 5.0, 140.0, 98.0), MemberStatus::Safe);
        assert_eq!(classify(&t, 5.0, 141.0, 98.0), MemberStatus::Caution);
        assert_eq!(classify(&t, 5.0, 170.0, 98.0), MemberStatus::Caution);
        assert_eq!(classify(&t, 5.0, 171.0, 98.0), MemberStatus::Critical);
    }

    #[test]
    fn test_spo2_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(classify(&t, 5.0, 75.0, 92.0), MemberStatus::Safe);
        assert_eq!(classify(&t, 5.0, 75.0, 91.0), MemberStatus::Caution);
        assert_eq!(
            classify(&t, 5.0, 75.0, 88.0),
            MemberStatus::Caution,
            "SpO2 exactly 88 is caution, not critical"
        );
        assert_eq!(classify(&t, 5.0, 75.0, 87.0), MemberStatus::Critical);
    }

    #[test]
    fn test_critical_outranks_caution() {
        let t = RiskThresholds::default();
        // CO says caution, SpO2 says critical.
        assert_eq!(classify(&t, 60.0, 75.0, 80.0), MemberStatus::Critical);
    }

    #[test]
    fn test_monotone_in_co() {
        let t = RiskThresholds::default();
        let mut prev = 0;
        for co in 0..=200 {
            let status = classify(&t, co as f32, 75.0, 98.0);
            assert!(
                rank(status) >= prev,
                "status worsened then improved as CO rose (CO={co})"
            );
            prev = rank(status);
        }
    }

    #[test]
    fn test_monotone_in_spo2() {
        let t = RiskThresholds::default();
        let mut prev = 0;
        for spo2 in (70..=100).rev() {
            let status = classify(&t, 5.0, 75.0, spo2 as f32);
            assert!(
                rank(status) >= prev,
                "status improved as SpO2 fell (spo2={spo2})"
            );
            prev = rank(status);
        }
    }

    #[test]
    fn test_custom_thresholds_shift_boundaries() {
        let t = RiskThresholds {
            co_ppm_critical: 10.0,
            ..Default::default()
        };
        assert_eq!(classify(&t, 11.0, 75.0, 98.0), MemberStatus::Critical);
    }
}
