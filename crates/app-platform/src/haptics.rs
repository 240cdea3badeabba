//! Haptic feedback
//!
//! Requests are fire-and-forget: callers never wait for or observe the
//! outcome.

use serde::{Deserialize, Serialize};

/// Strength of an impact vibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Light tap
    Light,
    /// Medium tap
    #[default]
    Medium,
    /// Heavy tap
    Heavy,
}

/// Device haptics
pub trait HapticEngine: Send + Sync {
    /// Trigger an impact vibration
    fn impact(&self, style: ImpactStyle);
}

/// Haptics that only log the request
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHaptics;

impl HapticEngine for TracingHaptics {
    fn impact(&self, style: ImpactStyle) {
        tracing::info!(?style, "Haptic impact");
    }
}

/// Haptics for platforms without a vibration motor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticEngine for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) {}
}
