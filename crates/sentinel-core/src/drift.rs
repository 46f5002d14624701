//! Bounded random-walk drift for scalar telemetry signals.
//!
//! The sole source of randomness in the engine. The generator is always
//! passed in by the caller, so a seeded or mock source reproduces a run
//! exactly.

use rand::Rng;

/// Step `current` by a uniform draw in [-volatility/2, +volatility/2] and
/// clamp the result into [min, max].
///
/// A negative volatility mirrors the draw range and behaves identically;
/// it occurs under mean-reversion when a signal has overshot its target.
pub fn drift(rng: &mut impl Rng, current: f32, min: f32, max: f32, volatility: f32) -> f32 {
    let step = (rng.gen::<f32>() - 0.5) * volatility;
    (current + step).clamp(min, max)
}
