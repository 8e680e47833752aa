// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-effect hooks: lifecycle notifications, value commits, haptic pulses.
//!
//! The state machine never performs side effects itself. Each operation takes
//! a [`RatingHooks`] implementation and calls into it at well-defined points;
//! every method defaults to a no-op, so hosts implement only what they need.
//! Pass [`NoHooks`] where no feedback is wanted at all.

/// Named haptic effect fired on live rating transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HapticEffect {
    /// A light impact pulse.
    ImpactLight,
    /// A medium impact pulse.
    ImpactMedium,
    /// A heavy impact pulse. The rating control's default.
    ImpactHeavy,
}

/// Options forwarded with every haptic trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct HapticOptions {
    /// Fire the pulse even where platform settings would normally suppress
    /// app-originated haptics.
    pub ignore_system_settings: bool,
}

/// Injected side-effect surface of the rating gesture.
///
/// All methods are no-ops by default. The machine guarantees:
///
/// - [`grant`](Self::grant), then zero or more haptic pulses, then exactly one
///   of [`release`](Self::release) or [`terminate`](Self::terminate) per
///   gesture.
/// - [`value_changed`](Self::value_changed) fires at most once per gesture,
///   only after `release`, and only when the release stayed within the
///   vertical band.
/// - [`haptic`](Self::haptic) fires exactly once per *distinct* live rating
///   transition — never on a recompute that lands on the same value, never on
///   initial display.
pub trait RatingHooks {
    /// The control has claimed a touch and opened a session.
    fn grant(&mut self) {}

    /// The touch was lifted (whether or not a value is committed).
    fn release(&mut self) {}

    /// The gesture was taken away by the host (for example by a scroll view).
    fn terminate(&mut self) {}

    /// A completed, valid gesture committed `rating`.
    fn value_changed(&mut self, rating: u32) {
        let _ = rating;
    }

    /// The live rating just moved to a new value; pulse the hardware.
    fn haptic(&mut self, effect: HapticEffect, options: HapticOptions) {
        let _ = (effect, options);
    }
}

/// A [`RatingHooks`] implementation that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHooks;

impl RatingHooks for NoHooks {}
