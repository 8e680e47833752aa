// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-to-value state machine.
//!
//! [`RatingGesture`] cycles between `Idle` (no session) and `Active` (session
//! open) for the lifetime of the control. A session is created by
//! [`on_grant`](RatingGesture::on_grant), fed by
//! [`on_move`](RatingGesture::on_move), and destroyed by exactly one of
//! [`on_release`](RatingGesture::on_release) or
//! [`on_terminate`](RatingGesture::on_terminate). Presence of the session is
//! an explicit `Option`, never a sentinel value.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use starband_gesture::feedback::NoHooks;
//! use starband_gesture::machine::{GestureConfig, RatingGesture};
//! use starband_gesture::pointer::PointerSample;
//! use starband_layout::{ItemSize, RowLayout};
//!
//! let mut row = RowLayout::new(ItemSize::Fixed(40.0), 0.0);
//! row.on_measure(Rect::new(0.0, 0.0, 40.0, 40.0));
//!
//! let mut gesture = RatingGesture::new(GestureConfig::new(20.0));
//! gesture.on_grant(&row, PointerSample::at(Point::new(10.0, 100.0)), &mut NoHooks);
//! assert_eq!(gesture.rating(), 1);
//!
//! // Drag right within the vertical band: the live value follows the finger.
//! gesture.on_move(&row, PointerSample::at(Point::new(150.0, 110.0)), &mut NoHooks);
//! assert_eq!(gesture.rating(), 4);
//!
//! // Drift far below the band: the move is ignored (scroll, not rating).
//! gesture.on_move(&row, PointerSample::at(Point::new(190.0, 180.0)), &mut NoHooks);
//! assert_eq!(gesture.rating(), 4);
//! ```

use starband_layout::RowLayout;

use crate::feedback::{HapticEffect, HapticOptions, RatingHooks};
use crate::pointer::{PointerSample, VerticalSpace};

/// Configuration of a [`RatingGesture`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Number of discrete levels; ratings live in `0..=max_stars`.
    pub max_stars: u32,
    /// Half-width of the vertical tolerance band around the grant anchor.
    /// Samples outside the band are treated as scrolling, not rating.
    pub max_location_y: f64,
    /// Which event field supplies the vertical coordinate on this platform.
    pub vertical_space: VerticalSpace,
    /// Effect fired on each distinct live rating transition.
    pub haptic_effect: HapticEffect,
    /// Options forwarded with every haptic trigger.
    pub haptic_options: HapticOptions,
}

impl GestureConfig {
    /// Creates a configuration with the given vertical tolerance and the
    /// stock defaults: five stars, local vertical space, a heavy impact pulse
    /// that overrides platform haptic settings.
    #[must_use]
    pub fn new(max_location_y: f64) -> Self {
        Self {
            max_stars: 5,
            max_location_y,
            vertical_space: VerticalSpace::Local,
            haptic_effect: HapticEffect::ImpactHeavy,
            haptic_options: HapticOptions {
                ignore_system_settings: true,
            },
        }
    }
}

/// The per-gesture record: exists only while a touch is captured.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Session {
    /// Vertical coordinate recorded at grant time, in the configured space.
    anchor_y: f64,
}

/// Gesture-to-value state machine of a star-rating row.
///
/// Holds two ratings, both always clamped to `0..=max_stars`:
///
/// - the *live* rating ([`rating`](Self::rating)): the value implied by the
///   in-progress gesture, for immediate display;
/// - the *committed* rating ([`committed`](Self::committed)): changed only by
///   [`set_rating`](Self::set_rating) or by a release inside the vertical
///   band.
///
/// No operation errors or panics; out-of-state events return `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingGesture {
    config: GestureConfig,
    session: Option<Session>,
    live: u32,
    committed: u32,
}

impl RatingGesture {
    /// Creates an idle machine with rating 0.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self::with_rating(config, 0)
    }

    /// Creates an idle machine with an initial committed rating (clamped).
    #[must_use]
    pub fn with_rating(config: GestureConfig, rating: u32) -> Self {
        let rating = rating.min(config.max_stars);
        Self {
            config,
            session: None,
            live: rating,
            committed: rating,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the live rating: the value to display right now.
    #[must_use]
    pub fn rating(&self) -> u32 {
        self.live
    }

    /// Returns the last committed rating.
    #[must_use]
    pub fn committed(&self) -> u32 {
        self.committed
    }

    /// Returns `true` while a touch session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the grant anchor's vertical coordinate while active.
    #[must_use]
    pub fn anchor_y(&self) -> Option<f64> {
        self.session.map(|session| session.anchor_y)
    }

    /// Sets both the committed and the live rating programmatically (clamped).
    ///
    /// Fires no hooks; external re-configuration is not a gesture.
    pub fn set_rating(&mut self, rating: u32) {
        let rating = rating.min(self.config.max_stars);
        self.live = rating;
        self.committed = rating;
    }

    /// Whether the control claims the gesture on initial touch: always `true`.
    ///
    /// This is a pass-through policy, not a judgment of the event content.
    #[must_use]
    pub fn claims_start(&self, _sample: &PointerSample) -> bool {
        true
    }

    /// Whether the control claims the gesture on move-in: always `true`.
    #[must_use]
    pub fn claims_move(&self, _sample: &PointerSample) -> bool {
        true
    }

    /// Whether an external termination request is approved: always `true`.
    ///
    /// The control never blocks a host (for example an enclosing scroll view)
    /// from reclaiming the gesture; actual cancellation then arrives via
    /// [`on_terminate`](Self::on_terminate).
    #[must_use]
    pub fn approves_termination(&self) -> bool {
        true
    }

    /// Opens a session anchored at the sample's vertical coordinate, notifies
    /// [`RatingHooks::grant`], and applies an initial live update — first
    /// contact already implies a tentative value.
    ///
    /// A re-grant overwrites any stale session. Returns the applied live
    /// rating, or `None` when the layout is not ready (the session still
    /// opens; the rating just stays put).
    pub fn on_grant<H: RatingHooks>(
        &mut self,
        layout: &RowLayout,
        sample: PointerSample,
        hooks: &mut H,
    ) -> Option<u32> {
        self.session = Some(Session {
            anchor_y: self.config.vertical_space.vertical_of(&sample),
        });
        hooks.grant();
        self.apply_live(layout, &sample, hooks)
    }

    /// Applies a live update for a move sample inside the vertical band.
    ///
    /// Samples outside the band are ignored — the finger has drifted off the
    /// row, which reads as scrolling. Returns the live rating that was
    /// applied, or `None` when the move was ignored (out of band, layout not
    /// ready, or no open session).
    pub fn on_move<H: RatingHooks>(
        &mut self,
        layout: &RowLayout,
        sample: PointerSample,
        hooks: &mut H,
    ) -> Option<u32> {
        let session = self.session?;
        if !self.within_band(session, &sample) {
            return None;
        }
        self.apply_live(layout, &sample, hooks)
    }

    /// Closes the session and notifies [`RatingHooks::release`]; commits the
    /// live rating iff the release sample is still inside the vertical band
    /// of the *original grant anchor*.
    ///
    /// The committed value is the last live value — the release point is not
    /// remapped to a rating. Returns the committed rating, or `None` when
    /// nothing was committed (out of band or no open session). Without a
    /// session this is a complete no-op: no hooks fire.
    pub fn on_release<H: RatingHooks>(
        &mut self,
        sample: PointerSample,
        hooks: &mut H,
    ) -> Option<u32> {
        let session = self.session.take()?;
        hooks.release();
        if !self.within_band(session, &sample) {
            return None;
        }
        self.committed = self.live;
        hooks.value_changed(self.committed);
        Some(self.committed)
    }

    /// Destroys the session without committing and notifies
    /// [`RatingHooks::terminate`]. A no-op when idle.
    pub fn on_terminate<H: RatingHooks>(&mut self, hooks: &mut H) {
        if self.session.take().is_some() {
            hooks.terminate();
        }
    }

    /// Maps a sample's horizontal page coordinate to a rating:
    /// `ceil((page.x - origin_x) / step)` clamped to `0..=max_stars`.
    ///
    /// Returns `None` while the layout is unmeasured, unresolved, or has a
    /// non-positive step — the defined "ignored" result for a misconfigured
    /// row, never a computation error.
    #[must_use]
    pub fn compute_live_rating(&self, layout: &RowLayout, sample: &PointerSample) -> Option<u32> {
        if !layout.is_ready() {
            return None;
        }
        let origin_x = layout.origin_x()?;
        let step = layout.step()?;
        let raw = ceil_to_i64((sample.page.x - origin_x) / step);
        let clamped = raw.clamp(0, i64::from(self.config.max_stars));
        // In u32 range by the clamp above.
        Some(u32::try_from(clamped).unwrap_or(self.config.max_stars))
    }

    /// Recomputes the live rating and, when it changes, fires the haptic pulse
    /// before updating state.
    fn apply_live<H: RatingHooks>(
        &mut self,
        layout: &RowLayout,
        sample: &PointerSample,
        hooks: &mut H,
    ) -> Option<u32> {
        let rating = self.compute_live_rating(layout, sample)?;
        if rating != self.live {
            hooks.haptic(self.config.haptic_effect, self.config.haptic_options);
            self.live = rating;
        }
        Some(rating)
    }

    /// Strict band check around the grant anchor, in the configured vertical
    /// space.
    fn within_band(&self, session: Session, sample: &PointerSample) -> bool {
        let v = self.config.vertical_space.vertical_of(sample);
        v < session.anchor_y + self.config.max_location_y
            && v > session.anchor_y - self.config.max_location_y
    }
}

/// Ceiling of `value` as an integer, computed in core.
///
/// Truncates toward zero, then bumps by one when a positive fraction was cut
/// off. `as` saturates at the `i64` range and maps NaN to zero; callers clamp
/// the result to the rating range immediately afterwards.
fn ceil_to_i64(value: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating float-to-int conversion; result is clamped by the caller"
    )]
    let truncated = value as i64;
    if value > truncated as f64 {
        truncated + 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use starband_layout::{ItemSize, RowLayout};

    use super::{GestureConfig, RatingGesture, ceil_to_i64};
    use crate::feedback::NoHooks;
    use crate::pointer::PointerSample;

    fn measured_row(size: f64, spacing: f64) -> RowLayout {
        let mut row = RowLayout::new(ItemSize::Fixed(size), spacing);
        row.on_measure(Rect::new(0.0, 0.0, size, size));
        row
    }

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample::at(Point::new(x, y))
    }

    #[test]
    fn ceil_to_i64_matches_mathematical_ceiling() {
        assert_eq!(ceil_to_i64(0.0), 0);
        assert_eq!(ceil_to_i64(0.1), 1);
        assert_eq!(ceil_to_i64(1.0), 1);
        assert_eq!(ceil_to_i64(2.125), 3);
        assert_eq!(ceil_to_i64(-0.5), 0);
        assert_eq!(ceil_to_i64(-2.0), -2);
        assert_eq!(ceil_to_i64(-2.5), -2);
    }

    #[test]
    fn new_machine_is_idle_with_rating_zero() {
        let gesture = RatingGesture::new(GestureConfig::new(20.0));
        assert!(!gesture.is_active());
        assert_eq!(gesture.rating(), 0);
        assert_eq!(gesture.committed(), 0);
        assert_eq!(gesture.anchor_y(), None);
    }

    #[test]
    fn initial_rating_is_clamped() {
        let gesture = RatingGesture::with_rating(GestureConfig::new(20.0), 9);
        assert_eq!(gesture.rating(), 5);
        assert_eq!(gesture.committed(), 5);
    }

    #[test]
    fn set_rating_clamps_and_updates_both_values() {
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));
        gesture.set_rating(3);
        assert_eq!(gesture.rating(), 3);
        assert_eq!(gesture.committed(), 3);

        gesture.set_rating(99);
        assert_eq!(gesture.committed(), 5);
    }

    #[test]
    fn claims_and_termination_policies_are_pass_through() {
        let gesture = RatingGesture::new(GestureConfig::new(20.0));
        assert!(gesture.claims_start(&sample(0.0, 0.0)));
        assert!(gesture.claims_move(&sample(0.0, 0.0)));
        assert!(gesture.approves_termination());
    }

    #[test]
    fn grant_opens_session_and_applies_first_value() {
        let row = measured_row(40.0, 0.0);
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));

        let live = gesture.on_grant(&row, sample(85.0, 100.0), &mut NoHooks);
        assert_eq!(live, Some(3));
        assert!(gesture.is_active());
        assert_eq!(gesture.anchor_y(), Some(100.0));
        // The first contact only previews; nothing is committed yet.
        assert_eq!(gesture.committed(), 0);
    }

    #[test]
    fn regrant_overwrites_stale_session() {
        let row = measured_row(40.0, 0.0);
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));

        gesture.on_grant(&row, sample(10.0, 50.0), &mut NoHooks);
        gesture.on_grant(&row, sample(10.0, 300.0), &mut NoHooks);
        assert_eq!(gesture.anchor_y(), Some(300.0));
    }

    #[test]
    fn move_and_release_without_session_are_no_ops() {
        let row = measured_row(40.0, 0.0);
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));

        assert_eq!(gesture.on_move(&row, sample(85.0, 0.0), &mut NoHooks), None);
        assert_eq!(gesture.on_release(sample(85.0, 0.0), &mut NoHooks), None);
        gesture.on_terminate(&mut NoHooks);
        assert_eq!(gesture.rating(), 0);
    }

    #[test]
    fn rating_clamps_at_row_edges() {
        let row = measured_row(40.0, 0.0);
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));
        gesture.on_grant(&row, sample(100.0, 0.0), &mut NoHooks);

        // Left of the origin maps to zero.
        assert_eq!(gesture.on_move(&row, sample(-500.0, 0.0), &mut NoHooks), Some(0));
        // Beyond the last cell's right edge maps to max_stars.
        assert_eq!(gesture.on_move(&row, sample(10_000.0, 0.0), &mut NoHooks), Some(5));
    }

    #[test]
    fn spacing_widens_the_step() {
        // step = 40 + 10; x = 101 lands in the third slot.
        let row = measured_row(40.0, 10.0);
        let gesture = RatingGesture::new(GestureConfig::new(20.0));
        assert_eq!(
            gesture.compute_live_rating(&row, &sample(101.0, 0.0)),
            Some(3)
        );
        assert_eq!(
            gesture.compute_live_rating(&row, &sample(100.0, 0.0)),
            Some(2)
        );
    }

    #[test]
    fn row_origin_offsets_the_mapping() {
        let mut row = RowLayout::new(ItemSize::Auto, 0.0);
        row.on_measure(Rect::new(60.0, 0.0, 100.0, 40.0));

        let gesture = RatingGesture::new(GestureConfig::new(20.0));
        assert_eq!(
            gesture.compute_live_rating(&row, &sample(60.0, 0.0)),
            Some(0)
        );
        assert_eq!(
            gesture.compute_live_rating(&row, &sample(145.0, 0.0)),
            Some(3)
        );
    }

    #[test]
    fn unready_layout_yields_ignored_not_error() {
        let unmeasured = RowLayout::new(ItemSize::Auto, 0.0);
        let mut gesture = RatingGesture::new(GestureConfig::new(20.0));

        assert_eq!(
            gesture.compute_live_rating(&unmeasured, &sample(85.0, 0.0)),
            None
        );
        // The session still opens; only the value update is skipped.
        assert_eq!(gesture.on_grant(&unmeasured, sample(85.0, 0.0), &mut NoHooks), None);
        assert!(gesture.is_active());
        assert_eq!(gesture.rating(), 0);

        // Zero-size items are a configuration precondition, not a fault.
        let mut degenerate = RowLayout::new(ItemSize::Fixed(0.0), 0.0);
        degenerate.on_measure(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(
            gesture.compute_live_rating(&degenerate, &sample(85.0, 0.0)),
            None
        );
    }
}
