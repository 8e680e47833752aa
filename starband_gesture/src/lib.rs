// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starband_gesture --heading-base-level=0

//! Starband Gesture: the gesture-to-value state machine of a star-rating row.
//!
//! ## Overview
//!
//! A rating row turns a drag or tap across its cells into a discrete value in
//! `0..=max_stars`. [`machine::RatingGesture`] owns that touch-capture
//! lifecycle — grant → move → release/terminate — and on every sample maps the
//! horizontal pointer position to a clamped integer rating via the row's
//! [`starband_layout::RowLayout`].
//!
//! Two values coexist: the *live* rating ([`machine::RatingGesture::rating`]),
//! updated continuously for immediate visual feedback, and the *committed*
//! rating, which changes only through [`machine::RatingGesture::set_rating`] or
//! a release that passes the vertical-band check. A gesture that drifts too far
//! from its grant point vertically is treated as a scroll: moves outside the
//! band are ignored and the release commits nothing.
//!
//! Side effects — lifecycle notifications, the commit callback, and the haptic
//! pulse fired on each distinct live transition — go through a
//! [`feedback::RatingHooks`] implementation passed into each operation; every
//! hook defaults to a no-op.
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
//! let mut row = RowLayout::new(ItemSize::Auto, 0.0);
//! row.on_measure(Rect::new(0.0, 0.0, 40.0, 40.0));
//!
//! let mut gesture = RatingGesture::new(GestureConfig::new(20.0));
//! let mut hooks = NoHooks;
//!
//! // Touch down at x = 85: ceil(85 / 40) = 3.
//! let live = gesture.on_grant(&row, PointerSample::at(Point::new(85.0, 10.0)), &mut hooks);
//! assert_eq!(live, Some(3));
//!
//! // Release at the same point commits the live value.
//! let committed = gesture.on_release(PointerSample::at(Point::new(85.0, 10.0)), &mut hooks);
//! assert_eq!(committed, Some(3));
//! assert_eq!(gesture.committed(), 3);
//! ```
//!
//! ## Design notes
//!
//! - The machine is single-threaded and synchronous; it assumes the host
//!   delivers one gesture's events in temporal order (grant, zero or more
//!   moves, exactly one release or terminate).
//! - Out-of-state events and out-of-range values are no-ops and clamps, never
//!   errors: nothing in this crate panics or returns a failure type.
//! - The vertical-band check always compares against the *grant* anchor, not
//!   the latest move, so the drift tolerance resets per gesture.
//! - Platform differences in which event field carries the vertical position
//!   are a configuration parameter ([`pointer::VerticalSpace`]), not a second
//!   code path.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod feedback;
pub mod machine;
pub mod pointer;
