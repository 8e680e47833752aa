// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starband_layout --heading-base-level=0

//! Starband Layout: row geometry and item sizing for a star-rating control.
//!
//! ## Overview
//!
//! A rating row is a horizontal strip of `N` square icon cells separated by a
//! fixed gap. [`RowLayout`] is the layout tracker for such a row: it records
//! the row's measured origin and box, resolves the per-item size (either a
//! configured [`ItemSize::Fixed`] value or [`ItemSize::Auto`], derived from the
//! first measurement), and answers the geometry questions a gesture handler or
//! renderer asks — the row origin, the per-item step, and per-cell frames.
//!
//! Measurement is conventionally attached to the *first* cell only, so the
//! measured width corresponds to exactly one item's rendered box. Re-measures
//! (for example on resize) replace the stored geometry wholesale; a size that
//! has been resolved once is never re-derived by measurement.
//!
//! This crate performs no drawing. [`RowLayout::cells`] hands out row-local
//! frames plus a `selected` flag per cell; which icon to draw in each frame is
//! the renderer's business.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use starband_layout::{ItemSize, RowLayout};
//!
//! let mut row = RowLayout::new(ItemSize::Auto, 4.0);
//! assert!(!row.is_ready());
//!
//! // The first cell measured at 40x40, with the row starting at x = 12.
//! row.on_measure(Rect::new(12.0, 0.0, 52.0, 40.0));
//! assert_eq!(row.item_size(), Some(40.0));
//! assert_eq!(row.step(), Some(44.0));
//! assert_eq!(row.origin_x(), Some(12.0));
//!
//! // Five cells and four gaps.
//! assert_eq!(row.row_width(5), Some(216.0));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod cells;

use kurbo::{Point, Rect};

use crate::cells::Cells;

/// Per-item size configuration for a rating row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ItemSize {
    /// Derive the size from the first cell's measured width.
    Auto,
    /// Use a fixed size in row units (typically pixels); measurement never
    /// overrides it.
    Fixed(f64),
}

/// Layout tracker for a row of equally sized icon cells.
///
/// Tracks the measured row geometry and the resolved per-item size. All
/// accessors return `Option` until the corresponding input has arrived;
/// nothing here panics on an unmeasured row.
#[derive(Clone, Debug)]
pub struct RowLayout {
    configured: ItemSize,
    resolved: Option<f64>,
    spacing: f64,
    geometry: Option<Rect>,
}

impl RowLayout {
    /// Creates a tracker with the given item size configuration and
    /// inter-item spacing.
    #[must_use]
    pub fn new(item_size: ItemSize, spacing: f64) -> Self {
        Self {
            configured: item_size,
            resolved: match item_size {
                ItemSize::Auto => None,
                ItemSize::Fixed(size) => Some(size),
            },
            spacing,
            geometry: None,
        }
    }

    /// Records a measurement of the first cell's box.
    ///
    /// The stored geometry is replaced wholesale; this may be called again on
    /// resize. If the item size is still unresolved ([`ItemSize::Auto`] with no
    /// prior measurement), it is derived from `rect.width()` and then fixed for
    /// the lifetime of the tracker unless reconfigured via
    /// [`set_item_size`](Self::set_item_size).
    pub fn on_measure(&mut self, rect: Rect) {
        if self.resolved.is_none() {
            self.resolved = Some(rect.width());
        }
        self.geometry = Some(rect);
    }

    /// Reconfigures the item size.
    ///
    /// [`ItemSize::Fixed`] takes effect immediately. [`ItemSize::Auto`] clears
    /// the resolved size and re-arms derivation for the next measurement.
    pub fn set_item_size(&mut self, item_size: ItemSize) {
        self.configured = item_size;
        self.resolved = match item_size {
            ItemSize::Auto => None,
            ItemSize::Fixed(size) => Some(size),
        };
    }

    /// Sets the gap between consecutive cells.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    /// Returns the configured item size.
    #[must_use]
    pub fn configured_item_size(&self) -> ItemSize {
        self.configured
    }

    /// Returns the resolved per-item size, if known.
    #[must_use]
    pub fn item_size(&self) -> Option<f64> {
        self.resolved
    }

    /// Returns the gap between consecutive cells.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the most recent measured geometry, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<Rect> {
        self.geometry
    }

    /// Returns the row origin (the measured box's top-left corner), if
    /// measured.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.geometry.map(|rect| rect.origin())
    }

    /// Returns the row origin's X coordinate, if measured.
    #[must_use]
    pub fn origin_x(&self) -> Option<f64> {
        self.geometry.map(|rect| rect.x0)
    }

    /// Returns the horizontal distance between the left edges of consecutive
    /// cells (item size plus spacing), if the item size is resolved.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.resolved.map(|size| size + self.spacing)
    }

    /// Returns `true` once the row is measured, the item size is resolved, and
    /// the step is strictly positive.
    ///
    /// Gesture handling keys off this: an unready row makes every rating
    /// computation a no-op rather than dividing by zero.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.geometry.is_some() && self.step().is_some_and(|step| step > 0.0)
    }

    /// Returns the total width of `count` cells and their `count - 1` gaps, if
    /// the item size is resolved.
    #[must_use]
    pub fn row_width(&self, count: u32) -> Option<f64> {
        let size = self.resolved?;
        if count == 0 {
            return Some(0.0);
        }
        Some(f64::from(count) * size + f64::from(count - 1) * self.spacing)
    }

    /// Returns an iterator over row-local cell frames.
    ///
    /// Cells with `index < rating` are marked selected. Yields nothing while
    /// the item size is unresolved.
    #[must_use]
    pub fn cells(&self, count: u32, rating: u32) -> Cells {
        Cells::new(self.resolved, self.spacing, count, rating)
    }
}
