// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell frame iteration for a rating row.
//!
//! [`Cells`] walks the row from left to right and yields one [`CellFrame`] per
//! icon cell, in row-local coordinates (the first cell's left edge is `x = 0`).
//! A renderer maps each frame to the selected or unselected icon and offsets it
//! by the row origin.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use starband_layout::{ItemSize, RowLayout};
//!
//! let row = RowLayout::new(ItemSize::Fixed(40.0), 4.0);
//! let frames: Vec<_> = row.cells(3, 2).collect();
//!
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[1].frame, Rect::new(44.0, 0.0, 84.0, 40.0));
//! assert!(frames[1].selected);
//! assert!(!frames[2].selected);
//! // Every cell but the last carries the gap to its right neighbor.
//! assert_eq!(frames[1].trailing_gap, 4.0);
//! assert_eq!(frames[2].trailing_gap, 0.0);
//! ```

use core::iter::FusedIterator;

use kurbo::Rect;

/// One icon cell of a rating row, in row-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellFrame {
    /// Zero-based position in the row.
    pub index: u32,
    /// Square cell box; the first cell's left edge is at `x = 0`.
    pub frame: Rect,
    /// `true` for cells below the current rating (drawn with the selected
    /// icon).
    pub selected: bool,
    /// Gap to the right neighbor; zero for the last cell.
    pub trailing_gap: f64,
}

/// Iterator over the cell frames of a row.
///
/// Created by [`RowLayout::cells`](crate::RowLayout::cells). Empty while the
/// row's item size is unresolved.
#[derive(Clone, Debug)]
pub struct Cells {
    next: u32,
    count: u32,
    rating: u32,
    size: f64,
    spacing: f64,
}

impl Cells {
    pub(crate) fn new(size: Option<f64>, spacing: f64, count: u32, rating: u32) -> Self {
        match size {
            Some(size) => Self {
                next: 0,
                count,
                rating,
                size,
                spacing,
            },
            // Unresolved size: iterate nothing rather than invent frames.
            None => Self {
                next: 0,
                count: 0,
                rating,
                size: 0.0,
                spacing,
            },
        }
    }
}

impl Iterator for Cells {
    type Item = CellFrame;

    fn next(&mut self) -> Option<CellFrame> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let x0 = f64::from(index) * (self.size + self.spacing);
        let last = index + 1 == self.count;
        Some(CellFrame {
            index,
            frame: Rect::new(x0, 0.0, x0 + self.size, self.size),
            selected: index < self.rating,
            trailing_gap: if last { 0.0 } else { self.spacing },
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}
