// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer samples and the platform vertical-coordinate selector.

use kurbo::Point;

/// One raw touch sample, carrying the position in both coordinate spaces the
/// host can report.
///
/// Touch events arrive with a view-local position and a page/absolute
/// position. Rating math always reads the horizontal coordinate from the page
/// space; which space supplies the *vertical* coordinate for anchoring and
/// band checks differs by platform family and is selected by
/// [`VerticalSpace`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Position relative to the responding view.
    pub local: Point,
    /// Position relative to the page / root surface.
    pub page: Point,
}

impl PointerSample {
    /// Creates a sample from distinct local and page positions.
    #[must_use]
    pub fn new(local: Point, page: Point) -> Self {
        Self { local, page }
    }

    /// Creates a sample whose local and page positions coincide.
    ///
    /// Convenient for tests and for hosts where the row fills the surface.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            local: position,
            page: position,
        }
    }
}

/// Which coordinate space supplies a sample's vertical position.
///
/// The two platform families report the semantically-same "vertical position
/// relative to the anchor" in physically different event fields. Selecting the
/// field here keeps the state machine on a single code path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum VerticalSpace {
    /// Use the view-local Y coordinate.
    #[default]
    Local,
    /// Use the page/absolute Y coordinate.
    Page,
}

impl VerticalSpace {
    /// Returns the sample's vertical coordinate in this space.
    #[must_use]
    pub fn vertical_of(self, sample: &PointerSample) -> f64 {
        match self {
            Self::Local => sample.local.y,
            Self::Page => sample.page.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PointerSample, VerticalSpace};

    #[test]
    fn vertical_space_selects_the_event_field() {
        let sample = PointerSample::new(Point::new(10.0, 20.0), Point::new(110.0, 220.0));
        assert_eq!(VerticalSpace::Local.vertical_of(&sample), 20.0);
        assert_eq!(VerticalSpace::Page.vertical_of(&sample), 220.0);
    }

    #[test]
    fn at_uses_one_position_for_both_spaces() {
        let sample = PointerSample::at(Point::new(5.0, 7.0));
        assert_eq!(sample.local, sample.page);
        assert_eq!(
            VerticalSpace::Local.vertical_of(&sample),
            VerticalSpace::Page.vertical_of(&sample)
        );
    }
}
