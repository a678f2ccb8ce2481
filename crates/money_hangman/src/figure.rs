//! Progressive reveal of the hangman figure.
//!
//! This is a fixed lookup table from miss count to drawn segments. The head
//! and the first leg share threshold 1; there is no head-only stage.

use crate::MAX_INCORRECT_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::instrument;

/// One drawable part of the figure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Segment {
    /// Post, beam and rope arm. Always drawn.
    Gallows,
    /// Head (first miss).
    Head,
    /// Left leg (first miss).
    Leg1,
    /// Right leg (second miss).
    Leg2,
    /// Left arm (third miss).
    Hand1,
    /// Right arm (fourth miss).
    Hand2,
    /// Torso (fifth miss).
    Torso,
    /// Noose (sixth miss, round lost).
    Noose,
}

impl Segment {
    /// Miss count at which this segment becomes visible.
    pub fn threshold(self) -> u8 {
        match self {
            Segment::Gallows => 0,
            Segment::Head | Segment::Leg1 => 1,
            Segment::Leg2 => 2,
            Segment::Hand1 => 3,
            Segment::Hand2 => 4,
            Segment::Torso => 5,
            Segment::Noose => 6,
        }
    }

    /// Returns true for the parts of the body (everything but gallows and noose).
    pub fn is_body(self) -> bool {
        !matches!(self, Segment::Gallows | Segment::Noose)
    }
}

/// Segments visible after `incorrect` misses.
///
/// Counts above the maximum are clamped.
#[instrument]
pub fn segments_for(incorrect: u8) -> BTreeSet<Segment> {
    let incorrect = incorrect.min(MAX_INCORRECT_ATTEMPTS);
    Segment::iter()
        .filter(|segment| segment.threshold() <= incorrect)
        .collect()
}

/// Render-ready figure state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    segments: BTreeSet<Segment>,
    failure: bool,
}

impl Figure {
    /// Builds the figure for `incorrect` misses.
    #[instrument]
    pub fn for_attempts(incorrect: u8) -> Self {
        Self {
            segments: segments_for(incorrect),
            failure: incorrect >= MAX_INCORRECT_ATTEMPTS,
        }
    }

    /// Visible segments in drawing order.
    pub fn segments(&self) -> &BTreeSet<Segment> {
        &self.segments
    }

    /// Returns true if `segment` is drawn.
    pub fn shows(&self, segment: Segment) -> bool {
        self.segments.contains(&segment)
    }

    /// Body segments are failure-styled once the noose is drawn.
    pub fn is_failure_state(&self) -> bool {
        self.failure
    }
}
