//! Fixed tick-mark layout for a ruler scale.
//!
//! One tick per integer step between `start` and `end` inclusive, placed at
//! `(value - start) * density` along the scroll axis. Every value that is a
//! multiple of the major interval is a major tick and carries a label.
//! The layout is computed once and never recomputed while scrolling.

use crate::error::LayoutError;
use crate::units::{PixelDensity, Pixels};

/// Visual weight of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Short unlabeled tick
    Minor,
    /// Long labeled tick
    Major,
}

/// A single tick on the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Scale value this tick stands for
    pub value: i32,
    /// Distance from the top of the scrollable content
    pub position: Pixels,
    /// Minor or major styling
    pub kind: TickKind,
}

impl TickMark {
    /// Whether this tick gets a label.
    pub fn is_major(&self) -> bool {
        self.kind == TickKind::Major
    }
}

/// All ticks of a scale, ordered by value.
#[derive(Debug, Clone)]
pub struct TickLayout {
    marks: Vec<TickMark>,
    major_interval: u32,
}

impl TickLayout {
    /// Lay out ticks for every integer in `[start, end]`.
    pub fn new(
        start: i32,
        end: i32,
        density: PixelDensity,
        major_interval: u32,
    ) -> Result<Self, LayoutError> {
        if start >= end {
            return Err(LayoutError::EmptySpan { start, end });
        }
        if major_interval == 0 {
            return Err(LayoutError::ZeroTickInterval);
        }

        let interval = i64::from(major_interval);
        let marks: Vec<TickMark> = (start..=end)
            .map(|value| {
                let kind = if i64::from(value).rem_euclid(interval) == 0 {
                    TickKind::Major
                } else {
                    TickKind::Minor
                };
                TickMark {
                    value,
                    position: density.extent(value - start),
                    kind,
                }
            })
            .collect();

        log::debug!(
            "Laid out {} ticks over [{}, {}] at {}",
            marks.len(),
            start,
            end,
            density
        );

        Ok(Self {
            marks,
            major_interval,
        })
    }

    /// All ticks, minor and major.
    pub fn marks(&self) -> &[TickMark] {
        &self.marks
    }

    /// Only the labeled ticks.
    pub fn majors(&self) -> impl Iterator<Item = &TickMark> + '_ {
        self.marks.iter().filter(|m| m.is_major())
    }

    /// Interval between major ticks.
    pub fn major_interval(&self) -> u32 {
        self.major_interval
    }

    /// Number of ticks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// A valid layout always holds at least two ticks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
