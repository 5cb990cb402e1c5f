/*!
 * Timeline Model
 * Chronological execution segments produced by a simulation run
 */

use crate::core::types::Ticks;
use crate::core::ProcessId;
use serde::{Deserialize, Serialize};

/// One contiguous interval during which a single process holds the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Segment {
    pub pid: ProcessId,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// A boundary label on the time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMarker {
    /// Index of the segment the marker belongs to
    pub segment: usize,
    pub time: Ticks,
}

/// Ordered execution segments
///
/// Segments are appended by the clock owner only, so starts never decrease.
/// Multiple segments may share a pid (one per Round-Robin slice).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Record that `pid` ran over `[start, end)`
    pub(crate) fn record(&mut self, pid: ProcessId, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "empty segment for {}", pid);
        debug_assert!(
            self.segments.last().map_or(true, |s| s.end <= start),
            "segment for {} starts before the previous one ends",
            pid
        );
        self.segments.push(Segment { pid, start, end });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment
    pub fn makespan(&self) -> Ticks {
        self.segments.last().map_or(0, |s| s.end)
    }

    /// Sum of all segment durations
    pub fn busy_time(&self) -> Ticks {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// True when the segments tile `[0, makespan)` with no gap or overlap
    pub fn is_contiguous(&self) -> bool {
        let mut clock = 0;
        for segment in &self.segments {
            if segment.start != clock || segment.end <= segment.start {
                return false;
            }
            clock = segment.end;
        }
        true
    }

    /// Segments that belong to `pid`, in execution order
    pub fn segments_for<'a>(&'a self, pid: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments.iter().filter(move |s| s.pid.as_str() == pid)
    }

    /// Time labels for the axis of a Gantt chart
    ///
    /// Every segment end is labelled. A start is labelled only on the first
    /// segment and after a gap, so a shared boundary appears once.
    pub fn markers(&self) -> Vec<TimeMarker> {
        let mut markers = Vec::with_capacity(self.segments.len() + 1);
        for (i, segment) in self.segments.iter().enumerate() {
            if i == 0 || self.segments[i - 1].end != segment.start {
                markers.push(TimeMarker {
                    segment: i,
                    time: segment.start,
                });
            }
            markers.push(TimeMarker {
                segment: i,
                time: segment.end,
            });
        }
        markers
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
