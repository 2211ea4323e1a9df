//! Immutable track definition with cumulative segment starts.
//!
//! A [`Track`] is built once at startup and shared read-only by every vehicle
//! that runs on it. Lookup of the segment containing an arc-length position is
//! a binary search over the precomputed starts.

use serde::{Deserialize, Serialize};

use crate::error::TrackError;
use crate::segment::TrackSegment;

/// Axis along which a stepped segment's `step_rise` is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiseAxis {
    /// Local secondary axis (z), rotated with the accumulated yaw.
    #[default]
    Lateral,
    /// World up axis (y), unaffected by yaw.
    Vertical,
}

/// Ordered, validated sequence of segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    segments: Vec<TrackSegment>,
    starts: Vec<f64>,
    total_length: f64,
    rise_axis: RiseAxis,
}

impl Track {
    /// Build a track applying `step_rise` along the lateral axis.
    pub fn build(segments: Vec<TrackSegment>) -> Result<Self, TrackError> {
        Self::build_with_rise_axis(segments, RiseAxis::Lateral)
    }

    pub fn build_with_rise_axis(
        segments: Vec<TrackSegment>,
        rise_axis: RiseAxis,
    ) -> Result<Self, TrackError> {
        if segments.is_empty() {
            return Err(TrackError::invalid_segment(0, "track needs at least one segment"));
        }
        let mut starts = Vec::with_capacity(segments.len());
        let mut total_length = 0.0;
        for (index, segment) in segments.iter().enumerate() {
            segment.validate(index)?;
            starts.push(total_length);
            total_length += segment.length();
        }
        log::debug!(
            "built track: {} segments, total length {total_length}",
            segments.len()
        );
        Ok(Self {
            segments,
            starts,
            total_length,
            rise_axis,
        })
    }

    pub fn builder() -> TrackBuilder {
        TrackBuilder::default()
    }

    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[inline]
    pub fn rise_axis(&self) -> RiseAxis {
        self.rise_axis
    }

    #[inline]
    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    /// Cumulative start distance of each segment.
    #[inline]
    pub fn starts(&self) -> &[f64] {
        &self.starts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check that `progress` is a valid position on this track.
    pub fn check_progress(&self, progress: f64) -> Result<(), TrackError> {
        if !progress.is_finite() || progress < 0.0 || progress > self.total_length {
            return Err(TrackError::OutOfRange {
                progress,
                total_length: self.total_length,
            });
        }
        Ok(())
    }

    /// Find the segment containing `progress` and the offset into it.
    ///
    /// Ranges are half-open `[start, start + length)`, so a value on a
    /// boundary belongs to the later segment. The far end of the track maps to
    /// the last segment at `offset == length`.
    pub fn locate(&self, progress: f64) -> Result<(usize, f64), TrackError> {
        self.check_progress(progress)?;
        let last = self.segments.len() - 1;
        if progress == self.total_length {
            return Ok((last, self.segments[last].length()));
        }
        // starts[0] == 0.0 <= progress, so the partition point is at least 1.
        let index = self.starts.partition_point(|start| *start <= progress) - 1;
        let offset = (progress - self.starts[index]).clamp(0.0, self.segments[index].length());
        Ok((index, offset))
    }
}

/// Chained construction of a [`Track`].
#[derive(Clone, Debug, Default)]
pub struct TrackBuilder {
    segments: Vec<TrackSegment>,
    rise_axis: RiseAxis,
}

impl TrackBuilder {
    pub fn straight(mut self, length: f64) -> Self {
        self.segments.push(TrackSegment::straight(length));
        self
    }

    pub fn curve(
        mut self,
        length: f64,
        turn_angle_per_step: f64,
        step_arc_length: f64,
        step_rise: f64,
    ) -> Self {
        self.segments.push(TrackSegment::curve(
            length,
            turn_angle_per_step,
            step_arc_length,
            step_rise,
        ));
        self
    }

    pub fn grade(mut self, length: f64, step_arc_length: f64, step_rise: f64) -> Self {
        self.segments
            .push(TrackSegment::grade(length, step_arc_length, step_rise));
        self
    }

    pub fn segment(mut self, segment: TrackSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn rise_axis(mut self, axis: RiseAxis) -> Self {
        self.rise_axis = axis;
        self
    }

    pub fn build(self) -> Result<Track, TrackError> {
        Track::build_with_rise_axis(self.segments, self.rise_axis)
    }
}
