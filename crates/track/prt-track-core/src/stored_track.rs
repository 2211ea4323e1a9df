use serde::{Deserialize, Serialize};

use crate::error::TrackError;
use crate::pose::TrackPlacement;
use crate::segment::TrackSegment;
use crate::track::{RiseAxis, Track};

/// On-disk track document.
///
/// ```json
/// {
///   "name": "campus-shuttle",
///   "riseAxis": "lateral",
///   "placement": { "translation": [0, 0.5, 1.25], "yaw": 90, "scale": 2 },
///   "segments": [
///     { "kind": "straight", "length": 3.5 },
///     { "kind": "curve", "length": 5.508, "turnAnglePerStep": -2.5,
///       "stepArcLength": 0.153, "stepRise": -0.01 }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredTrackDocument {
    pub name: String,
    #[serde(default)]
    pub rise_axis: RiseAxis,
    #[serde(default)]
    pub placement: TrackPlacement,
    pub segments: Vec<TrackSegment>,
}

/// A validated track loaded from a document, with its scene placement.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredTrack {
    pub name: String,
    pub placement: TrackPlacement,
    pub track: Track,
}

impl StoredTrackDocument {
    pub fn into_stored_track(self) -> Result<StoredTrack, TrackError> {
        let track = Track::build_with_rise_axis(self.segments, self.rise_axis)?;
        Ok(StoredTrack {
            name: self.name,
            placement: self.placement,
            track,
        })
    }
}

impl StoredTrack {
    /// Inverse of [`parse_stored_track_json`], suitable for writing fixtures.
    pub fn to_document(&self) -> StoredTrackDocument {
        StoredTrackDocument {
            name: self.name.clone(),
            rise_axis: self.track.rise_axis(),
            placement: self.placement,
            segments: self.track.segments().to_vec(),
        }
    }
}

/// Parse and validate a stored track document.
pub fn parse_stored_track_json(s: &str) -> Result<StoredTrack, TrackError> {
    let doc: StoredTrackDocument = serde_json::from_str(s)?;
    doc.into_stored_track()
}
