//! Pose values and track placement.
//!
//! Axis convention follows the immediate-mode scene the guideway is drawn in:
//! x is the track's initial forward axis, y is up, z is the secondary axis, and
//! yaw is measured in degrees about +Y (positive turns from +x towards -z).

use serde::{Deserialize, Serialize};

/// Translation + heading of a vehicle relative to a track's local origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub translation: [f64; 3],
    /// Heading in degrees about +Y; not wrapped.
    pub yaw_deg: f64,
}

/// Rotate `v` about +Y by `yaw_deg` degrees.
#[inline]
pub fn rotate_y(v: [f64; 3], yaw_deg: f64) -> [f64; 3] {
    let (sin, cos) = yaw_deg.to_radians().sin_cos();
    [v[0] * cos + v[2] * sin, v[1], -v[0] * sin + v[2] * cos]
}

#[inline]
fn add3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: [0.0; 3],
        yaw_deg: 0.0,
    };

    pub fn new(translation: [f64; 3], yaw_deg: f64) -> Self {
        Self {
            translation,
            yaw_deg,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn yaw_radians(&self) -> f64 {
        self.yaw_deg.to_radians()
    }

    /// Yaw wrapped into `(-180, 180]`.
    pub fn normalized_yaw(&self) -> f64 {
        let wrapped = self.yaw_deg.rem_euclid(360.0);
        if wrapped > 180.0 {
            wrapped - 360.0
        } else {
            wrapped
        }
    }

    /// Unit heading vector in the track frame.
    #[inline]
    pub fn forward(&self) -> [f64; 3] {
        rotate_y([1.0, 0.0, 0.0], self.yaw_deg)
    }

    /// Compose a pose expressed in this pose's local frame onto it.
    pub fn then(&self, local: &Pose) -> Pose {
        Pose {
            translation: add3(self.translation, rotate_y(local.translation, self.yaw_deg)),
            yaw_deg: self.yaw_deg + local.yaw_deg,
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

/// Where a track's local frame sits in the scene.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackPlacement {
    #[serde(default)]
    pub translation: [f64; 3],
    #[serde(default, rename = "yaw")]
    pub yaw_deg: f64,
    /// Uniform scale applied to track-local translations.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for TrackPlacement {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            yaw_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl TrackPlacement {
    pub fn new(translation: [f64; 3], yaw_deg: f64, scale: f64) -> Self {
        Self {
            translation,
            yaw_deg,
            scale,
        }
    }

    /// Map a track-local pose into the scene.
    pub fn apply(&self, local: &Pose) -> Pose {
        let scaled = local.translation.map(|c| c * self.scale);
        Pose {
            translation: add3(self.translation, rotate_y(scaled, self.yaw_deg)),
            yaw_deg: self.yaw_deg + local.yaw_deg,
        }
    }
}
