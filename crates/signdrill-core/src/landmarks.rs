//! Hand landmark input types.
//!
//! A [`HandLandmarks`] set is the 21-point hand skeleton produced by the
//! external pose model, in camera pixel space. Sets may be short or contain
//! `null` entries; every accessor here is total and documents its fallback.

use serde::{Deserialize, Serialize};

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in a complete hand.
pub const LANDMARK_COUNT: usize = 21;

/// A 2-D keypoint in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One detected hand: up to 21 optional landmarks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    #[serde(default)]
    pub keypoints: Vec<Option<Point>>,
}

impl HandLandmarks {
    pub fn new(keypoints: Vec<Option<Point>>) -> Self {
        Self { keypoints }
    }

    /// Build a complete hand from raw `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self {
            keypoints: points.iter().map(|&(x, y)| Some(Point::new(x, y))).collect(),
        }
    }

    /// The landmark at `index`, or `None` if it is missing or out of range.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.keypoints.get(index).copied().flatten()
    }

    /// The landmark at `index`, falling back to the wrist, then to the origin.
    pub fn point_or_wrist(&self, index: usize) -> Point {
        self.point(index)
            .or_else(|| self.point(WRIST))
            .unwrap_or(Point::ORIGIN)
    }

    /// A copy of this hand with every present landmark shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            keypoints: self
                .keypoints
                .iter()
                .map(|p| p.map(|p| p.offset(dx, dy)))
                .collect(),
        }
    }
}

/// All hands observed in a single video frame, in detection order.
pub type Frame = Vec<HandLandmarks>;
