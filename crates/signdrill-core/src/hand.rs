//! Per-hand feature extraction.
//!
//! Turns one (possibly partial) landmark set into finger joint angles, a
//! palm-size normalizer and a hand center. Every joint angle is measured
//! through [`HandLandmarks::point_or_wrist`], so missing landmarks never
//! make extraction fail.

use crate::geometry::{angle_at, distance};
use crate::landmarks::*;

/// A joint straighter than this counts as extended.
pub const EXTENDED_THRESHOLD_DEG: f64 = 160.0;

/// A joint bent tighter than this counts as curled.
pub const CURLED_THRESHOLD_DEG: f64 = 100.0;

/// Landmarks averaged to find the hand center: wrist and the four MCPs.
const CENTER_LANDMARKS: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// Joint angles for one finger, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerAngles {
    pub pip: f64,
    /// `None` for the thumb, which has a single interphalangeal joint.
    pub dip: Option<f64>,
}

impl FingerAngles {
    pub fn is_extended(&self) -> bool {
        is_extended(self.pip, self.dip)
    }

    pub fn is_curled(&self) -> bool {
        is_curled(self.pip, self.dip)
    }
}

/// Geometric summary of one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFeatures {
    /// Wrist to middle-finger MCP distance; `1.0` if either is missing.
    pub palm_size: f64,
    pub thumb: FingerAngles,
    pub index: FingerAngles,
    pub middle: FingerAngles,
    pub ring: FingerAngles,
    pub pinky: FingerAngles,
    pub center: Point,
}

impl HandFeatures {
    pub fn extract(hand: &HandLandmarks) -> Self {
        Self {
            palm_size: palm_size(hand),
            thumb: FingerAngles {
                pip: joint_angle(hand, THUMB_MCP, THUMB_IP, THUMB_TIP),
                dip: None,
            },
            index: finger(hand, INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP),
            middle: finger(hand, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP),
            ring: finger(hand, RING_MCP, RING_PIP, RING_DIP, RING_TIP),
            pinky: finger(hand, PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP),
            center: hand_center(hand),
        }
    }

    /// Index, middle, ring and pinky, in that order.
    pub fn fingers(&self) -> [FingerAngles; 4] {
        [self.index, self.middle, self.ring, self.pinky]
    }

    pub fn extended_fingers(&self) -> usize {
        self.fingers().iter().filter(|f| f.is_extended()).count()
    }

    pub fn curled_fingers(&self) -> usize {
        self.fingers().iter().filter(|f| f.is_curled()).count()
    }
}

fn joint_angle(hand: &HandLandmarks, a: usize, vertex: usize, c: usize) -> f64 {
    angle_at(
        hand.point_or_wrist(a),
        hand.point_or_wrist(vertex),
        hand.point_or_wrist(c),
    )
}

fn finger(hand: &HandLandmarks, mcp: usize, pip: usize, dip: usize, tip: usize) -> FingerAngles {
    FingerAngles {
        pip: joint_angle(hand, mcp, pip, dip),
        dip: Some(joint_angle(hand, pip, dip, tip)),
    }
}

/// Wrist to middle-finger MCP distance.
///
/// Falls back to `1.0` when either point is missing or the two coincide, so
/// the value is always a usable divisor.
pub fn palm_size(hand: &HandLandmarks) -> f64 {
    let measured = match (hand.point(WRIST), hand.point(MIDDLE_MCP)) {
        (Some(wrist), Some(mcp)) => distance(wrist, mcp),
        _ => 0.0,
    };
    if measured > 0.0 {
        measured
    } else {
        1.0
    }
}

/// Mean of the wrist and MCP landmarks that are present; the origin if none are.
pub fn hand_center(hand: &HandLandmarks) -> Point {
    let present: Vec<Point> = CENTER_LANDMARKS
        .iter()
        .filter_map(|&i| hand.point(i))
        .collect();
    if present.is_empty() {
        return Point::ORIGIN;
    }
    let n = present.len() as f64;
    Point::new(
        present.iter().map(|p| p.x).sum::<f64>() / n,
        present.iter().map(|p| p.y).sum::<f64>() / n,
    )
}

/// True iff the PIP joint, and the DIP joint when measured, are straighter than 160°.
pub fn is_extended(pip: f64, dip: Option<f64>) -> bool {
    pip > EXTENDED_THRESHOLD_DEG && dip.map_or(true, |d| d > EXTENDED_THRESHOLD_DEG)
}

/// True iff the PIP joint, and the DIP joint when measured, are bent past 100°.
pub fn is_curled(pip: f64, dip: Option<f64>) -> bool {
    pip < CURLED_THRESHOLD_DEG && dip.map_or(true, |d| d < CURLED_THRESHOLD_DEG)
}
