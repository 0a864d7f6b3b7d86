//! Synthetic hand poses for tests and benchmarks.
//!
//! Every pose shares the same palm: wrist at (100, 200) and the four MCP
//! joints on the line y = 150, giving a palm size of 50 px. Fingers point
//! toward smaller y (up in image space).

use crate::landmarks::{HandLandmarks, Point};

/// Palm size shared by every fixture pose.
pub const PALM_SIZE: f64 = 50.0;

const WRIST: (f64, f64) = (100.0, 200.0);
const MCPS: [(f64, f64); 4] = [(85.0, 150.0), (100.0, 150.0), (115.0, 150.0), (130.0, 150.0)];

#[derive(Clone, Copy)]
enum Pose {
    Straight,
    Curled,
}

#[derive(Clone, Copy)]
enum Thumb {
    Straight,
    Folded,
    /// Tip touching the curled index fingertip.
    Pinch,
}

fn thumb(pose: Thumb) -> [(f64, f64); 4] {
    match pose {
        Thumb::Straight => [(85.0, 190.0), (70.0, 180.0), (55.0, 170.0), (40.0, 160.0)],
        Thumb::Folded => [(85.0, 190.0), (75.0, 175.0), (85.0, 165.0), (100.0, 165.0)],
        Thumb::Pinch => [(85.0, 190.0), (78.0, 175.0), (88.0, 155.0), (96.0, 147.0)],
    }
}

fn finger((x, y): (f64, f64), pose: Pose) -> [(f64, f64); 4] {
    match pose {
        Pose::Straight => [(x, y), (x, y - 20.0), (x, y - 35.0), (x, y - 50.0)],
        // Right angles at both PIP and DIP.
        Pose::Curled => [(x, y), (x, y - 20.0), (x + 15.0, y - 20.0), (x + 15.0, y - 5.0)],
    }
}

fn build(thumb_pose: Thumb, fingers: [Pose; 4]) -> HandLandmarks {
    let mut points = vec![WRIST];
    points.extend(thumb(thumb_pose));
    for (mcp, pose) in MCPS.into_iter().zip(fingers) {
        points.extend(finger(mcp, pose));
    }
    HandLandmarks::from_points(&points)
}

/// All five fingers straight.
pub fn open_palm() -> HandLandmarks {
    build(Thumb::Straight, [Pose::Straight; 4])
}

/// All four fingers curled, thumb folded across.
pub fn fist() -> HandLandmarks {
    build(Thumb::Folded, [Pose::Curled; 4])
}

/// Thumb, index and pinky straight; middle and ring curled.
pub fn i_love_you() -> HandLandmarks {
    build(
        Thumb::Straight,
        [Pose::Straight, Pose::Curled, Pose::Curled, Pose::Straight],
    )
}

/// Fingers curled with the thumb tip touching the index tip.
pub fn o_shape() -> HandLandmarks {
    build(Thumb::Pinch, [Pose::Curled; 4])
}

/// `hand` scaled about the shared wrist position, as if held nearer the camera.
pub fn scaled(hand: &HandLandmarks, factor: f64) -> HandLandmarks {
    let (wx, wy) = WRIST;
    HandLandmarks::new(
        hand.keypoints
            .iter()
            .map(|p| p.map(|p| Point::new(wx + (p.x - wx) * factor, wy + (p.y - wy) * factor)))
            .collect(),
    )
}
