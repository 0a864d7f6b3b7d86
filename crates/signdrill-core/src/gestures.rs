//! Heuristic single-frame classifiers, one per supported sign.
//!
//! Each classifier takes the whole frame and returns a [`GestureResult`]
//! or `None`. A frame with fewer hands than a sign needs is simply "no
//! match". Two-handed signs use the first two detected hands positionally.

use serde::{Deserialize, Serialize};

use crate::geometry::distance;
use crate::hand::{HandFeatures, EXTENDED_THRESHOLD_DEG};
use crate::landmarks::{Frame, HandLandmarks, INDEX_TIP, THUMB_TIP};

/// Minimum per-hand score (exclusive) for "I Love You".
pub const I_LOVE_YOU_MIN_SCORE: f64 = 0.8;

/// Minimum fraction (exclusive) of extended fingers for "Stop".
pub const STOP_MIN_CONFIDENCE: f64 = 0.85;

/// Maximum thumb-to-index tip distance, in palm sizes, for an O-shape.
pub const O_SHAPE_MAX_GAP: f64 = 0.35;

/// Maximum center separation, in average palm sizes, for two-handed signs.
pub const TWO_HAND_MAX_SEPARATION: f64 = 1.2;

/// Minimum of four non-thumb fingers that must agree for a fist or flat palm.
pub const MIN_AGREEING_FINGERS: usize = 3;

pub const MORE_CONFIDENCE: f64 = 0.9;
pub const HELP_CONFIDENCE: f64 = 0.85;

/// A recognized sign and how well the frame matched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub label: String,
    /// In [0, 1]. A match score, not a calibrated probability.
    pub confidence: f64,
}

impl GestureResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

fn first_two(frame: &Frame) -> Option<(&HandLandmarks, &HandLandmarks)> {
    match frame.as_slice() {
        [a, b, ..] => Some((a, b)),
        _ => None,
    }
}

fn fraction(hits: usize, total: usize) -> f64 {
    hits as f64 / total as f64
}

/// Thumb, index and pinky out; middle and ring folded. Any hand may sign it.
pub fn i_love_you(frame: &Frame) -> Option<GestureResult> {
    frame.iter().find_map(|hand| {
        let f = HandFeatures::extract(hand);
        let checks = [
            f.thumb.pip > EXTENDED_THRESHOLD_DEG,
            f.index.is_extended(),
            f.middle.is_curled(),
            f.ring.is_curled(),
            f.pinky.is_extended(),
        ];
        let score = fraction(checks.iter().filter(|&&c| c).count(), checks.len());
        (score > I_LOVE_YOU_MIN_SCORE).then(|| GestureResult::new("I Love You", score))
    })
}

/// Flat open palm on the first detected hand.
pub fn stop(frame: &Frame) -> Option<GestureResult> {
    let hand = frame.first()?;
    let f = HandFeatures::extract(hand);
    let confidence = fraction(f.extended_fingers(), 4);
    (confidence > STOP_MIN_CONFIDENCE).then(|| GestureResult::new("Stop", confidence))
}

fn is_o_shape(hand: &HandLandmarks, f: &HandFeatures) -> bool {
    distance(hand.point(THUMB_TIP), hand.point(INDEX_TIP)) / f.palm_size < O_SHAPE_MAX_GAP
}

/// Both hands in an O-shape with their fingertips brought together.
pub fn more(frame: &Frame) -> Option<GestureResult> {
    let (a, b) = first_two(frame)?;
    let (fa, fb) = (HandFeatures::extract(a), HandFeatures::extract(b));

    if !is_o_shape(a, &fa) || !is_o_shape(b, &fb) {
        return None;
    }

    let avg_palm = (fa.palm_size + fb.palm_size) / 2.0;
    let separation = distance(fa.center, fb.center) / avg_palm;
    (separation < TWO_HAND_MAX_SEPARATION).then(|| GestureResult::new("More", MORE_CONFIDENCE))
}

fn is_fist(f: &HandFeatures) -> bool {
    f.curled_fingers() >= MIN_AGREEING_FINGERS
}

fn is_flat_palm(f: &HandFeatures) -> bool {
    f.extended_fingers() >= MIN_AGREEING_FINGERS
}

/// A fist resting on top of a flat palm. Either hand may be the fist.
pub fn help(frame: &Frame) -> Option<GestureResult> {
    let (a, b) = first_two(frame)?;
    let (fa, fb) = (HandFeatures::extract(a), HandFeatures::extract(b));
    let avg_palm = (fa.palm_size + fb.palm_size) / 2.0;

    let fist_on_palm = |fist: &HandFeatures, palm: &HandFeatures| {
        if !is_fist(fist) || !is_flat_palm(palm) {
            return false;
        }
        let dx = (fist.center.x - palm.center.x).abs() / avg_palm;
        let dy = (fist.center.y - palm.center.y).abs() / avg_palm;
        dx < TWO_HAND_MAX_SEPARATION
            && dy < TWO_HAND_MAX_SEPARATION
            && fist.center.y < palm.center.y
    };

    (fist_on_palm(&fa, &fb) || fist_on_palm(&fb, &fa))
        .then(|| GestureResult::new("Help", HELP_CONFIDENCE))
}
