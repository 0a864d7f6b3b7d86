//! Target-sign dispatch.
//!
//! The set of recognizable signs is closed: adding one means adding a
//! [`Sign`] variant, and the compiler then points at every match that has
//! to learn about it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gestures::{self, GestureResult};
use crate::landmarks::Frame;

/// A sign the recognizer has a classifier for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "I Love You")]
    ILoveYou,
    Stop,
    More,
    Help,
}

impl Sign {
    pub const ALL: [Sign; 4] = [Sign::ILoveYou, Sign::Stop, Sign::More, Sign::Help];

    /// The exact label used for dispatch and in results.
    pub fn label(&self) -> &'static str {
        match self {
            Sign::ILoveYou => "I Love You",
            Sign::Stop => "Stop",
            Sign::More => "More",
            Sign::Help => "Help",
        }
    }

    /// How many hands the sign is made with.
    pub fn hands_required(&self) -> usize {
        match self {
            Sign::ILoveYou | Sign::Stop => 1,
            Sign::More | Sign::Help => 2,
        }
    }

    /// Classify a single frame against this sign.
    pub fn classify(&self, frame: &Frame) -> Option<GestureResult> {
        match self {
            Sign::ILoveYou => gestures::i_love_you(frame),
            Sign::Stop => gestures::stop(frame),
            Sign::More => gestures::more(frame),
            Sign::Help => gestures::help(frame),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sign {
    type Err = String;

    /// Exact, case-sensitive match on the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .into_iter()
            .find(|sign| sign.label() == s)
            .ok_or_else(|| format!("unsupported sign: {s:?}"))
    }
}

/// Classify `frame` against the sign named `target`.
///
/// Unknown or empty labels are "no match", never an error.
pub fn recognize(target: &str, frame: &Frame) -> Option<GestureResult> {
    match target.parse::<Sign>() {
        Ok(sign) => sign.classify(frame),
        Err(e) => {
            tracing::debug!("{e}, nothing to recognize");
            None
        }
    }
}
