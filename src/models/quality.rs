//! Recall quality scales.
//!
//! `Quality` is the full 0-5 SM-2 grade. `SimpleQuality` is the four-button
//! scale shown to learners; each button maps onto one fixed grade:
//!
//! | button | grade |
//! |--------|-------|
//! | Again  | 0     |
//! | Hard   | 3     |
//! | Good   | 4     |
//! | Easy   | 5     |

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    CompleteBlackout = 0,
    IncorrectButRemembered = 1,
    IncorrectEasyRecall = 2,
    CorrectWithDifficulty = 3,
    CorrectWithHesitation = 4,
    Perfect = 5,
}

impl Quality {
    pub fn score(self) -> i32 {
        self as i32
    }

    /// Grade for an arbitrary integer, clamped into 0-5.
    pub fn from_score(score: i32) -> Self {
        match score.clamp(0, 5) {
            0 => Quality::CompleteBlackout,
            1 => Quality::IncorrectButRemembered,
            2 => Quality::IncorrectEasyRecall,
            3 => Quality::CorrectWithDifficulty,
            4 => Quality::CorrectWithHesitation,
            _ => Quality::Perfect,
        }
    }

    pub fn is_lapse(self) -> bool {
        self.score() < 3
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimpleQuality {
    Again,
    Hard,
    Good,
    Easy,
}

impl SimpleQuality {
    pub const ALL: [SimpleQuality; 4] = [
        SimpleQuality::Again,
        SimpleQuality::Hard,
        SimpleQuality::Good,
        SimpleQuality::Easy,
    ];

    pub fn quality(self) -> Quality {
        match self {
            SimpleQuality::Again => Quality::CompleteBlackout,
            SimpleQuality::Hard => Quality::CorrectWithDifficulty,
            SimpleQuality::Good => Quality::CorrectWithHesitation,
            SimpleQuality::Easy => Quality::Perfect,
        }
    }

    pub fn score(self) -> i32 {
        self.quality().score()
    }
}

impl From<SimpleQuality> for Quality {
    fn from(simple: SimpleQuality) -> Self {
        simple.quality()
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        quality.score()
    }
}

impl From<SimpleQuality> for i32 {
    fn from(simple: SimpleQuality) -> Self {
        simple.score()
    }
}
