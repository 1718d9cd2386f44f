//! Frame ordering policies

use serde::{Deserialize, Serialize};

use crate::grouping::FrameFile;

/// How frames of one animation are ordered before composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrameOrder {
    /// Sort by raw filename. `walk_10.png` comes before `walk_2.png`, so frame
    /// numbers need zero padding.
    #[default]
    Lexical,
    /// Sort by the parsed frame number, ties broken by filename
    Numeric,
}

impl std::fmt::Display for FrameOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameOrder::Lexical => write!(f, "lexical"),
            FrameOrder::Numeric => write!(f, "numeric"),
        }
    }
}

impl FrameOrder {
    /// Return the frames in playback order.
    pub fn sorted<'a>(&self, frames: &'a [FrameFile]) -> Vec<&'a FrameFile> {
        let mut sorted: Vec<&FrameFile> = frames.iter().collect();
        match self {
            FrameOrder::Lexical => sorted.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
            FrameOrder::Numeric => sorted
                .sort_by(|a, b| a.frame.cmp(&b.frame).then_with(|| a.file_name.cmp(&b.file_name))),
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(names: &[(&str, u64)]) -> Vec<FrameFile> {
        names
            .iter()
            .map(|(name, frame)| FrameFile { file_name: name.to_string(), frame: *frame })
            .collect()
    }

    fn names(sorted: Vec<&FrameFile>) -> Vec<&str> {
        sorted.into_iter().map(|f| f.file_name.as_str()).collect()
    }

    #[test]
    fn test_lexical_is_not_numeric() {
        let input = frames(&[("anim_2.png", 2), ("anim_10.png", 10), ("anim_1.png", 1)]);
        assert_eq!(
            names(FrameOrder::Lexical.sorted(&input)),
            vec!["anim_1.png", "anim_10.png", "anim_2.png"]
        );
    }

    #[test]
    fn test_numeric_uses_frame_number() {
        let input = frames(&[("anim_2.png", 2), ("anim_10.png", 10), ("anim_1.png", 1)]);
        assert_eq!(
            names(FrameOrder::Numeric.sorted(&input)),
            vec!["anim_1.png", "anim_2.png", "anim_10.png"]
        );
    }

    #[test]
    fn test_numeric_ties_break_on_filename() {
        let input = frames(&[("run_01.png", 1), ("run_1.png", 1), ("run_001.png", 1)]);
        assert_eq!(
            names(FrameOrder::Numeric.sorted(&input)),
            vec!["run_001.png", "run_01.png", "run_1.png"]
        );
    }

    #[test]
    fn test_unsuffixed_frame_sorts_first_in_both_modes() {
        let input = frames(&[("walk_01.png", 1), ("walk.png", 0)]);
        assert_eq!(names(FrameOrder::Lexical.sorted(&input)), vec!["walk.png", "walk_01.png"]);
        assert_eq!(names(FrameOrder::Numeric.sorted(&input)), vec!["walk.png", "walk_01.png"]);
    }

    #[test]
    fn test_saturated_frame_numbers_sort_last_then_by_filename() {
        let input = frames(&[
            ("walk_99999999999999999999999.png", u64::MAX),
            ("walk_18446744073709551615.png", u64::MAX),
            ("walk_3.png", 3),
        ]);
        assert_eq!(
            names(FrameOrder::Numeric.sorted(&input)),
            vec!["walk_3.png", "walk_18446744073709551615.png", "walk_99999999999999999999999.png"]
        );
    }

    #[test]
    fn test_default_is_lexical() {
        assert_eq!(FrameOrder::default(), FrameOrder::Lexical);
        assert_eq!(FrameOrder::default().to_string(), "lexical");
    }
}
