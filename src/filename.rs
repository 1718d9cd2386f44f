//! Frame filename parsing
//!
//! Frames are named `<animation>_<frame>.<ext>`, where the `_<frame>` suffix is
//! optional. Only the segment after the last underscore is considered for the
//! frame number, so `walk_01_02.png` belongs to animation `walk_01`.

use regex::Regex;
use std::sync::OnceLock;

/// Image extensions accepted as animation frames (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// A frame filename split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameName {
    /// Animation name (the group key)
    pub animation: String,
    /// Frame number, 0 when the name carries no numeric suffix
    pub frame: u64,
    /// Extension as written in the filename
    pub extension: String,
}

fn frame_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>.+?)(?:_(?P<frame>[0-9]+))?\.(?P<ext>(?i:png|jpg|jpeg|gif))$")
            .expect("frame filename pattern is valid")
    })
}

/// Check whether an extension (without the dot) is an accepted frame format.
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Parse a frame filename.
///
/// Returns `None` when the extension is not one of [`SUPPORTED_EXTENSIONS`].
///
/// # Examples
///
/// ```
/// use framesheet::filename::parse_frame_name;
///
/// let parsed = parse_frame_name("walk_003.png").unwrap();
/// assert_eq!(parsed.animation, "walk");
/// assert_eq!(parsed.frame, 3);
///
/// let idle = parse_frame_name("idle.PNG").unwrap();
/// assert_eq!(idle.animation, "idle");
/// assert_eq!(idle.frame, 0);
///
/// assert!(parse_frame_name("notes.txt").is_none());
/// ```
pub fn parse_frame_name(file_name: &str) -> Option<FrameName> {
    let caps = frame_pattern().captures(file_name)?;
    let name = caps.name("name")?.as_str();
    let extension = caps.name("ext")?.as_str().to_string();

    // A digit run too long for u64 is still a frame suffix, saturated
    let frame = match caps.name("frame") {
        Some(digits) => digits.as_str().parse::<u64>().unwrap_or(u64::MAX),
        None => 0,
    };

    Some(FrameName { animation: name.to_string(), frame, extension })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str) -> (String, u64) {
        let p = parse_frame_name(name).unwrap_or_else(|| panic!("{} should parse", name));
        (p.animation, p.frame)
    }

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(parsed("name_003.png"), ("name".to_string(), 3));
        assert_eq!(parsed("walk_10.gif"), ("walk".to_string(), 10));
    }

    #[test]
    fn test_no_underscore_is_frame_zero() {
        assert_eq!(parsed("name.png"), ("name".to_string(), 0));
    }

    #[test]
    fn test_non_numeric_suffix_keeps_whole_stem() {
        assert_eq!(parsed("name_abc.png"), ("name_abc".to_string(), 0));
        assert_eq!(parsed("run_1a.png"), ("run_1a".to_string(), 0));
    }

    #[test]
    fn test_only_last_segment_is_inspected() {
        assert_eq!(parsed("walk_01_02.png"), ("walk_01".to_string(), 2));
        assert_eq!(parsed("hero_attack_7.jpeg"), ("hero_attack".to_string(), 7));
    }

    #[test]
    fn test_trailing_underscore_is_part_of_name() {
        assert_eq!(parsed("jump_.png"), ("jump_".to_string(), 0));
    }

    #[test]
    fn test_extension_case_insensitive() {
        for name in ["a_1.PNG", "a_1.Png", "a_1.JPG", "a_1.jpeg", "a_1.GiF"] {
            assert_eq!(parsed(name), ("a".to_string(), 1), "{}", name);
        }
        assert_eq!(parse_frame_name("a_1.Png").map(|p| p.extension), Some("Png".to_string()));
    }

    #[test]
    fn test_unsupported_extensions_rejected() {
        for name in ["a_1.bmp", "notes.txt", "a_1.png.bak", "png", ".png", "a_1"] {
            assert!(parse_frame_name(name).is_none(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_non_ascii_digits_are_not_frame_numbers() {
        // Arabic-Indic digits
        assert_eq!(parsed("walk_\u{0663}.png"), ("walk_\u{0663}".to_string(), 0));
    }

    #[test]
    fn test_overflowing_frame_number_saturates() {
        let name = "walk_123456789012345678901234567890.png";
        assert_eq!(parsed(name), ("walk".to_string(), u64::MAX));
        assert_eq!(parsed("walk_18446744073709551615.png"), ("walk".to_string(), u64::MAX));
    }

    #[test]
    fn test_is_supported_extension() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("JPEG"));
        assert!(!is_supported_extension("bmp"));
        assert!(!is_supported_extension(""));
    }
}
