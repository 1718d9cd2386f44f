//! Directory scanning and animation grouping.
//!
//! Every supported image in the input directory is assigned to exactly one
//! animation group, keyed by the name parsed from its filename.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{SheetError, SheetResult};
use crate::filename::parse_frame_name;

/// One source file belonging to an animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    /// Filename relative to the input directory
    pub file_name: String,
    /// Parsed frame number (0 when unsuffixed)
    pub frame: u64,
}

/// All frames sharing an animation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationGroup {
    /// Animation name, also used as the output file stem
    pub name: String,
    /// Member frames in directory listing order
    pub frames: Vec<FrameFile>,
}

impl AnimationGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), frames: Vec::new() }
    }

    /// Number of frames in the group.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the group has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True when the group holds both a bare `name.ext` file and numbered
    /// `name_N.ext` siblings. Their relative order depends on the sort policy.
    pub fn has_mixed_suffixes(&self) -> bool {
        let suffixed = |f: &FrameFile| {
            let n = self.name.len();
            f.file_name.len() > n + 1 && f.file_name.as_bytes()[n] == b'_'
        };
        let bare = self.frames.iter().filter(|&f| !suffixed(f)).count();
        bare > 0 && bare < self.frames.len()
    }
}

/// Animation groups ordered by name
pub type AnimationGroups = BTreeMap<String, AnimationGroup>;

/// Add one filename to the grouping. Returns `false` if the name was not a
/// supported frame file.
pub fn add_file(groups: &mut AnimationGroups, file_name: &str) -> bool {
    let Some(parsed) = parse_frame_name(file_name) else {
        return false;
    };
    groups
        .entry(parsed.animation.clone())
        .or_insert_with(|| AnimationGroup::new(parsed.animation))
        .frames
        .push(FrameFile { file_name: file_name.to_string(), frame: parsed.frame });
    true
}

/// Group a list of filenames without touching the filesystem.
pub fn group_file_names<'a, I>(names: I) -> AnimationGroups
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups = AnimationGroups::new();
    for name in names {
        add_file(&mut groups, name);
    }
    groups
}

/// Scan a directory and group its frame images into animations.
///
/// Sub-directories, unsupported extensions and non-UTF-8 names are skipped.
/// A missing or unreadable directory is an error.
pub fn scan_directory(dir: &Path) -> SheetResult<AnimationGroups> {
    let read_err = |source| SheetError::ReadDir { path: dir.to_path_buf(), source };
    let entries = fs::read_dir(dir).map_err(read_err)?;

    let mut groups = AnimationGroups::new();
    for entry in entries {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        // Follow symlinks so linked frames are picked up
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let os_name = entry.file_name();
        let Some(file_name) = os_name.to_str() else {
            tracing::debug!(name = ?os_name, "skipping non UTF-8 filename");
            continue;
        };

        if !add_file(&mut groups, file_name) {
            tracing::debug!(file = file_name, "skipping unsupported file");
        }
    }

    tracing::debug!(dir = %dir.display(), groups = groups.len(), "scanned input directory");
    Ok(groups)
}
