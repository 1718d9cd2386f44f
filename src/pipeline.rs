//! Per-animation processing and run results.
//!
//! Animations are processed one after another: order the frames, decode them,
//! compose the sheet, write it. By default the first failure ends the run;
//! with `keep_going` every animation gets a [`GroupResult`] and the run
//! continues.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::SheetConfig;
use crate::error::{SheetError, SheetResult};
use crate::grouping::{scan_directory, AnimationGroup};
use crate::loader::load_frames;
use crate::output::{resolve_format, save_sheet, sheet_path};
use crate::spritesheet::{render_spritesheet, SheetLayout};

/// Outcome of a single animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    /// Sheet written to the given path
    Written(PathBuf),
    /// Processing failed with error
    Failed(String),
}

impl GroupStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, GroupStatus::Written(_))
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, GroupStatus::Failed(_))
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupStatus::Written(path) => write!(f, "written to {}", path.display()),
            GroupStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of processing one animation.
#[derive(Debug, Clone)]
pub struct GroupResult {
    /// Animation name
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// What happened
    pub status: GroupStatus,
}

/// Result of a complete run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Results for each animation, in processing order
    pub groups: Vec<GroupResult>,
    /// Total run duration
    pub duration: Duration,
}

impl RunResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation result.
    pub fn add_result(&mut self, result: GroupResult) {
        self.groups.push(result);
    }

    /// Number of sheets written.
    pub fn success_count(&self) -> usize {
        self.groups.iter().filter(|r| r.status.is_success()).count()
    }

    /// Number of failed animations.
    pub fn failed_count(&self) -> usize {
        self.groups.iter().filter(|r| r.status.is_failure()).count()
    }

    /// True when no animation failed.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Paths of all sheets written.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        self.groups
            .iter()
            .filter_map(|r| match &r.status {
                GroupStatus::Written(path) => Some(path),
                GroupStatus::Failed(_) => None,
            })
            .collect()
    }

    /// Failed animation results.
    pub fn failures(&self) -> Vec<&GroupResult> {
        self.groups.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// Format a summary of the run.
    pub fn summary(&self) -> String {
        let written = self.success_count();
        let failed = self.failed_count();
        let total = self.groups.len();

        if failed == 0 {
            return format!("Wrote {} spritesheet(s) in {:?}", written, self.duration);
        }

        let mut lines = vec![format!(
            "{} of {} animation(s) failed, {} spritesheet(s) written",
            failed, total, written
        )];
        for group in self.failures() {
            lines.push(format!("  - {}: {}", group.name, group.status));
        }
        lines.join("\n")
    }
}

/// Compose and write the sheet for one animation.
///
/// Returns the path written.
pub fn process_group(group: &AnimationGroup, config: &SheetConfig) -> SheetResult<PathBuf> {
    if group.has_mixed_suffixes() {
        tracing::warn!(
            animation = %group.name,
            order = %config.order,
            "animation mixes an unnumbered frame with numbered ones; check frame order"
        );
    }

    let ordered = config.order.sorted(&group.frames);
    let frames = load_frames(&config.input_dir, &ordered)?;

    let layout = SheetLayout::for_frames(&frames)?;
    tracing::debug!(
        animation = %group.name,
        frames = layout.frame_count,
        cell_width = layout.cell_width,
        cell_height = layout.cell_height,
        "composing spritesheet"
    );
    let sheet = render_spritesheet(&frames)?;
    drop(frames);

    let format = resolve_format(&config.format)?;
    let path = sheet_path(&config.output_dir, &group.name, &config.format);
    save_sheet(&sheet, &path, format)?;

    tracing::info!(animation = %group.name, path = %path.display(), "spritesheet written");
    Ok(path)
}

/// Process every animation found in the input directory.
///
/// Each written sheet is announced on stdout as `Saved <path>`.
///
/// # Errors
///
/// Fails immediately when the input directory cannot be read or the output
/// directory does not exist. Without `keep_going`, the first animation error
/// is returned as well; with it, failures are recorded in the [`RunResult`].
pub fn run(config: &SheetConfig) -> SheetResult<RunResult> {
    let start = Instant::now();

    let groups = scan_directory(&config.input_dir)?;
    if !config.output_dir.is_dir() {
        return Err(SheetError::OutputDir(config.output_dir.clone()));
    }
    if groups.is_empty() {
        tracing::warn!(dir = %config.input_dir.display(), "no animation frames found");
    }

    let mut result = RunResult::new();
    for group in groups.values() {
        let status = match process_group(group, config) {
            Ok(path) => {
                println!("Saved {}", path.display());
                GroupStatus::Written(path)
            }
            Err(e) if config.keep_going => {
                tracing::warn!(animation = %group.name, error = %e, "skipping animation");
                GroupStatus::Failed(e.to_string())
            }
            Err(e) => return Err(e),
        };
        let frame_count = group.len();
        result.add_result(GroupResult { name: group.name.clone(), frame_count, status });
    }

    result.duration = start.elapsed();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(name: &str) -> GroupResult {
        GroupResult {
            name: name.to_string(),
            frame_count: 2,
            status: GroupStatus::Written(PathBuf::from(format!("out/{}.png", name))),
        }
    }

    fn failed(name: &str, err: &str) -> GroupResult {
        GroupResult {
            name: name.to_string(),
            frame_count: 1,
            status: GroupStatus::Failed(err.to_string()),
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(GroupStatus::Written(PathBuf::from("a.png")).is_success());
        assert!(GroupStatus::Failed("x".to_string()).is_failure());
        assert_eq!(GroupStatus::Failed("bad".to_string()).to_string(), "failed: bad");
    }

    #[test]
    fn test_counts_and_outputs() {
        let mut result = RunResult::new();
        result.add_result(written("walk"));
        result.add_result(failed("run", "corrupt"));
        result.add_result(written("idle"));

        assert_eq!(result.success_count(), 2);
        assert_eq!(result.failed_count(), 1);
        assert!(!result.is_success());
        assert_eq!(
            result.outputs(),
            vec![&PathBuf::from("out/walk.png"), &PathBuf::from("out/idle.png")]
        );
        assert_eq!(result.failures()[0].name, "run");
    }

    #[test]
    fn test_summary_lists_failures() {
        let mut result = RunResult::new();
        result.add_result(written("walk"));
        result.add_result(failed("run", "corrupt frame"));

        let summary = result.summary();
        assert!(summary.starts_with("1 of 2 animation(s) failed, 1 spritesheet(s) written"));
        assert!(summary.contains("  - run: failed: corrupt frame"));
    }

    #[test]
    fn test_summary_success() {
        let mut result = RunResult::new();
        result.add_result(written("walk"));
        assert!(result.is_success());
        assert!(result.summary().starts_with("Wrote 1 spritesheet(s)"));
    }

    #[test]
    fn test_empty_result_is_success() {
        let result = RunResult::new();
        assert!(result.is_success());
        assert!(result.outputs().is_empty());
    }
}
