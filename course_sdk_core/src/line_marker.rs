use std::path::Path;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Diff;
use crate::FileDiff;
use crate::Language;
use crate::files;

/// Marks the comment that explains how to print debug logs. The comment and
/// the print statement under it are removed from first-stage solutions.
pub static LINE_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new("You can use print").unwrap_or_else(|e| panic!("invalid line marker: {e}"))
});

/// Removes the "you can use print" comment and the line it documents from
/// every code file in a directory.
#[derive(Debug, Clone)]
pub struct LineWithCommentRemover {
	dir: PathBuf,
	language: Language,
}

impl LineWithCommentRemover {
	pub fn new(dir: impl Into<PathBuf>, language: Language) -> Self {
		Self {
			dir: dir.into(),
			language,
		}
	}

	/// Rewrite every code file that contains the marker and return one diff per
	/// rewritten file. Fails when no file contained the marker.
	pub fn process(&self) -> CourseSdkResult<Vec<FileDiff>> {
		let code_files = files::code_files(&self.dir, self.language)?;

		if code_files.is_empty() {
			return Err(CourseSdkError::NoCodeFiles {
				language: self.language.to_string(),
				directory: self.dir.display().to_string(),
			});
		}

		let mut diffs = Vec::new();
		for path in &code_files {
			if let Some(diff) = self.process_file(path)? {
				diffs.push(diff);
			}
		}

		if diffs.is_empty() {
			return Err(CourseSdkError::LineMarkerNotFound {
				language: self.language.to_string(),
				pattern: LINE_MARKER_PATTERN.as_str().to_string(),
				files: files::display_paths(&code_files),
			});
		}

		Ok(diffs)
	}

	fn process_file(&self, path: &Path) -> CourseSdkResult<Option<FileDiff>> {
		let old_contents = files::read_lossy(path)?;
		let new_contents = remove_line_with_comment(&old_contents);

		if old_contents == new_contents {
			return Ok(None);
		}

		std::fs::write(path, &new_contents)?;
		debug!(path = %path.display(), "removed debug print marker");

		let written = files::read_lossy(path)?;
		Ok(Some(FileDiff {
			path: path.to_path_buf(),
			diff: Diff::from_contents(&old_contents, &written)?,
		}))
	}
}

/// Remove the first marker line, the line right after it and one blank line
/// following those. Contents without the marker are returned unchanged.
pub fn remove_line_with_comment(contents: &str) -> String {
	let mut lines: Vec<&str> = contents.split('\n').collect();

	let Some(marker_index) = lines
		.iter()
		.position(|line| LINE_MARKER_PATTERN.is_match(line))
	else {
		return contents.to_string();
	};

	// The marker comment and the statement it documents.
	let removable = (lines.len() - marker_index).min(2);
	lines.drain(marker_index..marker_index + removable);

	if lines
		.get(marker_index)
		.is_some_and(|line| line.trim().is_empty())
	{
		lines.remove(marker_index);
	}

	lines.join("\n")
}
