use std::fmt;
use std::path::PathBuf;

use similar::TextDiff;

use crate::CourseSdkError;
use crate::CourseSdkResult;

/// Lines of unchanged context shown around every change. Wide enough that a
/// small, mostly rewritten file is displayed almost in full.
pub const DIFF_CONTEXT_RADIUS: usize = 25;

/// Build a unified diff between two versions of a file.
///
/// `None` stands for a file that doesn't exist on that side and is diffed as
/// empty content. The `---`/`+++` file header is omitted, the output starts
/// at the first `@@` hunk header. Identical inputs are an error
/// ([`CourseSdkError::NoDiff`]) because every caller expects a change.
pub fn build_diff(old_contents: Option<&str>, new_contents: Option<&str>) -> CourseSdkResult<String> {
	let old_contents = old_contents.unwrap_or_default();
	let new_contents = new_contents.unwrap_or_default();

	if old_contents == new_contents {
		return Err(CourseSdkError::NoDiff);
	}

	let raw = TextDiff::from_lines(old_contents, new_contents)
		.unified_diff()
		.context_radius(DIFF_CONTEXT_RADIUS)
		.missing_newline_hint(false)
		.to_string();

	if raw.trim().is_empty() {
		return Err(CourseSdkError::NoDiff);
	}

	// Blank context lines carry a lone space marker.
	let normalized = raw
		.split('\n')
		.map(|line| if line == " " { "" } else { line })
		.collect::<Vec<_>>()
		.join("\n");

	Ok(normalized)
}

/// A computed diff, kept as raw unified diff text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
	pub raw: String,
}

impl Diff {
	pub fn from_contents(old_contents: &str, new_contents: &str) -> CourseSdkResult<Self> {
		Ok(Self {
			raw: build_diff(Some(old_contents), Some(new_contents))?,
		})
	}

	/// Iterate the diff lines tagged by the kind of change they carry.
	pub fn lines(&self) -> impl Iterator<Item = DiffLine<'_>> {
		self.raw.lines().map(DiffLine::classify)
	}
}

impl fmt::Display for Diff {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

/// One line of a unified diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
	Added(&'a str),
	Removed(&'a str),
	Context(&'a str),
}

impl<'a> DiffLine<'a> {
	fn classify(line: &'a str) -> Self {
		if line.starts_with('+') {
			Self::Added(line)
		} else if line.starts_with('-') {
			Self::Removed(line)
		} else {
			Self::Context(line)
		}
	}
}

/// A file that differs between two directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
	/// Path relative to the compared directories.
	pub path: PathBuf,
	/// Contents in the old directory, `None` when the file was added.
	pub old_contents: Option<String>,
	/// Contents in the new directory, `None` when the file was deleted.
	pub new_contents: Option<String>,
}

impl ChangedFile {
	pub fn diff(&self) -> CourseSdkResult<String> {
		build_diff(self.old_contents.as_deref(), self.new_contents.as_deref())
	}
}

/// A diff produced by rewriting a file in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
	pub path: PathBuf,
	pub diff: Diff,
}
