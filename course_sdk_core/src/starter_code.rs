use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Diff;
use crate::FileDiff;
use crate::Language;
use crate::UNCOMMENT_MARKER_PATTERN;
use crate::Uncommenter;
use crate::files;

/// A marked block found in a starter repository, ready for documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
	/// Path of the file containing the block, relative to the repository.
	pub file_path: String,
	/// The marker line followed by the uncommented block.
	pub code: String,
}

/// Applies the [`Uncommenter`] to every code file of a starter repository.
#[derive(Debug, Clone)]
pub struct StarterCodeUncommenter {
	dir: PathBuf,
	language: Language,
}

impl StarterCodeUncommenter {
	pub fn new(dir: impl Into<PathBuf>, language: Language) -> Self {
		Self {
			dir: dir.into(),
			language,
		}
	}

	/// Uncomment all marked blocks in place and return one diff per modified
	/// file. At least one file has to change.
	pub fn uncomment(&self) -> CourseSdkResult<Vec<FileDiff>> {
		let code_files = self.code_files()?;

		if code_files.is_empty() {
			return Err(CourseSdkError::NoCodeFiles {
				language: self.language.to_string(),
				directory: self.dir.display().to_string(),
			});
		}

		let uncommenter = Uncommenter::new(self.language, &UNCOMMENT_MARKER_PATTERN);
		let mut diffs = Vec::new();

		for path in &code_files {
			let old_contents = files::read_lossy(path)?;
			let new_contents = uncommenter.uncomment(&old_contents);

			if old_contents == new_contents {
				continue;
			}

			std::fs::write(path, &new_contents)?;
			debug!(path = %path.display(), "uncommented marked blocks");

			let written = files::read_lossy(path)?;
			diffs.push(FileDiff {
				path: path.clone(),
				diff: Diff::from_contents(&old_contents, &written)?,
			});
		}

		if diffs.is_empty() {
			return Err(CourseSdkError::UncommentMarkerNotFound {
				language: self.language.to_string(),
				pattern: UNCOMMENT_MARKER_PATTERN.as_str().to_string(),
				files: files::display_paths(&code_files),
			});
		}

		Ok(diffs)
	}

	/// Every marked block across the repository's code files, in file order.
	pub fn uncommented_blocks_with_markers(&self) -> CourseSdkResult<Vec<CodeBlock>> {
		let uncommenter = Uncommenter::new(self.language, &UNCOMMENT_MARKER_PATTERN);
		let mut blocks = Vec::new();

		for path in self.code_files()? {
			let contents = files::read_lossy(&path)?;
			let file_path = self.relative_display(&path);

			blocks.extend(
				uncommenter
					.uncommented_blocks_with_marker(&contents)
					.into_iter()
					.map(|code| {
						CodeBlock {
							file_path: file_path.clone(),
							code,
						}
					}),
			);
		}

		Ok(blocks)
	}

	fn code_files(&self) -> CourseSdkResult<Vec<PathBuf>> {
		files::code_files(&self.dir, self.language)
	}

	fn relative_display(&self, path: &Path) -> String {
		path.strip_prefix(&self.dir)
			.unwrap_or(path)
			.display()
			.to_string()
	}
}
