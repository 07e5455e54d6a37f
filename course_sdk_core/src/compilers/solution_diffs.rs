use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use super::Compiler;
use crate::ChangedFile;
use crate::Course;
use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Language;
use crate::files;

/// Writes one `.diff` file per changed path between consecutive stages.
///
/// Stage 0 is the compiled starter repository. Stages without a solution
/// directory are skipped, so solutions can be authored out of order; the next
/// existing stage is then compared with the last stage that had one.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDiffsCompiler<'a> {
	course: &'a Course,
}

impl<'a> SolutionDiffsCompiler<'a> {
	pub fn new(course: &'a Course) -> Self {
		Self { course }
	}

	/// Regenerate every stage's diff directory for `language`, returning the
	/// diff files written.
	pub fn write_stage_diffs(&self, language: Language) -> CourseSdkResult<Vec<PathBuf>> {
		info!(course = %self.course.slug, %language, "compiling solution diffs");

		let mut written = Vec::new();
		let mut previous_dir = self.course.compiled_starter_repository_dir(language);

		for stage in &self.course.stages {
			let stage_dir = self.course.solution_code_dir(language, stage);

			if !stage_dir.is_dir() {
				debug!(stage = %stage.slug, "no solution directory, skipping");
				continue;
			}

			let diff_dir = self.course.solution_diff_dir(language, stage);
			if diff_dir.exists() {
				std::fs::remove_dir_all(&diff_dir)?;
			}
			std::fs::create_dir_all(&diff_dir)?;

			for changed_file in compute_changed_files(&previous_dir, &stage_dir)? {
				let diff = changed_file.diff().map_err(|e| {
					match e {
						CourseSdkError::NoDiff => {
							CourseSdkError::UnchangedStageFile {
								language: language.to_string(),
								stage: stage.solution_dir(),
								path: changed_file.path.display().to_string(),
							}
						}
						other => other,
					}
				})?;

				let diff_path = diff_dir.join(format!("{}.diff", changed_file.path.display()));
				if let Some(parent) = diff_path.parent() {
					std::fs::create_dir_all(parent)?;
				}
				std::fs::write(&diff_path, diff)?;
				written.push(diff_path);
			}

			previous_dir = stage_dir;
		}

		Ok(written)
	}
}

impl Compiler for SolutionDiffsCompiler<'_> {
	fn name(&self) -> &'static str {
		"solution diffs"
	}

	fn compile_all(&self) -> CourseSdkResult<()> {
		for language in self.course.solution_languages()? {
			self.write_stage_diffs(language)?;
		}

		Ok(())
	}

	fn compile_for_language(&self, language: Language) -> CourseSdkResult<()> {
		self.write_stage_diffs(language).map(|_| ())
	}
}

/// Files that were added, modified or deleted going from `source_dir` to
/// `target_dir`, ordered by relative path. A missing directory counts as
/// empty.
pub fn compute_changed_files(
	source_dir: &Path,
	target_dir: &Path,
) -> CourseSdkResult<Vec<ChangedFile>> {
	let source_files = read_tree(source_dir)?;
	let target_files = read_tree(target_dir)?;

	let paths: BTreeSet<&PathBuf> = source_files.keys().chain(target_files.keys()).collect();

	Ok(paths
		.into_iter()
		.filter_map(|path| {
			let old_contents = source_files.get(path).cloned();
			let new_contents = target_files.get(path).cloned();

			if old_contents == new_contents {
				return None;
			}

			Some(ChangedFile {
				path: path.clone(),
				old_contents,
				new_contents,
			})
		})
		.collect())
}

fn read_tree(dir: &Path) -> CourseSdkResult<BTreeMap<PathBuf, String>> {
	files::collect_relative_files(dir)?
		.into_iter()
		.map(|relative| {
			let contents = files::read_lossy(&dir.join(&relative))?;
			Ok((relative, contents))
		})
		.collect()
}
