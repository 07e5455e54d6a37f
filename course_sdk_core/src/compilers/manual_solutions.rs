use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use super::Compiler;
use crate::Course;
use crate::CourseSdkResult;
use crate::Language;
use crate::files;

/// Completes the solution directories of stages after the first.
///
/// Later stages are authored with only the files that differ from the stage
/// before them. Every non-code file of the first stage that a later stage is
/// missing is copied forward from the nearest earlier stage that has it. Code
/// files are never copied: each stage authors them explicitly. Existing files
/// are never overwritten, so running the compiler again changes nothing.
#[derive(Debug, Clone, Copy)]
pub struct ManualSolutionsCompiler<'a> {
	course: &'a Course,
}

impl<'a> ManualSolutionsCompiler<'a> {
	pub fn new(course: &'a Course) -> Self {
		Self { course }
	}

	/// Copy missing files forward for `language` and return the paths written.
	pub fn sync_stage_files(&self, language: Language) -> CourseSdkResult<Vec<PathBuf>> {
		info!(course = %self.course.slug, %language, "compiling manual solutions");

		let first_stage = self.course.first_stage();
		let first_stage_dir = self.course.solution_code_dir(language, first_stage);
		let first_stage_files: Vec<PathBuf> = files::collect_relative_files(&first_stage_dir)?
			.into_iter()
			.filter(|path| !is_code_file(path, language))
			.collect();

		let mut previous_dirs = vec![first_stage_dir];
		let mut copied = Vec::new();

		for stage in self.course.stages_after(first_stage) {
			let stage_dir = self.course.solution_code_dir(language, stage);

			if !stage_dir.is_dir() {
				debug!(stage = %stage.slug, "no solution directory, skipping");
				continue;
			}

			for relative in &first_stage_files {
				let target = stage_dir.join(relative);
				if target.exists() {
					continue;
				}

				let Some(source) = previous_dirs
					.iter()
					.rev()
					.map(|dir| dir.join(relative))
					.find(|candidate| candidate.is_file())
				else {
					continue;
				};

				if let Some(parent) = target.parent() {
					std::fs::create_dir_all(parent)?;
				}
				std::fs::copy(&source, &target)?;
				debug!(stage = %stage.slug, path = %relative.display(), "copied file forward");
				copied.push(target);
			}

			previous_dirs.push(stage_dir);
		}

		Ok(copied)
	}
}

impl Compiler for ManualSolutionsCompiler<'_> {
	fn name(&self) -> &'static str {
		"manual solutions"
	}

	fn compile_all(&self) -> CourseSdkResult<()> {
		for language in self.course.solution_languages()? {
			self.sync_stage_files(language)?;
		}

		Ok(())
	}

	fn compile_for_language(&self, language: Language) -> CourseSdkResult<()> {
		self.sync_stage_files(language).map(|_| ())
	}
}

fn is_code_file(path: &Path, language: Language) -> bool {
	path.extension()
		.and_then(|extension| extension.to_str())
		.is_some_and(|extension| extension == language.code_file_extension())
}
