use std::path::Path;

use tracing::debug;
use tracing::info;
use tracing::warn;

use super::Compiler;
use crate::Course;
use crate::CourseSdkResult;
use crate::FileDiff;
use crate::Language;
use crate::LineWithCommentRemover;
use crate::StarterCodeUncommenter;
use crate::files;

/// Courses whose starter code has no "you can use print" comment.
const COURSES_WITHOUT_DEBUG_PRINT_MARKER: &[&str] = &["shell"];

/// Builds the first stage's solution from the compiled starter repository by
/// removing the debug print hint and uncommenting the marked blocks.
#[derive(Debug, Clone, Copy)]
pub struct FirstStageSolutionsCompiler<'a> {
	course: &'a Course,
}

impl<'a> FirstStageSolutionsCompiler<'a> {
	pub fn new(course: &'a Course) -> Self {
		Self { course }
	}

	/// Replace the first stage's solution code for `language` with a freshly
	/// uncommented copy of its starter repository.
	pub fn compile_starter_repository(&self, language: Language) -> CourseSdkResult<Vec<FileDiff>> {
		info!(course = %self.course.slug, %language, "compiling first stage solution");

		let starter_dir = self.course.compiled_starter_repository_dir(language);
		let code_dir = self
			.course
			.solution_code_dir(language, self.course.first_stage());

		if code_dir.exists() {
			std::fs::remove_dir_all(&code_dir)?;
		}
		files::copy_dir_all(&starter_dir, &code_dir)?;

		let mut diffs = Vec::new();
		if !COURSES_WITHOUT_DEBUG_PRINT_MARKER.contains(&self.course.slug.as_str()) {
			diffs.extend(LineWithCommentRemover::new(&code_dir, language).process()?);
		}
		diffs.extend(StarterCodeUncommenter::new(&code_dir, language).uncomment()?);

		for file_diff in &diffs {
			debug!(
				path = %relative_to(&file_diff.path, &code_dir),
				"\n{}",
				file_diff.diff
			);
		}

		Ok(diffs)
	}
}

impl Compiler for FirstStageSolutionsCompiler<'_> {
	fn name(&self) -> &'static str {
		"first stage solutions"
	}

	fn compile_all(&self) -> CourseSdkResult<()> {
		for language in self.course.compiled_starter_languages()? {
			self.compile_starter_repository(language)?;
		}

		Ok(())
	}

	fn compile_for_language(&self, language: Language) -> CourseSdkResult<()> {
		if !self.course.compiled_starter_repository_dir(language).is_dir() {
			warn!(%language, "no compiled starter repository, skipping first stage solution");
			return Ok(());
		}

		self.compile_starter_repository(language).map(|_| ())
	}
}

fn relative_to(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
