use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Language;

/// Name of the file describing a course, found at the course root.
pub const COURSE_DEFINITION_FILE: &str = "course-definition.yml";

/// One sequentially numbered milestone of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStage {
	pub name: String,
	/// 1-indexed position within the course.
	pub number: usize,
	pub slug: String,
}

impl CourseStage {
	/// Directory name of this stage's solutions, e.g. `01-init`.
	pub fn solution_dir(&self) -> String {
		format!("{:02}-{}", self.number, self.slug)
	}
}

/// A course loaded from `course-definition.yml`.
///
/// ```yaml
/// slug: redis
/// name: Build your own Redis
/// short_name: Redis
/// stages:
///   - slug: init
///     name: Bind to a port
///   - slug: ping-pong
///     name: Respond to PING
/// ```
#[derive(Debug, Clone)]
pub struct Course {
	pub slug: String,
	pub name: String,
	pub short_name: String,
	pub stages: Vec<CourseStage>,
	/// Root directory of the course.
	pub directory: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CourseDefinition {
	slug: String,
	name: String,
	short_name: String,
	#[serde(default)]
	stages: Vec<StageDefinition>,
}

#[derive(Debug, Deserialize)]
struct StageDefinition {
	slug: String,
	name: String,
}

impl Course {
	/// Load the course rooted at `directory`.
	pub fn load_from_directory(directory: &Path) -> CourseSdkResult<Self> {
		let definition_path = directory.join(COURSE_DEFINITION_FILE);

		if !definition_path.is_file() {
			return Err(CourseSdkError::CourseDefinitionNotFound(
				directory.display().to_string(),
			));
		}

		let content = std::fs::read_to_string(&definition_path)?;
		Self::from_yaml(&content, directory)
	}

	/// Parse a course definition, treating `directory` as the course root.
	pub fn from_yaml(content: &str, directory: &Path) -> CourseSdkResult<Self> {
		let definition: CourseDefinition = serde_yaml_ng::from_str(content)
			.map_err(|e| CourseSdkError::InvalidCourseDefinition(e.to_string()))?;

		if definition.stages.is_empty() {
			return Err(CourseSdkError::InvalidCourseDefinition(
				"a course needs at least one stage".to_string(),
			));
		}

		let stages = definition
			.stages
			.into_iter()
			.enumerate()
			.map(|(index, stage)| {
				CourseStage {
					name: stage.name,
					number: index + 1,
					slug: stage.slug,
				}
			})
			.collect();

		Ok(Self {
			slug: definition.slug,
			name: definition.name,
			short_name: definition.short_name,
			stages,
			directory: directory.to_path_buf(),
		})
	}

	pub fn first_stage(&self) -> &CourseStage {
		&self.stages[0]
	}

	/// Stages that come after `stage`, in order.
	pub fn stages_after(&self, stage: &CourseStage) -> &[CourseStage] {
		let index = self
			.stages
			.iter()
			.position(|candidate| candidate.slug == stage.slug)
			.map_or(self.stages.len(), |index| index + 1);

		&self.stages[index..]
	}

	pub fn compiled_starter_repositories_dir(&self) -> PathBuf {
		self.directory.join("compiled_starters")
	}

	pub fn compiled_starter_repository_dir(&self, language: Language) -> PathBuf {
		self.compiled_starter_repositories_dir().join(language.slug())
	}

	pub fn solutions_dir(&self) -> PathBuf {
		self.directory.join("solutions")
	}

	pub fn solution_stage_dir(&self, language: Language, stage: &CourseStage) -> PathBuf {
		self.solutions_dir()
			.join(language.slug())
			.join(stage.solution_dir())
	}

	/// Fully materialized solution code of `stage`.
	pub fn solution_code_dir(&self, language: Language, stage: &CourseStage) -> PathBuf {
		self.solution_stage_dir(language, stage).join("code")
	}

	/// Per-file diffs between `stage` and the stage before it.
	pub fn solution_diff_dir(&self, language: Language, stage: &CourseStage) -> PathBuf {
		self.solution_stage_dir(language, stage).join("diff")
	}

	pub fn first_stage_explanation_path(&self, language: Language) -> PathBuf {
		self.solution_stage_dir(language, self.first_stage())
			.join("explanation.md")
	}

	/// Languages that have a compiled starter repository.
	pub fn compiled_starter_languages(&self) -> CourseSdkResult<Vec<Language>> {
		languages_in(&self.compiled_starter_repositories_dir())
	}

	/// Languages that have a solutions directory.
	pub fn solution_languages(&self) -> CourseSdkResult<Vec<Language>> {
		languages_in(&self.solutions_dir())
	}
}

/// Parse the names of the sub-directories of `dir` as language slugs.
fn languages_in(dir: &Path) -> CourseSdkResult<Vec<Language>> {
	if !dir.is_dir() {
		return Ok(Vec::new());
	}

	let mut languages = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_dir() {
			continue;
		}

		let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
			continue;
		};
		languages.push(name.parse()?);
	}

	languages.sort();
	Ok(languages)
}
