use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CourseSdkError {
	#[error(transparent)]
	#[diagnostic(code(course_sdk::io_error))]
	Io(#[from] std::io::Error),

	#[error("language with slug `{slug}` not found")]
	#[diagnostic(
		code(course_sdk::language_not_found),
		help("available slugs: {available}")
	)]
	LanguageNotFound { slug: String, available: String },

	#[error("didn't find `course-definition.yml` in {0}")]
	#[diagnostic(
		code(course_sdk::course_definition_not_found),
		help("are you sure you're in a course directory? pass `--path` to point at one")
	)]
	CourseDefinitionNotFound(String),

	#[error("the `course-definition.yml` file is invalid: {0}")]
	#[diagnostic(code(course_sdk::invalid_course_definition))]
	InvalidCourseDefinition(String),

	#[error("invalid pattern `{pattern}`: {reason}")]
	#[diagnostic(code(course_sdk::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("No diff output")]
	#[diagnostic(
		code(course_sdk::no_diff),
		help("the old and new contents are identical")
	)]
	NoDiff,

	#[error("no {language} code files found in {directory}")]
	#[diagnostic(code(course_sdk::no_code_files))]
	NoCodeFiles { language: String, directory: String },

	#[error(
		"didn't find a line that matches /{pattern}/ in any of these {language} files: {files}"
	)]
	#[diagnostic(
		code(course_sdk::uncomment_marker_not_found),
		help(
			"are you sure there's a contiguous block of comments after the 'Uncomment this' \
			 marker?"
		)
	)]
	UncommentMarkerNotFound {
		language: String,
		pattern: String,
		files: String,
	},

	#[error(
		"didn't find a line that matches /{pattern}/ in any of these {language} files: {files}"
	)]
	#[diagnostic(
		code(course_sdk::line_marker_not_found),
		help("the starter code should explain how to print debug logs right above a print call")
	)]
	LineMarkerNotFound {
		language: String,
		pattern: String,
		files: String,
	},

	#[error("no uncommented blocks found for {language} in {directory}")]
	#[diagnostic(
		code(course_sdk::no_uncommented_blocks),
		help(
			"are you sure there's a contiguous block of comments after the 'Uncomment this' \
			 marker?"
		)
	)]
	NoUncommentedBlocks { language: String, directory: String },

	#[error("{language} solution file `{path}` for stage `{stage}` is identical to the previous stage")]
	#[diagnostic(
		code(course_sdk::unchanged_stage_file),
		help("an upstream compilation step probably failed to apply")
	)]
	UnchangedStageFile {
		language: String,
		stage: String,
		path: String,
	},

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(course_sdk::template_render))]
	TemplateRender(String),

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(course_sdk::symlink_cycle),
		help("remove the circular symlink from the starter repository")
	)]
	SymlinkCycle { path: String },
}

pub type CourseSdkResult<T> = Result<T, CourseSdkError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
