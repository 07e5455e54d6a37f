use serde::Serialize;
use tracing::info;
use tracing::warn;

use super::Compiler;
use crate::CodeBlock;
use crate::Course;
use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Escaping;
use crate::Language;
use crate::StarterCodeUncommenter;
use crate::render_template;
use crate::unindent;

const EXPLANATION_TEMPLATE: &str = r#"The entry point for your {{ course_short_name }} implementation is in `{{ entry_point_file }}`.

Study and uncomment the relevant code:

{% for block in uncommented_code_blocks %}
```{{ language_syntax_highlighting_identifier }}
{{ block.code }}
```

{% endfor %}
Push your changes to pass the first stage:

```
git add .
git commit -m "pass 1st stage" # any msg
git push origin master
```
"#;

#[derive(Debug, Serialize)]
struct ExplanationContext<'a> {
	course_short_name: &'a str,
	entry_point_file: &'a str,
	language_syntax_highlighting_identifier: &'a str,
	uncommented_code_blocks: &'a [CodeBlock],
}

/// Writes `explanation.md` for the first stage, showing the code a user has
/// to study and uncomment.
#[derive(Debug, Clone, Copy)]
pub struct FirstStageExplanationsCompiler<'a> {
	course: &'a Course,
}

impl<'a> FirstStageExplanationsCompiler<'a> {
	pub fn new(course: &'a Course) -> Self {
		Self { course }
	}

	/// Render the explanation for `language` without writing it.
	pub fn render_explanation(&self, language: Language) -> CourseSdkResult<String> {
		let starter_dir = self.course.compiled_starter_repository_dir(language);
		let blocks: Vec<CodeBlock> = StarterCodeUncommenter::new(&starter_dir, language)
			.uncommented_blocks_with_markers()?
			.into_iter()
			.map(|block| {
				CodeBlock {
					code: unindent(&block.code),
					..block
				}
			})
			.collect();

		let Some(entry_point) = blocks.first() else {
			return Err(CourseSdkError::NoUncommentedBlocks {
				language: language.to_string(),
				directory: starter_dir.display().to_string(),
			});
		};

		let context = ExplanationContext {
			course_short_name: &self.course.short_name,
			entry_point_file: &entry_point.file_path,
			language_syntax_highlighting_identifier: language.syntax_highlighting_identifier(),
			uncommented_code_blocks: &blocks,
		};

		render_template(EXPLANATION_TEMPLATE, &context, Escaping::Raw)
	}

	pub fn compile_starter_repository(&self, language: Language) -> CourseSdkResult<()> {
		info!(course = %self.course.slug, %language, "compiling first stage explanation");

		let explanation_path = self.course.first_stage_explanation_path(language);
		let explanation = self.render_explanation(language)?;

		if let Some(parent) = explanation_path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&explanation_path, explanation)?;

		Ok(())
	}
}

impl Compiler for FirstStageExplanationsCompiler<'_> {
	fn name(&self) -> &'static str {
		"first stage explanations"
	}

	fn compile_all(&self) -> CourseSdkResult<()> {
		for language in self.course.compiled_starter_languages()? {
			self.compile_starter_repository(language)?;
		}

		Ok(())
	}

	fn compile_for_language(&self, language: Language) -> CourseSdkResult<()> {
		if !self.course.compiled_starter_repository_dir(language).is_dir() {
			warn!(%language, "no compiled starter repository, skipping first stage explanation");
			return Ok(());
		}

		self.compile_starter_repository(language)
	}
}
