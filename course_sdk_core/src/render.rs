use minijinja::AutoEscape;
use minijinja::Environment;
use serde::Serialize;

use crate::CourseSdkError;
use crate::CourseSdkResult;

/// How interpolated values are escaped while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
	/// Values are inserted verbatim. Used for markdown and code.
	#[default]
	Raw,
	/// Values are HTML-escaped.
	Html,
}

/// Render `template` with `context`.
///
/// Block tags on their own line don't leave blank lines behind, and a
/// trailing newline in the template is preserved.
pub fn render_template<S: Serialize>(
	template: &str,
	context: S,
	escaping: Escaping,
) -> CourseSdkResult<String> {
	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.set_trim_blocks(true);
	env.set_lstrip_blocks(true);
	env.set_auto_escape_callback(move |_| {
		match escaping {
			Escaping::Raw => AutoEscape::None,
			Escaping::Html => AutoEscape::Html,
		}
	});

	env.add_template("__inline__", template)
		.map_err(|e| CourseSdkError::TemplateRender(e.to_string()))?;

	env.get_template("__inline__")
		.and_then(|compiled| compiled.render(context))
		.map_err(|e| CourseSdkError::TemplateRender(e.to_string()))
}
