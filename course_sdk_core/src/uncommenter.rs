use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::CommentSyntax;
use crate::CourseSdkResult;
use crate::Language;

/// Marker that starter code uses to flag the code needed for the first stage.
pub static UNCOMMENT_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new("Uncomment this").unwrap_or_else(|e| panic!("invalid uncomment marker: {e}"))
});

/// A marker line together with the block of comment lines that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedBlock {
	/// 0-indexed line number of the marker.
	pub marker: usize,
	/// Lines uncommented by this marker. Empty when the marker is directly
	/// followed by a non-comment line or another marker.
	pub lines: Range<usize>,
}

/// Uncomments the comment blocks that follow marker comments.
///
/// A marker line is a comment (per the language's [`CommentSyntax`]) that
/// also matches the marker pattern. The block belonging to a marker is the
/// maximal run of comment lines right after it, stopping at the first
/// non-comment line, the next marker, or the end of the text.
///
/// ```rust
/// use course_sdk_core::Language;
/// use course_sdk_core::Uncommenter;
/// use course_sdk_core::UNCOMMENT_MARKER_PATTERN;
///
/// let code = "# Uncomment this\n# print('hi')\n";
/// let uncommenter = Uncommenter::new(Language::Python, &UNCOMMENT_MARKER_PATTERN);
/// assert_eq!(uncommenter.uncomment(code), "print('hi')\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uncommenter<'a> {
	syntax: CommentSyntax,
	marker: &'a Regex,
}

impl<'a> Uncommenter<'a> {
	pub fn new(language: Language, marker: &'a Regex) -> Self {
		Self {
			syntax: language.comment_syntax(),
			marker,
		}
	}

	/// Uncomment every marked block, dropping each marker line and at most one
	/// blank line directly after it. Text without markers is returned as is.
	pub fn uncomment(&self, code: &str) -> String {
		let lines: Vec<&str> = code.split('\n').collect();
		let blocks = self.marked_blocks_in(&lines);

		if blocks.is_empty() {
			return code.to_string();
		}

		let mut is_marker = vec![false; lines.len()];
		let mut in_block = vec![false; lines.len()];
		for block in &blocks {
			is_marker[block.marker] = true;
			for index in block.lines.clone() {
				in_block[index] = true;
			}
		}

		let mut output = Vec::with_capacity(lines.len());
		for (index, line) in lines.iter().enumerate() {
			if is_marker[index] {
				continue;
			}

			let line = if in_block[index] {
				self.syntax.uncomment_line(line)
			} else {
				(*line).to_string()
			};

			let follows_marker = index > 0 && is_marker[index - 1];
			if follows_marker && line.trim().is_empty() {
				continue;
			}

			output.push(line);
		}

		output.join("\n")
	}

	/// Each marked block rendered for documentation: the marker line exactly
	/// as written followed by the uncommented block.
	pub fn uncommented_blocks_with_marker(&self, code: &str) -> Vec<String> {
		let lines: Vec<&str> = code.split('\n').collect();

		self.marked_blocks_in(&lines)
			.into_iter()
			.map(|block| {
				let mut rendered = vec![lines[block.marker].to_string()];
				rendered.extend(
					lines[block.lines]
						.iter()
						.map(|line| self.syntax.uncomment_line(line)),
				);
				rendered.join("\n")
			})
			.collect()
	}

	/// Locate every marker and its block, in file order.
	pub fn marked_blocks(&self, code: &str) -> Vec<MarkedBlock> {
		let lines: Vec<&str> = code.split('\n').collect();
		self.marked_blocks_in(&lines)
	}

	fn marked_blocks_in(&self, lines: &[&str]) -> Vec<MarkedBlock> {
		let markers: Vec<usize> = lines
			.iter()
			.enumerate()
			.filter(|(_, line)| self.is_marker(line))
			.map(|(index, _)| index)
			.collect();

		markers
			.into_iter()
			.map(|marker| {
				let start = marker + 1;
				let end = lines[start..]
					.iter()
					.position(|line| !self.syntax.is_comment(line) || self.is_marker(line))
					.map_or(lines.len(), |offset| start + offset);

				MarkedBlock {
					marker,
					lines: start..end,
				}
			})
			.collect()
	}

	fn is_marker(&self, line: &str) -> bool {
		self.syntax.is_comment(line) && self.marker.is_match(line)
	}
}

/// Uncomment `code` for the language identified by `language_slug`.
///
/// Unknown slugs are a configuration error and fail with
/// [`CourseSdkError::LanguageNotFound`](crate::CourseSdkError::LanguageNotFound).
pub fn uncomment(language_slug: &str, code: &str, marker: &Regex) -> CourseSdkResult<String> {
	let language: Language = language_slug.parse()?;
	Ok(Uncommenter::new(language, marker).uncomment(code))
}

/// Preview the marked blocks of `code` for the language identified by
/// `language_slug`, keeping the marker lines.
pub fn preview_blocks(
	language_slug: &str,
	code: &str,
	marker: &Regex,
) -> CourseSdkResult<Vec<String>> {
	let language: Language = language_slug.parse()?;
	Ok(Uncommenter::new(language, marker).uncommented_blocks_with_marker(code))
}
