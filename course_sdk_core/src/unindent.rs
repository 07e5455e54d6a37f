/// Remove the smallest indentation shared by all non-blank lines and
/// right-trim every line.
///
/// Only spaces and tabs count as indentation. Lines with less indentation
/// than the shared amount (which can only be blank lines) keep what they have
/// before trimming.
pub fn unindent(text: &str) -> String {
	let smallest_indent = text
		.split('\n')
		.filter(|line| !line.trim().is_empty())
		.map(indentation_width)
		.min()
		.unwrap_or(0);

	text.split('\n')
		.map(|line| {
			let line = if indentation_width(line) >= smallest_indent {
				&line[smallest_indent..]
			} else {
				line
			};
			line.trim_end()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn indentation_width(line: &str) -> usize {
	line.bytes()
		.take_while(|byte| *byte == b' ' || *byte == b'\t')
		.count()
}
