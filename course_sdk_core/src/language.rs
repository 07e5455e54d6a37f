use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::CourseSdkError;

/// Single-line comment syntaxes shared by the supported languages.
///
/// Every pattern captures the leading whitespace in group 1 and the comment
/// body in group 2. At most one space after the comment prefix is consumed so
/// that nested indentation inside the comment survives uncommenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
	/// `# comment`
	PoundSign,
	/// `// comment`
	DoubleSlashes,
	/// `-- comment`
	DoubleHyphens,
	/// `;; comment`
	DoubleSemicolons,
	/// `(* comment *)`
	ParenStar,
}

static POUND_SIGN: LazyLock<Regex> = LazyLock::new(|| compile_syntax(r"(^\s*)#\s?(.*)$"));
static DOUBLE_SLASHES: LazyLock<Regex> = LazyLock::new(|| compile_syntax(r"(^\s*)//\s?(.*)$"));
static DOUBLE_HYPHENS: LazyLock<Regex> = LazyLock::new(|| compile_syntax(r"(^\s*)--\s?(.*)$"));
static DOUBLE_SEMICOLONS: LazyLock<Regex> = LazyLock::new(|| compile_syntax(r"(^\s*);;\s?(.*)$"));
static PAREN_STAR: LazyLock<Regex> =
	LazyLock::new(|| compile_syntax(r"(^\s*)\(\*\s?(.*)\*\)$"));

fn compile_syntax(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap_or_else(|e| panic!("invalid comment syntax `{pattern}`: {e}"))
}

impl CommentSyntax {
	/// The regex recognizing a single commented line.
	pub fn regex(self) -> &'static Regex {
		match self {
			Self::PoundSign => &POUND_SIGN,
			Self::DoubleSlashes => &DOUBLE_SLASHES,
			Self::DoubleHyphens => &DOUBLE_HYPHENS,
			Self::DoubleSemicolons => &DOUBLE_SEMICOLONS,
			Self::ParenStar => &PAREN_STAR,
		}
	}

	pub fn is_comment(self, line: &str) -> bool {
		self.regex().is_match(line)
	}

	/// Strip the comment prefix from `line`, keeping its leading whitespace.
	///
	/// Lines that are blank after stripping collapse to an empty string, all
	/// other lines are right-trimmed. Lines that are not comments are returned
	/// unchanged.
	pub fn uncomment_line(self, line: &str) -> String {
		let Some(captures) = self.regex().captures(line) else {
			return line.to_string();
		};

		let indentation = captures.get(1).map_or("", |m| m.as_str());
		let body = captures.get(2).map_or("", |m| m.as_str());
		let uncommented = format!("{indentation}{body}");

		if uncommented.trim().is_empty() {
			String::new()
		} else {
			uncommented.trim_end().to_string()
		}
	}
}

/// A language that starter code can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	C,
	Clojure,
	Cpp,
	Crystal,
	Csharp,
	Dart,
	Elixir,
	Gleam,
	Go,
	Haskell,
	Java,
	Javascript,
	Kotlin,
	Nim,
	Ocaml,
	Odin,
	Php,
	Python,
	Ruby,
	Rust,
	Scala,
	Swift,
	Typescript,
	Zig,
}

impl Language {
	pub const ALL: [Language; 24] = [
		Self::C,
		Self::Clojure,
		Self::Cpp,
		Self::Crystal,
		Self::Csharp,
		Self::Dart,
		Self::Elixir,
		Self::Gleam,
		Self::Go,
		Self::Haskell,
		Self::Java,
		Self::Javascript,
		Self::Kotlin,
		Self::Nim,
		Self::Ocaml,
		Self::Odin,
		Self::Php,
		Self::Python,
		Self::Ruby,
		Self::Rust,
		Self::Scala,
		Self::Swift,
		Self::Typescript,
		Self::Zig,
	];

	pub fn slug(self) -> &'static str {
		match self {
			Self::C => "c",
			Self::Clojure => "clojure",
			Self::Cpp => "cpp",
			Self::Crystal => "crystal",
			Self::Csharp => "csharp",
			Self::Dart => "dart",
			Self::Elixir => "elixir",
			Self::Gleam => "gleam",
			Self::Go => "go",
			Self::Haskell => "haskell",
			Self::Java => "java",
			Self::Javascript => "javascript",
			Self::Kotlin => "kotlin",
			Self::Nim => "nim",
			Self::Ocaml => "ocaml",
			Self::Odin => "odin",
			Self::Php => "php",
			Self::Python => "python",
			Self::Ruby => "ruby",
			Self::Rust => "rust",
			Self::Scala => "scala",
			Self::Swift => "swift",
			Self::Typescript => "typescript",
			Self::Zig => "zig",
		}
	}

	/// Human-facing name, e.g. `C#` for `csharp`.
	pub fn name(self) -> &'static str {
		match self {
			Self::C => "C",
			Self::Clojure => "Clojure",
			Self::Cpp => "C++",
			Self::Crystal => "Crystal",
			Self::Csharp => "C#",
			Self::Dart => "Dart",
			Self::Elixir => "Elixir",
			Self::Gleam => "Gleam",
			Self::Go => "Go",
			Self::Haskell => "Haskell",
			Self::Java => "Java",
			Self::Javascript => "JavaScript",
			Self::Kotlin => "Kotlin",
			Self::Nim => "Nim",
			Self::Ocaml => "OCaml",
			Self::Odin => "Odin",
			Self::Php => "PHP",
			Self::Python => "Python",
			Self::Ruby => "Ruby",
			Self::Rust => "Rust",
			Self::Scala => "Scala",
			Self::Swift => "Swift",
			Self::Typescript => "TypeScript",
			Self::Zig => "Zig",
		}
	}

	/// Extension (without the dot) of files that hold this language's code.
	pub fn code_file_extension(self) -> &'static str {
		match self {
			Self::C => "c",
			Self::Clojure => "clj",
			Self::Cpp => "cpp",
			Self::Crystal => "cr",
			Self::Csharp => "cs",
			Self::Dart => "dart",
			Self::Elixir => "ex",
			Self::Gleam => "gleam",
			Self::Go => "go",
			Self::Haskell => "hs",
			Self::Java => "java",
			Self::Javascript => "js",
			Self::Kotlin => "kt",
			Self::Nim => "nim",
			Self::Ocaml => "ml",
			Self::Odin => "odin",
			Self::Php => "php",
			Self::Python => "py",
			Self::Ruby => "rb",
			Self::Rust => "rs",
			Self::Scala => "scala",
			Self::Swift => "swift",
			Self::Typescript => "ts",
			Self::Zig => "zig",
		}
	}

	pub fn comment_syntax(self) -> CommentSyntax {
		match self {
			Self::Crystal | Self::Elixir | Self::Nim | Self::Python | Self::Ruby => {
				CommentSyntax::PoundSign
			}
			Self::Haskell => CommentSyntax::DoubleHyphens,
			Self::Clojure => CommentSyntax::DoubleSemicolons,
			Self::Ocaml => CommentSyntax::ParenStar,
			Self::C
			| Self::Cpp
			| Self::Csharp
			| Self::Dart
			| Self::Gleam
			| Self::Go
			| Self::Java
			| Self::Javascript
			| Self::Kotlin
			| Self::Odin
			| Self::Php
			| Self::Rust
			| Self::Scala
			| Self::Swift
			| Self::Typescript
			| Self::Zig => CommentSyntax::DoubleSlashes,
		}
	}

	/// The language pack (runtime image family) used to execute this language.
	pub fn language_pack(self) -> &'static str {
		match self {
			Self::Javascript => "nodejs",
			Self::Csharp => "dotnet",
			Self::Typescript => "bun",
			other => other.slug(),
		}
	}

	/// Resolve a language pack identifier such as `nodejs-21` or `go-1.22`.
	pub fn from_language_pack(language_pack: &str) -> Result<Self, CourseSdkError> {
		if language_pack.starts_with("nodejs") {
			return Ok(Self::Javascript);
		}
		if language_pack.starts_with("dotnet") {
			return Ok(Self::Csharp);
		}
		if language_pack.starts_with("bun") {
			return Ok(Self::Typescript);
		}

		let prefix = language_pack.split('-').next().unwrap_or(language_pack);
		prefix.parse()
	}

	pub fn syntax_highlighting_identifier(self) -> &'static str {
		self.slug()
	}

	pub(crate) fn available_slugs() -> String {
		Self::ALL
			.iter()
			.map(|language| language.slug())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl FromStr for Language {
	type Err = CourseSdkError;

	fn from_str(slug: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|language| language.slug() == slug)
			.ok_or_else(|| {
				CourseSdkError::LanguageNotFound {
					slug: slug.to_string(),
					available: Self::available_slugs(),
				}
			})
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}
