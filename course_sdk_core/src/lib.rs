//! `course_sdk_core` is the library behind the `course-sdk` CLI. It turns
//! annotated starter code into staged, runnable solutions for a course and
//! produces the diffs that document what changes between stages.
//!
//! ## Processing Pipeline
//!
//! ```text
//! compiled_starters/<lang>/
//!   → LineWithCommentRemover (drops the "you can use print" hint)
//!   → Uncommenter (uncomments the blocks after "Uncomment this" markers)
//!   → solutions/<lang>/01-<stage>/code
//!   → ManualSolutionsCompiler (copies non-code files forward to later stages)
//!   → SolutionDiffsCompiler (one diff per changed file between stages)
//! ```
//!
//! ## Modules
//!
//! - [`compilers`]: The compilation steps run by `course-sdk compile`.
//! - [`files`]: Directory walking and copying helpers shared by the
//!   compilers.
//!
//! ## Key Types
//!
//! - [`Language`]: A supported language with its comment syntax and code file
//!   extension.
//! - [`Uncommenter`]: Uncomments the comment block following each marker.
//! - [`Diff`]: A unified diff between two versions of a file.
//! - [`Course`]: A course loaded from `course-definition.yml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use course_sdk_core::UNCOMMENT_MARKER_PATTERN;
//! use course_sdk_core::build_diff;
//! use course_sdk_core::uncomment;
//!
//! let code = "// Uncomment this\n// fmt.Println(\"hi\")\n";
//! let uncommented = uncomment("go", code, &UNCOMMENT_MARKER_PATTERN).unwrap();
//! assert_eq!(uncommented, "fmt.Println(\"hi\")\n");
//!
//! let diff = build_diff(Some(code), Some(&uncommented)).unwrap();
//! assert!(diff.contains("+fmt.Println(\"hi\")"));
//! ```

pub use course::*;
pub use diff::*;
pub use error::*;
pub use language::*;
pub use line_marker::*;
pub use render::*;
pub use starter_code::*;
pub use uncommenter::*;
pub use unindent::*;

pub mod compilers;
mod course;
mod diff;
#[allow(unused_assignments)]
mod error;
pub mod files;
mod language;
mod line_marker;
mod render;
mod starter_code;
mod uncommenter;
mod unindent;

#[cfg(test)]
mod __fixtures;
