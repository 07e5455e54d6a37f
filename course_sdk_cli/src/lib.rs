use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Compile starter code into staged solutions for a course.",
	long_about = "course-sdk turns a course's annotated starter code into runnable first-stage \
	              solutions, explanations and per-stage diffs.\n\nStarter code marks the code a \
	              learner has to uncomment with an `Uncomment this` comment. The compiler \
	              uncomments those blocks, strips the debug print hint and writes the result \
	              under `solutions/`.\n\nQuick start:\n  course-sdk compile           Compile \
	              every language\n  course-sdk compile go,rust   Compile selected \
	              languages\n  course-sdk preview go app/   Show the blocks that get uncommented"
)]
pub struct CourseSdkCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the course directory containing `course-definition.yml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Compile solutions, explanations and diffs for the course.
	///
	/// Runs every compiler in order: first stage solutions, first stage
	/// explanations, manual solutions and solution diffs. Without a language
	/// filter every language with a compiled starter repository or a
	/// solutions directory is compiled.
	Compile {
		/// Comma-separated language slugs to compile, e.g. `go,rust`.
		languages: Option<String>,
	},
	/// Uncomment the marked blocks of a single file.
	///
	/// Prints the result to stdout unless `--write` is given.
	Uncomment {
		/// Language slug that decides the comment syntax.
		language: String,

		/// File to uncomment.
		file: PathBuf,

		/// Regular expression identifying marker lines. Defaults to
		/// `Uncomment this`.
		#[arg(long)]
		marker: Option<String>,

		/// Rewrite the file in place instead of printing it.
		#[arg(long, default_value_t = false)]
		write: bool,
	},
	/// Show the blocks that would be uncommented in a starter repository.
	///
	/// Each block is printed with its marker line and the file it belongs
	/// to, the way it appears in the first stage explanation.
	Preview {
		/// Language slug of the starter repository.
		language: String,

		/// Directory containing the starter code.
		dir: PathBuf,

		/// Output format for the previewed blocks.
		#[arg(long, value_enum, default_value_t = PreviewOutputFormat::Text)]
		format: PreviewOutputFormat,
	},
	/// Print the unified diff between two files.
	///
	/// A missing file is treated as empty. Exits with an error when both
	/// sides are identical.
	Diff {
		/// The old version of the file.
		old: PathBuf,

		/// The new version of the file.
		new: PathBuf,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreviewOutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each entry holds the file
	/// path and the block's code.
	Json,
}
