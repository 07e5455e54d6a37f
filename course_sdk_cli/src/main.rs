use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use course_sdk_cli::Commands;
use course_sdk_cli::CourseSdkCli;
use course_sdk_cli::PreviewOutputFormat;
use course_sdk_core::CodeBlock;
use course_sdk_core::Course;
use course_sdk_core::CourseSdkError;
use course_sdk_core::Diff;
use course_sdk_core::DiffLine;
use course_sdk_core::Language;
use course_sdk_core::StarterCodeUncommenter;
use course_sdk_core::UNCOMMENT_MARKER_PATTERN;
use course_sdk_core::build_diff;
use course_sdk_core::compilers;
use course_sdk_core::uncomment;
use course_sdk_core::unindent;
use owo_colors::OwoColorize;
use regex::Regex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV_VAR: &str = "COURSE_SDK_LOG";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,cyan) => {
		if color_enabled() {
			format!("{}", $text.cyan())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = CourseSdkCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Compile { languages }) => run_compile(&args, languages.as_deref()),
		Some(Commands::Uncomment {
			language,
			file,
			marker,
			write,
		}) => run_uncomment(language, file, marker.as_deref(), *write),
		Some(Commands::Preview {
			language,
			dir,
			format,
		}) => run_preview(language, dir, *format),
		Some(Commands::Diff { old, new }) => run_diff(old, new),
		None => {
			eprintln!("No subcommand specified. Run `course-sdk --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<CourseSdkError>() {
			Ok(sdk_err) => {
				let report: miette::Report = (*sdk_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr so that stdout only carries command output.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.without_time()
		.with_ansi(use_color)
		.with_writer(std::io::stderr)
		.try_init();
}

fn resolve_root(args: &CourseSdkCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Parse a comma-separated list of language slugs. `None` means every
/// language.
fn parse_language_filter(
	languages: Option<&str>,
) -> Result<Option<Vec<Language>>, CourseSdkError> {
	let Some(languages) = languages else {
		return Ok(None);
	};

	let parsed = languages
		.split(',')
		.map(str::trim)
		.filter(|slug| !slug.is_empty())
		.map(str::parse)
		.collect::<Result<Vec<Language>, _>>()?;

	Ok(Some(parsed))
}

fn run_compile(
	args: &CourseSdkCli,
	languages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let course = Course::load_from_directory(&root)?;
	let languages = parse_language_filter(languages)?;
	debug!(course = %course.slug, root = %root.display(), ?languages, "loaded course");

	for compiler in compilers::all(&course) {
		match &languages {
			Some(languages) => {
				for language in languages {
					compiler.compile_for_language(*language)?;
				}
			}
			None => compiler.compile_all()?,
		}

		println!("{} {}", colored!("compiled", green), compiler.name());
	}

	Ok(())
}

fn run_uncomment(
	language: &str,
	file: &Path,
	marker: Option<&str>,
	write: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let marker = match marker {
		Some(pattern) => {
			Regex::new(pattern).map_err(|e| {
				CourseSdkError::InvalidPattern {
					pattern: pattern.to_string(),
					reason: e.to_string(),
				}
			})?
		}
		None => UNCOMMENT_MARKER_PATTERN.clone(),
	};

	let code = std::fs::read_to_string(file)?;
	let uncommented = uncomment(language, &code, &marker)?;

	if !write {
		print!("{uncommented}");
		return Ok(());
	}

	if uncommented == code {
		println!("No marked blocks in {}", file.display());
	} else {
		std::fs::write(file, &uncommented)?;
		println!("Uncommented {}", colored!(file.display(), bold));
		print_diff(&Diff::from_contents(&code, &uncommented)?);
	}

	Ok(())
}

fn run_preview(
	language: &str,
	dir: &Path,
	format: PreviewOutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let language: Language = language.parse()?;
	let blocks: Vec<CodeBlock> = StarterCodeUncommenter::new(dir, language)
		.uncommented_blocks_with_markers()?
		.into_iter()
		.map(|block| {
			CodeBlock {
				code: unindent(&block.code),
				..block
			}
		})
		.collect();

	match format {
		PreviewOutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&blocks)?);
		}
		PreviewOutputFormat::Text => {
			if blocks.is_empty() {
				println!("No marked blocks found.");
				return Ok(());
			}

			for block in &blocks {
				println!("{}", colored!(block.file_path, bold));
				println!("{}", block.code);
				println!();
			}
		}
	}

	Ok(())
}

fn run_diff(old: &Path, new: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let old_contents = read_optional(old)?;
	let new_contents = read_optional(new)?;
	let raw = build_diff(old_contents.as_deref(), new_contents.as_deref())?;

	print_diff(&Diff { raw });

	Ok(())
}

/// Read a file, treating a missing one as absent.
fn read_optional(path: &Path) -> Result<Option<String>, std::io::Error> {
	match std::fs::read_to_string(path) {
		Ok(contents) => Ok(Some(contents)),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e),
	}
}

fn print_diff(diff: &Diff) {
	for line in diff.lines() {
		match line {
			DiffLine::Removed(text) => println!("{}", colored!(text, red)),
			DiffLine::Added(text) => println!("{}", colored!(text, green)),
			DiffLine::Context(text) if text.starts_with("@@") => {
				println!("{}", colored!(text, cyan));
			}
			DiffLine::Context(text) => println!("{text}"),
		}
	}
}
