use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobMatcher;

use crate::CourseSdkError;
use crate::CourseSdkResult;
use crate::Language;

/// Collect every regular file below `dir`, hidden files included, sorted for
/// deterministic ordering. A missing directory yields no files.
pub fn collect_files(dir: &Path) -> CourseSdkResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();

	walk_dir(dir, &mut files, &mut visited_dirs)?;
	files.sort();

	Ok(files)
}

/// Like [`collect_files`] but returns paths relative to `dir`.
pub fn collect_relative_files(dir: &Path) -> CourseSdkResult<Vec<PathBuf>> {
	Ok(collect_files(dir)?
		.into_iter()
		.filter_map(|path| path.strip_prefix(dir).ok().map(Path::to_path_buf))
		.collect())
}

fn walk_dir(
	dir: &Path,
	files: &mut Vec<PathBuf>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> CourseSdkResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(CourseSdkError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_dir() {
			walk_dir(&path, files, visited_dirs)?;
		} else if path.is_file() {
			files.push(path);
		}
	}

	Ok(())
}

/// Matcher for the files that hold `language`'s code, e.g. `**/*.py`.
pub fn code_file_matcher(language: Language) -> CourseSdkResult<GlobMatcher> {
	let pattern = format!("**/*.{}", language.code_file_extension());
	Glob::new(&pattern)
		.map(|glob| glob.compile_matcher())
		.map_err(|e| {
			CourseSdkError::InvalidPattern {
				pattern,
				reason: e.to_string(),
			}
		})
}

/// Every code file of `language` below `dir`, as absolute paths.
pub fn code_files(dir: &Path, language: Language) -> CourseSdkResult<Vec<PathBuf>> {
	let matcher = code_file_matcher(language)?;

	Ok(collect_files(dir)?
		.into_iter()
		.filter(|path| {
			path.strip_prefix(dir)
				.is_ok_and(|relative| matcher.is_match(relative))
		})
		.collect())
}

/// Recursively copy `source` into `target`, creating `target` if needed.
pub fn copy_dir_all(source: &Path, target: &Path) -> CourseSdkResult<()> {
	std::fs::create_dir_all(target)?;

	for relative in collect_relative_files(source)? {
		let destination = target.join(&relative);
		if let Some(parent) = destination.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::copy(source.join(&relative), destination)?;
	}

	Ok(())
}

/// Read a file as text, replacing invalid UTF-8 sequences.
pub fn read_lossy(path: &Path) -> CourseSdkResult<String> {
	let bytes = std::fs::read(path)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render a list of paths for error messages.
pub(crate) fn display_paths(paths: &[PathBuf]) -> String {
	paths
		.iter()
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}
