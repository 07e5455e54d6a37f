//! Compilers that materialize solutions, explanations and diffs for a course.
//!
//! The `compile` command runs them in the order returned by [`all`]: later
//! compilers read what earlier ones wrote.

pub use first_stage_explanations::*;
pub use first_stage_solutions::*;
pub use manual_solutions::*;
pub use solution_diffs::*;

mod first_stage_explanations;
mod first_stage_solutions;
mod manual_solutions;
mod solution_diffs;

use crate::Course;
use crate::CourseSdkResult;
use crate::Language;

/// A compilation step over a course's per-language directories.
pub trait Compiler {
	/// Short name shown in progress output.
	fn name(&self) -> &'static str;

	/// Compile for every language the course has material for.
	fn compile_all(&self) -> CourseSdkResult<()>;

	/// Compile for a single language.
	fn compile_for_language(&self, language: Language) -> CourseSdkResult<()>;
}

/// The full compilation pipeline for `course`, in execution order.
pub fn all(course: &Course) -> Vec<Box<dyn Compiler + '_>> {
	vec![
		Box::new(FirstStageSolutionsCompiler::new(course)),
		Box::new(FirstStageExplanationsCompiler::new(course)),
		Box::new(ManualSolutionsCompiler::new(course)),
		Box::new(SolutionDiffsCompiler::new(course)),
	]
}
