mod common;

use course_sdk_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn preview_prints_unindented_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "app/main.py", common::PYTHON_STARTER)?;

	common::course_sdk_cmd()
		.arg("preview")
		.arg("python")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::starts_with(
			"app/main.py\n# Uncomment this to pass the first stage\n\nserver_socket = ",
		));

	Ok(())
}

#[test]
fn preview_json_lists_every_block() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "app/main.py", common::PYTHON_STARTER)?;
	common::write_file(
		tmp.path(),
		"app/util.py",
		"def helper():\n    # Uncomment this too\n    # return 1\n    pass\n",
	)?;

	let output = common::course_sdk_cmd()
		.arg("preview")
		.arg("python")
		.arg(tmp.path())
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let blocks: Value = serde_json::from_slice(&output.stdout)?;
	let blocks = blocks.as_array().ok_or("expected a json array")?;
	assert_eq!(blocks.len(), 2);
	assert_eq!(blocks[0]["file_path"], "app/main.py");
	assert_eq!(blocks[1]["file_path"], "app/util.py");
	assert_eq!(blocks[1]["code"], "# Uncomment this too\nreturn 1");

	Ok(())
}

#[test]
fn preview_without_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "main.rs", "fn main() {}\n")?;

	common::course_sdk_cmd()
		.arg("preview")
		.arg("rust")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("No marked blocks found.\n");

	Ok(())
}
