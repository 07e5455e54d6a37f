#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use course_sdk_core::AnyEmptyResult;

pub const PYTHON_STARTER: &str = r#"import socket


def main():
    # You can use print statements as follows for debugging, they'll be visible when running tests.
    print("Logs from your program will appear here!")

    # Uncomment this to pass the first stage
    #
    # server_socket = socket.create_server(("localhost", 6379), reuse_port=True)
    # server_socket.accept() # wait for client


if __name__ == "__main__":
    main()
"#;

pub const PYTHON_FIRST_STAGE_SOLUTION: &str = r#"import socket


def main():
    server_socket = socket.create_server(("localhost", 6379), reuse_port=True)
    server_socket.accept() # wait for client


if __name__ == "__main__":
    main()
"#;

pub fn course_sdk_cmd() -> Command {
	let mut cmd = Command::cargo_bin("course-sdk")
		.unwrap_or_else(|e| panic!("course-sdk binary should be built: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("COURSE_SDK_LOG");
	cmd
}

pub fn write_file(root: &Path, relative: &str, contents: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, contents)?;

	Ok(())
}

/// A two stage course with a compiled python starter repository.
pub fn python_course(root: &Path) -> AnyEmptyResult {
	write_file(
		root,
		"course-definition.yml",
		"slug: redis\nname: Build your own Redis\nshort_name: Redis\nstages:\n  - slug: init\n    \
		 name: Bind to a port\n  - slug: ping-pong\n    name: Respond to PING\n",
	)?;
	write_file(root, "compiled_starters/python/app/main.py", PYTHON_STARTER)?;
	write_file(
		root,
		"compiled_starters/python/your_program.sh",
		"#!/bin/sh\nexec python3 -m app.main \"$@\"\n",
	)?;

	Ok(())
}
