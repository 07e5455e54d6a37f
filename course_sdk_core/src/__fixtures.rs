use std::path::Path;

use crate::AnyEmptyResult;

pub const PYTHON_COMMENTED: &str = r"
abcd = true

# Uncomment this to pass the first stage
#
# # This is an assignment
# a = b
#
# if True:
#     pass
#
# blah

yay = true
";

pub const PYTHON_UNCOMMENTED: &str = r"
abcd = true

# This is an assignment
a = b

if True:
    pass

blah

yay = true
";

pub const GO_COMMENTED: &str = r"
func main() {
  // Uncomment this to pass the first stage
  //
  // // This is an assignment
  // a := 1
  //
  // fmt.Println('hey')

  a := 2
}
";

pub const GO_UNCOMMENTED: &str = r"
func main() {
  // This is an assignment
  a := 1

  fmt.Println('hey')

  a := 2
}
";

pub const HASKELL_COMMENTED: &str = r"
main = do
 -- Uncomment this to pass the first stage
 -- a <- readLine
 -- b <- readLine
 -- -- Nested Comment
 -- return (a + b)
";

pub const HASKELL_UNCOMMENTED: &str = r"
main = do
 a <- readLine
 b <- readLine
 -- Nested Comment
 return (a + b)
";

pub const JAVA_COMMENTED: &str = r"
public static void main(String[] args) {
  // Uncomment this to pass the first stage
  //
  // // This is an assignment
  // int a = 1;
  //
  // System.out.println('Hey');

  int b = 2;
}
";

pub const JAVA_UNCOMMENTED: &str = r"
public static void main(String[] args) {
  // This is an assignment
  int a = 1;

  System.out.println('Hey');

  int b = 2;
}
";

pub const KOTLIN_COMMENTED: &str = r"
fun main(args: Array<String>) {
  // Uncomment this to pass the first stage
  //
  // // This is an assignment
  // val a = 1;
  //
  // println('Hey');

  val b = 2;
}
";

pub const KOTLIN_UNCOMMENTED: &str = r"
fun main(args: Array<String>) {
  // This is an assignment
  val a = 1;

  println('Hey');

  val b = 2;
}
";

pub const PHP_COMMENTED: &str = r"
<?php
// Uncomment this to pass the first stage.
// $a = 1;
// $b = 1;

// echo $a + $b;
?>
";

pub const PHP_UNCOMMENTED: &str = r"
<?php
$a = 1;
$b = 1;

// echo $a + $b;
?>
";

pub const JAVASCRIPT_COMMENTED: &str = r"
// Uncomment this to pass the first stage
// var a = 1;
// var b = 2;
// console.log(a + b);
";

pub const JAVASCRIPT_UNCOMMENTED: &str = r"
var a = 1;
var b = 2;
console.log(a + b);
";

pub const CSHARP_COMMENTED: &str = r"
// Uncomment this to pass the first stage
// var a = 1;
// var b = 2;
// Console.WriteLine(a + b);
";

pub const CSHARP_UNCOMMENTED: &str = r"
var a = 1;
var b = 2;
Console.WriteLine(a + b);
";

pub const CLOJURE_COMMENTED: &str = r#"
(defn -main [& args]
  ;; Uncomment this to pass the first stage
  ;; (println "Hello")
  ;; (flush)
  )
"#;

pub const CLOJURE_UNCOMMENTED: &str = r#"
(defn -main [& args]
  (println "Hello")
  (flush)
  )
"#;

pub const OCAML_COMMENTED: &str = r#"
let () =
  (* Uncomment this to pass the first stage *)
  (* print_endline "Hello"; *)
  (* exit 0 *)
  ()
"#;

pub const OCAML_UNCOMMENTED: &str = r#"
let () =
  print_endline "Hello";
  exit 0
  ()
"#;

pub const TWO_MARKERS_COMMENTED: &str = r"
a = b

# Uncomment this to pass the first stage
#
# # First uncommented block
# b = c

# Uncomment this to pass the first stage
#
# # Second uncommented block
# c = d
";

pub const TWO_MARKERS_UNCOMMENTED: &str = r"
a = b

# First uncommented block
b = c

# Second uncommented block
c = d
";

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

pub const COURSE_DEFINITION: &str = r"slug: redis
name: Build your own Redis
short_name: Redis
stages:
  - slug: init
    name: Bind to a port
  - slug: ping-pong
    name: Respond to PING
  - slug: echo
    name: Implement the ECHO command
";

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, contents)?;

	Ok(())
}

/// A course with a compiled python starter repository and no solutions yet.
pub fn python_course(root: &Path) -> AnyEmptyResult {
	write_file(root, "course-definition.yml", COURSE_DEFINITION)?;
	write_file(root, "compiled_starters/python/app/main.py", PYTHON_STARTER)?;
	write_file(
		root,
		"compiled_starters/python/your_program.sh",
		"#!/bin/sh\nexec python3 -m app.main \"$@\"\n",
	)?;
	write_file(
		root,
		"compiled_starters/python/.codecrafters/run.sh",
		"#!/bin/sh\nexec python3 -m app.main \"$@\"\n",
	)?;

	Ok(())
}
