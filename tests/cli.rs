//! End-to-end tests against the built binary: write a small source file
//! to a temporary directory, run the binary against it, and assert on
//! stdout with `predicates`. Covers a representative run through infix
//! arithmetic, nested sentences, a user-defined procedure, and variable
//! rebinding as a single script, plus a separate script for the
//! unmatched-paren error case so its output isn't interleaved with the
//! happy-path assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn script(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lg")
        .tempfile()
        .expect("create temp script");
    write!(file, "{contents}").expect("write temp script");
    file
}

#[test]
fn runs_a_script_end_to_end_and_prints_expected_results() {
    let file = script(
        r#"
print 3 + 12 / 8 - 0.25 * 2 = 2 * ( 1 + 0.5 ) * 4 / 3
print sum 10 difference 7 3
print [a [b c] d]
to double :n
output sum :n :n
end
print double 5
make "x 1
make "x 2
print :x
bye
"#,
    );

    Command::cargo_bin("logo")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("True")
                .and(predicate::str::contains("14"))
                .and(predicate::str::contains("a [b c] d"))
                .and(predicate::str::contains("10"))
                .and(predicate::str::contains("2"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn reports_an_unmatched_paren_and_keeps_going() {
    let file = script(
        r#"
print sum 1 (sum 2 3 4)
print 1 + 1
bye
"#,
    );

    Command::cargo_bin("logo")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expected \")\"")
                .and(predicate::str::contains("2"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn missing_source_file_exits_with_an_error() {
    Command::cargo_bin("logo")
        .unwrap()
        .arg("/no/such/file.lg")
        .assert()
        .failure();
}
