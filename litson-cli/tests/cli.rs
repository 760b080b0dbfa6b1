//! Integration tests driving the `litson` binary end to end

use predicates::prelude::*;
use serde_json::{json, Value};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn build_fixture(contents: &str) -> Result<Fixture, Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("subjects.ts");
    let output = dir.path().join("subjects.json");
    fs::write(&input, contents)?;
    Ok(Fixture {
        _dir: dir,
        input,
        output,
    })
}

#[test]
fn converts_and_prints_a_confirmation() -> Result<(), Box<dyn Error>> {
    let fixture = build_fixture(
        r#"export const subjects = {
    "Mathematics": {
        "Algebra": ["linear equations", "quadratic equations"]
    }
};
"#,
    )?;

    assert_cmd::Command::cargo_bin("litson")?
        .args([
            fixture.input.to_str().unwrap(),
            fixture.output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            "^Successfully converted .*subjects\\.ts to .*subjects\\.json\n$",
        )?);

    let value: Value = serde_json::from_str(&fs::read_to_string(&fixture.output)?)?;
    assert_eq!(
        value,
        json!({"Mathematics": {"Algebra": ["linear equations", "quadratic equations"]}})
    );
    Ok(())
}

#[test]
fn output_is_indented_with_four_spaces() -> Result<(), Box<dyn Error>> {
    let fixture = build_fixture("const x = { a: [1] };")?;

    assert_cmd::Command::cargo_bin("litson")?
        .args([
            fixture.input.to_str().unwrap(),
            fixture.output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&fixture.output)?,
        "{\n    \"a\": [\n        1\n    ]\n}"
    );
    Ok(())
}

#[test]
fn annotations_are_dropped_from_the_output() -> Result<(), Box<dyn Error>> {
    let fixture = build_fixture(
        "export const subjects = { name: string, topics[]: string, \"Physics\": [\"optics\"] };",
    )?;

    assert_cmd::Command::cargo_bin("litson")?
        .args([
            fixture.input.to_str().unwrap(),
            fixture.output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&fixture.output)?)?;
    assert_eq!(value, json!({"Physics": ["optics"]}));
    Ok(())
}

#[test]
fn missing_arguments_print_usage_and_touch_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let planned_output = dir.path().join("never.json");

    assert_cmd::Command::cargo_bin("litson")?
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_cmd::Command::cargo_bin("litson")?
        .arg(planned_output.to_str().unwrap())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn extra_arguments_are_a_usage_error() -> Result<(), Box<dyn Error>> {
    assert_cmd::Command::cargo_bin("litson")?
        .args(["a.ts", "b.json", "c.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn missing_input_file_fails_with_io_error() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("absent.ts");
    let output = dir.path().join("out.json");

    assert_cmd::Command::cargo_bin("litson")?
        .args([input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn parse_errors_name_the_position() -> Result<(), Box<dyn Error>> {
    let fixture = build_fixture("export const x = {\n  a: oops\n};\n")?;

    assert_cmd::Command::cargo_bin("litson")?
        .args([
            fixture.input.to_str().unwrap(),
            fixture.output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("2:6"));

    assert!(!fixture.output.exists());
    Ok(())
}

#[test]
fn input_without_a_literal_fails_cleanly() -> Result<(), Box<dyn Error>> {
    let fixture = build_fixture("export const nothing = 42;\n")?;

    assert_cmd::Command::cargo_bin("litson")?
        .args([
            fixture.input.to_str().unwrap(),
            fixture.output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No object literal"));

    assert!(!fixture.output.exists());
    Ok(())
}

#[test]
fn help_lists_both_arguments() -> Result<(), Box<dyn Error>> {
    assert_cmd::Command::cargo_bin("litson")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT"))
        .stdout(predicate::str::contains("OUTPUT"));
    Ok(())
}
