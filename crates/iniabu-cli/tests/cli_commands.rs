use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

#[test]
fn ratio_command_prints_labelled_values() {
    let output = run_iniabu(&["ratio", "Li-6", "--over", "Li-7", "--isotope"]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Li-6/Li-7\t8.210117E-2\n"
    );
}

#[test]
fn json_output_carries_session_context_and_result_shape() {
    let output = run_iniabu(&["--format", "json", "ratio", "Fe", "Ni", "--over", "Si"]);
    assert!(output.status.success(), "command should succeed");

    let parsed = parse_stdout(&output);
    assert_eq!(parsed["command"], "ratio");
    assert_eq!(parsed["database"], "lodders09");
    assert_eq!(parsed["unit"], "num_lin");
    let values = parsed["result"].as_array().expect("two pairs give an array");
    assert_eq!(values.len(), 2);
    let fe = values[0].as_f64().expect("Fe/Si should be a number");
    assert!((fe - 0.8482784146609847).abs() < 1.0e-12, "Fe/Si = {fe}");
}

#[test]
fn missing_abundances_serialize_as_null() {
    let output = run_iniabu(&[
        "--database",
        "nist",
        "--format",
        "json",
        "ratio",
        "Fe-56",
        "--over",
        "Si-28",
        "--isotope",
    ]);
    assert!(output.status.success(), "command should succeed");
    assert!(parse_stdout(&output)["result"].is_null());
}

#[test]
fn delta_command_uses_permil_by_default() {
    let output = run_iniabu(&[
        "--format", "json", "delta", "Si-30", "--over", "Si-28", "--isotope", "--value", "0.04",
    ]);
    assert!(output.status.success(), "command should succeed");

    let delta = parse_stdout(&output)["result"]
        .as_f64()
        .expect("single measurement gives a scalar");
    assert!((delta - 195.07453013609853).abs() < 1.0e-9, "delta = {delta}");
}

#[test]
fn int_norm_command_supports_both_laws() {
    for (law, expected) in [("exp", 5145.864708640091), ("lin", 532.5134933018826)] {
        let output = run_iniabu(&[
            "--format",
            "json",
            "int-norm",
            "Ni-60",
            "--norm",
            "Ni-58",
            "Ni-62",
            "--value",
            "250000",
            "--norm-value",
            "1000000",
            "10000",
            "--law",
            law,
        ]);
        assert!(
            output.status.success(),
            "{law} should succeed, stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let value = parse_stdout(&output)["result"]
            .as_f64()
            .expect("single target gives a scalar");
        assert!((value - expected).abs() < 1.0e-6, "{law}: {value}");
    }
}

#[test]
fn element_command_lists_isotopes() {
    let output = run_iniabu(&["--format", "json", "element", "Li"]);
    assert!(output.status.success(), "command should succeed");

    let parsed = parse_stdout(&output);
    let row = &parsed["result"];
    assert_eq!(row["symbol"], "Li");
    assert_eq!(row["atomicNumber"], 3);
    assert_eq!(row["isotopes"], serde_json::json!(["Li-6", "Li-7"]));
}

#[test]
fn config_file_selects_database_and_flags_override_it() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("session.json");
    write_file(
        &config_path,
        r#"{ "database": "asplund09", "unit": "num_log" }"#,
    );
    let config = config_path.to_string_lossy().to_string();
    let config = config.as_str();

    let output = run_iniabu(&["--config", config, "--format", "json", "isotope", "H-1"]);
    assert!(output.status.success(), "command should succeed");
    let parsed = parse_stdout(&output);
    assert_eq!(parsed["database"], "asplund09");
    assert_eq!(parsed["unit"], "num_log");

    let output = run_iniabu(&[
        "--config", config, "--unit", "num_lin", "--format", "json", "isotope", "H-1",
    ]);
    assert!(output.status.success(), "command should succeed");
    assert_eq!(parse_stdout(&output)["unit"], "num_lin");
}

#[test]
fn errors_map_to_exit_codes_and_diagnostic_lines() {
    let unknown = run_iniabu(&["ratio", "Xx-999", "--over", "Si-28", "--isotope"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&unknown.stderr).contains("ERROR: [INPUT.UNKNOWN_ISOTOPE]"),
        "stderr: {}",
        String::from_utf8_lossy(&unknown.stderr)
    );

    let shape = run_iniabu(&["delta", "Fe", "Ni", "--over", "Si", "--value", "1", "2", "3"]);
    assert_eq!(shape.status.code(), Some(3));

    let element_norm = run_iniabu(&[
        "int-norm",
        "Ni-60",
        "--norm",
        "Ni",
        "Ni-62",
        "--value",
        "1",
        "--norm-value",
        "1",
        "1",
    ]);
    assert_eq!(element_norm.status.code(), Some(4));

    let bad_law = run_iniabu(&[
        "int-norm",
        "Ni-60",
        "--norm",
        "Ni-58",
        "Ni-62",
        "--value",
        "1",
        "--norm-value",
        "1",
        "1",
        "--law",
        "cubic",
    ]);
    assert_eq!(bad_law.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&bad_law.stderr).contains("INPUT.CLI_USAGE"));
}

#[test]
fn unreadable_config_is_an_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("missing.json").to_string_lossy().to_string();
    let output = run_iniabu(&["--config", missing.as_str(), "element", "Fe"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO.CONFIG_READ"));
}

fn run_iniabu(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iniabu"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("iniabu binary should run")
}

fn parse_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|error| {
        panic!(
            "stdout should be JSON: {}\n{}",
            error,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, content).expect("file should be written");
}
