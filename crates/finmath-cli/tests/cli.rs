//! End-to-end tests for the `finmath` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any user configuration.
fn finmath(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finmath").unwrap();
    cmd.env("FINMATH_CONFIG", dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn present_value_minimal() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["--format", "minimal", "pv", "--rate", "5", "--cash-flow", "100", "--period", "5"])
        .assert()
        .success()
        .stdout("78.35\n");
}

#[test]
fn npv_accepts_negative_investment_and_flow_list() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args([
            "-f",
            "minimal",
            "npv",
            "--rate",
            "10",
            "--initial-investment",
            "-500000",
            "--cash-flows",
            "200000,300000,200000",
        ])
        .assert()
        .success()
        .stdout("80015.03\n");
}

#[test]
fn payback_uneven_is_unrounded() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args([
            "-f",
            "minimal",
            "pp",
            "-n",
            "5",
            "-i",
            "-50",
            "--cash-flows",
            "10,13,16,19,22",
        ])
        .assert()
        .success()
        .stdout("3.4210526315789473\n");
}

#[test]
fn payback_without_flows_fails() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["pp", "-i", "-105"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing cash flows"));
}

#[test]
fn amortization_years_and_months_agree() {
    let dir = TempDir::new().unwrap();
    for (period, unit) in [("5", "years"), ("60", "months")] {
        finmath(&dir)
            .args([
                "-f",
                "minimal",
                "am",
                "--principal",
                "20000",
                "--rate",
                "7.5",
                "--period",
                period,
                "--payment-type",
                unit,
                "--pay-at-beginning",
            ])
            .assert()
            .success()
            .stdout("398.27\n");
    }
}

#[test]
fn amortization_rejects_unknown_payment_type() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args([
            "am",
            "--principal",
            "20000",
            "--rate",
            "7.5",
            "--period",
            "5",
            "--payment-type",
            "weeks",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid payment type"));
}

#[test]
fn discount_factors_csv() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["-f", "csv", "df", "--rate", "10", "--periods", "4"])
        .assert()
        .success()
        .stdout("formula,period,result\nDF,1,1.0\nDF,2,0.91\nDF,3,0.827\n");
}

#[test]
fn empty_discount_factors_csv_keeps_header() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["-f", "csv", "df", "-r", "10", "-n", "1"])
        .assert()
        .success()
        .stdout("formula,period,result\n");
}

#[test]
fn npv_without_flows_is_the_investment() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["-f", "minimal", "npv", "-r", "10", "-i", "-100"])
        .assert()
        .success()
        .stdout("-100\n");
}

#[test]
fn wacc_json() {
    let dir = TempDir::new().unwrap();
    let output = finmath(&dir)
        .args([
            "--format",
            "json",
            "wacc",
            "--equity",
            "600000",
            "--debt",
            "400000",
            "--cost-of-equity",
            "6",
            "--cost-of-debt",
            "5",
            "--tax-rate",
            "35",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["formula"], "weighted_average_cost_of_capital");
    assert_eq!(json["result"], 4.9);
    assert_eq!(json["rounding"]["mode"], "percent");
    assert_eq!(json["rounding"]["decimals"], 1);
}

#[test]
fn table_output_shows_formula_and_rounding() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["stock-pv", "-g", "5", "-r", "15", "-d", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Stock Present Value (StockPV)")
                .and(predicate::str::contains("105"))
                .and(predicate::str::contains("nearest, 0 dp")),
        );
}

#[test]
fn non_finite_result_is_rejected_by_default() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["r72", "--rate", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-finite result from R72"));
}

#[test]
fn non_finite_result_allowed_on_request() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["--allow-non-finite", "-f", "minimal", "r72", "--rate", "0"])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn settings_file_sets_default_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "format = \"minimal\"\n").unwrap();

    finmath(&dir)
        .args(["capm", "-r", "2", "-b", "2", "-m", "10"])
        .assert()
        .success()
        .stdout("0.18\n");

    // flag wins over file
    finmath(&dir)
        .args(["-f", "csv", "capm", "-r", "2", "-b", "2", "-m", "10"])
        .assert()
        .success()
        .stdout("formula,result\nCAPM,0.18\n");
}

#[test]
fn settings_file_can_allow_non_finite() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "format = \"minimal\"\nreject_non_finite = false\n",
    )
    .unwrap();

    finmath(&dir)
        .args(["wacc", "-e", "0", "-d", "0", "--cost-of-equity", "6", "--cost-of-debt", "5", "-t", "35"])
        .assert()
        .success()
        .stdout("NaN\n");
}

#[test]
fn invalid_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "format = \"xml\"\n").unwrap();

    finmath(&dir)
        .args(["r72", "--rate", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    finmath(&dir).args(["config", "init"]).assert().success();
    assert!(path.exists());

    finmath(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    finmath(&dir)
        .args(["-f", "minimal", "config", "show"])
        .assert()
        .success()
        .stdout("format=minimal\nreject_non_finite=true\n");
}

#[test]
fn config_path_honours_environment() {
    let dir = TempDir::new().unwrap();
    finmath(&dir)
        .args(["-q", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
