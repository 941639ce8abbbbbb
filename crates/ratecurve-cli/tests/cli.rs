//! End-to-end tests for the `ratecurve` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::Builder;

fn ratecurve() -> Command {
    let mut cmd = Command::cargo_bin("ratecurve").unwrap();
    cmd.env_remove("RATECURVE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    ratecurve()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curve"))
        .stdout(predicate::str::contains("forwards"))
        .stdout(predicate::str::contains("dv01"))
        .stdout(predicate::str::contains("swap"));
}

#[test]
fn query_linear_rate_on_inline_quotes() {
    ratecurve()
        .args(["--quotes", "1Y:5.445,2Y:4.99", "--policy", "linear"])
        .args(["curve", "query", "--days", "547", "--format", "minimal"])
        .assert()
        .success()
        .stdout("5.218123\n");
}

#[test]
fn query_flat_beyond_last_point() {
    ratecurve()
        .args(["--quotes", "1Y:5.445,2Y:4.99", "-f", "minimal"])
        .args(["curve", "query", "--tenor", "10Y"])
        .assert()
        .success()
        .stdout("4.990000\n");
}

#[test]
fn query_requires_a_point() {
    ratecurve()
        .args(["curve", "query"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn show_builtin_curve_as_json() {
    ratecurve()
        .args(["curve", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tenor\": \"10Y\""))
        .stdout(predicate::str::contains("\"dv01\""));
}

#[test]
fn show_table_has_header() {
    ratecurve()
        .args(["curve", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD_SOFR"))
        .stdout(predicate::str::contains("Discount Factor"))
        .stdout(predicate::str::contains("DEPO"))
        .stdout(predicate::str::contains("SWAP"));
}

#[test]
fn malformed_quote_is_rejected() {
    ratecurve()
        .args(["--quotes", "1Y-5.0", "dv01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quote"));
}

#[test]
fn duplicate_tenors_are_rejected() {
    ratecurve()
        .args(["--quotes", "1Y:5.0,12M:5.1:365", "dv01"])
        .assert()
        .failure();
}

#[test]
fn unknown_curve_is_an_error() {
    ratecurve()
        .args(["--curve", "CHF_SARON", "dv01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHF_SARON"));
}

#[test]
fn dv01_reports_each_tenor() {
    ratecurve()
        .args(["--quotes", "1Y:5.445,2Y:4.99", "dv01", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tenor,days,dv01"))
        .stdout(predicate::str::contains("1Y,365,"))
        .stdout(predicate::str::contains("2Y,730,"));
}

#[test]
fn daily_forward_jumps_on_step_curve() {
    ratecurve()
        .args(["--quotes", "30:5.0,90:5.5", "--policy", "step", "--date", "2024-01-01"])
        .args(["forwards", "--daily", "--start", "2024-01-01", "--end", "2024-06-30"])
        .args(["--jumps", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-30"))
        .stdout(predicate::str::contains("2024-03-31"));
}

#[test]
fn daily_forwards_reject_reversed_range() {
    ratecurve()
        .args(["forwards", "--daily", "--start", "2025-06-01", "--end", "2025-01-01"])
        .assert()
        .failure();
}

#[test]
fn swap_pay_and_receive_are_opposite() {
    let pv = |direction: &str| -> f64 {
        let output = ratecurve()
            .args(["--quotes", "1Y:5.445,2Y:4.99,5Y:4.352"])
            .args(["swap", "--maturity", "5Y", "--fixed-rate", "4.25"])
            .args(["--direction", direction, "--format", "minimal"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().parse().unwrap()
    };

    let pay = pv("pay");
    let receive = pv("receive");
    assert!(pay.abs() > 0.0);
    assert!((pay + receive).abs() < 1e-6);
}

#[test]
fn swap_rejects_zero_notional() {
    ratecurve()
        .args(["swap", "--maturity", "5Y", "--fixed-rate", "4.25", "--notional", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid notional"));
}

#[test]
fn config_file_drives_curve_selection() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[[curves]]
name = "TEST_CURVE"
interpolation = "STEP_FORWARD"
quotes = [{{ tenor = "1M", rate = 5.0 }}, {{ tenor = "1Y", rate = 4.0 }}]
"#
    )
    .unwrap();

    ratecurve()
        .arg("--config")
        .arg(file.path())
        .args(["--curve", "TEST_CURVE", "-f", "minimal"])
        .args(["curve", "query", "--days", "200"])
        .assert()
        .success()
        .stdout("5.000000\n");
}

#[test]
fn config_show_lists_catalogue() {
    ratecurve()
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD_SOFR"))
        .stdout(predicate::str::contains("JPY_TONAR"));
}

#[test]
fn config_validate_reports_errors() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[[curves]]
name = ""
currency = "usd"
"#
    )
    .unwrap();

    ratecurve()
        .args(["config", "validate"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("curves[0].name"))
        .stderr(predicate::str::contains("curves[0].currency"));
}

#[test]
fn config_validate_accepts_good_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(
        file,
        r#"{{"curves": [{{"name": "USD_SOFR", "quotes": [{{"tenor": "1Y", "rate": 5.0}}]}}]}}"#
    )
    .unwrap();

    ratecurve()
        .args(["config", "validate"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}
