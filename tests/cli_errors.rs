use predicates::str::contains;

#[test]
fn zero_rate_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "--rate",
        "0",
        "--servers",
        "2",
        "--jobs",
        "5",
        "--service",
        "exponential:0.4",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: arrival rate must be > 0"));
}

#[test]
fn zero_servers_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "--rate",
        "2",
        "--servers",
        "0",
        "--jobs",
        "5",
        "--service",
        "exponential:0.4",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: server count must be >= 1"));
}

#[test]
fn zero_jobs_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "--rate",
        "2",
        "--servers",
        "2",
        "--jobs",
        "0",
        "--service",
        "exponential:0.4",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: job count must be >= 1"));
}

#[test]
fn unknown_distribution_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "--rate",
        "2",
        "--servers",
        "2",
        "--jobs",
        "5",
        "--service",
        "weibull:1,2",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: unknown service distribution 'weibull'"));
}

#[test]
fn wrong_parameter_count_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "--rate",
        "2",
        "--servers",
        "2",
        "--jobs",
        "5",
        "--service",
        "normal:5",
    ]);
    cmd.assert().failure().stderr(contains(
        "Error: invalid parameters for normal: expected 2 parameters, got 1",
    ));
}

#[test]
fn missing_flag_without_config_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["--servers", "2", "--jobs", "5", "--service", "normal:5,1"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: --rate is required unless --config is given"));
}
