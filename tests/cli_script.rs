use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bank_core_cli").unwrap();
    cmd.env("BANK_CORE_CLI_SCRIPT", "1")
        .env("BANK_CORE_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let dir = tempdir().unwrap();
    let input = "open Alice 1234 standard 1000\n\
                 deposit Alice 50\n\
                 show Alice\n\
                 interest Alice 12\n\
                 exit\n";

    script_command(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Account `Alice` created."))
        .stdout(contains("Balance: 1050.0 USD"))
        .stdout(contains("The expected interest is: 37.80 USD"));
}

#[test]
fn vip_interest_compounds_in_script_mode() {
    let dir = tempdir().unwrap();
    let input = "open Bob 5678 vip 1000\n\
                 interest Bob 12\n\
                 exit\n";

    script_command(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("The expected interest is: 100.34 USD"));
}

#[test]
fn errors_are_reported_without_stopping_the_script() {
    let dir = tempdir().unwrap();
    let input = "open Alice 1234 standard 1000\n\
                 withdraw Alice 0000 10\n\
                 close Alice 0000\n\
                 interest Alice 0\n\
                 show Alice\n\
                 exit\n";

    script_command(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Wrong passcode"))
        .stdout(contains("Months must be a positive number"))
        .stdout(contains("Balance: 1000.0 USD"));
}

#[test]
fn unknown_names_and_commands_are_handled() {
    let dir = tempdir().unwrap();
    let input = "show Ghost\n\
                 opeen Alice 1234 standard\n\
                 exit\n";

    script_command(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Name: Ghost does not exist"))
        .stdout(contains("Unknown command `opeen`"))
        .stdout(contains("Suggestion: `open`?"));
}

#[test]
fn short_passcode_is_rejected_at_open() {
    let dir = tempdir().unwrap();
    let input = "open Alice 123 standard 1000\n\
                 show Alice\n\
                 exit\n";

    script_command(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Passcode must be exactly 4 characters"))
        .stdout(contains("Name: Alice does not exist"));
}

#[test]
fn config_updates_persist_between_runs() {
    let dir = tempdir().unwrap();

    script_command(dir.path())
        .write_stdin("set currency EUR\nexit\n")
        .assert()
        .success()
        .stdout(contains("Configuration updated."));

    script_command(dir.path())
        .write_stdin("open Alice 1234 standard 1000\nshow Alice\nexit\n")
        .assert()
        .success()
        .stdout(contains("Balance: 1000.0 EUR"));
}
