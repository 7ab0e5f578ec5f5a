#[path = "common/mod.rs"]
mod common;

use std::{fs, os::unix::fs::PermissionsExt, path::Path};

use assert_cmd::Command;
use common::{shipped_templates, write_templates};
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

fn initsys() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("initsys"));
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn dry_run_prints_systemd_unit_path() {
    let unit = Path::new("/etc/systemd/system/pmtr.service");
    let existed = unit.exists();

    initsys()
        .args([
            "--initsys",
            "systemd",
            "--bindir",
            "/usr/bin",
            "--install-service",
            "auto",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("/etc/systemd/system/pmtr.service"));

    assert_eq!(unit.exists(), existed, "dry run must not write the unit");
}

#[test]
fn dry_run_with_every_action_succeeds() {
    initsys()
        .args([
            "--initsys",
            "debian",
            "--bindir",
            "/usr/bin",
            "--stop-service",
            "--install-service",
            "--enable-service",
            "--uninstall-service",
            "--start-service",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(
            contains("would run: service pmtr stop")
                .and(contains("would write /etc/init.d/pmtr (mode 0755)"))
                .and(contains("would run: update-rc.d pmtr defaults"))
                .and(contains("would run: update-rc.d -f pmtr remove"))
                .and(contains("would remove /etc/init.d/pmtr"))
                .and(contains("would run: service pmtr start")),
        );
}

#[test]
fn dry_run_lists_actions_in_fixed_order() {
    let output = initsys()
        .args([
            "--initsys",
            "upstart",
            "--bindir",
            "/usr/bin",
            "--start-service",
            "--uninstall-service",
            "--stop-service",
            "--dry-run",
            "--quiet",
        ])
        .output()
        .expect("failed to run initsys");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stop = stdout.find("initctl stop pmtr").expect("stop missing");
    let disable = stdout
        .find("initctl reload-configuration")
        .expect("disable missing");
    let start = stdout.find("initctl start pmtr").expect("start missing");
    assert!(stop < disable && disable < start, "unexpected order:\n{stdout}");
}

#[test]
fn auto_prints_same_plan_as_explicit_flags() {
    let common_args = ["--initsys", "rhel6", "--bindir", "/usr/bin", "--dry-run"];

    let auto = initsys()
        .args(common_args)
        .arg("--auto")
        .output()
        .expect("failed to run initsys");
    let explicit = initsys()
        .args(common_args)
        .args([
            "--install-service",
            "auto",
            "--enable-service",
            "--start-service",
        ])
        .output()
        .expect("failed to run initsys");

    assert!(auto.status.success());
    assert_eq!(auto.stdout, explicit.stdout);
}

#[test]
fn help_exits_with_usage_error() {
    initsys()
        .arg("--help")
        .assert()
        .code(255)
        .stderr(contains("--install-service").and(contains("--initsys")));
}

#[test]
fn help_exits_with_usage_error_even_with_unreadable_config() {
    let temp = tempdir().expect("failed to create tempdir");
    let broken = temp.path().join("broken.yaml");
    fs::write(&broken, "initsys: launchd\n").unwrap();

    initsys()
        .args(["--help", "--config", "/nonexistent/initsys.yaml"])
        .assert()
        .code(255)
        .stderr(contains("--install-service"));

    initsys()
        .arg("--help")
        .arg("--config")
        .arg(&broken)
        .assert()
        .code(255)
        .stderr(contains("--install-service"));
}

#[test]
fn version_is_a_usage_error() {
    initsys().arg("--version").assert().code(255);
}

#[test]
fn nothing_to_do_is_a_usage_error() {
    initsys()
        .args(["--initsys", "systemd", "--enable-service"])
        .assert()
        .code(255)
        .stderr(contains("nothing to do"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    initsys()
        .arg("--reinstall-service")
        .assert()
        .code(255)
        .stderr(contains("--reinstall-service"));
}

#[test]
fn unknown_init_system_is_a_usage_error() {
    initsys()
        .args(["--initsys", "launchd", "--start-service"])
        .assert()
        .code(255)
        .stderr(contains("launchd"));
}

#[test]
fn missing_config_file_fails() {
    let temp = tempdir().expect("failed to create tempdir");
    initsys()
        .arg("--config")
        .arg(temp.path().join("absent.yaml"))
        .arg("--start-service")
        .assert()
        .code(1)
        .stderr(contains("absent.yaml"));
}

#[test]
fn installs_to_explicit_path() {
    let temp = tempdir().expect("failed to create tempdir");
    let target = temp.path().join("out/pmtr.service");

    initsys()
        .args(["--initsys", "systemd", "--bindir", "/opt/pmtr/bin"])
        .arg("--templates")
        .arg(shipped_templates())
        .arg("--install-service")
        .arg(&target)
        .assert()
        .success()
        .stdout(contains("Installed systemd service file"));

    let unit = fs::read_to_string(&target).expect("unit should be written");
    assert!(unit.contains("ExecStart=/opt/pmtr/bin/pmtr -F"));
    assert!(!unit.contains("__SYSBINDIR__"));
    assert_eq!(
        fs::metadata(&target).unwrap().permissions().mode() & 0o777,
        0o644
    );
}

#[test]
fn quiet_install_prints_nothing() {
    let temp = tempdir().expect("failed to create tempdir");
    let templates = temp.path().join("templates");
    write_templates(&templates);
    let target = temp.path().join("pmtr");

    initsys()
        .args(["--quiet", "--initsys", "sysvinit", "--bindir", "/usr/local/bin"])
        .arg("--templates")
        .arg(&templates)
        .arg("--install-service")
        .arg(&target)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::metadata(&target).unwrap().permissions().mode() & 0o777,
        0o755
    );
}

#[test]
fn config_file_supplies_defaults() {
    let temp = tempdir().expect("failed to create tempdir");
    let config = temp.path().join("initsys.yaml");
    fs::write(&config, "bindir: /srv/bin\ninitsys: upstart\n").unwrap();

    initsys()
        .arg("--config")
        .arg(&config)
        .args(["--install-service", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("/etc/init/pmtr.conf").and(contains("/srv/bin")));
}

#[test]
fn missing_template_fails_install() {
    let temp = tempdir().expect("failed to create tempdir");
    let target = temp.path().join("pmtr.conf");

    initsys()
        .args(["--initsys", "upstart", "--bindir", "/usr/bin"])
        .arg("--templates")
        .arg(temp.path())
        .arg("--install-service")
        .arg(&target)
        .assert()
        .code(1)
        .stderr(contains("service.upstart"));

    assert!(!target.exists());
}
