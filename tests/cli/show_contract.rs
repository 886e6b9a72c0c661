use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn show_single_topology() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]").and(predicate::str::contains("roles = \"Api\"")));

    assert!(!ctx.build_dir().exists());
}

#[test]
fn show_all_topologies() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[peer]")
                .and(predicate::str::contains("[api]"))
                .and(predicate::str::contains("[dual]")),
        );
}

#[test]
fn show_rejects_unknown_topology() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "light"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid topology 'light'"));
}

#[test]
fn show_rejects_uppercase_topology() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "PEER"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid topology 'PEER'"));
}

#[test]
fn show_failure_logs_neutral_message() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("RUST_LOG", "nodecfg=debug")
        .args(["show", "light"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("command failed")
                .and(predicate::str::contains("build aborted").not()),
        );
}
