mod common;
use chrono::{Days, Utc};
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn offline_synthetic_sync_writes_local_artifacts() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["sync", "--offline", "--synthetic", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (--offline)"));

    assert!(fixture.data_dir().join("vitals.json").exists());
    assert!(fixture.data_dir().join("vitals.csv").exists());
}

#[test]
fn online_sync_uploads_encrypted_snapshot() {
    let fixture = TestFixture::new();
    fixture.write_config();

    fixture
        .command()
        .args(["sync", "--synthetic", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote:   uploaded"));

    let remote_snapshot = fixture.remote_root().join("snapshots/vitals.json");
    assert!(remote_snapshot.exists());

    // The uploaded blob must not be readable as plaintext JSON.
    let blob = std::fs::read(&remote_snapshot).unwrap();
    assert!(serde_json::from_slice::<serde_json::Value>(&blob).is_err());
}

#[test]
fn unchanged_second_sync_skips_upload() {
    let fixture = TestFixture::new();
    fixture.write_config();

    fixture
        .command()
        .args(["sync", "--synthetic", "--seed", "42"])
        .assert()
        .success();

    fixture
        .command()
        .args(["sync", "--synthetic", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upload skipped"));
}

#[test]
fn fixture_source_sync_and_show() {
    let fixture = TestFixture::new();
    fixture.write_config();

    let day = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap();
    fixture.write_source_fixture(
        "oura",
        &format!(
            r#"[{{"source": "oura", "date": "{}", "sleep_score": 88, "steps": 11200}}]"#,
            day
        ),
    );

    fixture
        .command()
        .args(["sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s)"));

    fixture
        .command()
        .args(["show", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sleep Score: 88"))
        .stdout(predicate::str::contains(day.to_string()));
}

#[test]
fn sync_without_remote_config_fails_online() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["sync", "--synthetic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[remote]"));
}

#[test]
fn unconfigured_sources_are_reported_not_fatal() {
    let fixture = TestFixture::new();
    fixture.write_config();

    fixture
        .command()
        .args(["sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no connector configured"));
}
