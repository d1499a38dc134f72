mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn export_writes_flat_csv_with_namespaced_columns() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["sync", "--offline", "--synthetic", "--seed", "9"])
        .assert()
        .success();

    let output = fixture.data_dir().join("out.csv");
    fixture
        .command()
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = std::fs::read_to_string(&output).unwrap();
    let header = content.lines().next().unwrap();
    assert!(header.starts_with("date,"));
    assert!(header.contains("oura__sleep_score"));
    assert!(header.contains("manual__bodyweight_kg"));
}

#[test]
fn source_set_updates_config_and_list() {
    let fixture = TestFixture::new();
    fixture.write_config();

    fixture
        .command()
        .args(["source", "set", "strava", "--disable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enabled=false"));

    fixture
        .command()
        .args(["source", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strava"))
        .stdout(predicate::str::contains("no"));
}
