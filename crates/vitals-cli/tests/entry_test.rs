mod common;
use chrono::{Days, Utc};
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn entry_lifecycle_add_list_fold_compact() {
    let fixture = TestFixture::new();
    fixture.write_config();

    let day = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(2))
        .unwrap();

    fixture
        .command()
        .args(["entry", "add", "--date", &day.to_string(), "--bodyweight", "81.4", "--lift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded entry"));

    fixture
        .command()
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bodyweight 81.4 kg"))
        .stdout(predicate::str::contains("lift"));

    fixture
        .command()
        .args(["sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folded 1 pending entry"));

    fixture
        .command()
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending entries"));

    fixture
        .command()
        .args(["show", "--limit", "14", "--source", "manual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bodyweight: 81.4 kg"));
}

#[test]
fn entry_add_requires_a_field() {
    let fixture = TestFixture::new();
    fixture.write_config();

    fixture
        .command()
        .args(["entry", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to record"));
}

#[test]
fn entry_add_requires_remote_config() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["entry", "add", "--bodyweight", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[remote]"));
}
