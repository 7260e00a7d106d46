mod common;

use common::{success_payload, TestEnv};
use predicates::str::contains;
use serde_json::Value;

#[test]
fn renders_marker_at_map_center_for_the_origin() {
    let env = TestEnv::new();
    let fixture = env.write_snapshot(&success_payload("0.0", "0.0", 1_700_000_000));

    let out = env
        .cmd()
        .arg("--plain")
        .arg("--source")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(contains("ISS TRACKER"))
        .stdout(contains("Longitude: 0.0"))
        .stdout(contains("Latitude: 0.0"))
        .stdout(contains("2023-11-14 23:13:20+01:00"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).expect("utf8 stdout");
    // title, longitude, latitude, timestamp, blank line, then the map
    let map_rows: Vec<&str> = text.lines().skip(5).collect();
    assert_eq!(map_rows.len(), 22);

    // the equator row carries index 11, i.e. the twelfth row from the top
    let equator_row = map_rows[11];
    assert_eq!(equator_row.chars().nth(35), Some('#'));
    assert_eq!(text.matches('#').count(), 1);
}

#[test]
fn non_success_message_exits_one_with_no_map() {
    let env = TestEnv::new();
    let fixture = env.write_snapshot(&serde_json::json!({
        "message": "failure",
        "timestamp": 1_700_000_000,
        "iss_position": {"longitude": "0.0", "latitude": "0.0"}
    }));

    let assert = env
        .cmd()
        .arg("--source")
        .arg(&fixture)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failure"));
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn unreadable_source_surfaces_an_error() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--source")
        .arg("no-such-snapshot.json")
        .assert()
        .failure()
        .stderr(contains("no-such-snapshot.json"));
}

#[test]
fn json_mode_emits_the_report_envelope() {
    let env = TestEnv::new();
    let fixture = env.write_snapshot(&success_payload("-0.1", "51.5", 1_700_000_000));

    let out = env
        .cmd()
        .arg("--json")
        .arg("--source")
        .arg(&fixture)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["longitude"], "-0.1");
    assert_eq!(v["data"]["latitude"], "51.5");
    assert_eq!(v["data"]["timestamp"], 1_700_000_000_i64);
    assert_eq!(v["data"]["local_time"], "2023-11-14 23:13:20+01:00");
    assert_eq!(v["data"]["marker"]["column"], 35);
    assert_eq!(v["data"]["marker"]["row"], 17);
}
