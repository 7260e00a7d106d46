use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("isstrack").expect("binary under test")
    }

    /// Write a snapshot fixture and return its path for `--source`.
    pub fn write_snapshot(&self, payload: &Value) -> PathBuf {
        let path = self.dir.join("iss-now.json");
        fs::write(&path, payload.to_string()).expect("write snapshot fixture");
        path
    }
}

pub fn success_payload(longitude: &str, latitude: &str, timestamp: i64) -> Value {
    serde_json::json!({
        "message": "success",
        "timestamp": timestamp,
        "iss_position": {"longitude": longitude, "latitude": latitude}
    })
}
