use crate::domain::models::{PositionFix, PositionSnapshot};
use anyhow::Context;
use log::debug;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("API message was {0:?}, expected \"success\"")]
    Status(String),
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_snapshot_text(source: &str, timeout_ms: u64) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client.get(source).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// Load one position snapshot from a url or a local JSON file. One shot, no
/// retries, no caching.
pub fn load_snapshot(source: &str) -> anyhow::Result<PositionSnapshot> {
    let raw = if is_remote(source) {
        debug!("fetching position from {source}");
        fetch_snapshot_text(source, 10_000)?
    } else {
        debug!("reading position from {source}");
        std::fs::read_to_string(source)
            .with_context(|| format!("reading position source {source}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("decoding position snapshot from {source}"))
}

/// The only explicit check in the cycle: the endpoint reports success.
pub fn validate(snapshot: &PositionSnapshot) -> anyhow::Result<()> {
    if snapshot.message != "success" {
        return Err(ApiError::Status(snapshot.message.clone()).into());
    }
    Ok(())
}

/// Parse the string-encoded coordinates into degrees.
pub fn parse_fix(snapshot: &PositionSnapshot) -> anyhow::Result<PositionFix> {
    let longitude = snapshot
        .iss_position
        .longitude
        .parse()
        .with_context(|| format!("longitude {:?} is not a number", snapshot.iss_position.longitude))?;
    let latitude = snapshot
        .iss_position
        .latitude
        .parse()
        .with_context(|| format!("latitude {:?} is not a number", snapshot.iss_position.latitude))?;
    Ok(PositionFix {
        longitude,
        latitude,
    })
}
