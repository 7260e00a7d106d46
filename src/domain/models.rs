use serde::{Deserialize, Serialize};

/// Envelope for all `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One decoded response from the position endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PositionSnapshot {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: WirePosition,
}

/// Coordinates exactly as the endpoint sends them: string-encoded degrees.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WirePosition {
    pub longitude: String,
    pub latitude: String,
}

/// Parsed coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub longitude: f64,
    pub latitude: f64,
}

/// Grid cell for the marker. Signed so out-of-range projections stay
/// representable; the renderer drops markers it cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerPosition {
    pub column: i32,
    pub row: i32,
}

/// Summary of one fetch-render cycle, for `--json` output.
#[derive(Serialize)]
pub struct TrackReport {
    pub longitude: String,
    pub latitude: String,
    pub timestamp: i64,
    pub local_time: String,
    pub marker: MarkerPosition,
}
