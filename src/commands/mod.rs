//! Command handler layer.
//!
//! Single-command CLI: `track.rs` owns the fetch → validate → convert →
//! project → render cycle. Parse CLI inputs here; delegate the logic to
//! `services/*`.

pub mod track;

pub use track::handle_track;
