//! Error types for index construction, sampling and verification.

use crate::compute::spatial::EntryId;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoundaryError>;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("Degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error(
        "Sampling gave up after {attempts} attempts with {accepted} of {requested} points accepted"
    )]
    SamplingExhausted {
        requested: usize,
        accepted: usize,
        attempts: u64,
    },

    #[error("Entry id already present in the index: {0}")]
    DuplicateEntry(EntryId),

    #[error("Point {point} of {country} has no matching index entry before deletion")]
    BaselineMismatch { point: String, country: String },

    #[error("{0}")]
    Other(String),
}
