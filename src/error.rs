//! Error Types

use thiserror::Error;

/// Failure while loading a location collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
}

/// Failure while writing to the spend ledger
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("could not write ledger: {0}")]
    Write(String),
}
