//! Fetches things by identifier over HTTP and reports typed domain errors.

mod config;
mod errors;
mod service;
mod transport;
pub use self::config::TransportConfig;
pub use self::errors::{Error, TransportError};
pub use self::service::{things_path, DomainService, ThingService};
pub use self::transport::{HttpTransport, Transport, TransportResponse};
