//! Domain and remote-port error types

mod domain_error;
mod location_error;
mod remote_error;

pub use domain_error::DomainError;
pub use location_error::LocationError;
pub use remote_error::RemoteError;
