//! Standard error type for syclif.

use crate::core::functions::{ApiError, ProgramBuildError};
use crate::core::Status;
use crate::standard::FilterParseError;

/// Syclif result type.
pub type Result<T> = ::std::result::Result<T, Error>;

/// An enum of the error types raised by the runtime and the safe wrapper
/// layer.
///
/// Errors never cross the C interface; the `capi` layer converts them into
/// null handles or sentinel returns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // FilterParse: Device filter string parse error:
    #[error("{0}")]
    FilterParse(#[from] FilterParseError),
    // Api: Runtime function call error:
    #[error("{0}")]
    Api(#[from] ApiError),
    // ProgramBuild: OpenCL-C source tabulation error. Scanner errors
    // surface here, wrapped into the build log:
    #[error("{0}")]
    ProgramBuild(#[from] ProgramBuildError),
}

impl Error {
    /// Returns the error status code for `Api` variants.
    pub fn api_status(&self) -> Option<Status> {
        match *self {
            Error::Api(ref err) => Some(err.status()),
            _ => None,
        }
    }
}
