//! Error types for fault setup.
//!
//! Only one phase of this tool can fail recoverably: preparing a fault
//! that needs OS resources before it can fire. Everything past setup is
//! either an OS-level fault (unrecoverable by design) or a usage error
//! handled by the dispatcher.

use std::io;

/// Result alias for fault setup operations.
pub type SetupResult<T> = Result<T, FaultSetupError>;

/// A fault could not be prepared.
///
/// When setup fails the routine must report and return without inducing
/// any other fault in its place.
#[derive(Debug, thiserror::Error)]
pub enum FaultSetupError {
    #[error("Executable region allocation failed: {0}")]
    RegionAlloc(io::Error),

    #[error("Could not make region executable: {0}")]
    RegionProtect(io::Error),
}
