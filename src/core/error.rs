// This module defines the runtime error types for uses-alloc using the thiserror crate.
// Almost every contract in this crate is enforced at compile time through trait bounds, so
// the only runtime failure channel is the checked placement path: PlacementError reports a
// null or misaligned destination pointer before anything is written. Errors raised by a
// target type's own constructor are never wrapped here; panics propagate to the caller
// unchanged. PlacementResult<T> is the convenience alias for Result<T, PlacementError>.

//! Error types for placement construction.
//!
//! Using thiserror for idiomatic error handling.

use thiserror::Error;

/// Destination storage rejected by a checked placement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Placement target for {type_name} is null")]
    Null {
        type_name: &'static str,
    },

    #[error("Placement target {addr:#x} is not aligned to {align} bytes for {type_name}")]
    Misaligned {
        type_name: &'static str,
        addr: usize,
        align: usize,
    },
}

/// Result type alias for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let null = PlacementError::Null { type_name: "u64" };
        assert_eq!(null.to_string(), "Placement target for u64 is null");

        let misaligned = PlacementError::Misaligned {
            type_name: "u64",
            addr: 0x1003,
            align: 8,
        };
        assert_eq!(
            misaligned.to_string(),
            "Placement target 0x1003 is not aligned to 8 bytes for u64"
        );
    }
}
