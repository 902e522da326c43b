//! CLI failures and the exit code each one maps to.
//!
//! | code | cause |
//! |---|---|
//! | 2  | argument parsing (clap, before any of this runs) |
//! | 10 | engine rejected the request (unknown engine, bad params or dimensions) |
//! | 11 | seed file could not be read or written |
//! | 12 | `--params` is not valid JSON |
//! | 13 | JSON output could not be produced |
//! | 14 | sample point would overflow the fixed-point pipeline |

use fixnoise_core::{EngineError, FixedScalar};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(EngineError),

    #[error("{0}")]
    Io(String),

    #[error("invalid --params JSON: {0}")]
    Params(String),

    #[error("cannot write JSON output: {0}")]
    Output(#[from] serde_json::Error),

    /// The point breaks the sampler's overflow precondition for these params.
    #[error("point ({x}, {y}, {z}) is outside the safe range for scale {scale} with {octaves} octaves")]
    OutOfRange {
        x: FixedScalar,
        y: FixedScalar,
        z: FixedScalar,
        scale: i32,
        octaves: u32,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Params(_) => 12,
            CliError::Output(_) => 13,
            CliError::OutOfRange { .. } => 14,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}
