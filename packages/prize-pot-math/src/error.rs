use cosmwasm_std::{
    CheckedFromRatioError, ConversionOverflowError, DecimalRangeExceeded, OverflowError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("number of winners must be at least 1")]
    ZeroWinners,

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] CheckedFromRatioError),

    #[error("{0}")]
    DecimalRange(#[from] DecimalRangeExceeded),

    #[error("{0}")]
    Conversion(#[from] ConversionOverflowError),

    /// The fixed-point logarithm is only defined for arguments >= 1.
    #[error("logarithm argument must be at least 1")]
    LogarithmOutOfDomain,
}

pub type MathResult<T> = Result<T, MathError>;
