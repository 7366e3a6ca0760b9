use cosmwasm_std::StdError;
use prize_pot_math::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("pool {id} not found")]
    PoolNotFound { id: String },

    #[error("pool {id} already registered")]
    PoolAlreadyExists { id: String },

    #[error("invalid pool id: {reason}")]
    InvalidPoolId { reason: String },

    #[error("invalid {field} address: {address}")]
    InvalidAddress { field: String, address: String },

    #[error("token decimals {decimals} out of range (max {max})")]
    InvalidTokenDecimals { decimals: u32, max: u32 },

    #[error("a draw must have at least one winner")]
    InvalidWinners,

    #[error("draw frequency must be greater than zero")]
    InvalidFrequency,
}
