use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Timestamp, Uint128};
use prize_pot_math::{InterestSummary, PrizeShare, PrizeUnit, SponsorContribution};

use crate::state::{Config, PoolConfig, PoolStatus, PotState};

#[cw_serde]
pub struct InstantiateMsg {
    pub operator: String,
    /// Chain name the registered vaults live on, e.g. "bsc"
    pub chain: String,
    /// Initial pool configuration for the chain
    pub pools: Vec<PoolConfig>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Add a pool to the registry. Admin only.
    RegisterPool { pool: PoolConfig },
    /// Mark a pool active or end-of-life. Admin only.
    UpdatePoolStatus { id: String, status: PoolStatus },
    /// Remove a pool and its reported figures. Admin only.
    RemovePool { id: String },
    /// Replace the live figures for a pool. Operator only.
    ReportPotState { id: String, state: PotStateReport },
    /// Update contract configuration. Admin only.
    UpdateConfig {
        admin: Option<String>,
        operator: Option<String>,
    },
}

/// Live pool figures as fetched off-chain. Missing sponsor balances read as zero.
#[cw_serde]
pub struct PotStateReport {
    pub apy: Decimal,
    pub bonus_apy: Option<Decimal>,
    pub bonus_apr: Option<Decimal>,
    pub expires_at: Timestamp,
    pub frequency_seconds: u64,
    pub total_token_staked: Decimal,
    pub total_staked_usd: Decimal,
    pub award_balance: Decimal,
    pub award_balance_usd: Decimal,
    pub sponsors: Vec<SponsorContribution>,
    pub total_tickets: Uint128,
    pub number_of_winners: u32,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(PoolConfig)]
    Pool { id: String },
    #[returns(PoolsResponse)]
    Pools {
        status: Option<PoolStatus>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Option<PotState>)]
    PotState { id: String },
    /// Award balance expected at the next draw
    #[returns(ProjectedPrizeResponse)]
    ProjectedPrize { id: String, unit: PrizeUnit },
    /// Per-winner prize in every token worth showing
    #[returns(PrizeSplitResponse)]
    PrizeSplit { id: String },
    /// "1 in N" odds for a holder of `tickets` raw ticket units
    #[returns(OddsResponse)]
    Odds { id: String, tickets: Option<Uint128> },
    #[returns(InterestSummary)]
    Interest { id: String },
    /// Everything a pot card displays, for an optional depositor
    #[returns(PotCardResponse)]
    PotCard {
        id: String,
        /// Deposit in raw deposit-token units
        deposit: Option<Uint128>,
        /// Ticket balance in raw units
        tickets: Option<Uint128>,
    },
}

#[cw_serde]
pub struct PoolsResponse {
    pub pools: Vec<PoolConfig>,
}

#[cw_serde]
pub struct ProjectedPrizeResponse {
    pub unit: PrizeUnit,
    pub seconds_until_next_draw: u64,
    pub projected: Decimal,
}

#[cw_serde]
pub struct PrizeSplitResponse {
    pub number_of_winners: u32,
    pub shares: Vec<PrizeShare>,
}

#[cw_serde]
pub struct OddsResponse {
    /// `None` when the holder is not in the draw
    pub odds: Option<Uint128>,
    pub model_version: u32,
}

#[cw_serde]
pub struct PotCardResponse {
    pub id: String,
    pub name: String,
    pub token: String,
    pub sponsor_token: String,
    pub status: PoolStatus,
    pub total_prize_usd: Decimal,
    pub prize_tokens: Vec<String>,
    pub seconds_until_next_draw: u64,
    pub frequency_seconds: u64,
    /// Whole dollars
    pub total_value_locked_usd: Decimal,
    pub projected_prize: Decimal,
    pub projected_prize_usd: Decimal,
    pub prize_split: Vec<PrizeShare>,
    pub interest: InterestSummary,
    /// Deposit in token units, two decimal places
    pub deposit: Decimal,
    pub odds: OddsResponse,
}
