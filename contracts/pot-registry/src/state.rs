use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use prize_pot_math::SponsorContribution;

pub const CONFIG: Item<Config> = Item::new("config");
/// Static pool configuration, keyed by pool id.
pub const POOLS: Map<&str, PoolConfig> = Map::new("pools");
/// Latest operator-reported figures, keyed by pool id.
pub const POT_STATES: Map<&str, PotState> = Map::new("pot_states");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Allowed to report live pot figures.
    pub operator: Addr,
    /// Chain whose vaults this registry describes, e.g. "bsc".
    pub chain: String,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum VaultType {
    Main,
    Community,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum PoolStatus {
    Active,
    /// End of life: no longer accepting deposits, kept for withdrawals.
    Eol,
}

#[cw_serde]
pub struct PoolConfig {
    pub id: String,
    pub name: String,
    /// Deposit token symbol
    pub token: String,
    pub token_address: String,
    pub token_decimals: u32,
    /// Ticket token received for deposits
    pub reward_token: String,
    pub reward_address: String,
    /// Prize pool vault contract
    pub contract_address: String,
    pub price_per_share: Decimal,
    pub oracle_id: String,
    pub vault_type: VaultType,
    pub status: PoolStatus,
    pub sponsor_project_name: String,
    pub sponsor_token: String,
    pub sponsor_address: String,
}

/// Live figures for a pool, fetched off-chain and reported by the operator.
#[cw_serde]
pub struct PotState {
    /// Base APY in percent
    pub apy: Decimal,
    pub bonus_apy: Option<Decimal>,
    pub bonus_apr: Option<Decimal>,
    /// Time of the next draw
    pub expires_at: Timestamp,
    /// Seconds between draws
    pub frequency_seconds: u64,
    pub total_token_staked: Decimal,
    pub total_staked_usd: Decimal,
    pub award_balance: Decimal,
    pub award_balance_usd: Decimal,
    pub sponsors: Vec<SponsorContribution>,
    /// Ticket supply in raw units
    pub total_tickets: Uint128,
    pub number_of_winners: u32,
    pub updated_at: Timestamp,
}
