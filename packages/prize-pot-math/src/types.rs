use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

/// Which side of a pool snapshot a projection reads.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum PrizeUnit {
    Tokens,
    Usd,
}

/// Pool figures needed to project the prize at the next draw.
/// APY is expressed in percent (12.5 means 12.5%).
#[cw_serde]
pub struct PoolSnapshot {
    pub annual_percentage_yield: Decimal,
    pub seconds_until_next_draw: u64,
    pub total_value_locked_tokens: Decimal,
    pub total_value_locked_usd: Decimal,
    pub current_award_balance_tokens: Decimal,
    pub current_award_balance_usd: Decimal,
}

impl PoolSnapshot {
    pub fn total_value_locked(&self, unit: PrizeUnit) -> Decimal {
        match unit {
            PrizeUnit::Tokens => self.total_value_locked_tokens,
            PrizeUnit::Usd => self.total_value_locked_usd,
        }
    }

    pub fn current_award_balance(&self, unit: PrizeUnit) -> Decimal {
        match unit {
            PrizeUnit::Tokens => self.current_award_balance_tokens,
            PrizeUnit::Usd => self.current_award_balance_usd,
        }
    }
}

/// Extra prize funding added by a sponsor. Missing balances read as zero.
#[cw_serde]
pub struct SponsorContribution {
    pub sponsor_token_symbol: String,
    #[serde(default)]
    pub sponsor_balance_tokens: Decimal,
    #[serde(default)]
    pub sponsor_balance_usd: Decimal,
}

#[cw_serde]
pub struct PrizeSplitInput {
    pub base_token_symbol: String,
    #[serde(default)]
    pub base_award_balance_tokens: Decimal,
    #[serde(default)]
    pub base_award_balance_usd: Decimal,
    pub sponsors: Vec<SponsorContribution>,
    pub number_of_winners: u32,
}

/// Aggregated prize for one token, before splitting between winners.
#[cw_serde]
pub struct PrizeTotal {
    pub token: String,
    pub tokens: Decimal,
    pub usd: Decimal,
}

/// What a single winner receives in one token.
#[cw_serde]
pub struct PrizeShare {
    pub token: String,
    pub tokens_per_winner: Decimal,
    pub usd_per_winner: Decimal,
}

/// Ticket supply and deposit are raw token units; only their ratio matters.
/// `participant_deposit` is `None` when nothing is tracked for the participant.
#[cw_serde]
pub struct OddsInput {
    pub total_ticket_supply: Uint128,
    pub number_of_winners: u32,
    pub participant_deposit: Option<Uint128>,
}

/// Rates as reported for a pool, in percent.
#[cw_serde]
#[derive(Default)]
pub struct InterestRates {
    pub base_apy: Option<Decimal>,
    pub bonus_apy: Option<Decimal>,
    pub bonus_apr: Option<Decimal>,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum InterestTooltip {
    /// Base and bonus APY are both shown and summed.
    BonusApy,
    /// A simple-rate bonus is shown next to the compounding figure.
    CompoundApr,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum InterestLineKind {
    TotalApy,
    BaseApy,
    BonusApr,
}

#[cw_serde]
pub struct InterestSummary {
    /// Base plus bonus APY; `None` hides the APY line.
    pub total_apy: Option<Decimal>,
    /// Breakdown line, only set when a bonus APY is stacked on the base.
    pub base_apy: Option<Decimal>,
    /// Simple annual rate, never summed into the APY.
    pub bonus_apr: Option<Decimal>,
    pub tooltip: Option<InterestTooltip>,
}
