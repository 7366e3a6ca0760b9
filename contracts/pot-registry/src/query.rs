use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;
use prize_pot_math::{
    compute_odds, compute_prize_split, from_raw_units, prize_tokens, project_prize_value,
    round_down, round_half_up, summarize_interest, total_prize_usd, InterestRates,
    InterestSummary, MathError, PoolSnapshot, PrizeShare, PrizeSplitInput, PrizeUnit,
    ODDS_MODEL_VERSION,
};

use crate::msg::{
    OddsResponse, PoolsResponse, PotCardResponse, PrizeSplitResponse, ProjectedPrizeResponse,
};
use crate::state::{PoolConfig, PoolStatus, PotState, CONFIG, POOLS, POT_STATES};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

/// Deposits are shown to the cent.
const DEPOSIT_DISPLAY_PLACES: u32 = 2;

fn math_err(err: MathError) -> StdError {
    StdError::generic_err(err.to_string())
}

fn load_pot(deps: Deps, id: &str) -> StdResult<(PoolConfig, PotState)> {
    let pool = POOLS.load(deps.storage, id)?;
    let state = POT_STATES
        .may_load(deps.storage, id)?
        .ok_or_else(|| StdError::generic_err(format!("no pot state reported for pool {}", id)))?;
    Ok((pool, state))
}

fn seconds_until_next_draw(env: &Env, state: &PotState) -> u64 {
    state
        .expires_at
        .seconds()
        .saturating_sub(env.block.time.seconds())
}

fn pool_snapshot(env: &Env, state: &PotState) -> PoolSnapshot {
    PoolSnapshot {
        annual_percentage_yield: state.apy,
        seconds_until_next_draw: seconds_until_next_draw(env, state),
        total_value_locked_tokens: state.total_token_staked,
        total_value_locked_usd: state.total_staked_usd,
        current_award_balance_tokens: state.award_balance,
        current_award_balance_usd: state.award_balance_usd,
    }
}

fn prize_split(pool: &PoolConfig, state: &PotState) -> StdResult<Vec<PrizeShare>> {
    compute_prize_split(&PrizeSplitInput {
        base_token_symbol: pool.token.clone(),
        base_award_balance_tokens: state.award_balance,
        base_award_balance_usd: state.award_balance_usd,
        sponsors: state.sponsors.clone(),
        number_of_winners: state.number_of_winners,
    })
    .map_err(math_err)
}

fn odds(state: &PotState, tickets: Option<Uint128>) -> StdResult<OddsResponse> {
    let odds =
        compute_odds(state.total_tickets, state.number_of_winners, tickets).map_err(math_err)?;
    Ok(OddsResponse {
        odds,
        model_version: ODDS_MODEL_VERSION,
    })
}

fn interest(state: &PotState) -> StdResult<InterestSummary> {
    summarize_interest(&InterestRates {
        base_apy: Some(state.apy),
        bonus_apy: state.bonus_apy,
        bonus_apr: state.bonus_apr,
    })
    .map_err(math_err)
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pool(deps: Deps, id: String) -> StdResult<Binary> {
    let pool = POOLS.load(deps.storage, &id)?;
    to_json_binary(&pool)
}

/// Pools in id order. The status filter runs during the scan, so a filtered
/// page reads past every non-matching pool until `limit` matches are found.
pub fn query_pools(
    deps: Deps,
    status: Option<PoolStatus>,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let pools: Vec<PoolConfig> = POOLS
        .range(deps.storage, start, None, Order::Ascending)
        .filter_map(|r| r.ok())
        .map(|(_, pool)| pool)
        .filter(|pool| status.map_or(true, |status| pool.status == status))
        .take(limit)
        .collect();

    to_json_binary(&PoolsResponse { pools })
}

pub fn query_pot_state(deps: Deps, id: String) -> StdResult<Binary> {
    let state = POT_STATES.may_load(deps.storage, &id)?;
    to_json_binary(&state)
}

pub fn query_projected_prize(
    deps: Deps,
    env: Env,
    id: String,
    unit: PrizeUnit,
) -> StdResult<Binary> {
    let (_, state) = load_pot(deps, &id)?;
    let snapshot = pool_snapshot(&env, &state);
    let projected = project_prize_value(&snapshot, unit).map_err(math_err)?;

    to_json_binary(&ProjectedPrizeResponse {
        unit,
        seconds_until_next_draw: snapshot.seconds_until_next_draw,
        projected,
    })
}

pub fn query_prize_split(deps: Deps, id: String) -> StdResult<Binary> {
    let (pool, state) = load_pot(deps, &id)?;
    let shares = prize_split(&pool, &state)?;

    to_json_binary(&PrizeSplitResponse {
        number_of_winners: state.number_of_winners,
        shares,
    })
}

pub fn query_odds(deps: Deps, id: String, tickets: Option<Uint128>) -> StdResult<Binary> {
    let (_, state) = load_pot(deps, &id)?;
    to_json_binary(&odds(&state, tickets)?)
}

pub fn query_interest(deps: Deps, id: String) -> StdResult<Binary> {
    let (_, state) = load_pot(deps, &id)?;
    to_json_binary(&interest(&state)?)
}

pub fn query_pot_card(
    deps: Deps,
    env: Env,
    id: String,
    deposit: Option<Uint128>,
    tickets: Option<Uint128>,
) -> StdResult<Binary> {
    let (pool, state) = load_pot(deps, &id)?;
    let snapshot = pool_snapshot(&env, &state);

    let projected_prize = project_prize_value(&snapshot, PrizeUnit::Tokens).map_err(math_err)?;
    let projected_prize_usd = project_prize_value(&snapshot, PrizeUnit::Usd).map_err(math_err)?;
    let deposit = from_raw_units(deposit.unwrap_or_default(), pool.token_decimals)
        .map(|deposit| round_down(deposit, DEPOSIT_DISPLAY_PLACES))
        .map_err(math_err)?;

    to_json_binary(&PotCardResponse {
        total_prize_usd: total_prize_usd(state.award_balance_usd, &state.sponsors)
            .map_err(math_err)?,
        prize_tokens: prize_tokens(&pool.token, &state.sponsors),
        seconds_until_next_draw: snapshot.seconds_until_next_draw,
        frequency_seconds: state.frequency_seconds,
        total_value_locked_usd: round_half_up(state.total_staked_usd, 0).map_err(math_err)?,
        projected_prize,
        projected_prize_usd,
        prize_split: prize_split(&pool, &state)?,
        interest: interest(&state)?,
        deposit,
        odds: odds(&state, tickets)?,
        id: pool.id,
        name: pool.name,
        token: pool.token,
        sponsor_token: pool.sponsor_token,
        status: pool.status,
    })
}
