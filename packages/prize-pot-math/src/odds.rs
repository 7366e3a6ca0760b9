//! "1 in N" odds of winning at least one prize in a draw.
//!
//! Model version 1: each of the `w` prize slots is drawn independently with
//! probability proportional to tickets held, so
//!
//! ```text
//! share = min(deposit / supply, 1)
//! P     = 1 - (1 - share)^w
//! N     = round_half_up(1 / P)
//! ```
//!
//! Below `EXACT_SHARE_FLOOR` the exact form runs out of significant digits at
//! 18 decimal places and the first-order form `N = supply / (w * deposit)` is
//! used instead.

use cosmwasm_std::{Decimal256, Uint128, Uint256};

use crate::error::{MathError, MathResult};
use crate::types::OddsInput;

pub const ODDS_MODEL_VERSION: u32 = 1;

/// 1e-9
const EXACT_SHARE_FLOOR: Decimal256 = Decimal256::raw(1_000_000_000);

/// Odds of winning at least one of `number_of_winners` prizes, as the `N` in
/// "1 in N". `Ok(None)` when the participant is not in the draw at all.
pub fn compute_odds(
    total_ticket_supply: Uint128,
    number_of_winners: u32,
    participant_deposit: Option<Uint128>,
) -> MathResult<Option<Uint128>> {
    if number_of_winners == 0 {
        return Err(MathError::ZeroWinners);
    }
    let deposit = match participant_deposit {
        Some(deposit) if !deposit.is_zero() => deposit,
        _ => return Ok(None),
    };
    if total_ticket_supply.is_zero() {
        return Ok(None);
    }
    if deposit >= total_ticket_supply {
        return Ok(Some(Uint128::one()));
    }

    let share = Decimal256::checked_from_ratio(deposit, total_ticket_supply)?;
    let odds = if share < EXACT_SHARE_FLOOR {
        proportional_odds(total_ticket_supply, number_of_winners, deposit)?
    } else {
        exact_odds(share, number_of_winners)?
    };

    Ok(Some(Uint128::try_from(odds.max(Uint256::one()))?))
}

fn exact_odds(share: Decimal256, number_of_winners: u32) -> MathResult<Uint256> {
    let miss_every_slot = Decimal256::one()
        .checked_sub(share)?
        .checked_pow(number_of_winners)?;
    let win_probability = Decimal256::one().checked_sub(miss_every_slot)?;
    let inverse = Decimal256::one().checked_div(win_probability)?;
    let rounded = inverse.checked_add(Decimal256::percent(50))?;
    Ok(rounded.to_uint_floor())
}

fn proportional_odds(
    total_ticket_supply: Uint128,
    number_of_winners: u32,
    deposit: Uint128,
) -> MathResult<Uint256> {
    let weighted = Uint256::from(deposit).checked_mul(Uint256::from(number_of_winners))?;
    let odds = Decimal256::checked_from_ratio(total_ticket_supply, weighted)?
        .checked_add(Decimal256::percent(50))?;
    Ok(odds.to_uint_floor())
}

impl OddsInput {
    pub fn odds(&self) -> MathResult<Option<Uint128>> {
        compute_odds(
            self.total_ticket_supply,
            self.number_of_winners,
            self.participant_deposit,
        )
    }
}
