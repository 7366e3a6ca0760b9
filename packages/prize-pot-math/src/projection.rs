use cosmwasm_std::{Decimal, Decimal256};

use crate::error::MathResult;
use crate::fixed;
use crate::types::{PoolSnapshot, PrizeUnit};

/// Share of the yield earned until the draw that is added to the prize.
pub const PRIZE_ALLOCATION: Decimal = Decimal::percent(40);

pub const SECONDS_PER_DAY: u64 = 86_400;

/// APY is treated as nominally annual with daily compounding.
pub const DAYS_PER_YEAR: u64 = 365;

/// Equivalent daily compounding rate for an APY given in percent:
/// `(1 + apy/100)^(1/365) - 1`.
pub fn daily_rate(apy: Decimal) -> MathResult<Decimal256> {
    if apy.is_zero() {
        return Ok(Decimal256::zero());
    }
    let growth_factor = Decimal256::one()
        .checked_add(Decimal256::from(apy).checked_div(Decimal256::from_ratio(100u32, 1u32))?)?;
    let daily = fixed::pow(growth_factor, Decimal256::from_ratio(1u64, DAYS_PER_YEAR))?;
    Ok(daily.checked_sub(Decimal256::one())?)
}

/// Fractional growth over `seconds` at the daily rate derived from `apy`:
/// `(1 + daily_rate)^(seconds / 86400) - 1`.
pub fn compound_growth(apy: Decimal, seconds: u64) -> MathResult<Decimal256> {
    if apy.is_zero() || seconds == 0 {
        return Ok(Decimal256::zero());
    }
    let days_to_draw = Decimal256::from_ratio(seconds, SECONDS_PER_DAY);
    let base = Decimal256::one().checked_add(daily_rate(apy)?)?;
    let compounded = fixed::pow(base, days_to_draw)?;
    Ok(compounded.checked_sub(Decimal256::one())?)
}

/// Estimated award balance at the next draw: the current award plus the
/// allocated share of the yield the locked value earns until then.
///
/// Rate derivation runs on `Decimal256`; only the final sum is taken in
/// `Decimal`, the unit the pool figures are reported in.
pub fn project_prize_value(pool: &PoolSnapshot, unit: PrizeUnit) -> MathResult<Decimal> {
    let current = pool.current_award_balance(unit);
    let growth = compound_growth(pool.annual_percentage_yield, pool.seconds_until_next_draw)?;
    if growth.is_zero() {
        return Ok(current);
    }

    let future_value = Decimal256::from(pool.total_value_locked(unit))
        .checked_mul(growth)?
        .checked_mul(Decimal256::from(PRIZE_ALLOCATION))?;

    Ok(current.checked_add(Decimal::try_from(future_value)?)?)
}
