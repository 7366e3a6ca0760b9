use cosmwasm_std::{Decimal, Uint128};

use crate::error::MathResult;

const DECIMAL_PLACES: u32 = Decimal::DECIMAL_PLACES;

/// 10^(18 - places): the atomics step size at `places` decimal places.
fn step(places: u32) -> u128 {
    10u128.pow(DECIMAL_PLACES - places.min(DECIMAL_PLACES))
}

/// Truncate to `places` decimal places.
pub fn round_down(value: Decimal, places: u32) -> Decimal {
    let step = step(places);
    Decimal::raw(value.atomics().u128() / step * step)
}

/// Round to `places` decimal places, halves away from zero.
pub fn round_half_up(value: Decimal, places: u32) -> MathResult<Decimal> {
    let step = step(places);
    let atomics = value.atomics().u128();
    let remainder = atomics % step;
    let truncated = atomics - remainder;
    if remainder * 2 >= step {
        let rounded = Uint128::new(truncated).checked_add(Uint128::new(step))?;
        Ok(Decimal::raw(rounded.u128()))
    } else {
        Ok(Decimal::raw(truncated))
    }
}

/// Fixed-point string with exactly `places` fraction digits, like JavaScript's
/// `toFixed`. Rounds half up; falls back to truncation at `Decimal::MAX`.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let places = places.min(DECIMAL_PLACES);
    let rounded = round_half_up(value, places).unwrap_or_else(|_| round_down(value, places));
    let atomics = rounded.atomics().u128();
    let whole = atomics / 10u128.pow(DECIMAL_PLACES);
    if places == 0 {
        return whole.to_string();
    }
    let fraction = atomics % 10u128.pow(DECIMAL_PLACES) / step(places);
    format!("{}.{:0width$}", whole, fraction, width = places as usize)
}

/// Raw on-chain units to token units: `raw / 10^decimals`.
pub fn from_raw_units(raw: Uint128, decimals: u32) -> MathResult<Decimal> {
    Ok(Decimal::from_atomics(raw, decimals)?)
}
