//! Deterministic fractional powers on `Decimal256`.
//!
//! `x^y` is evaluated as `exp(y * ln(x))` with 18-place fixed-point arithmetic
//! only, so the same inputs give bit-identical outputs on every target,
//! wasm included. The domain is restricted to what rate derivation needs:
//! bases >= 1 and non-negative exponents, which keeps every intermediate
//! unsigned.
//!
//! Range reduction uses a fixed number of steps rather than an input-dependent
//! one. Every step rounds down and is non-decreasing in its input, so the
//! composed functions stay monotone.

use cosmwasm_std::Decimal256;

use crate::error::{MathError, MathResult};

/// `ln(x) = 2^k * ln(x^(1/2^k))`
const LN_SQRT_STEPS: u32 = 8;

/// `exp(x) = exp(x / 2^k)^(2^k)`
const EXP_HALVING_STEPS: u32 = 8;

/// Series stop once a term rounds to zero; this bounds the loop regardless.
const MAX_SERIES_TERMS: u32 = 96;

fn int(n: u32) -> Decimal256 {
    Decimal256::from_ratio(n, 1u32)
}

/// Natural logarithm for `x >= 1`.
pub fn ln(x: Decimal256) -> MathResult<Decimal256> {
    if x < Decimal256::one() {
        return Err(MathError::LogarithmOutOfDomain);
    }
    if x == Decimal256::one() {
        return Ok(Decimal256::zero());
    }

    let mut y = x;
    for _ in 0..LN_SQRT_STEPS {
        y = y.sqrt();
    }

    // ln(y) = 2 * atanh(z) = 2 * (z + z^3/3 + z^5/5 + ...), z = (y - 1) / (y + 1)
    let z = y
        .checked_sub(Decimal256::one())?
        .checked_div(y.checked_add(Decimal256::one())?)?;
    let z_squared = z.checked_mul(z)?;

    let mut power = z;
    let mut sum = z;
    let mut denominator = 1u32;
    for _ in 0..MAX_SERIES_TERMS {
        power = power.checked_mul(z_squared)?;
        if power.is_zero() {
            break;
        }
        denominator += 2;
        sum = sum.checked_add(power.checked_div(int(denominator))?)?;
    }

    let scale = int(2u32.pow(LN_SQRT_STEPS + 1));
    Ok(sum.checked_mul(scale)?)
}

/// `e^x` for `x >= 0`.
pub fn exp(x: Decimal256) -> MathResult<Decimal256> {
    if x.is_zero() {
        return Ok(Decimal256::one());
    }

    let reduced = x.checked_div(int(2u32.pow(EXP_HALVING_STEPS)))?;

    let mut term = Decimal256::one();
    let mut sum = Decimal256::one();
    for n in 1..=MAX_SERIES_TERMS {
        term = term.checked_mul(reduced)?.checked_div(int(n))?;
        if term.is_zero() {
            break;
        }
        sum = sum.checked_add(term)?;
    }

    for _ in 0..EXP_HALVING_STEPS {
        sum = sum.checked_mul(sum)?;
    }
    Ok(sum)
}

/// `base^exponent` for `base >= 1` and any non-negative (fractional) exponent.
pub fn pow(base: Decimal256, exponent: Decimal256) -> MathResult<Decimal256> {
    if exponent.is_zero() || base == Decimal256::one() {
        return Ok(Decimal256::one());
    }
    exp(ln(base)?.checked_mul(exponent)?)
}
