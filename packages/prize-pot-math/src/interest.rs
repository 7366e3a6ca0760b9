use cosmwasm_std::Decimal;

use crate::error::MathResult;
use crate::format::format_fixed;
use crate::types::{InterestLineKind, InterestRates, InterestSummary, InterestTooltip};

const RATE_DISPLAY_PLACES: u32 = 2;

/// A rate only counts when it is set and strictly positive.
fn present(rate: Option<Decimal>) -> Option<Decimal> {
    rate.filter(|rate| !rate.is_zero())
}

/// Combine reported rates for display. Base and bonus APY share a compounding
/// basis and are summed; a bonus APR is simple interest and stays on its own
/// line.
pub fn summarize_interest(rates: &InterestRates) -> MathResult<InterestSummary> {
    let base_apy = present(rates.base_apy);
    let bonus_apy = present(rates.bonus_apy);
    let bonus_apr = present(rates.bonus_apr);

    let total_apy = match (base_apy, bonus_apy) {
        (Some(base), Some(bonus)) => Some(base.checked_add(bonus)?),
        (base, bonus) => base.or(bonus),
    };

    let stacked = base_apy.is_some() && bonus_apy.is_some();
    let tooltip = if stacked {
        Some(InterestTooltip::BonusApy)
    } else if bonus_apr.is_some() {
        Some(InterestTooltip::CompoundApr)
    } else {
        None
    };

    Ok(InterestSummary {
        total_apy,
        base_apy: if stacked { base_apy } else { None },
        bonus_apr,
        tooltip,
    })
}

impl InterestSummary {
    /// Visible lines in display order, each formatted to two places.
    pub fn display_lines(&self) -> Vec<(InterestLineKind, String)> {
        [
            (InterestLineKind::TotalApy, self.total_apy),
            (InterestLineKind::BaseApy, self.base_apy),
            (InterestLineKind::BonusApr, self.bonus_apr),
        ]
        .into_iter()
        .filter_map(|(kind, rate)| rate.map(|rate| (kind, format_fixed(rate, RATE_DISPLAY_PLACES))))
        .collect()
    }
}
