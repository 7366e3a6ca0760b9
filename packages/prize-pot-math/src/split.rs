use cosmwasm_std::Decimal;

use crate::error::{MathError, MathResult};
use crate::format::round_down;
use crate::types::{PrizeShare, PrizeSplitInput, PrizeTotal, SponsorContribution};

/// Tokens whose aggregated prize is worth less than this are not shown.
pub const DISPLAY_THRESHOLD_USD: Decimal = Decimal::percent(1);

/// Per-winner shares are truncated to cents / hundredths of a token.
pub const SHARE_DISPLAY_PLACES: u32 = 2;

fn accumulate(
    totals: &mut Vec<PrizeTotal>,
    token: &str,
    tokens: Decimal,
    usd: Decimal,
) -> MathResult<()> {
    match totals.iter_mut().find(|total| total.token == token) {
        Some(total) => {
            total.tokens = total.tokens.checked_add(tokens)?;
            total.usd = total.usd.checked_add(usd)?;
        }
        None => totals.push(PrizeTotal {
            token: token.to_string(),
            tokens,
            usd,
        }),
    }
    Ok(())
}

/// Sum the base award and every sponsor contribution by token symbol.
/// The base token comes first, sponsors follow in first-seen order.
pub fn aggregate_prizes(input: &PrizeSplitInput) -> MathResult<Vec<PrizeTotal>> {
    let mut totals = Vec::with_capacity(input.sponsors.len() + 1);
    accumulate(
        &mut totals,
        &input.base_token_symbol,
        input.base_award_balance_tokens,
        input.base_award_balance_usd,
    )?;
    for sponsor in &input.sponsors {
        accumulate(
            &mut totals,
            &sponsor.sponsor_token_symbol,
            sponsor.sponsor_balance_tokens,
            sponsor.sponsor_balance_usd,
        )?;
    }
    Ok(totals)
}

/// What each winner receives per token, dropping tokens below the display
/// threshold.
pub fn compute_prize_split(input: &PrizeSplitInput) -> MathResult<Vec<PrizeShare>> {
    if input.number_of_winners == 0 {
        return Err(MathError::ZeroWinners);
    }
    let winners = Decimal::from_ratio(input.number_of_winners, 1u32);

    aggregate_prizes(input)?
        .into_iter()
        .filter(|total| total.usd >= DISPLAY_THRESHOLD_USD)
        .map(|total| -> MathResult<PrizeShare> {
            Ok(PrizeShare {
                tokens_per_winner: round_down(
                    total.tokens.checked_div(winners)?,
                    SHARE_DISPLAY_PLACES,
                ),
                usd_per_winner: round_down(total.usd.checked_div(winners)?, SHARE_DISPLAY_PLACES),
                token: total.token,
            })
        })
        .collect()
}

/// Headline prize in USD: the pool's award plus every sponsor's contribution.
pub fn total_prize_usd(
    award_balance_usd: Decimal,
    sponsors: &[SponsorContribution],
) -> MathResult<Decimal> {
    sponsors.iter().try_fold(award_balance_usd, |sum, sponsor| -> MathResult<Decimal> {
        Ok(sum.checked_add(sponsor.sponsor_balance_usd)?)
    })
}

/// Tokens a winner is paid in: the deposit token, then each distinct sponsor
/// token.
pub fn prize_tokens(base_token: &str, sponsors: &[SponsorContribution]) -> Vec<String> {
    let mut tokens = vec![base_token.to_string()];
    for sponsor in sponsors {
        if !tokens.contains(&sponsor.sponsor_token_symbol) {
            tokens.push(sponsor.sponsor_token_symbol.clone());
        }
    }
    tokens
}
