pub mod error;
pub mod fixed;
pub mod format;
pub mod interest;
pub mod odds;
pub mod projection;
pub mod split;
pub mod types;

pub use error::{MathError, MathResult};
pub use format::{format_fixed, from_raw_units, round_down, round_half_up};
pub use interest::summarize_interest;
pub use odds::{compute_odds, ODDS_MODEL_VERSION};
pub use projection::{compound_growth, daily_rate, project_prize_value, PRIZE_ALLOCATION};
pub use split::{aggregate_prizes, compute_prize_split, prize_tokens, total_prize_usd};
pub use types::{
    InterestLineKind, InterestRates, InterestSummary, InterestTooltip, OddsInput, PoolSnapshot,
    PrizeShare, PrizeSplitInput, PrizeTotal, PrizeUnit, SponsorContribution,
};
