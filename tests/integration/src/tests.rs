//! Integration tests for the prize pot registry.
//!
//! These tests drive the registry contract through its `instantiate` /
//! `execute` / `query` entry points using `cosmwasm_std::testing` mocks,
//! the way a frontend would read it: pools registered from the chain
//! config, pot figures reported by the operator, derived values queried
//! back as the draw clock advances.
//!
//! Run:
//! ```bash
//! cargo test -p prize-pot-integration-tests
//! ```

use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier};
use cosmwasm_std::{from_json, Decimal, Env, MemoryStorage, OwnedDeps, Timestamp, Uint128};
use prize_pot_math::{
    InterestLineKind, InterestSummary, InterestTooltip, PrizeUnit, SponsorContribution,
};
use prize_pot_registry::contract::{execute, instantiate, query};
use prize_pot_registry::msg::{
    ExecuteMsg, InstantiateMsg, OddsResponse, PoolsResponse, PotCardResponse, PotStateReport,
    PrizeSplitResponse, ProjectedPrizeResponse, QueryMsg,
};
use prize_pot_registry::state::{PoolConfig, PoolStatus, VaultType};
use std::str::FromStr;

type Deps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

// ─── Constants ───

const DAY: u64 = 86_400;
const WEEK: u64 = 7 * DAY;

/// 10^18, one whole CAKE in raw units
const CAKE_UNIT: u128 = 1_000_000_000_000_000_000;

/// The BSC vault list as it ships in the chain config.
const BSC_POOLS_JSON: &str = r#"[
    {
        "id": "cake",
        "name": "Cake",
        "token": "CAKE",
        "token_address": "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82",
        "token_decimals": 18,
        "reward_token": "potCAKE",
        "reward_address": "0xD483c6d0eF626a9Cb69C3b4966a14de389aE05BD",
        "contract_address": "0x358Db8ebEf71B6Ef2aCD03892B0C861981fbEE04",
        "price_per_share": "1",
        "oracle_id": "Cake",
        "vault_type": "main",
        "status": "active",
        "sponsor_project_name": "Beefy.Finance",
        "sponsor_token": "BIFI",
        "sponsor_address": "0xCa3F508B8e4Dd382eE878A314789373D80A5190A"
    }
]"#;

// ─── Helpers ───

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sponsor(symbol: &str, tokens: &str, usd: &str) -> SponsorContribution {
    SponsorContribution {
        sponsor_token_symbol: symbol.to_string(),
        sponsor_balance_tokens: dec(tokens),
        sponsor_balance_usd: dec(usd),
    }
}

fn bsc_pools() -> Vec<PoolConfig> {
    serde_json::from_str(BSC_POOLS_JSON).unwrap()
}

fn community_pool(id: &str) -> PoolConfig {
    PoolConfig {
        id: id.to_string(),
        name: "Community Cake".to_string(),
        vault_type: VaultType::Community,
        ..bsc_pools().remove(0)
    }
}

fn setup_registry(deps: &mut Deps) {
    let admin = deps.api.addr_make("admin");
    let msg = InstantiateMsg {
        operator: deps.api.addr_make("operator").to_string(),
        chain: "bsc".to_string(),
        pools: bsc_pools(),
    };
    instantiate(deps.as_mut(), mock_env(), message_info(&admin, &[]), msg).unwrap();
}

fn register(deps: &mut Deps, pool: PoolConfig) {
    let admin = deps.api.addr_make("admin");
    let msg = ExecuteMsg::RegisterPool { pool };
    execute(deps.as_mut(), mock_env(), message_info(&admin, &[]), msg).unwrap();
}

fn cake_report(expires_at: Timestamp) -> PotStateReport {
    PotStateReport {
        apy: dec("12"),
        bonus_apy: None,
        bonus_apr: None,
        expires_at,
        frequency_seconds: WEEK,
        total_token_staked: dec("1000000"),
        total_staked_usd: dec("20000000"),
        award_balance: dec("500"),
        award_balance_usd: dec("10000"),
        sponsors: vec![sponsor("BIFI", "2", "2000")],
        total_tickets: Uint128::new(1_000_000 * CAKE_UNIT),
        number_of_winners: 5,
    }
}

fn report(deps: &mut Deps, env: Env, id: &str, state: PotStateReport) {
    let operator = deps.api.addr_make("operator");
    let msg = ExecuteMsg::ReportPotState {
        id: id.to_string(),
        state,
    };
    execute(deps.as_mut(), env, message_info(&operator, &[]), msg).unwrap();
}

fn at(seconds_after_start: u64) -> Env {
    let mut env = mock_env();
    env.block.time = env.block.time.plus_seconds(seconds_after_start);
    env
}

fn projected(deps: &Deps, env: Env, id: &str, unit: PrizeUnit) -> ProjectedPrizeResponse {
    let msg = QueryMsg::ProjectedPrize {
        id: id.to_string(),
        unit,
    };
    from_json(query(deps.as_ref(), env, msg).unwrap()).unwrap()
}

fn pot_card(
    deps: &Deps,
    env: Env,
    id: &str,
    deposit: Option<u128>,
    tickets: Option<u128>,
) -> PotCardResponse {
    let msg = QueryMsg::PotCard {
        id: id.to_string(),
        deposit: deposit.map(Uint128::new),
        tickets: tickets.map(Uint128::new),
    };
    from_json(query(deps.as_ref(), env, msg).unwrap()).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chain_config_registers_pools() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);

    let res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::Pool {
            id: "cake".to_string(),
        },
    )
    .unwrap();
    let pool: PoolConfig = from_json(res).unwrap();
    assert_eq!(pool.token, "CAKE");
    assert_eq!(pool.token_decimals, 18);
    assert_eq!(pool.vault_type, VaultType::Main);
    assert_eq!(pool.status, PoolStatus::Active);
    assert_eq!(pool.price_per_share, Decimal::one());
    assert_eq!(pool.sponsor_project_name, "Beefy.Finance");

    // Reported figures are absent until the operator pushes them
    let res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::PotState {
            id: "cake".to_string(),
        },
    )
    .unwrap();
    let state: Option<prize_pot_registry::state::PotState> = from_json(res).unwrap();
    assert!(state.is_none());
}

#[test]
fn test_weekly_draw_cycle() {
    // Start of the week: a full week of interest still to accrue.
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);
    report(&mut deps, at(0), "cake", cake_report(at(WEEK).block.time));

    let start = projected(&deps, at(0), "cake", PrizeUnit::Tokens);
    assert_eq!(start.seconds_until_next_draw, WEEK);
    assert!(start.projected > dec("1369.3") && start.projected < dec("1371.3"));

    let start_usd = projected(&deps, at(0), "cake", PrizeUnit::Usd);
    assert!(start_usd.projected > dec("27386") && start_usd.projected < dec("27426"));

    // Mid-week, same reported figures: less time left, smaller projection.
    let mid = projected(&deps, at(3 * DAY), "cake", PrizeUnit::Tokens);
    assert_eq!(mid.seconds_until_next_draw, 4 * DAY);
    assert!(mid.projected < start.projected);
    assert!(mid.projected > dec("500"));

    // Draw time reached: projection collapses to the award balance.
    let due = projected(&deps, at(WEEK), "cake", PrizeUnit::Tokens);
    assert_eq!(due.seconds_until_next_draw, 0);
    assert_eq!(due.projected, dec("500"));

    // Operator reports the post-draw pot for the following week.
    let mut next = cake_report(at(2 * WEEK).block.time);
    next.award_balance = dec("10");
    next.award_balance_usd = dec("200");
    next.sponsors = vec![];
    report(&mut deps, at(WEEK + 60), "cake", next);

    let fresh = projected(&deps, at(WEEK + 60), "cake", PrizeUnit::Tokens);
    assert_eq!(fresh.seconds_until_next_draw, WEEK - 60);
    assert!(fresh.projected > dec("10") && fresh.projected < dec("881"));

    let res = query(
        deps.as_ref(),
        at(WEEK + 60),
        QueryMsg::PrizeSplit {
            id: "cake".to_string(),
        },
    )
    .unwrap();
    let split: PrizeSplitResponse = from_json(res).unwrap();
    assert_eq!(split.shares.len(), 1);
    assert_eq!(split.shares[0].tokens_per_winner, dec("2"));
    assert_eq!(split.shares[0].usd_per_winner, dec("40"));
}

#[test]
fn test_community_pool_sponsor_split() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);
    register(&mut deps, community_pool("cake-community"));

    let mut state = cake_report(at(WEEK).block.time);
    state.award_balance = dec("100");
    state.award_balance_usd = dec("1000");
    state.sponsors = vec![
        sponsor("BIFI", "1", "500"),
        sponsor("BIFI", "1", "500"),
        sponsor("CAKE", "10", "100"),
        sponsor("DUST", "1", "0.005"),
    ];
    report(&mut deps, at(0), "cake-community", state);

    let res = query(
        deps.as_ref(),
        at(0),
        QueryMsg::PrizeSplit {
            id: "cake-community".to_string(),
        },
    )
    .unwrap();
    let split: PrizeSplitResponse = from_json(res).unwrap();
    assert_eq!(split.number_of_winners, 5);

    let tokens: Vec<&str> = split.shares.iter().map(|s| s.token.as_str()).collect();
    assert_eq!(tokens, vec!["CAKE", "BIFI"]);
    assert_eq!(split.shares[0].tokens_per_winner, dec("22"));
    assert_eq!(split.shares[0].usd_per_winner, dec("220"));
    assert_eq!(split.shares[1].tokens_per_winner, dec("0.4"));
    assert_eq!(split.shares[1].usd_per_winner, dec("200"));

    // The card still names every token and counts every dollar.
    let card = pot_card(&deps, at(0), "cake-community", None, None);
    assert_eq!(card.name, "Community Cake");
    assert_eq!(card.total_prize_usd, dec("2100.005"));
    assert_eq!(
        card.prize_tokens,
        vec!["CAKE".to_string(), "BIFI".to_string(), "DUST".to_string()]
    );
}

#[test]
fn test_depositor_pot_card() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);

    let mut state = cake_report(at(DAY).block.time);
    state.total_staked_usd = dec("20000000.5");
    state.bonus_apy = Some(dec("3"));
    report(&mut deps, at(0), "cake", state);

    // 1000 CAKE out of 1M: 0.1% of the tickets across 5 draws
    let deposit = 1_000 * CAKE_UNIT + 987_654_321_000_000_000;
    let card = pot_card(&deps, at(0), "cake", Some(deposit), Some(1_000 * CAKE_UNIT));

    assert_eq!(card.token, "CAKE");
    assert_eq!(card.sponsor_token, "BIFI");
    assert_eq!(card.status, PoolStatus::Active);
    assert_eq!(card.seconds_until_next_draw, DAY);
    assert_eq!(card.frequency_seconds, WEEK);
    assert_eq!(card.total_value_locked_usd, dec("20000001"));
    assert_eq!(card.deposit, dec("1000.98"));
    assert_eq!(card.odds.odds, Some(Uint128::new(200)));
    assert_eq!(card.odds.model_version, 1);
    assert_eq!(card.total_prize_usd, dec("12000"));
    assert_eq!(card.prize_split.len(), 2);

    // One day left: about a seventh of the weekly accrual
    assert!(card.projected_prize > dec("500") && card.projected_prize < dec("630"));
    assert!(card.projected_prize_usd > dec("10000"));

    assert_eq!(card.interest.total_apy, Some(dec("15")));
    assert_eq!(card.interest.base_apy, Some(dec("12")));
    assert_eq!(card.interest.tooltip, Some(InterestTooltip::BonusApy));
    assert_eq!(
        card.interest.display_lines(),
        vec![
            (InterestLineKind::TotalApy, "15.00".to_string()),
            (InterestLineKind::BaseApy, "12.00".to_string()),
        ]
    );

    // A wallet that holds no tickets sees no odds and a zero deposit
    let empty = pot_card(&deps, at(0), "cake", Some(0), Some(0));
    assert_eq!(empty.deposit, Decimal::zero());
    assert_eq!(empty.odds.odds, None);
}

#[test]
fn test_odds_across_holdings() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);
    report(&mut deps, at(0), "cake", cake_report(at(WEEK).block.time));

    let odds_for = |tickets: u128| -> Option<Uint128> {
        let msg = QueryMsg::Odds {
            id: "cake".to_string(),
            tickets: Some(Uint128::new(tickets)),
        };
        let res: OddsResponse = from_json(query(deps.as_ref(), at(0), msg).unwrap()).unwrap();
        res.odds
    };

    // Whale holding the entire supply always wins
    assert_eq!(odds_for(1_000_000 * CAKE_UNIT), Some(Uint128::one()));
    // 1% of supply, five winners
    assert_eq!(odds_for(10_000 * CAKE_UNIT), Some(Uint128::new(20)));
    // A single raw unit falls back to the first-order estimate
    assert_eq!(
        odds_for(1),
        Some(Uint128::new(200_000_000_000_000_000_000_000))
    );

    let mut more = Vec::new();
    for tickets in [1u128, 10, 100, 1_000, 10_000] {
        more.push(odds_for(tickets * CAKE_UNIT).unwrap());
    }
    assert!(more.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_end_of_life_pools() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);
    for i in 0..5 {
        register(&mut deps, community_pool(&format!("community-{}", i)));
    }

    let admin = deps.api.addr_make("admin");
    for id in ["community-1", "community-3"] {
        let msg = ExecuteMsg::UpdatePoolStatus {
            id: id.to_string(),
            status: PoolStatus::Eol,
        };
        let res = execute(deps.as_mut(), mock_env(), message_info(&admin, &[]), msg).unwrap();
        assert_eq!(res.events[0].ty, "prize_pot_pool_status");
    }

    let pools_page = |status: Option<PoolStatus>, start_after: Option<&str>, limit: Option<u32>| {
        let msg = QueryMsg::Pools {
            status,
            start_after: start_after.map(str::to_string),
            limit,
        };
        let res: PoolsResponse = from_json(query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        res.pools.into_iter().map(|p| p.id).collect::<Vec<_>>()
    };

    assert_eq!(pools_page(None, None, None).len(), 6);
    assert_eq!(
        pools_page(Some(PoolStatus::Eol), None, None),
        vec!["community-1".to_string(), "community-3".to_string()]
    );
    assert_eq!(
        pools_page(Some(PoolStatus::Active), None, Some(2)),
        vec!["cake".to_string(), "community-0".to_string()]
    );
    assert_eq!(
        pools_page(Some(PoolStatus::Active), Some("community-0"), Some(10)),
        vec!["community-2".to_string(), "community-4".to_string()]
    );
}

#[test]
fn test_operator_rotation() {
    let mut deps = mock_dependencies();
    setup_registry(&mut deps);

    let admin = deps.api.addr_make("admin");
    let new_operator = deps.api.addr_make("new_operator");
    let msg = ExecuteMsg::UpdateConfig {
        admin: None,
        operator: Some(new_operator.to_string()),
    };
    execute(deps.as_mut(), mock_env(), message_info(&admin, &[]), msg).unwrap();

    // The old operator can no longer report
    let old_operator = deps.api.addr_make("operator");
    let msg = ExecuteMsg::ReportPotState {
        id: "cake".to_string(),
        state: cake_report(at(WEEK).block.time),
    };
    let err = execute(deps.as_mut(), at(0), message_info(&old_operator, &[]), msg.clone())
        .unwrap_err();
    assert!(
        format!("{:?}", err).contains("Unauthorized"),
        "Expected unauthorized error, got: {:?}",
        err
    );

    let res = execute(deps.as_mut(), at(0), message_info(&new_operator, &[]), msg).unwrap();
    assert_eq!(res.attributes[0].value, "report_pot_state");
    assert_eq!(res.events[0].ty, "prize_pot_report_state");

    let res = query(
        deps.as_ref(),
        at(0),
        QueryMsg::Interest {
            id: "cake".to_string(),
        },
    )
    .unwrap();
    let interest: InterestSummary = from_json(res).unwrap();
    assert_eq!(interest.total_apy, Some(dec("12")));
    assert_eq!(interest.tooltip, None);
}
