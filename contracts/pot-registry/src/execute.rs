use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::msg::PotStateReport;
use crate::state::{Config, PoolConfig, PoolStatus, PotState, CONFIG, POOLS, POT_STATES};

/// Raw amounts are Uint128; anything past this cannot hold a whole token.
pub const MAX_TOKEN_DECIMALS: u32 = 36;

const MAX_POOL_ID_LEN: usize = 64;

fn ensure_admin(config: &Config, info: &MessageInfo, action: &str) -> Result<(), ContractError> {
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: format!("only admin can {}", action),
        });
    }
    Ok(())
}

/// Pool ids are lowercase slugs ("cake", "cake-bnb-lp") used as storage keys.
pub fn validate_pool_id(id: &str) -> Result<(), ContractError> {
    if id.is_empty() || id.len() > MAX_POOL_ID_LEN {
        return Err(ContractError::InvalidPoolId {
            reason: format!("length must be 1..={}", MAX_POOL_ID_LEN),
        });
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ContractError::InvalidPoolId {
            reason: format!("{} contains characters outside [a-z0-9-_]", id),
        });
    }
    Ok(())
}

/// Vault contracts live on EVM chains: `0x` followed by 20 hex-encoded bytes.
pub fn validate_evm_address(field: &str, address: &str) -> Result<(), ContractError> {
    let valid = address
        .strip_prefix("0x")
        .and_then(|body| hex::decode(body).ok())
        .map(|bytes| bytes.len() == 20)
        .unwrap_or(false);
    if !valid {
        return Err(ContractError::InvalidAddress {
            field: field.to_string(),
            address: address.to_string(),
        });
    }
    Ok(())
}

fn validate_pool(pool: &PoolConfig) -> Result<(), ContractError> {
    validate_pool_id(&pool.id)?;
    validate_evm_address("token", &pool.token_address)?;
    validate_evm_address("reward", &pool.reward_address)?;
    validate_evm_address("contract", &pool.contract_address)?;
    validate_evm_address("sponsor", &pool.sponsor_address)?;
    if pool.token_decimals > MAX_TOKEN_DECIMALS {
        return Err(ContractError::InvalidTokenDecimals {
            decimals: pool.token_decimals,
            max: MAX_TOKEN_DECIMALS,
        });
    }
    Ok(())
}

/// Validate and store a pool that is not registered yet.
pub fn save_new_pool(storage: &mut dyn Storage, pool: &PoolConfig) -> Result<(), ContractError> {
    validate_pool(pool)?;
    if POOLS.has(storage, &pool.id) {
        return Err(ContractError::PoolAlreadyExists {
            id: pool.id.clone(),
        });
    }
    POOLS.save(storage, &pool.id, pool)?;
    Ok(())
}

pub fn register_pool(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    pool: PoolConfig,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "register pools")?;

    save_new_pool(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "register_pool")
        .add_attribute("pool_id", pool.id.clone())
        .add_event(
            Event::new("prize_pot_register_pool")
                .add_attribute("chain", config.chain)
                .add_attribute("pool_id", pool.id)
                .add_attribute("token", pool.token)
                .add_attribute("sponsor_token", pool.sponsor_token)
                .add_attribute("contract_address", pool.contract_address),
        ))
}

pub fn update_pool_status(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    id: String,
    status: PoolStatus,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "update pool status")?;

    let mut pool = POOLS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| ContractError::PoolNotFound { id: id.clone() })?;
    let previous = pool.status;
    pool.status = status;
    POOLS.save(deps.storage, &id, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "update_pool_status")
        .add_attribute("pool_id", id.clone())
        .add_event(
            Event::new("prize_pot_pool_status")
                .add_attribute("pool_id", id)
                .add_attribute("from", format!("{:?}", previous))
                .add_attribute("to", format!("{:?}", status)),
        ))
}

pub fn remove_pool(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "remove pools")?;

    if !POOLS.has(deps.storage, &id) {
        return Err(ContractError::PoolNotFound { id });
    }
    POOLS.remove(deps.storage, &id);
    POT_STATES.remove(deps.storage, &id);

    Ok(Response::new()
        .add_attribute("action", "remove_pool")
        .add_attribute("pool_id", id))
}

/// Replace the live figures for a pool with a fresh off-chain reading.
pub fn report_pot_state(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: String,
    report: PotStateReport,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized {
            reason: "only operator can report pot state".to_string(),
        });
    }
    if !POOLS.has(deps.storage, &id) {
        return Err(ContractError::PoolNotFound { id });
    }
    if report.number_of_winners == 0 {
        return Err(ContractError::InvalidWinners);
    }
    if report.frequency_seconds == 0 {
        return Err(ContractError::InvalidFrequency);
    }

    let state = PotState {
        apy: report.apy,
        bonus_apy: report.bonus_apy,
        bonus_apr: report.bonus_apr,
        expires_at: report.expires_at,
        frequency_seconds: report.frequency_seconds,
        total_token_staked: report.total_token_staked,
        total_staked_usd: report.total_staked_usd,
        award_balance: report.award_balance,
        award_balance_usd: report.award_balance_usd,
        sponsors: report.sponsors,
        total_tickets: report.total_tickets,
        number_of_winners: report.number_of_winners,
        updated_at: env.block.time,
    };
    POT_STATES.save(deps.storage, &id, &state)?;

    Ok(Response::new()
        .add_attribute("action", "report_pot_state")
        .add_attribute("pool_id", id.clone())
        .add_event(
            Event::new("prize_pot_report_state")
                .add_attribute("pool_id", id)
                .add_attribute("apy", state.apy.to_string())
                .add_attribute("award_balance_usd", state.award_balance_usd.to_string())
                .add_attribute("total_staked_usd", state.total_staked_usd.to_string())
                .add_attribute("sponsors", state.sponsors.len().to_string())
                .add_attribute("number_of_winners", state.number_of_winners.to_string())
                .add_attribute("expires_at", state.expires_at.seconds().to_string()),
        ))
}

pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: Option<String>,
    operator: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "update config")?;

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(operator) = operator {
        config.operator = deps.api.addr_validate(&operator)?;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("operator", config.operator.to_string()))
}
