use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG};

const CONTRACT_NAME: &str = "crates.io:prize-pot-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: info.sender.clone(),
        operator: deps.api.addr_validate(&msg.operator)?,
        chain: msg.chain,
    };
    CONFIG.save(deps.storage, &config)?;

    for pool in &msg.pools {
        execute::save_new_pool(deps.storage, pool)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "pot-registry")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("chain", config.chain)
        .add_attribute("pools", msg.pools.len().to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterPool { pool } => execute::register_pool(deps, env, info, pool),
        ExecuteMsg::UpdatePoolStatus { id, status } => {
            execute::update_pool_status(deps, env, info, id, status)
        }
        ExecuteMsg::RemovePool { id } => execute::remove_pool(deps, env, info, id),
        ExecuteMsg::ReportPotState { id, state } => {
            execute::report_pot_state(deps, env, info, id, state)
        }
        ExecuteMsg::UpdateConfig { admin, operator } => {
            execute::update_config(deps, env, info, admin, operator)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Pool { id } => query::query_pool(deps, id),
        QueryMsg::Pools {
            status,
            start_after,
            limit,
        } => query::query_pools(deps, status, start_after, limit),
        QueryMsg::PotState { id } => query::query_pot_state(deps, id),
        QueryMsg::ProjectedPrize { id, unit } => {
            query::query_projected_prize(deps, env, id, unit)
        }
        QueryMsg::PrizeSplit { id } => query::query_prize_split(deps, id),
        QueryMsg::Odds { id, tickets } => query::query_odds(deps, id, tickets),
        QueryMsg::Interest { id } => query::query_interest(deps, id),
        QueryMsg::PotCard {
            id,
            deposit,
            tickets,
        } => query::query_pot_card(deps, env, id, deposit, tickets),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
