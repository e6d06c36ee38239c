use soroban_sdk::{log, token::TokenClient, Address, Env, Vec};
use split_router_types::{Route, RouterError};

use crate::{
    adapters::adapter::swap_adapter,
    events,
    routing::{walk_route, AmountBuffer},
    types::hop::Hop,
};

// Balance of the output asset kept by the engine after every swap
pub const RESIDUAL_BALANCE: i128 = 1;

// Execute a split plan already funded in engine custody and forward the output
//
// # Arguments
//
// * `e` - The environment
// * `plan` - Routes to execute
// * `token_in` - Asset every route starts from
// * `token_out` - Asset every route ends with
// * `min_out` - Minimum accepted output
// * `to` - Receiver of the forwarded output
//
// # Returns
//
// * Amount forwarded to `to`
pub fn execute_plan(
    e: &Env,
    plan: &Vec<Route>,
    token_in: &Address,
    token_out: &Address,
    min_out: i128,
    to: &Address,
) -> Result<i128, RouterError> {
    if plan.is_empty() || token_in == token_out {
        return Err(RouterError::InvalidRoute);
    }
    if min_out < 0 {
        return Err(RouterError::InvalidAmount);
    }

    let mut total: i128 = 0;
    for route in plan.iter() {
        let buffer = execute_route(e, &route, token_in, token_out)?;
        total = total
            .checked_add(buffer.terminal())
            .ok_or(RouterError::ArithmeticOverflow)?;
    }
    if total < min_out {
        return Err(RouterError::InsufficientOutput);
    }

    let forwarded = forward_output(e, token_out, to, min_out)?;
    log!(e, "plan executed", total, forwarded);
    events::executed(e, token_in, token_out, forwarded);
    Ok(forwarded)
}

// Execute one route, every hop spends the previous hop's output asset
fn execute_route(
    e: &Env,
    route: &Route,
    token_in: &Address,
    token_out: &Address,
) -> Result<AmountBuffer, RouterError> {
    let last_step = route.steps.last().ok_or(RouterError::InvalidRoute)?;
    if &last_step.token_out != token_out {
        return Err(RouterError::InvalidRoute);
    }

    let engine = e.current_contract_address();
    let mut hop_token_in = token_in.clone();
    walk_route(e, route, |step, pool, amount| {
        let hop = Hop {
            step: step.clone(),
            pool: pool.clone(),
            token_in: hop_token_in.clone(),
            to: engine.clone(),
            amount,
        };
        let delivered = settle_hop(e, &hop)?;
        hop_token_in = step.token_out.clone();
        Ok(delivered)
    })
}

// Swap through the pool and verify the delivery against the engine balance
fn settle_hop(e: &Env, hop: &Hop) -> Result<i128, RouterError> {
    let out_token = TokenClient::new(e, &hop.step.token_out);
    let before = out_token.balance(&hop.to);

    let expected = swap_adapter(e, hop)?;

    let delivered = out_token
        .balance(&hop.to)
        .checked_sub(before)
        .ok_or(RouterError::ArithmeticOverflow)?;
    //pools that succeed without delivering the quoted amount are rejected
    if delivered <= 0 || delivered < expected {
        return Err(RouterError::PoolMisconduct);
    }
    log!(e, "hop settled", hop.pool, expected, delivered);
    Ok(delivered)
}

// Forward the whole output balance except the residual unit
fn forward_output(
    e: &Env,
    token_out: &Address,
    to: &Address,
    min_out: i128,
) -> Result<i128, RouterError> {
    let client = TokenClient::new(e, token_out);
    let engine = e.current_contract_address();
    let forwarded = client
        .balance(&engine)
        .checked_sub(RESIDUAL_BALANCE)
        .ok_or(RouterError::ArithmeticOverflow)?;
    if forwarded <= 0 || forwarded < min_out {
        return Err(RouterError::InsufficientOutput);
    }
    client.transfer(&engine, to, &forwarded);
    Ok(forwarded)
}
