use soroban_sdk::{log, token::TokenClient, Address, Env, Vec};
use split_router_types::{total_amount_in, EngineClient, FeeSplit, Route, RouterError};

use crate::{
    events,
    extensions::{auth_helper::add_burn_auth, env_extensions::EnvExtensions},
    fee::split_surplus,
    wrapper::NativeWrapperClient,
};

// Asset crossing the gateway boundary
pub enum Leg {
    // Native asset, wrapped on the way in and unwrapped on the way out
    Native,
    Token(Address),
}

// Reject stale or inconsistent requests before any funds move
//
// # Errors
//
// DeadlineExpired if the ledger time is past `deadline`
// PlanAmountMismatch if the plan input differs from `amount_in`
pub fn check_request(
    e: &Env,
    amount_in: i128,
    min_out: i128,
    deadline: u64,
    plan: &Vec<Route>,
) -> Result<(), RouterError> {
    if e.ledger().timestamp() > deadline {
        return Err(RouterError::DeadlineExpired);
    }
    if amount_in <= 0 || min_out < 0 {
        return Err(RouterError::InvalidAmount);
    }
    if plan.is_empty() {
        return Err(RouterError::InvalidRoute);
    }
    if total_amount_in(plan)? != amount_in {
        return Err(RouterError::PlanAmountMismatch);
    }
    Ok(())
}

// Move the caller's input into engine custody, returns the asset the engine trades
pub fn fund_engine(
    e: &Env,
    caller: &Address,
    leg: &Leg,
    engine: &Address,
    amount_in: i128,
) -> Result<Address, RouterError> {
    match leg {
        Leg::Native => {
            NativeWrapperClient::new(e, &e.get_wrapper()?).deposit(caller, engine, &amount_in);
            e.get_wrapped()
        }
        Leg::Token(token) => {
            TokenClient::new(e, token).transfer(caller, engine, &amount_in);
            Ok(token.clone())
        }
    }
}

// Execute the plan on the pinned engine
//
// # Returns
//
// * Output forwarded by the engine to the gateway
pub fn execute_plan(
    e: &Env,
    engine: &Address,
    plan: &Vec<Route>,
    token_in: &Address,
    token_out: &Address,
    min_out: i128,
) -> Result<i128, RouterError> {
    let result = EngineClient::new(e, engine).try_execute(plan, token_in, token_out, &min_out);
    match result {
        Ok(Ok(actual_out)) => Ok(actual_out),
        Err(Ok(err)) => Err(err),
        //host failures and undecodable results
        _ => Err(RouterError::EngineFailure),
    }
}

// Check the floor against the realized output and pay out the fee split
//
// # Arguments
//
// * `e` - The environment
// * `leg` - Output leg, native output is unwrapped for both shares
// * `token_out` - Asset received from the engine
// * `recipient` - Receiver of the caller share
// * `actual_out` - Output received from the engine
// * `min_out` - Caller's floor
pub fn settle(
    e: &Env,
    leg: &Leg,
    token_out: &Address,
    recipient: &Address,
    actual_out: i128,
    min_out: i128,
) -> Result<FeeSplit, RouterError> {
    if actual_out < min_out {
        return Err(RouterError::InsufficientOutput);
    }
    let split = split_surplus(actual_out, min_out)?;

    if split.operator_amount > 0 {
        pay_out(e, leg, token_out, &e.get_operator()?, split.operator_amount)?;
    }
    pay_out(e, leg, token_out, recipient, split.caller_amount)?;
    log!(e, "swap settled", actual_out, split.operator_amount, split.caller_amount);
    Ok(split)
}

// Transfer gateway-held output, native output is unwrapped on the way out
fn pay_out(
    e: &Env,
    leg: &Leg,
    token_out: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), RouterError> {
    let gateway = e.current_contract_address();
    match leg {
        Leg::Native => {
            //every withdrawal burns once, each burn needs its own entry
            add_burn_auth(e, token_out, amount);
            NativeWrapperClient::new(e, &e.get_wrapper()?).withdraw(&gateway, to, &amount);
        }
        Leg::Token(_) => TokenClient::new(e, token_out).transfer(&gateway, to, &amount),
    }
    Ok(())
}

// Shared flow of the three swap entry points
#[allow(clippy::too_many_arguments)]
pub fn multi_swap(
    e: &Env,
    caller: &Address,
    leg_in: Leg,
    leg_out: Leg,
    recipient: &Address,
    amount_in: i128,
    min_out: i128,
    deadline: u64,
    plan: &Vec<Route>,
) -> Result<FeeSplit, RouterError> {
    caller.require_auth();
    check_request(e, amount_in, min_out, deadline, plan)?;
    e.bump_instance();

    let engine = e.get_engine()?;
    let token_in = fund_engine(e, caller, &leg_in, &engine, amount_in)?;
    let token_out = match &leg_out {
        Leg::Native => e.get_wrapped()?,
        Leg::Token(token) => token.clone(),
    };

    let actual_out = execute_plan(e, &engine, plan, &token_in, &token_out, min_out)?;
    let split = settle(e, &leg_out, &token_out, recipient, actual_out, min_out)?;

    events::swapped(e, caller, recipient, &token_in, &token_out, amount_in, &split);
    Ok(split)
}
