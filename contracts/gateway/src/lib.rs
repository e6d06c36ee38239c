#![no_std]

mod events;
mod extensions;
mod fee;
mod swap;
mod wrapper;

#[cfg(test)]
mod tests;

pub use wrapper::NativeWrapperClient;

use extensions::env_extensions::EnvExtensions;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use split_router_types::{EngineClient, FeeSplit, Route, RouterError};
use swap::Leg;

#[contract]
pub struct SplitGateway;

#[contractimpl]
impl SplitGateway {
    // Initialize contract
    //
    // # Arguments
    //
    // * `operator` - Operator account, receives the surplus fee and administers the gateway
    // * `engine` - Routing engine the gateway executes plans on
    // * `wrapper` - Native asset wrapper contract
    // * `wrapped` - Wrapped native token address
    //
    // # Errors
    //
    // AlreadyInitialized if the contract is already initialized
    pub fn init(
        e: Env,
        operator: Address,
        engine: Address,
        wrapper: Address,
        wrapped: Address,
    ) -> Result<(), RouterError> {
        if e.is_initialized() {
            return Err(RouterError::AlreadyInitialized);
        }
        operator.require_auth();
        e.set_operator(&operator);
        e.set_engine(&engine);
        e.set_wrapper(&wrapper);
        e.set_wrapped(&wrapped);
        e.bump_instance();
        Ok(())
    }

    // Swap native asset for tokens through a split plan
    //
    // # Arguments
    //
    // * `caller` - Account paying the native input
    // * `token_out` - Buying token address
    // * `recipient` - Receiver of the caller share
    // * `amount_in` - Native amount, must equal the plan input
    // * `min_out` - Minimum output accepted
    // * `deadline` - Latest ledger timestamp the swap may execute at
    // * `plan` - Routes starting from the wrapped native token
    //
    // # Returns
    //
    // * Fee split paid out
    pub fn swap_native_for_tokens(
        e: Env,
        caller: Address,
        token_out: Address,
        recipient: Address,
        amount_in: i128,
        min_out: i128,
        deadline: u64,
        plan: Vec<Route>,
    ) -> Result<FeeSplit, RouterError> {
        swap::multi_swap(
            &e,
            &caller,
            Leg::Native,
            Leg::Token(token_out),
            &recipient,
            amount_in,
            min_out,
            deadline,
            &plan,
        )
    }

    // Swap tokens for tokens through a split plan
    //
    // # Arguments
    //
    // * `caller` - Account paying the input
    // * `token_in` - Selling token address
    // * `token_out` - Buying token address
    // * `recipient` - Receiver of the caller share
    // * `amount_in` - Input amount, must equal the plan input
    // * `min_out` - Minimum output accepted
    // * `deadline` - Latest ledger timestamp the swap may execute at
    // * `plan` - Routes to execute
    //
    // # Returns
    //
    // * Fee split paid out
    pub fn swap_tokens_for_tokens(
        e: Env,
        caller: Address,
        token_in: Address,
        token_out: Address,
        recipient: Address,
        amount_in: i128,
        min_out: i128,
        deadline: u64,
        plan: Vec<Route>,
    ) -> Result<FeeSplit, RouterError> {
        swap::multi_swap(
            &e,
            &caller,
            Leg::Token(token_in),
            Leg::Token(token_out),
            &recipient,
            amount_in,
            min_out,
            deadline,
            &plan,
        )
    }

    // Swap tokens for native asset through a split plan
    //
    // Both the caller share and the operator share are unwrapped to native
    pub fn swap_tokens_for_native(
        e: Env,
        caller: Address,
        token_in: Address,
        recipient: Address,
        amount_in: i128,
        min_out: i128,
        deadline: u64,
        plan: Vec<Route>,
    ) -> Result<FeeSplit, RouterError> {
        swap::multi_swap(
            &e,
            &caller,
            Leg::Token(token_in),
            Leg::Native,
            &recipient,
            amount_in,
            min_out,
            deadline,
            &plan,
        )
    }

    // Operator and caller shares for a realized output
    //
    // # Errors
    //
    // InsufficientOutput if `actual_out` is below `min_out`
    pub fn get_fee(_e: Env, actual_out: i128, min_out: i128) -> Result<FeeSplit, RouterError> {
        fee::split_surplus(actual_out, min_out)
    }

    // Simulate a split plan on the pinned engine
    pub fn quote(e: Env, plan: Vec<Route>) -> Result<(Vec<Vec<i128>>, i128), RouterError> {
        let engine = e.get_engine()?;
        match EngineClient::new(&e, &engine).try_quote(&plan) {
            Ok(Ok(result)) => Ok(result),
            Err(Ok(err)) => Err(err),
            _ => Err(RouterError::EngineFailure),
        }
    }

    // Repoint the gateway to another routing engine
    //
    // # Errors
    //
    // Panics if the caller is not the operator
    pub fn set_engine(e: Env, engine: Address) -> Result<(), RouterError> {
        e.require_operator()?;
        e.set_engine(&engine);
        e.bump_instance();
        events::engine_changed(&e, &engine);
        Ok(())
    }

    // Hand the operator role over
    pub fn set_operator(e: Env, operator: Address) -> Result<(), RouterError> {
        e.require_operator()?;
        e.set_operator(&operator);
        e.bump_instance();
        events::operator_changed(&e, &operator);
        Ok(())
    }

    // Allowlist (asset, pool) pairs on the pinned engine
    //
    // # Arguments
    //
    // * `assets` - Assets the pools pull
    // * `pools` - Pools to approve, paired with `assets` by position
    //
    // # Errors
    //
    // Panics if the caller is not the operator
    // LengthMismatch if the lists differ in length
    pub fn approve_pools(
        e: Env,
        assets: Vec<Address>,
        pools: Vec<Address>,
    ) -> Result<(), RouterError> {
        e.require_operator()?;
        if assets.len() != pools.len() {
            return Err(RouterError::LengthMismatch);
        }
        e.bump_instance();
        EngineClient::new(&e, &e.get_engine()?).approve_pools(&assets, &pools);
        Ok(())
    }

    pub fn operator(e: Env) -> Result<Address, RouterError> {
        e.get_operator()
    }

    pub fn engine(e: Env) -> Result<Address, RouterError> {
        e.get_engine()
    }
}
