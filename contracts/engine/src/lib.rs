#![no_std]

mod adapters;
mod events;
mod execution;
mod extensions;
mod routing;
mod types;

#[cfg(test)]
mod tests;

pub use adapters::constant_product::calc_amount_out;
pub use execution::RESIDUAL_BALANCE;

use extensions::{allowance::approve_pool, env_extensions::EnvExtensions};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use split_router_types::{EngineInterface, Route, RouterError};

#[contract]
pub struct SplitEngine;

#[contractimpl]
impl SplitEngine {
    // Initialize contract
    //
    // # Arguments
    //
    // * `admin` - Admin account address
    // * `gateway` - Gateway contract allowed to execute swaps
    //
    // # Errors
    //
    // AlreadyInitialized if the contract is already initialized
    pub fn init(e: Env, admin: Address, gateway: Address) -> Result<(), RouterError> {
        if e.is_initialized() {
            return Err(RouterError::AlreadyInitialized);
        }
        admin.require_auth();
        e.set_admin(&admin);
        e.set_gateway(&gateway);
        e.bump_instance();
        Ok(())
    }

    // Pin the engine to another gateway
    //
    // # Arguments
    //
    // * `gateway` - New gateway contract address
    //
    // # Errors
    //
    // NotInitialized if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn set_gateway(e: Env, gateway: Address) -> Result<(), RouterError> {
        e.require_admin()?;
        e.set_gateway(&gateway);
        e.bump_instance();
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, RouterError> {
        e.get_admin()
    }

    pub fn gateway(e: Env) -> Result<Address, RouterError> {
        e.get_gateway()
    }

    // Simulate a single route
    //
    // # Returns
    //
    // * Amount buffer of the route, slot 0 holds the route input
    pub fn get_amounts_out(e: Env, route: Route) -> Result<Vec<i128>, RouterError> {
        routing::quote_route(&e, &route)
    }
}

#[contractimpl]
impl EngineInterface for SplitEngine {
    // Simulate a split plan without touching any balance
    //
    // # Arguments
    //
    // * `plan` - Routes to simulate
    //
    // # Returns
    //
    // * Amount buffers of every route and the summed output
    fn quote(e: Env, plan: Vec<Route>) -> Result<(Vec<Vec<i128>>, i128), RouterError> {
        routing::quote_plan(&e, &plan)
    }

    // Execute a split plan funded by the gateway
    //
    // # Arguments
    //
    // * `plan` - Routes to execute
    // * `token_in` - Selling token address, already transferred to the engine
    // * `token_out` - Buying token address
    // * `min_out` - Minimum output accepted
    //
    // # Errors
    //
    // Panics if the caller is not the pinned gateway
    // InsufficientOutput if the realized output is below `min_out`
    // PoolMisconduct if a pool delivered less than quoted
    //
    // # Returns
    //
    // * Output amount forwarded to the gateway
    fn execute(
        e: Env,
        plan: Vec<Route>,
        token_in: Address,
        token_out: Address,
        min_out: i128,
    ) -> Result<i128, RouterError> {
        let gateway = e.require_gateway()?;
        e.bump_instance();
        execution::execute_plan(&e, &plan, &token_in, &token_out, min_out, &gateway)
    }

    // Grant long-lived allowances to pools pulling funds with transfer_from
    //
    // # Arguments
    //
    // * `assets` - Assets to approve
    // * `pools` - Pools to approve, paired with `assets` by position
    //
    // # Errors
    //
    // Panics if the caller is not the pinned gateway
    // LengthMismatch if the lists differ in length
    fn approve_pools(e: Env, assets: Vec<Address>, pools: Vec<Address>) -> Result<(), RouterError> {
        e.require_gateway()?;
        if assets.len() != pools.len() {
            return Err(RouterError::LengthMismatch);
        }
        e.bump_instance();
        for (asset, pool) in assets.iter().zip(pools.iter()) {
            approve_pool(&e, &asset, &pool);
            events::pool_approved(&e, &asset, &pool);
        }
        Ok(())
    }
}
