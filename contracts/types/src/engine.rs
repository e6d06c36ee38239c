use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::{error::RouterError, route::Route};

// Routing engine surface the gateway depends on
#[contractclient(name = "EngineClient")]
pub trait EngineInterface {
    // Simulate a split plan, returns per-route amount buffers and the summed output
    fn quote(e: Env, plan: Vec<Route>) -> Result<(Vec<Vec<i128>>, i128), RouterError>;

    // Execute a split plan funded in engine custody and forward the output to the gateway
    fn execute(
        e: Env,
        plan: Vec<Route>,
        token_in: Address,
        token_out: Address,
        min_out: i128,
    ) -> Result<i128, RouterError>;

    // Grant long-lived pool allowances for the given (asset, pool) pairs
    fn approve_pools(e: Env, assets: Vec<Address>, pools: Vec<Address>) -> Result<(), RouterError>;
}
