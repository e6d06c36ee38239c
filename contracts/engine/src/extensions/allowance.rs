use soroban_sdk::{token::TokenClient, Address, Env};

// Ledgers granted to allowlisted pool allowances
const ALLOWANCE_LEDGERS: u32 = 100_000;

// Grant a long-lived allowance to the pool so per-swap approvals are skipped
//
// # Arguments
//
// * `env` - The environment
// * `token` - The address of the token the pool pulls
// * `pool` - The pool address
pub fn approve_pool(env: &Env, token: &Address, pool: &Address) {
    let expiration = (env.ledger().sequence() / ALLOWANCE_LEDGERS + 1) * ALLOWANCE_LEDGERS;
    TokenClient::new(env, token).approve(
        &env.current_contract_address(),
        pool,
        &i128::MAX,
        &expiration,
    );
}

// Approve exactly `amount` for the current transaction unless the pool is already allowlisted
//
// # Arguments
//
// * `env` - The environment
// * `token` - The address of the token to sell
// * `pool` - The pool address
// * `amount` - The amount the pool will pull
pub fn ensure_allowance(env: &Env, token: &Address, pool: &Address, amount: i128) {
    let client = TokenClient::new(env, token);
    let engine = env.current_contract_address();
    if client.allowance(&engine, pool) >= amount {
        return;
    }
    client.approve(&engine, pool, &amount, &(env.ledger().sequence() + 1));
}
