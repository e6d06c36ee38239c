use soroban_sdk::{symbol_short, Address, Env};

// Plan executed and output forwarded to the gateway
pub fn executed(e: &Env, token_in: &Address, token_out: &Address, amount_out: i128) {
    e.events().publish(
        (symbol_short!("executed"), token_in.clone(), token_out.clone()),
        amount_out,
    );
}

// Long-lived allowance granted to a pool
pub fn pool_approved(e: &Env, asset: &Address, pool: &Address) {
    e.events()
        .publish((symbol_short!("approve"), asset.clone()), pool.clone());
}
