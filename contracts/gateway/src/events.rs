use soroban_sdk::{symbol_short, Address, Env};
use split_router_types::FeeSplit;

// Swap settled, data holds (token_in, token_out, amount_in, operator_amount, caller_amount)
pub fn swapped(
    e: &Env,
    caller: &Address,
    recipient: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    split: &FeeSplit,
) {
    e.events().publish(
        (symbol_short!("swap"), caller.clone(), recipient.clone()),
        (
            token_in.clone(),
            token_out.clone(),
            amount_in,
            split.operator_amount,
            split.caller_amount,
        ),
    );
}

pub fn engine_changed(e: &Env, engine: &Address) {
    e.events()
        .publish((symbol_short!("engine"),), engine.clone());
}

pub fn operator_changed(e: &Env, operator: &Address) {
    e.events()
        .publish((symbol_short!("operator"),), operator.clone());
}
