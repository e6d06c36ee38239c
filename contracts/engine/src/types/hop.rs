use soroban_sdk::Address;
use split_router_types::SwapStep;

// Normalized single-pool swap descriptor
#[derive(Clone, Eq, PartialEq)]
pub struct Hop {
    pub step: SwapStep,
    // Pool contract address
    pub pool: Address,
    // Selling token address
    pub token_in: Address,
    // Address to receive swapped tokens
    pub to: Address,
    // Amount of tokens to sell
    pub amount: i128,
}
