use soroban_sdk::{contracttype, Address};

use crate::pool_kind::PoolKind;

// Denominator of the constant-product fee numerator (997_500 = 0.25% fee)
pub const POOL_FEE_DENOMINATOR: u32 = 1_000_000;

// Single hop of a route
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapStep {
    // Pool family
    pub kind: PoolKind,
    // Index of the selling asset inside the pool
    pub pool_in_pos: u32,
    // Index of the buying asset inside the pool
    pub pool_out_pos: u32,
    // Asset leaving the hop
    pub token_out: Address,
    // Fee numerator over POOL_FEE_DENOMINATOR, must be 0 for stable pools (the pool fee applies)
    pub pool_fee: u32,
}
