use super::{constant_product::ConstantProductAdapter, stable::StableAdapter};
use crate::types::hop::Hop;
use soroban_sdk::{Address, Env};
use split_router_types::{PoolKind, RouterError, SwapStep};

// Standard interface for all pool kind adapters
pub trait AdapterTrait {
    // Simulates the swap without touching balances
    fn quote(&self, env: &Env, pool: &Address, step: &SwapStep, amount: i128)
        -> Result<i128, RouterError>;

    // Executes the swap against the pool, returns the amount the pool must deliver
    fn swap(&self, env: &Env, hop: &Hop) -> Result<i128, RouterError>;
}

// Resolve the quoting handler for a pool kind
pub fn quote_adapter(
    e: &Env,
    pool: &Address,
    step: &SwapStep,
    amount: i128,
) -> Result<i128, RouterError> {
    match step.kind {
        PoolKind::ConstantProduct => ConstantProductAdapter.quote(e, pool, step, amount),
        PoolKind::Stable => StableAdapter.quote(e, pool, step, amount),
        PoolKind::ConcentratedLiquidity | PoolKind::Weighted => {
            Err(RouterError::UnsupportedPoolKind)
        }
    }
}

// Resolve the execution handler for a pool kind
pub fn swap_adapter(e: &Env, hop: &Hop) -> Result<i128, RouterError> {
    match hop.step.kind {
        PoolKind::ConstantProduct => ConstantProductAdapter.swap(e, hop),
        PoolKind::Stable => StableAdapter.swap(e, hop),
        PoolKind::ConcentratedLiquidity | PoolKind::Weighted => {
            Err(RouterError::UnsupportedPoolKind)
        }
    }
}
