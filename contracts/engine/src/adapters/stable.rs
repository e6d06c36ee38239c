use soroban_sdk::{contractclient, Address, Env};
use split_router_types::{RouterError, SwapStep};

use super::adapter::AdapterTrait;
use crate::{extensions::allowance::ensure_allowance, types::hop::Hop};

#[contractclient(name = "StablePoolClient")]
#[allow(dead_code)]
pub trait StablePoolTrait {
    fn estimate_swap(e: Env, in_idx: u32, out_idx: u32, in_amount: i128, fee_override: u32)
        -> i128;
    fn swap(
        e: Env,
        user: Address,
        in_idx: u32,
        out_idx: u32,
        in_amount: i128,
        out_min: i128,
    ) -> i128;
}

pub struct StableAdapter;

impl AdapterTrait for StableAdapter {
    // The invariant is pool-specific, always trust the pool's own estimate at the pool fee
    fn quote(
        &self,
        env: &Env,
        pool: &Address,
        step: &SwapStep,
        amount: i128,
    ) -> Result<i128, RouterError> {
        let amount_out = StablePoolClient::new(env, pool).estimate_swap(
            &step.pool_in_pos,
            &step.pool_out_pos,
            &amount,
            &0,
        );
        if amount_out <= 0 {
            return Err(RouterError::InsufficientLiquidity);
        }
        Ok(amount_out)
    }

    fn swap(&self, env: &Env, hop: &Hop) -> Result<i128, RouterError> {
        let amount_out = self.quote(env, &hop.pool, &hop.step, hop.amount)?;

        //the pool pulls the input with transfer_from
        ensure_allowance(env, &hop.token_in, &hop.pool, hop.amount);

        StablePoolClient::new(env, &hop.pool).swap(
            &hop.to,
            &hop.step.pool_in_pos,
            &hop.step.pool_out_pos,
            &hop.amount,
            &amount_out,
        );

        Ok(amount_out)
    }
}
