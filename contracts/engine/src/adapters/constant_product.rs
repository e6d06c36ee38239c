use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractclient, token::TokenClient, Address, Env, Error};
use split_router_types::{RouterError, SwapStep, POOL_FEE_DENOMINATOR};

use super::adapter::AdapterTrait;
use crate::types::hop::Hop;

#[contractclient(name = "ConstantProductPairClient")]
#[allow(dead_code)]
pub trait ConstantProductPairTrait {
    fn get_reserves(e: Env) -> (i128, i128);
    fn swap(e: Env, amount_0_out: i128, amount_1_out: i128, to: Address) -> Result<(), Error>;
}

pub struct ConstantProductAdapter;

impl AdapterTrait for ConstantProductAdapter {
    fn quote(
        &self,
        env: &Env,
        pool: &Address,
        step: &SwapStep,
        amount: i128,
    ) -> Result<i128, RouterError> {
        let reserves = ConstantProductPairClient::new(env, pool).get_reserves();
        let (reserve_in, reserve_out) = orient_reserves(&reserves, step)?;
        calc_amount_out(env, amount, reserve_in, reserve_out, step.pool_fee)
    }

    fn swap(&self, env: &Env, hop: &Hop) -> Result<i128, RouterError> {
        let amount_out = self.quote(env, &hop.pool, &hop.step, hop.amount)?;

        //push the selling tokens to the pair, the pair settles against its balance
        TokenClient::new(env, &hop.token_in).transfer(
            &env.current_contract_address(),
            &hop.pool,
            &hop.amount,
        );

        let pair = ConstantProductPairClient::new(env, &hop.pool);
        match hop.step.pool_out_pos {
            0 => pair.swap(&amount_out, &0, &hop.to),
            1 => pair.swap(&0, &amount_out, &hop.to),
            _ => return Err(RouterError::InvalidRoute),
        };

        Ok(amount_out)
    }
}

// Order pair reserves as (selling, buying)
fn orient_reserves(reserves: &(i128, i128), step: &SwapStep) -> Result<(i128, i128), RouterError> {
    match (step.pool_in_pos, step.pool_out_pos) {
        (0, 1) => Ok((reserves.0, reserves.1)),
        (1, 0) => Ok((reserves.1, reserves.0)),
        _ => Err(RouterError::InvalidRoute),
    }
}

// Estimate amount_out for a constant-product pair with the fee applied to the input leg
//
// out = in * fee * reserve_out / (reserve_in * FEE_DENOMINATOR + in * fee)
pub fn calc_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee: u32,
) -> Result<i128, RouterError> {
    if amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }
    if fee > POOL_FEE_DENOMINATOR {
        return Err(RouterError::InvalidFee);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(fee as i128)
        .ok_or(RouterError::ArithmeticOverflow)?;
    let denominator = reserve_in
        .checked_mul(POOL_FEE_DENOMINATOR as i128)
        .and_then(|scaled| scaled.checked_add(amount_in_with_fee))
        .ok_or(RouterError::ArithmeticOverflow)?;

    //the numerator overflows 128 bits for 18-decimal assets, multiply in 256 bits
    let amount_out = amount_in_with_fee.fixed_mul_floor(env, &reserve_out, &denominator);
    if amount_out <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }
    Ok(amount_out)
}
