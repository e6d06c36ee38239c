use soroban_sdk::{Address, Env, Vec};
use split_router_types::{PoolKind, Route, RouterError, SwapStep, POOL_FEE_DENOMINATOR};

use crate::adapters::adapter::quote_adapter;

// Per-route amounts addressed by slot, slot 0 holds the route input
pub struct AmountBuffer {
    amounts: Vec<i128>,
}

impl AmountBuffer {
    pub fn new(e: &Env, len: u32, seed: i128) -> Self {
        let mut amounts = Vec::new(e);
        amounts.push_back(seed);
        for _ in 1..len {
            amounts.push_back(0);
        }
        Self { amounts }
    }

    pub fn read(&self, slot: u32) -> Result<i128, RouterError> {
        self.amounts.get(slot).ok_or(RouterError::InvalidRoute)
    }

    pub fn write(&mut self, slot: u32, amount: i128) -> Result<(), RouterError> {
        if slot >= self.amounts.len() {
            return Err(RouterError::InvalidRoute);
        }
        self.amounts.set(slot, amount);
        Ok(())
    }

    // Amount at the last slot
    pub fn terminal(&self) -> i128 {
        self.amounts.last().unwrap_or(0)
    }

    pub fn into_amounts(self) -> Vec<i128> {
        self.amounts
    }
}

// Slot the step at `index` reads its input from
pub fn input_slot(index: u32) -> u32 {
    index
}

// Slot the step at `index` writes its output to
pub fn output_slot(index: u32) -> u32 {
    index + 1
}

// Check route shape before any pool is touched
pub fn validate_route(route: &Route) -> Result<(), RouterError> {
    if route.amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }
    if route.steps.is_empty() || route.pools.len() != route.steps.len() {
        return Err(RouterError::InvalidRoute);
    }
    for step in route.steps.iter() {
        validate_step(&step)?;
    }
    Ok(())
}

fn validate_step(step: &SwapStep) -> Result<(), RouterError> {
    if step.pool_in_pos == step.pool_out_pos {
        return Err(RouterError::InvalidRoute);
    }
    if step.pool_fee > POOL_FEE_DENOMINATOR {
        return Err(RouterError::InvalidFee);
    }
    match step.kind {
        PoolKind::ConstantProduct => {
            if step.pool_in_pos > 1 || step.pool_out_pos > 1 {
                return Err(RouterError::InvalidRoute);
            }
        }
        //stable swaps always execute at the pool fee
        PoolKind::Stable => {
            if step.pool_fee != 0 {
                return Err(RouterError::InvalidFee);
            }
        }
        PoolKind::ConcentratedLiquidity | PoolKind::Weighted => {
            return Err(RouterError::UnsupportedPoolKind)
        }
    }
    Ok(())
}

// Apply route steps in order to a freshly seeded amount buffer
//
// # Arguments
//
// * `e` - The environment
// * `route` - Route to traverse
// * `apply` - Hop handler receiving the step, its pool and its input amount
//
// # Returns
//
// * The filled amount buffer
pub fn walk_route<F>(e: &Env, route: &Route, mut apply: F) -> Result<AmountBuffer, RouterError>
where
    F: FnMut(&SwapStep, &Address, i128) -> Result<i128, RouterError>,
{
    validate_route(route)?;
    let mut buffer = AmountBuffer::new(e, route.steps.len() + 1, route.amount_in);
    for (index, step) in route.steps.iter().enumerate() {
        let index = index as u32;
        let pool = route.pools.get(index).ok_or(RouterError::InvalidRoute)?;
        let amount_in = buffer.read(input_slot(index))?;
        let amount_out = apply(&step, &pool, amount_in)?;
        buffer.write(output_slot(index), amount_out)?;
    }
    Ok(buffer)
}

// Simulate a single route
pub fn quote_route(e: &Env, route: &Route) -> Result<Vec<i128>, RouterError> {
    let buffer = walk_route(e, route, |step, pool, amount| {
        quote_adapter(e, pool, step, amount)
    })?;
    Ok(buffer.into_amounts())
}

// Simulate a split plan, returns per-route buffers and the summed terminal amount
pub fn quote_plan(e: &Env, plan: &Vec<Route>) -> Result<(Vec<Vec<i128>>, i128), RouterError> {
    if plan.is_empty() {
        return Err(RouterError::InvalidRoute);
    }
    let mut sequences = Vec::new(e);
    let mut total: i128 = 0;
    for route in plan.iter() {
        let amounts = quote_route(e, &route)?;
        let terminal = amounts.last().unwrap_or(0);
        total = total
            .checked_add(terminal)
            .ok_or(RouterError::ArithmeticOverflow)?;
        sequences.push_back(amounts);
    }
    Ok((sequences, total))
}
