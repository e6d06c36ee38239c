use soroban_sdk::{contracttype, Address, Vec};

use crate::{error::RouterError, step::SwapStep};

// One flow of a split plan, step `i` trades through `pools[i]`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    // Amount injected at buffer slot 0
    pub amount_in: i128,
    // Pools touched by the route
    pub pools: Vec<Address>,
    // Hops applied in order
    pub steps: Vec<SwapStep>,
}

// Sum of route inputs of a split plan
pub fn total_amount_in(plan: &Vec<Route>) -> Result<i128, RouterError> {
    let mut total: i128 = 0;
    for route in plan.iter() {
        if route.amount_in <= 0 {
            return Err(RouterError::InvalidAmount);
        }
        total = total
            .checked_add(route.amount_in)
            .ok_or(RouterError::ArithmeticOverflow)?;
    }
    Ok(total)
}
