use split_router_types::{FeeSplit, RouterError};

// Split the output above the caller's floor in half between the operator and the caller
//
// operator = (actual_out - min_out) / 2, caller = actual_out - operator
pub fn split_surplus(actual_out: i128, min_out: i128) -> Result<FeeSplit, RouterError> {
    if actual_out < 0 || min_out < 0 {
        return Err(RouterError::InvalidAmount);
    }
    if actual_out < min_out {
        return Err(RouterError::InsufficientOutput);
    }
    let operator_amount = (actual_out - min_out) / 2;
    Ok(FeeSplit {
        operator_amount,
        caller_amount: actual_out - operator_amount,
    })
}
