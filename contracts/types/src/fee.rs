use soroban_sdk::contracttype;

// Surplus split between the operator and the caller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub operator_amount: i128,
    pub caller_amount: i128,
}
