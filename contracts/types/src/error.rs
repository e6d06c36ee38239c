use soroban_sdk::contracterror;

// Errors shared by the routing engine and the gateway
//
// Authorization is enforced by require_auth and fails at the host level
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Malformed route or plan
    InvalidRoute = 32_710,
    // Pool kind is reserved or not supported by the engine
    UnsupportedPoolKind = 32_711,
    // Negative or zero amount where a positive one is required
    InvalidAmount = 32_712,
    // Pool fee numerator exceeds the denominator
    InvalidFee = 32_713,
    // Plan input doesn't match the supplied amount
    PlanAmountMismatch = 32_720,
    // Output is below the caller's floor
    InsufficientOutput = 32_721,
    // Transaction deadline has passed
    DeadlineExpired = 32_722,
    // Paired argument lists differ in length
    LengthMismatch = 32_723,
    // Pool reported success but delivered less than quoted
    PoolMisconduct = 32_730,
    // Pool reserves can't produce a non-zero output
    InsufficientLiquidity = 32_731,
    // Routing engine failed with a non-router error
    EngineFailure = 32_732,
    // Checked arithmetic failed
    ArithmeticOverflow = 32_740,
}
