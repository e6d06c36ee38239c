use soroban_sdk::contracttype;

// AMM family of a pool, selects quoting and execution math
#[contracttype]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoolKind {
    // x * y = k pair with a per-step fee numerator
    ConstantProduct = 1,
    // Reserved
    ConcentratedLiquidity = 2,
    // Multi-asset stable-invariant pool, quoted by the pool itself
    Stable = 3,
    // Reserved
    Weighted = 4,
}
