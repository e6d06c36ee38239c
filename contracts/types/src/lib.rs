#![no_std]

pub mod engine;
pub mod error;
pub mod fee;
pub mod pool_kind;
pub mod route;
pub mod step;

pub use engine::{EngineClient, EngineInterface};
pub use error::RouterError;
pub use fee::FeeSplit;
pub use pool_kind::PoolKind;
pub use route::{total_amount_in, Route};
pub use step::{SwapStep, POOL_FEE_DENOMINATOR};
