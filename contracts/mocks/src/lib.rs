#![no_std]

pub mod constant_product_pair;
pub mod fixture;
pub mod stable_pool;
pub mod wrapped_native;
pub mod zero_output_pair;

pub use constant_product_pair::{MockConstantProductPair, MockConstantProductPairClient};
pub use fixture::PoolFixture;
pub use stable_pool::{MockStablePool, MockStablePoolClient};
pub use wrapped_native::{MockWrappedNative, MockWrappedNativeClient};
pub use zero_output_pair::{ZeroOutputPair, ZeroOutputPairClient};
