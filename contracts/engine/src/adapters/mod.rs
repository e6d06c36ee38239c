pub mod adapter;
pub mod constant_product;
pub mod stable;
