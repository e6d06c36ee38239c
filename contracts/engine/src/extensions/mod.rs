pub mod allowance;
pub mod env_extensions;
