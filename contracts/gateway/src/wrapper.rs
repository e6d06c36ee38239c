use soroban_sdk::{contractclient, Address, Env};

// Native asset wrapper, mints and burns the wrapped token against locked native
#[contractclient(name = "NativeWrapperClient")]
#[allow(dead_code)]
pub trait NativeWrapper {
    fn deposit(e: Env, from: Address, to: Address, amount: i128);
    fn withdraw(e: Env, from: Address, to: Address, amount: i128);
}
