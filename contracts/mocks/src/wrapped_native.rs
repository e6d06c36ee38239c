use soroban_sdk::{
    contract, contractimpl, symbol_short,
    token::{StellarAssetClient, TokenClient},
    Address, Env, Symbol,
};

const NATIVE: Symbol = symbol_short!("native");
const WRAPPED: Symbol = symbol_short!("wrapped");

// Native asset wrapper, must be the admin of the wrapped asset contract
#[contract]
pub struct MockWrappedNative;

#[contractimpl]
impl MockWrappedNative {
    pub fn init(e: Env, native: Address, wrapped: Address) {
        e.storage().instance().set(&NATIVE, &native);
        e.storage().instance().set(&WRAPPED, &wrapped);
    }

    pub fn wrapped(e: Env) -> Address {
        e.storage().instance().get(&WRAPPED).unwrap()
    }

    // Lock native tokens of `from` and credit wrapped tokens to `to`
    pub fn deposit(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let native: Address = e.storage().instance().get(&NATIVE).unwrap();
        TokenClient::new(&e, &native).transfer(&from, &e.current_contract_address(), &amount);
        StellarAssetClient::new(&e, &Self::wrapped(e.clone())).mint(&to, &amount);
    }

    // Burn wrapped tokens of `from` and release native tokens to `to`
    pub fn withdraw(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        TokenClient::new(&e, &Self::wrapped(e.clone())).burn(&from, &amount);
        let native: Address = e.storage().instance().get(&NATIVE).unwrap();
        TokenClient::new(&e, &native).transfer(&e.current_contract_address(), &to, &amount);
    }
}
