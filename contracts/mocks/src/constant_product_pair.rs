use soroban_sdk::{
    contract, contractimpl, symbol_short, token::TokenClient, Address, Env, Error, Symbol, Vec,
    U256,
};

const TOKENS: Symbol = symbol_short!("tokens");
const RESERVES: Symbol = symbol_short!("reserves");
const FEE: Symbol = symbol_short!("fee");

const FEE_DENOMINATOR: u128 = 1_000_000;

// Pair with flash accounting: input is pushed first, `swap` pays out and checks the invariant
#[contract]
pub struct MockConstantProductPair;

#[contractimpl]
impl MockConstantProductPair {
    // `fee` is the numerator kept on the input leg, over 1_000_000
    pub fn init(e: Env, tokens: Vec<Address>, reserves: Vec<i128>, fee: u32) {
        e.storage().instance().set(&TOKENS, &tokens);
        e.storage().instance().set(&RESERVES, &reserves);
        e.storage().instance().set(&FEE, &fee);
    }

    pub fn token_0(e: Env) -> Address {
        let tokens: Vec<Address> = e.storage().instance().get(&TOKENS).unwrap();
        tokens.get(0).unwrap()
    }

    pub fn token_1(e: Env) -> Address {
        let tokens: Vec<Address> = e.storage().instance().get(&TOKENS).unwrap();
        tokens.get(1).unwrap()
    }

    pub fn get_reserves(e: Env) -> (i128, i128) {
        let reserves: Vec<i128> = e.storage().instance().get(&RESERVES).unwrap();
        (reserves.get(0).unwrap(), reserves.get(1).unwrap())
    }

    pub fn swap(e: Env, amount_0_out: i128, amount_1_out: i128, to: Address) -> Result<(), Error> {
        let (reserve_0, reserve_1) = Self::get_reserves(e.clone());

        if amount_0_out == 0 && amount_1_out == 0 {
            return Err(Error::from_contract_error(102));
        }
        if amount_0_out < 0 || amount_1_out < 0 {
            return Err(Error::from_contract_error(109));
        }
        if amount_0_out >= reserve_0 || amount_1_out >= reserve_1 {
            return Err(Error::from_contract_error(110));
        }

        let token_0 = TokenClient::new(&e, &Self::token_0(e.clone()));
        let token_1 = TokenClient::new(&e, &Self::token_1(e.clone()));
        let pair = e.current_contract_address();

        if amount_0_out > 0 {
            token_0.transfer(&pair, &to, &amount_0_out);
        }
        if amount_1_out > 0 {
            token_1.transfer(&pair, &to, &amount_1_out);
        }

        let balance_0 = token_0.balance(&pair);
        let balance_1 = token_1.balance(&pair);

        let amount_0_in = (balance_0 - (reserve_0 - amount_0_out)).max(0);
        let amount_1_in = (balance_1 - (reserve_1 - amount_1_out)).max(0);
        if amount_0_in == 0 && amount_1_in == 0 {
            return Err(Error::from_contract_error(112));
        }

        let fee: u32 = e.storage().instance().get(&FEE).unwrap();
        let scale = U256::from_u128(&e, FEE_DENOMINATOR);
        let fee_share = U256::from_u128(&e, FEE_DENOMINATOR - fee as u128);
        let adjusted = |balance: i128, amount_in: i128| {
            U256::from_u128(&e, balance as u128)
                .mul(&scale)
                .sub(&U256::from_u128(&e, amount_in as u128).mul(&fee_share))
        };

        let new_invariant = adjusted(balance_0, amount_0_in).mul(&adjusted(balance_1, amount_1_in));
        let old_invariant = U256::from_u128(&e, reserve_0 as u128)
            .mul(&U256::from_u128(&e, reserve_1 as u128))
            .mul(&scale)
            .mul(&scale);
        if new_invariant < old_invariant {
            return Err(Error::from_contract_error(114));
        }

        e.storage()
            .instance()
            .set(&RESERVES, &Vec::from_array(&e, [balance_0, balance_1]));
        Ok(())
    }
}
