use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token::TokenClient, Address, Env,
    Error, Symbol, Vec, U256,
};

const TOKENS: Symbol = symbol_short!("tokens");
const MULTS: Symbol = symbol_short!("mults");
const BALANCES: Symbol = symbol_short!("balances");
const AMP: Symbol = symbol_short!("amp");
const FEE: Symbol = symbol_short!("fee");

const A_PRECISION: u128 = 100;
const FEE_DENOMINATOR: u128 = 10_000_000_000;
const MAX_LOOP: u32 = 256;

// Multi-asset stable-invariant pool, the input is pulled with transfer_from
#[contract]
pub struct MockStablePool;

#[contractimpl]
impl MockStablePool {
    // `multipliers` scale every balance to a common precision,
    // `amp` is A * 100, `fee` is over 10^10
    pub fn init(
        e: Env,
        tokens: Vec<Address>,
        multipliers: Vec<i128>,
        balances: Vec<i128>,
        amp: u128,
        fee: u128,
    ) {
        e.storage().instance().set(&TOKENS, &tokens);
        e.storage().instance().set(&MULTS, &multipliers);
        e.storage().instance().set(&BALANCES, &balances);
        e.storage().instance().set(&AMP, &amp);
        e.storage().instance().set(&FEE, &fee);
    }

    pub fn get_balances(e: Env) -> Vec<i128> {
        e.storage().instance().get(&BALANCES).unwrap()
    }

    // `fee_override` replaces the pool fee when non-zero
    pub fn estimate_swap(e: Env, in_idx: u32, out_idx: u32, in_amount: i128, fee_override: u32) -> i128 {
        let fee = if fee_override == 0 {
            e.storage().instance().get(&FEE).unwrap()
        } else {
            fee_override as u128
        };
        calculate_swap(&e, in_idx, out_idx, in_amount, fee)
    }

    pub fn swap(
        e: Env,
        user: Address,
        in_idx: u32,
        out_idx: u32,
        in_amount: i128,
        out_min: i128,
    ) -> i128 {
        if in_amount <= 0 {
            panic_with_error!(&e, Error::from_contract_error(2018));
        }
        let fee: u128 = e.storage().instance().get(&FEE).unwrap();
        let out = calculate_swap(&e, in_idx, out_idx, in_amount, fee);
        if out < out_min {
            panic_with_error!(&e, Error::from_contract_error(2006));
        }

        let tokens: Vec<Address> = e.storage().instance().get(&TOKENS).unwrap();
        let pool = e.current_contract_address();
        TokenClient::new(&e, &tokens.get(in_idx).unwrap()).transfer_from(&pool, &user, &pool, &in_amount);
        TokenClient::new(&e, &tokens.get(out_idx).unwrap()).transfer(&pool, &user, &out);

        let mut balances = Self::get_balances(e.clone());
        balances.set(in_idx, balances.get(in_idx).unwrap() + in_amount);
        balances.set(out_idx, balances.get(out_idx).unwrap() - out);
        e.storage().instance().set(&BALANCES, &balances);
        out
    }
}

fn calculate_swap(e: &Env, in_idx: u32, out_idx: u32, in_amount: i128, fee: u128) -> i128 {
    let balances: Vec<i128> = e.storage().instance().get(&BALANCES).unwrap();
    let multipliers: Vec<i128> = e.storage().instance().get(&MULTS).unwrap();
    let amp: u128 = e.storage().instance().get(&AMP).unwrap();
    if in_idx == out_idx || in_idx >= balances.len() || out_idx >= balances.len() {
        panic_with_error!(e, Error::from_contract_error(2007));
    }

    let mut xp = Vec::new(e);
    for (balance, multiplier) in balances.iter().zip(multipliers.iter()) {
        xp.push_back(u256(e, balance).mul(&u256(e, multiplier)));
    }
    let x = u256(e, in_amount)
        .mul(&u256(e, multipliers.get(in_idx).unwrap()))
        .add(&xp.get(in_idx).unwrap());
    let y = get_y(e, amp, in_idx, out_idx, &x, &xp);

    let dy = xp.get(out_idx).unwrap().sub(&y).sub(&U256::from_u32(e, 1));
    let dy_fee = dy
        .mul(&U256::from_u128(e, fee))
        .div(&U256::from_u128(e, FEE_DENOMINATOR));
    let out = dy
        .sub(&dy_fee)
        .div(&u256(e, multipliers.get(out_idx).unwrap()));
    out.to_u128().unwrap() as i128
}

fn u256(e: &Env, value: i128) -> U256 {
    U256::from_u128(e, value as u128)
}

fn within_one(a: &U256, b: &U256, one: &U256) -> bool {
    if a > b {
        a.sub(b) <= *one
    } else {
        b.sub(a) <= *one
    }
}

fn get_d(e: &Env, xp: &Vec<U256>, amp: u128) -> U256 {
    let zero = U256::from_u32(e, 0);
    let one = U256::from_u32(e, 1);
    let n = U256::from_u32(e, xp.len());
    let a_precision = U256::from_u128(e, A_PRECISION);

    let mut s = zero.clone();
    for x in xp.iter() {
        s = s.add(&x);
    }
    if s == zero {
        return zero;
    }

    let na = U256::from_u128(e, amp).mul(&n);
    let mut d = s.clone();
    for _ in 0..MAX_LOOP {
        let mut dp = d.clone();
        for x in xp.iter() {
            dp = dp.mul(&d).div(&x.mul(&n));
        }
        let prev = d.clone();
        let numerator = na
            .mul(&s)
            .div(&a_precision)
            .add(&dp.mul(&n))
            .mul(&d);
        let denominator = na
            .sub(&a_precision)
            .mul(&d)
            .div(&a_precision)
            .add(&n.add(&one).mul(&dp));
        d = numerator.div(&denominator);
        if within_one(&d, &prev, &one) {
            return d;
        }
    }
    panic_with_error!(e, Error::from_contract_error(2020))
}

fn get_y(e: &Env, amp: u128, in_idx: u32, out_idx: u32, x: &U256, xp: &Vec<U256>) -> U256 {
    let one = U256::from_u32(e, 1);
    let two = U256::from_u32(e, 2);
    let n = U256::from_u32(e, xp.len());
    let a_precision = U256::from_u128(e, A_PRECISION);
    let d = get_d(e, xp, amp);
    let na = U256::from_u128(e, amp).mul(&n);

    let mut c = d.clone();
    let mut s = U256::from_u32(e, 0);
    for k in 0..xp.len() {
        let xk = if k == in_idx {
            x.clone()
        } else if k != out_idx {
            xp.get(k).unwrap()
        } else {
            continue;
        };
        s = s.add(&xk);
        c = c.mul(&d).div(&xk.mul(&n));
    }
    c = c.mul(&d).mul(&a_precision).div(&na.mul(&n));
    let b = s.add(&d.mul(&a_precision).div(&na));

    let mut y = d.clone();
    for _ in 0..MAX_LOOP {
        let prev = y.clone();
        y = y.mul(&y).add(&c).div(&two.mul(&y).add(&b).sub(&d));
        if within_one(&y, &prev, &one) {
            return y;
        }
    }
    panic_with_error!(e, Error::from_contract_error(2021))
}
