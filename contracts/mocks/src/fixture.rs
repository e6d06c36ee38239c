use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, Vec,
};
use split_router_types::{PoolKind, Route, SwapStep};

use crate::{
    MockConstantProductPair, MockConstantProductPairClient, MockStablePool, MockStablePoolClient,
    MockWrappedNative, MockWrappedNativeClient,
};

// Fee numerator of the fixture pairs, 0.25%
pub const PAIR_FEE: u32 = 997_500;

pub const USDC_WGLMR_RESERVES: (i128, i128) = (1_007_260_130_000, 3_000_000 * E18);
pub const BUSD_WGLMR_RESERVES: (i128, i128) = (31_205_147_426_252_141_400, 1_000 * E18);
// usdc, usdt, busd, frax
pub const STABLE_BALANCES: [i128; 4] = [
    1_000_000 * E6,
    1_000_000 * E6,
    1_070_530_295_129_919_527_608_300,
    1_000_000 * E18,
];
pub const STABLE_MULTIPLIERS: [i128; 4] = [1_000_000_000_000, 1_000_000_000_000, 1, 1];
pub const STABLE_AMP: u128 = 100 * 100;
pub const STABLE_FEE: u128 = 4_000_000;

pub const E6: i128 = 1_000_000;
pub const E18: i128 = 1_000_000_000_000_000_000;

// Pinned pool state of the split plan scenario
//
// WGLMR -> USDC (pair) -> BUSD (stable) for 450 WGLMR and WGLMR -> BUSD (pair) for 50 WGLMR
pub const SPLIT_ROUTE_A_IN: i128 = 450 * E18;
pub const SPLIT_ROUTE_A_AMOUNTS: [i128; 3] = [450 * E18, 150_688_750, 150_728_470_056_383_184_273];
pub const SPLIT_ROUTE_B_IN: i128 = 50 * E18;
pub const SPLIT_ROUTE_B_AMOUNTS: [i128; 2] = [50 * E18, 1_482_420_981_435_242_816];
pub const SPLIT_TOTAL_OUT: i128 = 152_210_891_037_818_427_089;

pub struct PoolFixture {
    pub env: Env,
    pub native: Address,
    pub wglmr: Address,
    pub wrapper: Address,
    pub usdc: Address,
    pub usdt: Address,
    pub busd: Address,
    pub frax: Address,
    pub usdc_wglmr_pair: Address,
    pub busd_wglmr_pair: Address,
    pub stable_pool: Address,
}

impl PoolFixture {
    // Register assets and pools with the pinned state, all auths must be mocked
    pub fn setup(env: &Env) -> Self {
        let issuer = Address::generate(env);
        let native = fake_asset(env, &issuer);
        let wglmr = fake_asset(env, &issuer);
        let usdc = fake_asset(env, &issuer);
        let usdt = fake_asset(env, &issuer);
        let busd = fake_asset(env, &issuer);
        let frax = fake_asset(env, &issuer);

        let usdc_wglmr_pair = register_pair(env, &usdc, &wglmr, USDC_WGLMR_RESERVES);
        let busd_wglmr_pair = register_pair(env, &busd, &wglmr, BUSD_WGLMR_RESERVES);

        let stable_pool = env.register(MockStablePool, ());
        let tokens = Vec::from_array(env, [usdc.clone(), usdt.clone(), busd.clone(), frax.clone()]);
        MockStablePoolClient::new(env, &stable_pool).init(
            &tokens,
            &Vec::from_array(env, STABLE_MULTIPLIERS),
            &Vec::from_array(env, STABLE_BALANCES),
            &STABLE_AMP,
            &STABLE_FEE,
        );
        for (token, balance) in tokens.iter().zip(STABLE_BALANCES.iter()) {
            StellarAssetClient::new(env, &token).mint(&stable_pool, balance);
        }

        //wrapped supply minted to the pairs is backed by native held in the wrapper
        let wrapper = env.register(MockWrappedNative, ());
        MockWrappedNativeClient::new(env, &wrapper).init(&native, &wglmr);
        StellarAssetClient::new(env, &native)
            .mint(&wrapper, &(USDC_WGLMR_RESERVES.1 + BUSD_WGLMR_RESERVES.1));
        StellarAssetClient::new(env, &wglmr).set_admin(&wrapper);

        PoolFixture {
            env: env.clone(),
            native,
            wglmr,
            wrapper,
            usdc,
            usdt,
            busd,
            frax,
            usdc_wglmr_pair,
            busd_wglmr_pair,
            stable_pool,
        }
    }

    pub fn token(&self, asset: &Address) -> TokenClient<'_> {
        TokenClient::new(&self.env, asset)
    }

    pub fn balance(&self, asset: &Address, owner: &Address) -> i128 {
        self.token(asset).balance(owner)
    }

    // Credit `amount` of `asset`, wrapped native is minted through the wrapper
    pub fn mint(&self, asset: &Address, to: &Address, amount: i128) {
        if asset == &self.wglmr {
            StellarAssetClient::new(&self.env, &self.native).mint(to, &amount);
            MockWrappedNativeClient::new(&self.env, &self.wrapper).deposit(to, to, &amount);
        } else {
            StellarAssetClient::new(&self.env, asset).mint(to, &amount);
        }
    }

    // WGLMR -> USDC -> BUSD
    pub fn route_wglmr_usdc_busd(&self, amount_in: i128) -> Route {
        Route {
            amount_in,
            pools: Vec::from_array(
                &self.env,
                [self.usdc_wglmr_pair.clone(), self.stable_pool.clone()],
            ),
            steps: Vec::from_array(
                &self.env,
                [
                    pair_step(1, 0, &self.usdc),
                    stable_step(0, 2, &self.busd),
                ],
            ),
        }
    }

    // WGLMR -> BUSD
    pub fn route_wglmr_busd(&self, amount_in: i128) -> Route {
        Route {
            amount_in,
            pools: Vec::from_array(&self.env, [self.busd_wglmr_pair.clone()]),
            steps: Vec::from_array(&self.env, [pair_step(1, 0, &self.busd)]),
        }
    }

    // BUSD -> USDC -> WGLMR
    pub fn route_busd_usdc_wglmr(&self, amount_in: i128) -> Route {
        Route {
            amount_in,
            pools: Vec::from_array(
                &self.env,
                [self.stable_pool.clone(), self.usdc_wglmr_pair.clone()],
            ),
            steps: Vec::from_array(
                &self.env,
                [
                    stable_step(2, 0, &self.usdc),
                    pair_step(0, 1, &self.wglmr),
                ],
            ),
        }
    }

    // BUSD -> WGLMR
    pub fn route_busd_wglmr(&self, amount_in: i128) -> Route {
        Route {
            amount_in,
            pools: Vec::from_array(&self.env, [self.busd_wglmr_pair.clone()]),
            steps: Vec::from_array(&self.env, [pair_step(0, 1, &self.wglmr)]),
        }
    }

    // Split plan of the pinned scenario
    pub fn split_plan(&self) -> Vec<Route> {
        self.plan([
            self.route_wglmr_usdc_busd(SPLIT_ROUTE_A_IN),
            self.route_wglmr_busd(SPLIT_ROUTE_B_IN),
        ])
    }

    pub fn plan<const N: usize>(&self, routes: [Route; N]) -> Vec<Route> {
        Vec::from_array(&self.env, routes)
    }
}

pub fn pair_step(pool_in_pos: u32, pool_out_pos: u32, token_out: &Address) -> SwapStep {
    SwapStep {
        kind: PoolKind::ConstantProduct,
        pool_in_pos,
        pool_out_pos,
        token_out: token_out.clone(),
        pool_fee: PAIR_FEE,
    }
}

pub fn stable_step(pool_in_pos: u32, pool_out_pos: u32, token_out: &Address) -> SwapStep {
    SwapStep {
        kind: PoolKind::Stable,
        pool_in_pos,
        pool_out_pos,
        token_out: token_out.clone(),
        pool_fee: 0,
    }
}

pub fn fake_asset(env: &Env, issuer: &Address) -> Address {
    env.register_stellar_asset_contract_v2(issuer.clone())
        .address()
}

fn register_pair(env: &Env, token_0: &Address, token_1: &Address, reserves: (i128, i128)) -> Address {
    let pair = env.register(MockConstantProductPair, ());
    MockConstantProductPairClient::new(env, &pair).init(
        &Vec::from_array(env, [token_0.clone(), token_1.clone()]),
        &Vec::from_array(env, [reserves.0, reserves.1]),
        &PAIR_FEE,
    );
    StellarAssetClient::new(env, token_0).mint(&pair, &reserves.0);
    StellarAssetClient::new(env, token_1).mint(&pair, &reserves.1);
    pair
}
