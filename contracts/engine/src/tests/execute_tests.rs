extern crate std;
use crate::{tests::context::setup, RESIDUAL_BALANCE};
use soroban_sdk::{Address, Vec};
use split_router_mocks::{
    fixture::{E18, SPLIT_ROUTE_A_IN, SPLIT_ROUTE_B_IN, SPLIT_TOTAL_OUT},
    MockConstantProductPairClient,
};
use split_router_types::{PoolKind, RouterError};

const SPLIT_PLAN_IN: i128 = SPLIT_ROUTE_A_IN + SPLIT_ROUTE_B_IN;

#[test]
fn execute_split_plan() {
    let ctx = setup();
    let plan = ctx.pools.split_plan();
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);

    let forwarded = ctx
        .engine_client
        .execute(&plan, &ctx.pools.wglmr, &ctx.pools.busd, &0);

    //the first swap into a fresh asset leaves the residual unit behind
    assert_eq!(forwarded, SPLIT_TOTAL_OUT - RESIDUAL_BALANCE);
    assert_eq!(ctx.gateway_balance(&ctx.pools.busd), forwarded);
    assert_eq!(ctx.engine_balance(&ctx.pools.busd), RESIDUAL_BALANCE);
    //no leftovers of the input or the intermediate asset
    assert_eq!(ctx.engine_balance(&ctx.pools.wglmr), 0);
    assert_eq!(ctx.engine_balance(&ctx.pools.usdc), 0);
}

#[test]
fn execute_matches_quote() {
    let ctx = setup();
    let plan = ctx.pools.split_plan();
    ctx.pools
        .mint(&ctx.pools.busd, &ctx.engine, RESIDUAL_BALANCE);
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);

    let (_, quoted) = ctx.engine_client.quote(&plan);
    let forwarded = ctx
        .engine_client
        .execute(&plan, &ctx.pools.wglmr, &ctx.pools.busd, &quoted);

    assert_eq!(forwarded, quoted);
    assert_eq!(forwarded, SPLIT_TOTAL_OUT);
    assert_eq!(ctx.engine_balance(&ctx.pools.busd), RESIDUAL_BALANCE);
}

#[test]
fn execute_keeps_residual_across_swaps() {
    let ctx = setup();
    let amount_in = 10 * E18;

    for round in 0..3 {
        let plan = ctx.pools.plan([ctx.pools.route_wglmr_busd(amount_in)]);
        let (_, quoted) = ctx.engine_client.quote(&plan);
        ctx.fund_engine(&ctx.pools.wglmr, amount_in);
        let gateway_before = ctx.gateway_balance(&ctx.pools.busd);

        let forwarded = ctx
            .engine_client
            .execute(&plan, &ctx.pools.wglmr, &ctx.pools.busd, &0);

        if round == 0 {
            assert_eq!(forwarded, quoted - RESIDUAL_BALANCE);
        } else {
            assert_eq!(forwarded, quoted);
        }
        assert_eq!(ctx.gateway_balance(&ctx.pools.busd) - gateway_before, forwarded);
        assert_eq!(ctx.engine_balance(&ctx.pools.busd), RESIDUAL_BALANCE);
    }
}

#[test]
fn execute_reverse_split_plan() {
    let ctx = setup();
    let route_c = ctx.pools.route_busd_usdc_wglmr(1_000 * E18);
    let route_d = ctx.pools.route_busd_wglmr(20 * E18);
    let plan = ctx.pools.plan([route_c, route_d]);
    ctx.fund_engine(&ctx.pools.busd, 1_020 * E18);

    let (_, quoted) = ctx.engine_client.quote(&plan);
    let forwarded = ctx
        .engine_client
        .execute(&plan, &ctx.pools.busd, &ctx.pools.wglmr, &0);

    assert_eq!(forwarded, quoted - RESIDUAL_BALANCE);
    assert_eq!(ctx.gateway_balance(&ctx.pools.wglmr), forwarded);
    assert_eq!(ctx.engine_balance(&ctx.pools.busd), 0);
    assert_eq!(ctx.engine_balance(&ctx.pools.usdc), 0);
}

#[test]
fn execute_below_floor_reverts() {
    let ctx = setup();
    let plan = ctx.pools.split_plan();
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);
    let pair = MockConstantProductPairClient::new(&ctx.env, &ctx.pools.busd_wglmr_pair);
    let reserves = pair.get_reserves();

    let result = ctx.engine_client.try_execute(
        &plan,
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &(SPLIT_TOTAL_OUT + 1),
    );

    assert_eq!(result, Err(Ok(RouterError::InsufficientOutput)));
    assert_eq!(pair.get_reserves(), reserves);
    assert_eq!(ctx.engine_balance(&ctx.pools.wglmr), SPLIT_PLAN_IN);
    assert_eq!(ctx.gateway_balance(&ctx.pools.busd), 0);
}

#[test]
#[should_panic(expected = "32721")]
fn execute_floor_consumes_residual_unit() {
    let ctx = setup();
    let plan = ctx.pools.split_plan();
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);

    //summed output meets the floor but the forwarded amount does not
    ctx.engine_client
        .execute(&plan, &ctx.pools.wglmr, &ctx.pools.busd, &SPLIT_TOTAL_OUT);
}

#[test]
fn execute_stable_fee_override_rejected() {
    let ctx = setup();
    let mut route = ctx.pools.route_wglmr_usdc_busd(SPLIT_ROUTE_A_IN);
    let mut step = route.steps.get(1).unwrap();
    step.pool_fee = 1;
    route.steps.set(1, step);
    ctx.pools
        .mint(&ctx.pools.busd, &ctx.engine, RESIDUAL_BALANCE);
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_ROUTE_A_IN);

    let result = ctx.engine_client.try_execute(
        &ctx.pools.plan([route]),
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &0,
    );

    //rejected before any pool is touched
    assert_eq!(result, Err(Ok(RouterError::InvalidFee)));
    assert_eq!(ctx.engine_balance(&ctx.pools.wglmr), SPLIT_ROUTE_A_IN);
    assert_eq!(ctx.engine_balance(&ctx.pools.busd), RESIDUAL_BALANCE);
}

#[test]
#[should_panic(expected = "32730")]
fn execute_zero_output_pool() {
    let ctx = setup();
    let pair = ctx.zero_output_pair();
    let route = ctx.single_hop_route(
        PoolKind::ConstantProduct,
        &pair,
        &ctx.pools.busd,
        SPLIT_ROUTE_B_IN,
    );
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_ROUTE_B_IN);

    ctx.engine_client.execute(
        &ctx.pools.plan([route]),
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &0,
    );
}

#[test]
#[should_panic(expected = "32710")]
fn execute_route_ending_in_other_asset() {
    let ctx = setup();
    let route = ctx.pools.route_wglmr_busd(SPLIT_ROUTE_B_IN);
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_ROUTE_B_IN);

    ctx.engine_client.execute(
        &ctx.pools.plan([route]),
        &ctx.pools.wglmr,
        &ctx.pools.usdc,
        &0,
    );
}

#[test]
#[should_panic(expected = "32710")]
fn execute_same_asset() {
    let ctx = setup();
    let route = ctx.pools.route_wglmr_busd(SPLIT_ROUTE_B_IN);

    ctx.engine_client.execute(
        &ctx.pools.plan([route]),
        &ctx.pools.busd,
        &ctx.pools.busd,
        &0,
    );
}

#[test]
#[should_panic(expected = "32712")]
fn execute_negative_floor() {
    let ctx = setup();
    let route = ctx.pools.route_wglmr_busd(SPLIT_ROUTE_B_IN);
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_ROUTE_B_IN);

    ctx.engine_client.execute(
        &ctx.pools.plan([route]),
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &-1,
    );
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn execute_from_unknown_caller() {
    let ctx = setup();
    let plan = ctx.pools.split_plan();
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);

    ctx.env.set_auths(&[]);
    ctx.engine_client
        .execute(&plan, &ctx.pools.wglmr, &ctx.pools.busd, &0);
}

#[test]
fn approve_pools_grants_allowance() {
    let ctx = setup();
    let usdc = ctx.pools.token(&ctx.pools.usdc);
    assert_eq!(usdc.allowance(&ctx.engine, &ctx.pools.stable_pool), 0);

    ctx.engine_client.approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone()]),
        &Vec::from_array(&ctx.env, [ctx.pools.stable_pool.clone()]),
    );
    assert_eq!(usdc.allowance(&ctx.engine, &ctx.pools.stable_pool), i128::MAX);

    //the stable hop spends the standing allowance instead of a per-swap approval
    ctx.fund_engine(&ctx.pools.wglmr, SPLIT_PLAN_IN);
    let (sequences, _) = ctx.engine_client.quote(&ctx.pools.split_plan());
    let usdc_spent = sequences.get(0).unwrap().get(1).unwrap();
    ctx.engine_client.execute(
        &ctx.pools.split_plan(),
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &0,
    );
    assert_eq!(
        usdc.allowance(&ctx.engine, &ctx.pools.stable_pool),
        i128::MAX - usdc_spent
    );
}

#[test]
#[should_panic(expected = "32723")]
fn approve_pools_length_mismatch() {
    let ctx = setup();
    ctx.engine_client.approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone(), ctx.pools.busd.clone()]),
        &Vec::from_array(&ctx.env, [ctx.pools.stable_pool.clone()]),
    );
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn approve_pools_from_unknown_caller() {
    let ctx = setup();
    ctx.env.set_auths(&[]);
    ctx.engine_client.approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone()]),
        &Vec::<Address>::from_array(&ctx.env, [ctx.pools.stable_pool.clone()]),
    );
}
