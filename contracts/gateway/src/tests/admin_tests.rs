extern crate std;
use crate::tests::context::setup;
use soroban_sdk::{testutils::Address as _, Address, Vec};
use split_router_engine::RESIDUAL_BALANCE;
use split_router_mocks::fixture::{E18, SPLIT_ROUTE_B_IN};
use split_router_types::RouterError;

#[test]
fn init_stores_configuration() {
    let ctx = setup();
    assert_eq!(ctx.gateway_client.operator(), ctx.operator);
    assert_eq!(ctx.gateway_client.engine(), ctx.engine);
}

#[test]
#[should_panic(expected = "32702")]
fn init_twice() {
    let ctx = setup();
    ctx.gateway_client
        .init(&ctx.operator, &ctx.engine, &ctx.pools.wrapper, &ctx.pools.wglmr);
}

#[test]
fn set_engine_repoints_swaps() {
    let ctx = setup();
    let engine = ctx.deploy_engine();

    ctx.gateway_client.set_engine(&engine);
    assert_eq!(ctx.gateway_client.engine(), engine);

    let plan = ctx.pools.plan([ctx.pools.route_wglmr_busd(SPLIT_ROUTE_B_IN)]);
    ctx.fund_trader(&ctx.pools.wglmr, SPLIT_ROUTE_B_IN);
    ctx.gateway_client.swap_tokens_for_tokens(
        &ctx.trader,
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &ctx.recipient,
        &SPLIT_ROUTE_B_IN,
        &0,
        &ctx.deadline(),
        &plan,
    );

    //only the new engine saw the trade
    ctx.check_balance(&ctx.pools.busd, &engine, RESIDUAL_BALANCE);
    ctx.check_balance(&ctx.pools.busd, &ctx.engine, 0);
}

#[test]
#[should_panic(expected = "32732")]
fn swap_on_foreign_engine() {
    let ctx = setup();
    //a contract without the engine surface
    ctx.gateway_client.set_engine(&ctx.pools.usdc_wglmr_pair);

    let plan = ctx.pools.plan([ctx.pools.route_wglmr_busd(SPLIT_ROUTE_B_IN)]);
    ctx.fund_trader(&ctx.pools.wglmr, SPLIT_ROUTE_B_IN);
    ctx.gateway_client.swap_tokens_for_tokens(
        &ctx.trader,
        &ctx.pools.wglmr,
        &ctx.pools.busd,
        &ctx.recipient,
        &SPLIT_ROUTE_B_IN,
        &0,
        &ctx.deadline(),
        &plan,
    );
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn set_engine_from_unknown_caller() {
    let ctx = setup();
    let engine = ctx.deploy_engine();

    ctx.env.set_auths(&[]);
    ctx.gateway_client.set_engine(&engine);
}

#[test]
fn set_operator_hands_over() {
    let ctx = setup();
    let operator = Address::generate(&ctx.env);

    ctx.gateway_client.set_operator(&operator);

    assert_eq!(ctx.gateway_client.operator(), operator);
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn set_operator_from_unknown_caller() {
    let ctx = setup();
    let operator = Address::generate(&ctx.env);

    ctx.env.set_auths(&[]);
    ctx.gateway_client.set_operator(&operator);
}

#[test]
fn approve_pools_on_engine() {
    let ctx = setup();

    ctx.gateway_client.approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone(), ctx.pools.busd.clone()]),
        &Vec::from_array(
            &ctx.env,
            [ctx.pools.stable_pool.clone(), ctx.pools.stable_pool.clone()],
        ),
    );

    let usdc = ctx.pools.token(&ctx.pools.usdc);
    let busd = ctx.pools.token(&ctx.pools.busd);
    assert_eq!(usdc.allowance(&ctx.engine, &ctx.pools.stable_pool), i128::MAX);
    assert_eq!(busd.allowance(&ctx.engine, &ctx.pools.stable_pool), i128::MAX);

    //allowlisted pools keep working for swaps
    let plan = ctx.pools.plan([ctx.pools.route_busd_usdc_wglmr(100 * E18)]);
    ctx.fund_trader(&ctx.pools.busd, 100 * E18);
    ctx.gateway_client.swap_tokens_for_native(
        &ctx.trader,
        &ctx.pools.busd,
        &ctx.recipient,
        &(100 * E18),
        &0,
        &ctx.deadline(),
        &plan,
    );
    assert_eq!(
        busd.allowance(&ctx.engine, &ctx.pools.stable_pool),
        i128::MAX - 100 * E18
    );
}

#[test]
fn approve_pools_length_mismatch() {
    let ctx = setup();

    let result = ctx.gateway_client.try_approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone()]),
        &Vec::new(&ctx.env),
    );

    assert_eq!(result, Err(Ok(RouterError::LengthMismatch)));
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn approve_pools_from_unknown_caller() {
    let ctx = setup();
    ctx.env.set_auths(&[]);
    ctx.gateway_client.approve_pools(
        &Vec::from_array(&ctx.env, [ctx.pools.usdc.clone()]),
        &Vec::from_array(&ctx.env, [ctx.pools.stable_pool.clone()]),
    );
}
