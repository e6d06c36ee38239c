use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    symbol_short, Address, Env, IntoVal, Vec,
};

// Add authorization for the wrapper to burn wrapped tokens held by the current contract
//
// # Arguments
//
// * `env` - The environment
// * `wrapped` - The address of the wrapped native token
// * `amount` - The amount of wrapped tokens to burn
pub fn add_burn_auth(env: &Env, wrapped: &Address, amount: i128) {
    let invocation = InvokerContractAuthEntry::Contract(SubContractInvocation {
        context: ContractContext {
            contract: wrapped.clone(),
            fn_name: symbol_short!("burn"),
            args: Vec::from_array(
                env,
                [
                    env.current_contract_address().to_val(),
                    amount.into_val(env),
                ],
            ),
        },
        sub_invocations: Vec::new(env),
    });

    env.authorize_as_current_contract(Vec::from_array(env, [invocation]));
}
