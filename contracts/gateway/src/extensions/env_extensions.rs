use soroban_sdk::{storage::Instance, symbol_short, Address, Env, Symbol};
use split_router_types::RouterError;

const OPERATOR_KEY: Symbol = symbol_short!("operator");
const ENGINE_KEY: Symbol = symbol_short!("engine");
const WRAPPER_KEY: Symbol = symbol_short!("wrapper");
const WRAPPED_KEY: Symbol = symbol_short!("wrapped");

pub trait EnvExtensions {
    fn get_operator(&self) -> Result<Address, RouterError>;

    fn set_operator(&self, operator: &Address);

    fn get_engine(&self) -> Result<Address, RouterError>;

    fn set_engine(&self, engine: &Address);

    fn get_wrapper(&self) -> Result<Address, RouterError>;

    fn set_wrapper(&self, wrapper: &Address);

    fn get_wrapped(&self) -> Result<Address, RouterError>;

    fn set_wrapped(&self, wrapped: &Address);

    fn bump_instance(&self);

    fn require_operator(&self) -> Result<Address, RouterError>;

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(self).has(&OPERATOR_KEY)
    }

    fn get_operator(&self) -> Result<Address, RouterError> {
        read_address(self, &OPERATOR_KEY)
    }

    fn set_operator(&self, operator: &Address) {
        get_instance_storage(self).set(&OPERATOR_KEY, operator);
    }

    fn get_engine(&self) -> Result<Address, RouterError> {
        read_address(self, &ENGINE_KEY)
    }

    fn set_engine(&self, engine: &Address) {
        get_instance_storage(self).set(&ENGINE_KEY, engine);
    }

    fn get_wrapper(&self) -> Result<Address, RouterError> {
        read_address(self, &WRAPPER_KEY)
    }

    fn set_wrapper(&self, wrapper: &Address) {
        get_instance_storage(self).set(&WRAPPER_KEY, wrapper);
    }

    fn get_wrapped(&self) -> Result<Address, RouterError> {
        read_address(self, &WRAPPED_KEY)
    }

    fn set_wrapped(&self, wrapped: &Address) {
        get_instance_storage(self).set(&WRAPPED_KEY, wrapped);
    }

    fn require_operator(&self) -> Result<Address, RouterError> {
        let operator = self.get_operator()?;
        operator.require_auth();
        Ok(operator)
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

const LPH: u32 = 720;

fn read_address(e: &Env, key: &Symbol) -> Result<Address, RouterError> {
    get_instance_storage(e)
        .get(key)
        .ok_or(RouterError::NotInitialized)
}

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}
