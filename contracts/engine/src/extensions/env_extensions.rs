use soroban_sdk::{storage::Instance, symbol_short, Address, Env, Symbol};
use split_router_types::RouterError;

const ADMIN_KEY: Symbol = symbol_short!("admin");
const GATEWAY_KEY: Symbol = symbol_short!("gateway");

pub trait EnvExtensions {
    fn get_admin(&self) -> Result<Address, RouterError>;

    fn set_admin(&self, admin: &Address);

    fn get_gateway(&self) -> Result<Address, RouterError>;

    fn set_gateway(&self, gateway: &Address);

    fn bump_instance(&self);

    fn require_admin(&self) -> Result<Address, RouterError>;

    // Only the pinned gateway may move funds through the engine
    fn require_gateway(&self) -> Result<Address, RouterError>;

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(self).has(&ADMIN_KEY)
    }

    fn get_admin(&self) -> Result<Address, RouterError> {
        get_instance_storage(self)
            .get(&ADMIN_KEY)
            .ok_or(RouterError::NotInitialized)
    }

    fn set_admin(&self, admin: &Address) {
        get_instance_storage(self).set(&ADMIN_KEY, admin);
    }

    fn get_gateway(&self) -> Result<Address, RouterError> {
        get_instance_storage(self)
            .get(&GATEWAY_KEY)
            .ok_or(RouterError::NotInitialized)
    }

    fn set_gateway(&self, gateway: &Address) {
        get_instance_storage(self).set(&GATEWAY_KEY, gateway);
    }

    fn require_admin(&self) -> Result<Address, RouterError> {
        let admin = self.get_admin()?;
        admin.require_auth();
        Ok(admin)
    }

    fn require_gateway(&self) -> Result<Address, RouterError> {
        let gateway = self.get_gateway()?;
        gateway.require_auth();
        Ok(gateway)
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

const LPH: u32 = 720;

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}
