use granary::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized = 1,
    Config = 2,
    Admin = 3,
    Stakers = 4,
    TotalStaked = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub stake_token: Address,
    pub reward_token: Address,
}

/// Per-staker record. `is_staking` is kept as its own bit rather than derived
/// from the balance so a freshly unstaked position reads as explicitly
/// inactive; `has_staked` doubles as the registry membership marker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerPosition {
    pub staking_balance: i128,
    pub is_staking: bool,
    pub has_staked: bool,
}

impl StakerPosition {
    pub fn new() -> Self {
        StakerPosition {
            staking_balance: 0,
            is_staking: false,
            has_staked: false,
        }
    }
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn get_position(env: &Env, key: &Address) -> StakerPosition {
    let position = match env.storage().persistent().get::<_, StakerPosition>(key) {
        Some(position) => position,
        None => StakerPosition::new(),
    };

    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    position
}

pub fn save_position(env: &Env, key: &Address, position: &StakerPosition) {
    env.storage().persistent().set(key, position);
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_stakers(env: &Env) -> Vec<Address> {
    let stakers = env
        .storage()
        .persistent()
        .get(&DataKey::Stakers)
        .unwrap_or_else(|| Vec::new(env));

    if env.storage().persistent().has(&DataKey::Stakers) {
        env.storage().persistent().extend_ttl(
            &DataKey::Stakers,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    stakers
}

pub fn save_stakers(env: &Env, stakers: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Stakers, stakers);
    env.storage().persistent().extend_ttl(
        &DataKey::Stakers,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_total_staked(env: &Env) -> i128 {
    let total_staked = env
        .storage()
        .persistent()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0i128);

    if env.storage().persistent().has(&DataKey::TotalStaked) {
        env.storage().persistent().extend_ttl(
            &DataKey::TotalStaked,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    total_staked
}

pub fn save_total_staked(env: &Env, total_staked: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalStaked, &total_staked);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalStaked,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use granary::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
    use soroban_sdk::{log, panic_with_error};

    use super::*;
    use crate::errors::ContractError;

    pub fn is_initialized(e: &Env) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&DataKey::Initialized, &true);
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn save_admin(e: &Env, address: &Address) {
        e.storage().persistent().set(&DataKey::Admin, address);
        e.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    pub fn get_admin(e: &Env) -> Address {
        let admin = e
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| {
                log!(e, "Farm: Admin not set");
                panic_with_error!(e, ContractError::AdminNotSet)
            });

        e.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        admin
    }

    pub fn is_admin(e: &Env, sender: &Address) {
        let admin = get_admin(e);
        if admin != *sender {
            log!(e, "Farm: You are not authorized!");
            panic_with_error!(e, ContractError::NotAuthorized);
        }
    }
}
