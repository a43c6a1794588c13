use granary::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, BytesN, Env, Vec,
};

use crate::{
    errors::ContractError,
    events::FarmEvents,
    farm::FarmTrait,
    msg::{ConfigResponse, StakedResponse},
    storage::{
        get_config, get_position, get_stakers, get_total_staked, save_config, save_position,
        save_stakers, save_total_staked,
        utils::{get_admin, is_admin, is_initialized, save_admin, set_initialized},
        Config,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Token farm that issues reward tokens to stakers"
);

#[contract]
pub struct Farm;

#[contractimpl]
impl FarmTrait for Farm {
    fn initialize(env: Env, admin: Address, stake_token: Address, reward_token: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Farm: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_admin(&env, &admin);

        let config = Config {
            stake_token,
            reward_token,
        };
        save_config(&env, config.clone());

        save_stakers(&env, &Vec::new(&env));
        save_total_staked(&env, 0);

        FarmEvents::initialize(&env, admin, config.stake_token, config.reward_token);
    }

    fn issue_rewards(env: Env, sender: Address) {
        sender.require_auth();
        is_admin(&env, &sender);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let farm = env.current_contract_address();
        let reward_token_client = token::Client::new(&env, &config.reward_token);

        let stakers = get_stakers(&env);

        let mut total_owed: i128 = 0;
        for staker in stakers.iter() {
            total_owed = total_owed
                .checked_add(get_position(&env, &staker).staking_balance)
                .unwrap_or_else(|| panic_with_error!(&env, ContractError::Overflow));
        }

        // The whole pass is covered or nothing is paid out.
        if reward_token_client.balance(&farm) < total_owed {
            log!(
                &env,
                "Farm: Issue rewards: reward pool does not cover the full payout"
            );
            panic_with_error!(&env, ContractError::InsufficientRewardPool);
        }

        let mut stakers_paid = 0u32;
        for staker in stakers.iter() {
            let staking_balance = get_position(&env, &staker).staking_balance;
            if staking_balance > 0 {
                reward_token_client.transfer(&farm, &staker, &staking_balance);
                stakers_paid += 1;
            }
        }

        FarmEvents::issue_rewards(&env, sender, stakers_paid, total_owed);
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    fn stake(env: Env, sender: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Farm: Stake: Trying to stake a non-positive amount");
            panic_with_error!(&env, ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let farm = env.current_contract_address();

        // The stake token enforces the sender's balance and allowance; a
        // failed pull propagates the token's own error to the caller.
        let stake_token_client = token::Client::new(&env, &config.stake_token);
        stake_token_client.transfer_from(&farm, &sender, &farm, &amount);

        let mut position = get_position(&env, &sender);
        position.staking_balance = position
            .staking_balance
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::Overflow));
        position.is_staking = true;

        if !position.has_staked {
            position.has_staked = true;
            let mut stakers = get_stakers(&env);
            stakers.push_back(sender.clone());
            save_stakers(&env, &stakers);
        }

        save_position(&env, &sender, &position);

        let total_staked = get_total_staked(&env)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::Overflow));
        save_total_staked(&env, total_staked);

        FarmEvents::stake(&env, sender, amount, position.staking_balance);
    }

    fn unstake(env: Env, sender: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut position = get_position(&env, &sender);
        let amount = position.staking_balance;

        if amount == 0 {
            log!(&env, "Farm: Unstake: Nothing staked");
            panic_with_error!(&env, ContractError::NothingStaked);
        }

        let config = get_config(&env);
        let farm = env.current_contract_address();
        let stake_token_client = token::Client::new(&env, &config.stake_token);

        // Conservation keeps the farm's holdings equal to the sum of all
        // staking balances; a shortfall here means a prior invariant breach.
        if stake_token_client.balance(&farm) < amount {
            log!(
                &env,
                "Farm: Unstake: farm holdings are below the staked balance"
            );
            panic_with_error!(&env, ContractError::TransferFailed);
        }

        stake_token_client.transfer(&farm, &sender, &amount);

        position.staking_balance = 0;
        position.is_staking = false;
        save_position(&env, &sender, &position);

        let total_staked = get_total_staked(&env)
            .checked_sub(amount)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::Overflow));
        save_total_staked(&env, total_staked);

        FarmEvents::unstake(&env, sender, amount);
    }

    fn query_config(env: Env) -> ConfigResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_admin(&env)
    }

    fn query_staking_balance(env: Env, address: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_position(&env, &address).staking_balance
    }

    fn query_is_staking(env: Env, address: Address) -> bool {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_position(&env, &address).is_staking
    }

    fn query_staked(env: Env, address: Address) -> StakedResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        let position = get_position(&env, &address);
        StakedResponse {
            staking_balance: position.staking_balance,
            is_staking: position.is_staking,
        }
    }

    fn query_stakers(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_stakers(&env)
    }

    fn query_total_staked(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_total_staked(&env)
    }
}
