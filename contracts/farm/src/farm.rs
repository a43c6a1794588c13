use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::msg::{ConfigResponse, StakedResponse};

pub trait FarmTrait {
    // ################################################################
    //                             Admin
    // ################################################################

    fn initialize(env: Env, admin: Address, stake_token: Address, reward_token: Address);

    /// Pay every registered staker their current staking balance in reward
    /// tokens, out of the farm's own reward holdings. Admin only.
    fn issue_rewards(env: Env, sender: Address);

    fn update(env: Env, new_wasm_hash: BytesN<32>);

    // ################################################################
    //                             Users
    // ################################################################

    /// Pull `amount` of the stake token from `sender` (requires a prior
    /// allowance for the farm) and add it to their staking balance.
    fn stake(env: Env, sender: Address, amount: i128);

    /// Return the sender's full staking balance. There is no partial
    /// withdrawal; the position is zeroed and the staking flag cleared.
    fn unstake(env: Env, sender: Address);

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_staking_balance(env: Env, address: Address) -> i128;

    fn query_is_staking(env: Env, address: Address) -> bool;

    fn query_staked(env: Env, address: Address) -> StakedResponse;

    fn query_stakers(env: Env) -> Vec<Address>;

    fn query_total_staked(env: Env) -> i128;
}
