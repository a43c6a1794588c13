use soroban_sdk::{Address, Env, Symbol};

pub struct FarmEvents {}

impl FarmEvents {
    /// Emitted when the farm is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[stake_token: Address, reward_token: Address]`
    pub fn initialize(env: &Env, admin: Address, stake_token: Address, reward_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (stake_token, reward_token));
    }

    /// Emitted when a staker deposits stake tokens
    ///
    /// - topics - `["stake", staker: Address]`
    /// - data - `[amount: i128, staking_balance: i128]`
    pub fn stake(env: &Env, staker: Address, amount: i128, staking_balance: i128) {
        let topics = (Symbol::new(env, "stake"), staker);
        env.events().publish(topics, (amount, staking_balance));
    }

    /// Emitted when a staker withdraws their full staking balance
    ///
    /// - topics - `["unstake", staker: Address]`
    /// - data - `[amount: i128]`
    pub fn unstake(env: &Env, staker: Address, amount: i128) {
        let topics = (Symbol::new(env, "unstake"), staker);
        env.events().publish(topics, amount);
    }

    /// Emitted once per successful reward issuance pass
    ///
    /// - topics - `["issue_rewards", admin: Address]`
    /// - data - `[stakers_paid: u32, total_paid: i128]`
    pub fn issue_rewards(env: &Env, admin: Address, stakers_paid: u32, total_paid: i128) {
        let topics = (Symbol::new(env, "issue_rewards"), admin);
        env.events().publish(topics, (stakers_paid, total_paid));
    }
}
