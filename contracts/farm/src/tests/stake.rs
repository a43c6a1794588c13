extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    vec, Address, Env, IntoVal, Symbol,
};
use test_case::test_case;

use super::setup::{deploy_farm_contract, deploy_token_contract};

#[test]
fn stake_simple() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &100);
    stake_token.approve(&user, &farm.address, &100, &200);

    farm.stake(&user, &100);

    assert_eq!(
        env.auths(),
        [(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    farm.address.clone(),
                    Symbol::new(&env, "stake"),
                    (user.clone(), 100_i128).into_val(&env),
                )),
                sub_invocations: std::vec![],
            },
        )]
    );

    assert_eq!(stake_token.balance(&user), 0);
    assert_eq!(stake_token.balance(&farm.address), 100);

    assert_eq!(farm.query_staking_balance(&user), 100);
    assert!(farm.query_is_staking(&user));
    assert_eq!(farm.query_stakers(), vec![&env, user.clone()]);
    assert_eq!(farm.query_total_staked(), 100);
}

#[test]
fn stake_accumulates_and_registers_once() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &150);
    stake_token.approve(&user, &farm.address, &150, &200);

    farm.stake(&user, &100);
    farm.stake(&user, &50);

    // Repeated stakes add up; the registry still holds a single entry.
    assert_eq!(farm.query_staking_balance(&user), 150);
    assert_eq!(farm.query_stakers(), vec![&env, user.clone()]);
    assert_eq!(farm.query_total_staked(), 150);
    assert_eq!(stake_token.balance(&farm.address), 150);
}

#[test_case(0 ; "zero amount")]
#[test_case(-100 ; "negative amount")]
#[should_panic(expected = "Farm: Stake: Trying to stake a non-positive amount")]
fn stake_rejects_non_positive_amount(amount: i128) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &100);
    stake_token.approve(&user, &farm.address, &100, &200);

    farm.stake(&user, &amount);
}

#[test]
fn stake_without_allowance_fails_and_changes_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &100);

    // No approve call; the stake token rejects the pull and the error is
    // propagated rather than masked.
    assert!(farm.try_stake(&user, &100).is_err());

    assert_eq!(stake_token.balance(&user), 100);
    assert_eq!(stake_token.balance(&farm.address), 0);
    assert_eq!(farm.query_staking_balance(&user), 0);
    assert!(!farm.query_is_staking(&user));
    assert_eq!(farm.query_total_staked(), 0);
}

#[test]
fn stake_without_balance_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    // Allowance in place but nothing to pull.
    stake_token.approve(&user, &farm.address, &100, &200);

    assert!(farm.try_stake(&user, &100).is_err());
    assert_eq!(farm.query_staking_balance(&user), 0);
}

#[test]
fn unstake_returns_full_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &100);
    stake_token.approve(&user, &farm.address, &100, &200);
    farm.stake(&user, &100);

    farm.unstake(&user);

    assert_eq!(stake_token.balance(&user), 100);
    assert_eq!(stake_token.balance(&farm.address), 0);
    assert_eq!(farm.query_staking_balance(&user), 0);
    assert!(!farm.query_is_staking(&user));
    assert_eq!(farm.query_total_staked(), 0);

    // Registry membership survives the withdrawal so the user can come back.
    assert_eq!(farm.query_stakers(), vec![&env, user.clone()]);

    stake_token.approve(&user, &farm.address, &100, &200);
    farm.stake(&user, &100);

    assert_eq!(farm.query_staking_balance(&user), 100);
    assert!(farm.query_is_staking(&user));
    assert_eq!(farm.query_stakers(), vec![&env, user.clone()]);
}

#[test]
#[should_panic(expected = "Farm: Unstake: Nothing staked")]
fn unstake_with_nothing_staked_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    farm.unstake(&user);
}

#[test]
fn stake_and_unstake_conserve_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let user2 = Address::generate(&env);
    let (stake_token, stake_token_admin) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let farm = deploy_farm_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_token_admin.mint(&user, &500);
    stake_token_admin.mint(&user2, &300);
    stake_token.approve(&user, &farm.address, &500, &200);
    stake_token.approve(&user2, &farm.address, &300, &200);

    farm.stake(&user, &200);
    assert_eq!(stake_token.balance(&farm.address), farm.query_total_staked());

    farm.stake(&user2, &300);
    assert_eq!(stake_token.balance(&farm.address), farm.query_total_staked());

    farm.stake(&user, &300);
    assert_eq!(stake_token.balance(&farm.address), farm.query_total_staked());
    assert_eq!(
        farm.query_staking_balance(&user) + farm.query_staking_balance(&user2),
        farm.query_total_staked()
    );

    farm.unstake(&user2);
    assert_eq!(stake_token.balance(&farm.address), farm.query_total_staked());

    farm.unstake(&user);
    assert_eq!(stake_token.balance(&farm.address), 0);
    assert_eq!(farm.query_total_staked(), 0);

    // Held funds always matched the sum of the individual positions.
    assert_eq!(stake_token.balance(&user), 500);
    assert_eq!(stake_token.balance(&user2), 300);
}
