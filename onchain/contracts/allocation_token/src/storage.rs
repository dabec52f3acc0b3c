use soroban_sdk::{contracttype, Address, Env, String};

use crate::allowance::AllowanceSlot;
use crate::errors::TokenError;
use crate::genesis::{Allocation, AllocationGrant};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    PendingOwner,
    CreationTime,
    TotalSupply,
    Name,
    Symbol,
    Decimals,
    /// Genesis grant for a role: role -> AllocationGrant
    Grant(Allocation),
    /// Cumulative transfer_from debits against a role's vesting allowance.
    Drawn(Allocation),
    /// Reverse index of genesis bucket accounts: account -> role
    Bucket(Address),
    Balance(Address),
    /// (owner, spender) -> AllowanceSlot
    Allowance(Address, Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn require_initialized(env: &Env) -> Result<(), TokenError> {
    if !is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

pub fn mark_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn read_owner(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn write_pending_owner(env: &Env, candidate: &Address) {
    env.storage().instance().set(&DataKey::PendingOwner, candidate);
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingOwner);
}

pub fn read_creation_time(env: &Env) -> Result<u64, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::CreationTime)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_creation_time(env: &Env, at: u64) {
    env.storage().instance().set(&DataKey::CreationTime, &at);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn write_metadata(env: &Env, name: &String, symbol: &String, decimals: u32) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Name, name);
    storage.set(&DataKey::Symbol, symbol);
    storage.set(&DataKey::Decimals, &decimals);
}

pub fn read_name(env: &Env) -> Result<String, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Name)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_symbol(env: &Env) -> Result<String, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Symbol)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_decimals(env: &Env) -> Result<u32, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_grant(env: &Env, role: Allocation) -> Result<AllocationGrant, TokenError> {
    env.storage()
        .persistent()
        .get(&DataKey::Grant(role))
        .ok_or(TokenError::NotInitialized)
}

pub fn write_grant(env: &Env, grant: &AllocationGrant) {
    env.storage()
        .persistent()
        .set(&DataKey::Grant(grant.role), grant);
}

pub fn read_drawn(env: &Env, role: Allocation) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Drawn(role))
        .unwrap_or(0)
}

pub fn write_drawn(env: &Env, role: Allocation, drawn: i128) {
    env.storage().persistent().set(&DataKey::Drawn(role), &drawn);
}

pub fn write_bucket(env: &Env, account: &Address, role: Allocation) {
    env.storage()
        .persistent()
        .set(&DataKey::Bucket(account.clone()), &role);
}

pub fn is_bucket(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Bucket(account.clone()))
}

pub fn read_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}

pub fn read_allowance_slot(env: &Env, owner: &Address, spender: &Address) -> Option<AllowanceSlot> {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
}

pub fn write_allowance_slot(env: &Env, owner: &Address, spender: &Address, slot: &AllowanceSlot) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(owner.clone(), spender.clone()), slot);
}

pub fn remove_allowance_slot(env: &Env, owner: &Address, spender: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Allowance(owner.clone(), spender.clone()));
}
