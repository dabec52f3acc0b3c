//! Balances and allowances.
//!
//! Every function here checks first and writes last, so a failed call leaves
//! storage untouched even before the host rolls the invocation back.

use soroban_sdk::{Address, Env, String};

use crate::allowance::{AllowanceProvider, AllowanceSlot, StaticAllowance, VestingAllowance};
use crate::controller;
use crate::errors::TokenError;
use crate::genesis::Allocation;
use crate::storage;

/// Strkey of the all-zero ed25519 account, used as the burn-style null target.
pub const NULL_ACCOUNT_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT_STRKEY))
}

pub fn require_recipient(env: &Env, to: &Address) -> Result<(), TokenError> {
    if *to == null_address(env) {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

pub fn require_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Debits `from` and credits `to`.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = storage::read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }
    let to_balance = storage::read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    storage::write_balance(env, from, from_balance - amount);
    storage::write_balance(env, to, to_balance);
    Ok(())
}

/// Provider currently backing an (owner, spender) pair.
pub enum PairAllowance {
    Static(StaticAllowance),
    Vesting(Allocation, VestingAllowance),
}

impl PairAllowance {
    pub fn load(env: &Env, owner: &Address, spender: &Address) -> Result<Self, TokenError> {
        match storage::read_allowance_slot(env, owner, spender) {
            None => Ok(PairAllowance::Static(StaticAllowance { amount: 0 })),
            Some(AllowanceSlot::Static(amount)) => Ok(PairAllowance::Static(StaticAllowance { amount })),
            Some(AllowanceSlot::Vesting(role)) => Ok(PairAllowance::Vesting(
                role,
                controller::vesting_allowance(env, role)?,
            )),
        }
    }

    /// Writes the provider's state back after a successful spend.
    pub fn commit(&self, env: &Env, owner: &Address, spender: &Address) {
        match self {
            PairAllowance::Static(a) => {
                storage::write_allowance_slot(env, owner, spender, &AllowanceSlot::Static(a.amount))
            }
            PairAllowance::Vesting(role, a) => controller::commit_draw(env, *role, a),
        }
    }
}

impl AllowanceProvider for PairAllowance {
    fn available(&self, now: u64) -> i128 {
        match self {
            PairAllowance::Static(a) => a.available(now),
            PairAllowance::Vesting(_, a) => a.available(now),
        }
    }

    fn consume(&mut self, now: u64, amount: i128) -> Result<(), TokenError> {
        match self {
            PairAllowance::Static(a) => a.consume(now, amount),
            PairAllowance::Vesting(_, a) => a.consume(now, amount),
        }
    }
}

/// Loads the stored allowance of an ungoverned pair for adjustment. Bucket
/// accounts cannot grant allowances of their own.
pub fn settable_allowance(env: &Env, owner: &Address, spender: &Address) -> Result<i128, TokenError> {
    match PairAllowance::load(env, owner, spender)? {
        PairAllowance::Static(a) => {
            controller::require_not_bucket(env, owner)?;
            Ok(a.amount)
        }
        PairAllowance::Vesting(..) => Err(TokenError::GovernedAllowance),
    }
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    storage::write_allowance_slot(env, owner, spender, &AllowanceSlot::Static(amount));
}
