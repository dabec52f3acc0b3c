//! Allowance providers.
//!
//! Every (owner, spender) pair resolves to one provider. Ordinary pairs carry
//! a stored number; the (bucket, owner) pairs installed at genesis derive their
//! value from the bucket's schedule and the cumulative amount already drawn.

use soroban_sdk::contracttype;

use crate::clock::elapsed_between;
use crate::errors::TokenError;
use crate::genesis::Allocation;
use crate::schedule::VestingSchedule;

/// Persisted form of a pair's provider.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllowanceSlot {
    Static(i128),
    Vesting(Allocation),
}

pub trait AllowanceProvider {
    /// Amount the spender may move right now. Never negative.
    fn available(&self, now: u64) -> i128;

    /// Records a spend of `amount`, failing if it exceeds `available(now)`.
    fn consume(&mut self, now: u64, amount: i128) -> Result<(), TokenError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StaticAllowance {
    pub amount: i128,
}

impl AllowanceProvider for StaticAllowance {
    fn available(&self, _now: u64) -> i128 {
        self.amount.max(0)
    }

    fn consume(&mut self, now: u64, amount: i128) -> Result<(), TokenError> {
        if amount > self.available(now) {
            return Err(TokenError::InsufficientAllowance);
        }
        self.amount -= amount;
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingAllowance {
    pub schedule: VestingSchedule,
    pub creation_time: u64,
    /// Cumulative amount already moved out through this allowance.
    pub drawn: i128,
}

impl VestingAllowance {
    pub fn unlocked(&self, now: u64) -> i128 {
        self.schedule
            .unlocked_at(elapsed_between(self.creation_time, now))
    }
}

impl AllowanceProvider for VestingAllowance {
    fn available(&self, now: u64) -> i128 {
        self.unlocked(now).saturating_sub(self.drawn).max(0)
    }

    fn consume(&mut self, now: u64, amount: i128) -> Result<(), TokenError> {
        if amount > self.available(now) {
            return Err(TokenError::InsufficientAllowance);
        }
        self.drawn = self
            .drawn
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        Ok(())
    }
}
