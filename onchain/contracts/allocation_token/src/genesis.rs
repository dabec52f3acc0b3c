//! Genesis configuration: token metadata, the owner and the five allocation
//! buckets with their schedules. Fixed at `initialize`, never mutated.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::errors::TokenError;
use crate::schedule::{AccrualLimit, PeriodEpoch, VestingSchedule};

pub const DECIMALS: u32 = 18;
/// One whole token in base units.
pub const UNIT: i128 = 1_000_000_000_000_000_000;
pub const DAY: u64 = 24 * 60 * 60;
pub const MONTH: u64 = 30 * DAY;

/// Stakeholder classes funded at genesis.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Allocation {
    Investors,
    /// Overdraft reserve.
    Overdraft,
    Team,
    Community,
    Advisers,
}

impl Allocation {
    pub const ALL: [Allocation; 5] = [
        Allocation::Investors,
        Allocation::Overdraft,
        Allocation::Team,
        Allocation::Community,
        Allocation::Advisers,
    ];
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationGrant {
    pub role: Allocation,
    /// Bucket account holding the grant.
    pub account: Address,
    pub schedule: VestingSchedule,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenesisConfig {
    /// Initial owner; spender of every bucket's vesting allowance.
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub allocations: Vec<AllocationGrant>,
}

impl GenesisConfig {
    /// Checks roles, bucket accounts and schedules, returning the total
    /// supply minted across all buckets. The owner may not hold a bucket.
    pub fn validate(&self, null: &Address) -> Result<i128, TokenError> {
        if self.allocations.len() != Allocation::ALL.len() as u32 {
            return Err(TokenError::InvalidSchedule);
        }

        let mut supply: i128 = 0;
        for i in 0..self.allocations.len() {
            let grant = self.allocations.get_unchecked(i);
            if grant.account == *null || grant.account == self.owner {
                return Err(TokenError::InvalidSchedule);
            }
            for j in (i + 1)..self.allocations.len() {
                let other = self.allocations.get_unchecked(j);
                if other.role == grant.role || other.account == grant.account {
                    return Err(TokenError::InvalidSchedule);
                }
            }
            grant.schedule.validate()?;
            supply = supply
                .checked_add(grant.schedule.total)
                .ok_or(TokenError::ArithmeticOverflow)?;
        }
        Ok(supply)
    }
}

fn tokens(whole: i128) -> i128 {
    whole * UNIT
}

/// Production parameters of each bucket.
pub fn reference_schedule(role: Allocation) -> VestingSchedule {
    match role {
        Allocation::Investors => VestingSchedule {
            total: tokens(525_000_000),
            unvested: tokens(525_000_000),
            cliff_seconds: 0,
            period_length_seconds: MONTH,
            period_amount: 0,
            periods_number: 0,
            epoch: PeriodEpoch::Creation,
            accrual: AccrualLimit::Uncapped,
        },
        Allocation::Overdraft => VestingSchedule {
            total: tokens(250_000_000),
            unvested: tokens(4),
            cliff_seconds: 5 * MONTH,
            period_length_seconds: MONTH,
            period_amount: tokens(41_666_666),
            periods_number: 6,
            epoch: PeriodEpoch::CliffEnd,
            accrual: AccrualLimit::Uncapped,
        },
        Allocation::Team => VestingSchedule {
            total: tokens(112_500_000),
            unvested: 0,
            cliff_seconds: 0,
            period_length_seconds: 3 * MONTH,
            period_amount: tokens(7_031_250),
            periods_number: 16,
            epoch: PeriodEpoch::Creation,
            accrual: AccrualLimit::Uncapped,
        },
        Allocation::Community => VestingSchedule {
            total: tokens(60_000_000),
            unvested: tokens(10_000_002),
            cliff_seconds: 0,
            period_length_seconds: 3 * MONTH,
            period_amount: tokens(8_333_333),
            periods_number: 6,
            epoch: PeriodEpoch::Creation,
            accrual: AccrualLimit::Uncapped,
        },
        Allocation::Advisers => VestingSchedule {
            total: tokens(52_500_000),
            unvested: tokens(25_000_008),
            cliff_seconds: 0,
            period_length_seconds: MONTH,
            period_amount: tokens(2_291_666),
            periods_number: 12,
            epoch: PeriodEpoch::Creation,
            accrual: AccrualLimit::Uncapped,
        },
    }
}

/// Builds the production genesis. `accounts` are the bucket accounts in
/// `Allocation::ALL` order.
pub fn reference_genesis(env: &Env, owner: &Address, accounts: &[Address; 5]) -> GenesisConfig {
    let mut allocations = Vec::new(env);
    for (role, account) in Allocation::ALL.iter().zip(accounts.iter()) {
        allocations.push_back(AllocationGrant {
            role: *role,
            account: account.clone(),
            schedule: reference_schedule(*role),
        });
    }
    GenesisConfig {
        owner: owner.clone(),
        name: String::from_str(env, "Nexo"),
        symbol: String::from_str(env, "NEXO"),
        decimals: DECIMALS,
        allocations,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference_schedules_validate() {
        for role in Allocation::ALL {
            assert_eq!(reference_schedule(role).validate(), Ok(()));
        }
    }

    #[test]
    fn reference_supply_is_one_billion_tokens() {
        let supply: i128 = Allocation::ALL
            .iter()
            .map(|role| reference_schedule(*role).total)
            .sum();
        assert_eq!(supply, tokens(1_000_000_000));
    }

    #[test]
    fn vesting_buckets_are_fully_scheduled() {
        for role in Allocation::ALL {
            let s = reference_schedule(role);
            let scheduled = s.unvested + s.period_amount * i128::from(s.periods_number);
            assert_eq!(scheduled, s.total);
        }
    }
}
