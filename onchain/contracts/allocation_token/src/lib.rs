#![no_std]

//! Allocation Token Contract
//!
//! Fixed-supply fungible token whose supply is minted once into five
//! allocation buckets. Each bucket's balance is released to the owner through
//! an allowance that grows over time according to the bucket's vesting
//! schedule; every other (owner, spender) pair behaves as a plain settable
//! allowance.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

mod allowance;
mod clock;
mod controller;
mod errors;
mod events;
mod genesis;
mod ledger;
mod ownership;
mod schedule;
mod storage;

pub use allowance::AllowanceSlot;
pub use errors::TokenError;
pub use events::{Notification, NotificationKind};
pub use genesis::{
    reference_genesis, reference_schedule, Allocation, AllocationGrant, GenesisConfig, DAY,
    DECIMALS, MONTH, UNIT,
};
pub use ledger::{null_address, NULL_ACCOUNT_STRKEY};
pub use schedule::{AccrualLimit, PeriodEpoch, VestingSchedule};

use allowance::AllowanceProvider;
use clock::{Clock, LedgerClock};
use ledger::PairAllowance;

#[contract]
pub struct AllocationTokenContract;

#[contractimpl]
impl AllocationTokenContract {
    /// @notice Mints the fixed supply into the allocation buckets.
    /// @dev Callable once; records the creation time every schedule is
    ///      measured from and binds each bucket's allowance to `config.owner`.
    /// @param config Token metadata, owner and the five allocation grants.
    pub fn initialize(env: Env, config: GenesisConfig) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        config.owner.require_auth();

        let null = null_address(&env);
        let supply = config.validate(&null)?;

        let creation_time = LedgerClock::new(&env).now();
        storage::write_owner(&env, &config.owner);
        storage::write_creation_time(&env, creation_time);
        storage::write_metadata(&env, &config.name, &config.symbol, config.decimals);
        storage::write_total_supply(&env, supply);

        for grant in config.allocations.iter() {
            storage::write_balance(&env, &grant.account, grant.schedule.total);
            controller::install(&env, &grant, &config.owner);
            events::transfer(&env, &null, &grant.account, grant.schedule.total);
        }

        storage::mark_initialized(&env);
        log!(&env, "genesis minted", supply, creation_time);
        Ok(())
    }

    /// @notice Moves `amount` from the caller to `to`.
    /// @dev Bucket accounts are refused; they only pay out through
    ///      `transfer_from` by the owner.
    /// @param from Sender; must authenticate.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<Notification, TokenError> {
        storage::require_initialized(&env)?;
        from.require_auth();
        controller::require_not_bucket(&env, &from)?;

        ledger::require_non_negative(amount)?;
        ledger::require_recipient(&env, &to)?;
        ledger::move_balance(&env, &from, &to, amount)?;

        Ok(events::transfer(&env, &from, &to, amount))
    }

    /// @notice Moves `amount` from `from` to `to` against the spender's
    ///         allowance.
    /// @dev For vesting-governed pairs the draw is added to the bucket's
    ///      cumulative total instead of decrementing a stored number.
    /// @param spender Account spending the allowance; must authenticate.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<Notification, TokenError> {
        storage::require_initialized(&env)?;
        spender.require_auth();

        ledger::require_non_negative(amount)?;
        ledger::require_recipient(&env, &to)?;

        let now = LedgerClock::new(&env).now();
        let mut allowance = PairAllowance::load(&env, &from, &spender)?;
        allowance.consume(now, amount)?;
        ledger::move_balance(&env, &from, &to, amount)?;
        allowance.commit(&env, &from, &spender);

        Ok(events::transfer(&env, &from, &to, amount))
    }

    /// @notice Overwrites the allowance of `spender` over the caller's tokens.
    /// @param owner Token holder; must authenticate.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<Notification, TokenError> {
        storage::require_initialized(&env)?;
        owner.require_auth();

        ledger::require_non_negative(amount)?;
        ledger::settable_allowance(&env, &owner, &spender)?;
        ledger::set_allowance(&env, &owner, &spender, amount);

        Ok(events::approval(&env, &owner, &spender, amount))
    }

    /// @notice Adds `delta` to the allowance of `spender`.
    pub fn increase_approval(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<Notification, TokenError> {
        storage::require_initialized(&env)?;
        owner.require_auth();

        ledger::require_non_negative(delta)?;
        let next = ledger::settable_allowance(&env, &owner, &spender)?
            .checked_add(delta)
            .ok_or(TokenError::ArithmeticOverflow)?;
        ledger::set_allowance(&env, &owner, &spender, next);

        Ok(events::approval(&env, &owner, &spender, next))
    }

    /// @notice Subtracts `delta` from the allowance of `spender`, stopping at
    ///         zero.
    pub fn decrease_approval(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<Notification, TokenError> {
        storage::require_initialized(&env)?;
        owner.require_auth();

        ledger::require_non_negative(delta)?;
        let current = ledger::settable_allowance(&env, &owner, &spender)?;
        let next = if delta > current { 0 } else { current - delta };
        ledger::set_allowance(&env, &owner, &spender, next);

        Ok(events::approval(&env, &owner, &spender, next))
    }

    /// @notice Returns the amount `spender` may currently move out of `owner`.
    pub fn allowance(env: Env, owner: Address, spender: Address) -> Result<i128, TokenError> {
        storage::require_initialized(&env)?;
        let now = LedgerClock::new(&env).now();
        Ok(PairAllowance::load(&env, &owner, &spender)?.available(now))
    }

    pub fn balance(env: Env, account: Address) -> i128 {
        storage::read_balance(&env, &account)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        storage::read_name(&env)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        storage::read_symbol(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        storage::read_decimals(&env)
    }

    /// @notice Timestamp recorded at genesis; origin of every schedule.
    pub fn creation_time(env: Env) -> Result<u64, TokenError> {
        storage::read_creation_time(&env)
    }

    /// @notice Returns the genesis grant of a bucket.
    pub fn allocation(env: Env, role: Allocation) -> Result<AllocationGrant, TokenError> {
        storage::read_grant(&env, role)
    }

    pub fn allocation_total(env: Env, role: Allocation) -> Result<i128, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.total)
    }

    pub fn unvested_amount(env: Env, role: Allocation) -> Result<i128, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.unvested)
    }

    pub fn cliff_seconds(env: Env, role: Allocation) -> Result<u64, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.cliff_seconds)
    }

    pub fn period_length(env: Env, role: Allocation) -> Result<u64, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.period_length_seconds)
    }

    pub fn period_amount(env: Env, role: Allocation) -> Result<i128, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.period_amount)
    }

    pub fn periods_number(env: Env, role: Allocation) -> Result<u32, TokenError> {
        Ok(storage::read_grant(&env, role)?.schedule.periods_number)
    }

    /// @notice Cumulative amount the bucket's schedule has released so far,
    ///         ignoring draws.
    pub fn unlocked_amount(env: Env, role: Allocation) -> Result<i128, TokenError> {
        controller::unlocked_amount(&env, &LedgerClock::new(&env), role)
    }

    /// @notice Cumulative amount drawn from the bucket through its vesting
    ///         allowance.
    pub fn drawn_amount(env: Env, role: Allocation) -> Result<i128, TokenError> {
        storage::require_initialized(&env)?;
        Ok(storage::read_drawn(&env, role))
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        storage::read_owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        storage::read_pending_owner(&env)
    }

    /// @notice Nominates `candidate` as the next owner.
    /// @param caller Current owner; must authenticate.
    pub fn propose_new_owner(env: Env, caller: Address, candidate: Address) -> Result<(), TokenError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        ownership::propose(&env, &caller, &candidate)
    }

    /// @notice Completes the handoff; the vesting allowances follow the new
    ///         owner.
    /// @param caller Pending candidate; must authenticate.
    pub fn confirm_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        ownership::confirm(&env, &caller)
    }

    /// @notice Sends tokens held by this contract's own address to `to`.
    /// @dev When `asset` is this contract the move goes through the internal
    ///      ledger; otherwise the foreign token's `transfer` is invoked.
    /// @param caller Owner; must authenticate.
    pub fn rescue_foreign_asset(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        ownership::require_owner(&env, &caller)?;
        ledger::require_non_negative(amount)?;

        let this = env.current_contract_address();
        if asset == this {
            ledger::require_recipient(&env, &to)?;
            ledger::move_balance(&env, &this, &to, amount)?;
            events::transfer(&env, &this, &to, amount);
        } else {
            token::Client::new(&env, &asset).transfer(&this, &to, &amount);
        }

        events::rescued(&env, &asset, &to, amount);
        Ok(())
    }
}
