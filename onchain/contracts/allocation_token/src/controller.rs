//! Allocation vesting controller.
//!
//! Binds each bucket's (bucket, owner) allowance slot to the bucket's
//! schedule. The derived allowance is recomputed on every read from the
//! creation time, the current clock and the cumulative draws; only the draws
//! are persisted.

use soroban_sdk::{Address, Env};

use crate::allowance::{AllowanceSlot, VestingAllowance};
use crate::clock::{elapsed_since, Clock};
use crate::errors::TokenError;
use crate::genesis::{Allocation, AllocationGrant};
use crate::storage;

/// Loads the provider backing `role`'s vesting allowance.
pub fn vesting_allowance(env: &Env, role: Allocation) -> Result<VestingAllowance, TokenError> {
    let grant = storage::read_grant(env, role)?;
    Ok(VestingAllowance {
        schedule: grant.schedule,
        creation_time: storage::read_creation_time(env)?,
        drawn: storage::read_drawn(env, role),
    })
}

/// Cumulative amount released by `role`'s schedule at the clock's time.
pub fn unlocked_amount<C: Clock>(env: &Env, clock: &C, role: Allocation) -> Result<i128, TokenError> {
    let allowance = vesting_allowance(env, role)?;
    Ok(allowance
        .schedule
        .unlocked_at(elapsed_since(clock, allowance.creation_time)))
}

/// Persists the draw total after a successful spend.
pub fn commit_draw(env: &Env, role: Allocation, allowance: &VestingAllowance) {
    storage::write_drawn(env, role, allowance.drawn);
}

/// Installs the bucket grant and its vesting slot for `owner`.
pub fn install(env: &Env, grant: &AllocationGrant, owner: &Address) {
    storage::write_grant(env, grant);
    storage::write_bucket(env, &grant.account, grant.role);
    storage::write_drawn(env, grant.role, 0);
    storage::write_allowance_slot(
        env,
        &grant.account,
        owner,
        &AllowanceSlot::Vesting(grant.role),
    );
}

/// Bucket accounts never act on their own; their balance leaves only through
/// the owner's vesting allowance.
pub fn require_not_bucket(env: &Env, account: &Address) -> Result<(), TokenError> {
    if storage::is_bucket(env, account) {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Moves every vesting slot from `previous` to `next` so the governed spender
/// always tracks the current owner. Draw totals are per bucket and unaffected.
pub fn rekey(env: &Env, previous: &Address, next: &Address) -> Result<(), TokenError> {
    for role in Allocation::ALL {
        let grant = storage::read_grant(env, role)?;
        storage::remove_allowance_slot(env, &grant.account, previous);
        storage::write_allowance_slot(env, &grant.account, next, &AllowanceSlot::Vesting(role));
    }
    Ok(())
}
