//! Two-step owner handoff: the owner proposes, the candidate confirms.

use soroban_sdk::{log, Address, Env};

use crate::controller;
use crate::errors::TokenError;
use crate::events;
use crate::storage;

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if storage::read_owner(env)? != *caller {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

pub fn propose(env: &Env, caller: &Address, candidate: &Address) -> Result<(), TokenError> {
    require_owner(env, caller)?;
    storage::write_pending_owner(env, candidate);
    events::owner_proposed(env, caller, candidate);
    Ok(())
}

pub fn confirm(env: &Env, caller: &Address) -> Result<(), TokenError> {
    match storage::read_pending_owner(env) {
        Some(candidate) if candidate == *caller => {}
        _ => return Err(TokenError::Unauthorized),
    }
    controller::require_not_bucket(env, caller)?;
    let previous = storage::read_owner(env)?;

    controller::rekey(env, &previous, caller)?;
    storage::write_owner(env, caller);
    storage::clear_pending_owner(env);

    log!(env, "ownership transferred", previous, caller.clone());
    events::owner_confirmed(env, &previous, caller);
    Ok(())
}
