use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const EVT_TRANSFER: Symbol = symbol_short!("transfer");
const EVT_APPROVE: Symbol = symbol_short!("approve");
const EVT_OWNER_PROPOSED: Symbol = symbol_short!("own_prop");
const EVT_OWNER_CONFIRMED: Symbol = symbol_short!("own_conf");
const EVT_RESCUE: Symbol = symbol_short!("rescue");

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Transfer,
    Approval,
}

/// Record returned by every successful token mutation and published as an
/// event. For approvals `from`/`to` are owner/spender and `value` is the
/// resulting allowance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub from: Address,
    pub to: Address,
    pub value: i128,
}

pub fn transfer(env: &Env, from: &Address, to: &Address, value: i128) -> Notification {
    env.events()
        .publish((EVT_TRANSFER, from.clone(), to.clone()), value);
    Notification {
        kind: NotificationKind::Transfer,
        from: from.clone(),
        to: to.clone(),
        value,
    }
}

pub fn approval(env: &Env, owner: &Address, spender: &Address, value: i128) -> Notification {
    env.events()
        .publish((EVT_APPROVE, owner.clone(), spender.clone()), value);
    Notification {
        kind: NotificationKind::Approval,
        from: owner.clone(),
        to: spender.clone(),
        value,
    }
}

pub fn owner_proposed(env: &Env, owner: &Address, candidate: &Address) {
    env.events()
        .publish((EVT_OWNER_PROPOSED, owner.clone()), candidate.clone());
}

pub fn owner_confirmed(env: &Env, previous: &Address, owner: &Address) {
    env.events()
        .publish((EVT_OWNER_CONFIRMED, previous.clone()), owner.clone());
}

pub fn rescued(env: &Env, asset: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((EVT_RESCUE, asset.clone(), to.clone()), amount);
}
