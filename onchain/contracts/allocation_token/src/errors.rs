use soroban_sdk::contracterror;

/// Error codes surfaced by every fallible entry point.
///
/// Missing signatures are not listed here: `require_auth` aborts the
/// invocation inside the host before any of these checks run.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Debited account holds less than the requested amount.
    InsufficientBalance = 3,
    /// Spender's current allowance (stored or vesting-derived) is too small.
    InsufficientAllowance = 4,
    /// Recipient is the null sentinel address.
    InvalidRecipient = 5,
    /// Caller is not the owner, or not the pending owner candidate.
    Unauthorized = 6,
    /// Genesis configuration rejected: bad schedule parameters, missing or
    /// duplicated allocation roles, or a bucket on the null sentinel.
    InvalidSchedule = 7,
    /// Negative amount passed to a mutating call.
    InvalidAmount = 8,
    /// The (bucket, owner) allowance is computed from a vesting schedule and
    /// cannot be set through approve/increase/decrease.
    GovernedAllowance = 9,
    ArithmeticOverflow = 10,
}
