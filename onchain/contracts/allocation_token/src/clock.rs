//! Time source for vesting math.
//!
//! All schedule evaluation is relative to the creation timestamp recorded at
//! genesis. The ledger close time is non-decreasing, so readings only ever move
//! forward; a reading before the origin is treated as zero elapsed time.

use soroban_sdk::Env;

pub trait Clock {
    /// Current time in unix seconds.
    fn now(&self) -> u64;
}

/// Reads the ledger close timestamp of the executing transaction.
pub struct LedgerClock<'a> {
    env: &'a Env,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

/// Seconds elapsed since `origin`, floored at zero.
pub fn elapsed_since<C: Clock>(clock: &C, origin: u64) -> u64 {
    elapsed_between(origin, clock.now())
}

pub fn elapsed_between(origin: u64, now: u64) -> u64 {
    now.saturating_sub(origin)
}

#[cfg(test)]
pub(crate) struct FixedClock(pub u64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn elapsed_counts_from_origin() {
        assert_eq!(elapsed_since(&FixedClock(1_500), 1_000), 500);
        assert_eq!(elapsed_since(&FixedClock(1_000), 1_000), 0);
    }

    #[test]
    fn reading_before_origin_is_zero() {
        assert_eq!(elapsed_since(&FixedClock(10), 1_000), 0);
        assert_eq!(elapsed_between(1_000, 10), 0);
    }

    #[test]
    fn ledger_clock_follows_ledger_timestamp() {
        use soroban_sdk::testutils::Ledger;

        let env = Env::default();
        env.ledger().set_timestamp(42);
        assert_eq!(LedgerClock::new(&env).now(), 42);
    }
}
