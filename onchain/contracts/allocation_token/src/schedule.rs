//! Step-function vesting schedules.
//!
//! A schedule releases `unvested` immediately, then `period_amount` for every
//! full period once the cliff has passed. The same value type describes every
//! allocation bucket; per-bucket behavior is expressed through `epoch` and
//! `accrual` rather than through separate schedule kinds.

use soroban_sdk::contracttype;

use crate::errors::TokenError;

/// Where period counting starts.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PeriodEpoch {
    /// Periods are counted from creation; the cliff only gates when the
    /// accrued periods become visible.
    Creation,
    /// The first period starts when the cliff ends.
    CliffEnd,
}

/// Whether `periods_number` bounds accrual.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccrualLimit {
    /// `periods_number` is descriptive only; periods keep accruing and the
    /// bucket balance is the effective ceiling.
    Uncapped,
    /// Accrual stops after `periods_number` periods.
    PeriodsNumber,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    /// Tokens granted to the bucket at genesis.
    pub total: i128,
    /// Spendable from creation onward.
    pub unvested: i128,
    pub cliff_seconds: u64,
    pub period_length_seconds: u64,
    pub period_amount: i128,
    pub periods_number: u32,
    pub epoch: PeriodEpoch,
    pub accrual: AccrualLimit,
}

impl VestingSchedule {
    /// Rejects schedules that could never be honored by the bucket balance.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.total < 0 || self.unvested < 0 || self.period_amount < 0 {
            return Err(TokenError::InvalidSchedule);
        }
        if self.period_length_seconds == 0 {
            return Err(TokenError::InvalidSchedule);
        }
        if self.unvested > self.total {
            return Err(TokenError::InvalidSchedule);
        }
        let scheduled = self
            .period_amount
            .checked_mul(i128::from(self.periods_number))
            .and_then(|periodic| periodic.checked_add(self.unvested))
            .ok_or(TokenError::InvalidSchedule)?;
        if scheduled > self.total {
            return Err(TokenError::InvalidSchedule);
        }
        Ok(())
    }

    /// Number of whole periods accrued after `elapsed` seconds.
    pub fn periods_elapsed(&self, elapsed: u64) -> u64 {
        if elapsed < self.cliff_seconds || self.period_length_seconds == 0 {
            return 0;
        }
        let counted = match self.epoch {
            PeriodEpoch::Creation => elapsed,
            PeriodEpoch::CliffEnd => elapsed - self.cliff_seconds,
        };
        let periods = counted / self.period_length_seconds;
        match self.accrual {
            AccrualLimit::Uncapped => periods,
            AccrualLimit::PeriodsNumber => periods.min(u64::from(self.periods_number)),
        }
    }

    /// Cumulative amount authorized for release `elapsed` seconds after
    /// creation. Not clamped to `total`; saturates instead of overflowing.
    pub fn unlocked_at(&self, elapsed: u64) -> i128 {
        let periods = i128::from(self.periods_elapsed(elapsed));
        self.period_amount
            .saturating_mul(periods)
            .saturating_add(self.unvested)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MONTH: u64 = 30 * 24 * 60 * 60;

    fn reserve_style() -> VestingSchedule {
        VestingSchedule {
            total: 1_000,
            unvested: 4,
            cliff_seconds: 5 * MONTH,
            period_length_seconds: MONTH,
            period_amount: 166,
            periods_number: 6,
            epoch: PeriodEpoch::CliffEnd,
            accrual: AccrualLimit::Uncapped,
        }
    }

    fn quarterly() -> VestingSchedule {
        VestingSchedule {
            total: 1_600,
            unvested: 0,
            cliff_seconds: 0,
            period_length_seconds: 3 * MONTH,
            period_amount: 100,
            periods_number: 16,
            epoch: PeriodEpoch::Creation,
            accrual: AccrualLimit::Uncapped,
        }
    }

    #[test]
    fn before_cliff_only_unvested_is_unlocked() {
        let s = reserve_style();
        assert_eq!(s.unlocked_at(0), 4);
        assert_eq!(s.unlocked_at(5 * MONTH - 1), 4);
    }

    #[test]
    fn cliff_end_epoch_counts_periods_after_cliff() {
        let s = reserve_style();
        assert_eq!(s.unlocked_at(5 * MONTH), 4);
        assert_eq!(s.unlocked_at(6 * MONTH - 1), 4);
        assert_eq!(s.unlocked_at(6 * MONTH), 4 + 166);
        assert_eq!(s.unlocked_at(11 * MONTH), 4 + 166 * 6);
    }

    #[test]
    fn creation_epoch_counts_from_zero() {
        let s = quarterly();
        assert_eq!(s.unlocked_at(0), 0);
        assert_eq!(s.unlocked_at(3 * MONTH - 1), 0);
        assert_eq!(s.unlocked_at(3 * MONTH), 100);
        assert_eq!(s.unlocked_at(48 * MONTH), 1_600);
    }

    #[test]
    fn creation_epoch_with_cliff_releases_accrued_periods_at_once() {
        let mut s = quarterly();
        s.cliff_seconds = 7 * MONTH;
        assert_eq!(s.unlocked_at(7 * MONTH - 1), 0);
        assert_eq!(s.unlocked_at(7 * MONTH), 200);
    }

    #[test]
    fn uncapped_keeps_accruing_past_periods_number() {
        let s = quarterly();
        assert_eq!(s.unlocked_at(60 * MONTH), 2_000);
    }

    #[test]
    fn periods_number_cap_stops_accrual() {
        let mut s = quarterly();
        s.accrual = AccrualLimit::PeriodsNumber;
        assert_eq!(s.unlocked_at(48 * MONTH), 1_600);
        assert_eq!(s.unlocked_at(60 * MONTH), 1_600);
    }

    #[test]
    fn unlocked_is_monotonic_in_time() {
        let s = reserve_style();
        let mut last = 0;
        for day in 0..400u64 {
            let now = s.unlocked_at(day * 24 * 60 * 60);
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn huge_elapsed_saturates() {
        let mut s = quarterly();
        s.period_length_seconds = 1;
        s.period_amount = i128::MAX / 2;
        assert_eq!(s.unlocked_at(u64::MAX), i128::MAX);
    }

    #[test]
    fn validate_rejects_inconsistent_parameters() {
        assert_eq!(reserve_style().validate(), Ok(()));

        let mut s = reserve_style();
        s.period_length_seconds = 0;
        assert_eq!(s.validate(), Err(TokenError::InvalidSchedule));

        let mut s = reserve_style();
        s.unvested = -1;
        assert_eq!(s.validate(), Err(TokenError::InvalidSchedule));

        let mut s = reserve_style();
        s.unvested = 1_001;
        assert_eq!(s.validate(), Err(TokenError::InvalidSchedule));

        let mut s = reserve_style();
        s.periods_number = 7;
        assert_eq!(s.validate(), Err(TokenError::InvalidSchedule));

        let mut s = reserve_style();
        s.period_amount = i128::MAX;
        assert_eq!(s.validate(), Err(TokenError::InvalidSchedule));
    }
}
