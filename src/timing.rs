// Device timing, in milliseconds unless noted otherwise. These mirror the
// settle times the ENS160 needs between transactions.

/// Delay after power-up before the first I2C transaction.
pub(crate) const POWER_UP_DELAY_MS: u32 = 15;
/// Delay after initialization before the first measurement.
pub(crate) const APP_START_DELAY_MS: u32 = 25;
/// Settle time after a regular register access.
pub(crate) const CMD_DELAY_MS: u32 = 5;
/// Settle time after reading or writing the operating mode register.
pub(crate) const MODE_DELAY_MS: u32 = 10;
/// Settle time after writing the reset mode.
pub(crate) const RESET_DELAY_MS: u32 = 50;
/// Settle time after issuing the clear GPR command.
pub(crate) const CLEAR_GPR_DELAY_MS: u32 = 10;
/// Interval between two data-ready status reads.
pub(crate) const DATA_POLL_INTERVAL_MS: u32 = 1;
/// Upper bound for a data-ready polling loop.
pub(crate) const DATA_POLL_TIMEOUT_MS: u32 = 1500;

/// Monotonic time source used to bound polling loops.
///
/// The returned value must never decrease. Its epoch is irrelevant, only
/// differences between two samples are used.
pub trait Clock {
    /// Current time in microseconds.
    fn now_us(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_us(&mut self) -> u64 {
        C::now_us(self)
    }
}

/// Returns `true` once at least `timeout_ms` have passed since `start_us`.
pub(crate) fn has_elapsed(start_us: u64, now_us: u64, timeout_ms: u32) -> bool {
    now_us.saturating_sub(start_us) >= u64::from(timeout_ms) * 1_000
}
