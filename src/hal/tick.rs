//! Tick clock
//!
//! Paces the scheduler's interrupt-context task at the fixed tick rate.
//! Built on `embassy-time`'s absolute-deadline ticker so missed wakeups do
//! not accumulate drift over the 1024-tick harmonic period.

use embassy_time::{Duration, Ticker};

/// Fixed-rate clock driving the tick engine
pub struct TickClock {
    rate_hz: u32,
    ticker: Ticker,
}

impl TickClock {
    /// Create a clock firing at `rate_hz`
    #[must_use]
    pub fn at_rate(rate_hz: u32) -> Self {
        Self {
            rate_hz,
            ticker: Ticker::every(Duration::from_hz(u64::from(rate_hz))),
        }
    }

    /// The configured rate in Hz
    #[must_use]
    pub const fn rate_hz(&self) -> u32 {
        self.rate_hz
    }

    /// Wait for the next tick deadline
    pub async fn next(&mut self) {
        self.ticker.next().await;
    }

    /// Realign the deadlines after a pause
    pub fn reset(&mut self) {
        self.ticker.reset();
    }
}

impl defmt::Format for TickClock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TickClock({}Hz)", self.rate_hz);
    }
}
