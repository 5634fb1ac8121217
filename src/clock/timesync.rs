use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use log::{info, warn};

use crate::clock::clock::Clock;
use crate::configurationerror::TimeSyncError;

pub const DEFAULT_RESYNC_INTERVAL_SECONDS: u64 = 5 * 60;

/// Remote service reporting the official current time.
pub trait TimeSource: Send + Sync {
    fn fetch(&self) -> Result<DateTime<Utc>, TimeSyncError>;
}

/// Stands in for the official time service when none is configured. Every
/// fetch fails, so a [`SyncedClock`] over it reads local time.
#[derive(Clone, Copy, Default)]
pub struct UnconfiguredTimeSource;

impl TimeSource for UnconfiguredTimeSource {
    fn fetch(&self) -> Result<DateTime<Utc>, TimeSyncError> {
        Err(TimeSyncError::Unavailable("no official time service configured".to_owned()))
    }
}

#[derive(Clone, Copy)]
struct SyncState {
    correction: TimeDelta,
    last_sync: Option<DateTime<Utc>>,
    last_attempt: Option<DateTime<Utc>>
}

/// A clock corrected by the difference between an official time source and
/// a local clock.
///
/// The correction starts at zero and is refreshed by [`SyncedClock::sync`].
/// A failed sync resets it to zero, so the clock degrades to local time.
/// Resyncs are scheduled from the last attempt, successful or not.
pub struct SyncedClock<C: Clock, S: TimeSource> {
    clock: C,
    source: S,
    resync_interval: TimeDelta,
    state: RwLock<SyncState>
}

impl<C: Clock, S: TimeSource> SyncedClock<C, S> {
    pub fn new(clock: C, source: S) -> SyncedClock<C, S> {
        SyncedClock {
            clock,
            source,
            resync_interval: TimeDelta::seconds(DEFAULT_RESYNC_INTERVAL_SECONDS as i64),
            state: RwLock::new(SyncState {
                correction: TimeDelta::zero(),
                last_sync: None,
                last_attempt: None
            })
        }
    }

    pub fn with_resync_interval(mut self, resync_interval: TimeDelta) -> SyncedClock<C, S> {
        self.resync_interval = resync_interval;
        self
    }

    pub fn resync_interval(&self) -> TimeDelta {
        self.resync_interval
    }

    /// Current `official - local` correction.
    pub fn correction(&self) -> TimeDelta {
        self.state.read().unwrap_or_else(PoisonError::into_inner).correction
    }

    /// Local instant of the last successful sync.
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).last_sync
    }

    /// True before the first attempt and once the resync interval has elapsed
    /// since the last one.
    pub fn needs_sync(&self) -> bool {
        let last_attempt = self.state.read().unwrap_or_else(PoisonError::into_inner).last_attempt;
        match last_attempt {
            Some(last_attempt) => self.clock.now() - last_attempt >= self.resync_interval,
            None => true
        }
    }

    /// Fetches the official time and stores the new correction.
    pub fn sync(&self) -> Result<TimeDelta, TimeSyncError> {
        let fetched = self.source.fetch();
        let local = self.clock.now();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.last_attempt = Some(local);
        match fetched {
            Ok(official) => {
                let correction = official - local;
                state.correction = correction;
                state.last_sync = Some(local);
                info!("synced with official time, correction {} ms", correction.num_milliseconds());
                Ok(correction)
            },
            Err(error) => {
                state.correction = TimeDelta::zero();
                warn!("time sync failed, using local clock: {}", error);
                Err(error)
            }
        }
    }

    /// Syncs only when [`SyncedClock::needs_sync`] says so.
    pub fn sync_if_due(&self) -> Option<Result<TimeDelta, TimeSyncError>> {
        if self.needs_sync() {
            Some(self.sync())
        } else {
            None
        }
    }
}

impl<C: Clock, S: TimeSource> Clock for SyncedClock<C, S> {
    fn now(&self) -> DateTime<Utc> {
        self.clock.now() + self.correction()
    }
}
