//! Time source for a running clock.
//!
//! The clock itself never schedules anything. [`ticks`] produces wall-clock
//! timestamps at a fixed period and [`drive`] feeds them into a clock and
//! its skin for as long as the clock's `running` flag stays set.

use std::{pin::pin, time::Duration};

use chrono::{Local, NaiveDateTime};
use futures::{Stream, StreamExt};
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, instrument};

use crate::{
    clock::{AlarmEvent, Clock},
    skin::{ClockSkin, FaceScene, TextMetrics},
};

/// Tick period for smoothly sweeping needles.
pub const CONTINUOUS_PERIOD: Duration = Duration::from_millis(20);

/// Tick period when both needles step in whole units.
pub const DISCRETE_PERIOD: Duration = Duration::from_millis(100);

/// Tick period suited to the clock's stepping flags.
pub fn period_for(clock: &Clock) -> Duration {
    if clock.discrete_minutes() && clock.discrete_seconds() {
        DISCRETE_PERIOD
    } else {
        CONTINUOUS_PERIOD
    }
}

/// Local wall-clock time every `period`. Missed ticks are skipped rather
/// than bunched up.
///
/// Must be polled inside a tokio runtime.
pub fn ticks(period: Duration) -> impl Stream<Item = NaiveDateTime> {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    IntervalStream::new(interval).map(|_| Local::now().naive_local())
}

/// Feeds `ticks` into `clock` and `skin` while the clock is running.
///
/// After every tick the skin handles the clock's pending updates and
/// `on_frame` sees the clock, the new scene and any alarms that fired.
/// Clearing the running flag from `on_frame` stops the loop. Returns the
/// number of frames produced.
#[instrument(skip_all)]
pub async fn drive<S, M, F>(
    clock: &mut Clock,
    skin: &mut ClockSkin<M>,
    ticks: S,
    mut on_frame: F,
) -> usize
where
    S: Stream<Item = NaiveDateTime>,
    M: TextMetrics,
    F: FnMut(&mut Clock, &FaceScene, &[AlarmEvent]),
{
    let mut ticks = pin!(ticks);
    let mut frames = 0;

    while clock.running() {
        let Some(now) = ticks.next().await else {
            debug!("time source ended");
            break;
        };

        let fired = clock.tick(now);
        skin.handle(clock.take_updates(), clock);
        frames += 1;

        on_frame(clock, skin.scene(), &fired);
    }

    debug!(frames, "clock stopped");
    frames
}
