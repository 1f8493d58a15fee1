// Polling driver: one priming snapshot, then sleep -> sample -> diff -> emit -> rotate.
// A failed or empty read skips the cycle and keeps the previous snapshot.

use crate::error::SourceError;
use crate::models::{Rates, Snapshot, StatusLine};
use crate::netdev_repo::NetdevRepo;
use crate::output;
use crate::rates::compute_rates;
use std::io::{self, Write};
use std::num::NonZeroU64;
use tokio::time::Duration;
use tracing::instrument;

/// Result of one steady-state cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Rates against the previous snapshot; the new snapshot is now the previous one.
    Rates(Rates),
    /// No usable snapshot; state unchanged.
    Skipped(SourceError),
}

/// Holds the source and the snapshot retained from the last good read.
pub struct Poller {
    repo: NetdevRepo,
    interval_secs: NonZeroU64,
    previous: Snapshot,
}

impl Poller {
    /// Takes the baseline snapshot. Failure here is fatal for the caller:
    /// there is nothing to diff against.
    pub async fn prime(repo: NetdevRepo, interval_secs: NonZeroU64) -> Result<Self, SourceError> {
        let previous = repo.read_snapshot().await?;
        tracing::debug!(
            operation = "prime",
            interfaces = previous.len(),
            "baseline snapshot taken"
        );
        Ok(Self {
            repo,
            interval_secs,
            previous,
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.get())
    }

    pub fn previous(&self) -> &Snapshot {
        &self.previous
    }

    /// Reads a new snapshot and diffs it against the retained one. Does not sleep.
    pub async fn sample(&mut self) -> CycleOutcome {
        match self.repo.read_snapshot().await {
            Ok(current) => {
                let rates = compute_rates(&self.previous, &current, self.interval_secs);
                self.previous = current;
                CycleOutcome::Rates(rates)
            }
            Err(e) => CycleOutcome::Skipped(e),
        }
    }
}

/// Samples once and writes the line for the outcome. An empty read writes nothing.
pub async fn emit_cycle<W: Write>(poller: &mut Poller, out: &mut W) -> io::Result<()> {
    match poller.sample().await {
        CycleOutcome::Rates(rates) => {
            tracing::trace!(rx = rates.rx, tx = rates.tx, "cycle totals");
            output::emit(out, &StatusLine::rates(rates))
        }
        CycleOutcome::Skipped(e) => match e.status_line() {
            Some(line) => {
                tracing::warn!(
                    error = %e,
                    operation = "read_snapshot",
                    "snapshot read failed; cycle skipped"
                );
                output::emit(out, &line)
            }
            None => {
                tracing::debug!(
                    error = %e,
                    operation = "read_snapshot",
                    "no usable sample; cycle skipped"
                );
                Ok(())
            }
        },
    }
}

/// Runs forever, writing one line per cycle to `out`. Returns only when `out` fails.
#[instrument(skip_all, fields(interval_secs = poller.interval_secs.get()))]
pub async fn run<W: Write>(mut poller: Poller, mut out: W) -> anyhow::Result<()> {
    loop {
        tokio::time::sleep(poller.interval()).await;
        emit_cycle(&mut poller, &mut out).await?;
    }
}
