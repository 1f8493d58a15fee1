// Diff two snapshots into aggregate rx/tx bytes per second

use std::num::NonZeroU64;

use crate::models::{Rates, Snapshot};

/// Sums per-interface rates over every interface in `current` that also appears in `previous`.
///
/// Interfaces new in `current` contribute nothing. A counter that went backwards (reset or
/// wrap) is not detected: the subtraction wraps and yields a very large rate.
pub fn compute_rates(previous: &Snapshot, current: &Snapshot, interval_secs: NonZeroU64) -> Rates {
    current
        .samples()
        .iter()
        .filter_map(|curr| previous.get(&curr.name).map(|prev| (prev, curr)))
        .fold(Rates::default(), |total, (prev, curr)| {
            let rx = curr.rx_bytes.wrapping_sub(prev.rx_bytes) / interval_secs;
            let tx = curr.tx_bytes.wrapping_sub(prev.tx_bytes) / interval_secs;
            Rates {
                rx: total.rx.wrapping_add(rx),
                tx: total.tx.wrapping_add(tx),
            }
        })
}
