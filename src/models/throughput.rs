// Aggregate throughput across all matched interfaces

/// Bytes per second, summed over every interface present in both snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rates {
    pub rx: u64,
    pub tx: u64,
}
