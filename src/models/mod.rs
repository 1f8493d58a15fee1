// Domain models: counter samples, snapshots, aggregate rates, status lines

mod sample;
mod status;
mod throughput;

pub use sample::{InterfaceSample, MAX_INTERFACES, MAX_NAME_LEN, Snapshot};
pub use status::StatusLine;
pub use throughput::Rates;
