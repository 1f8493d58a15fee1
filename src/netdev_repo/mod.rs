// Interface byte counters from the kernel's /proc/net/dev table

mod parse;

pub use parse::parse_net_dev;

use crate::error::SourceError;
use crate::filter::InterfaceFilter;
use crate::models::Snapshot;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

pub const DEFAULT_NET_DEV_PATH: &str = "/proc/net/dev";
pub const DEFAULT_SYS_CLASS_NET_PATH: &str = "/sys/class/net";

pub struct NetdevRepo {
    path: PathBuf,
    filter: Arc<InterfaceFilter>,
}

impl NetdevRepo {
    pub fn new(path: impl Into<PathBuf>, filter: InterfaceFilter) -> Self {
        Self {
            path: path.into(),
            filter: Arc::new(filter),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filter(&self) -> &InterfaceFilter {
        &self.filter
    }

    /// Reads the table once and returns the filtered, capped snapshot.
    /// An unreadable source or a snapshot with no interfaces is an error.
    #[instrument(skip(self), fields(repo = "netdev", operation = "read_snapshot"))]
    pub async fn read_snapshot(&self) -> Result<Snapshot, SourceError> {
        let path = self.path.clone();
        let filter = self.filter.clone();
        tokio::task::spawn_blocking(move || read_snapshot_blocking(&path, &filter))
            .await
            .map_err(|e| SourceError::Join(e.to_string()))?
    }
}

fn read_snapshot_blocking(path: &Path, filter: &InterfaceFilter) -> Result<Snapshot, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_net_dev(&content, filter);
    if snapshot.is_empty() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }
    tracing::trace!(interfaces = snapshot.len(), "snapshot read");
    Ok(snapshot)
}

/// True when `<sys_class_net>/<name>` exists (Linux: /sys/class/net/eth0).
pub fn interface_exists(sys_class_net: &Path, name: &str) -> bool {
    if name.is_empty() || name.contains('/') {
        return false;
    }
    sys_class_net.join(name).exists()
}
