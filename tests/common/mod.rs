// Shared test helpers
#![allow(dead_code)]

use netrate::models::{InterfaceSample, Snapshot};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const HEADER: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
";

/// One /proc/net/dev row with the given rx/tx byte counters; other columns are filler.
pub fn net_dev_row(name: &str, rx_bytes: u64, tx_bytes: u64) -> String {
    format!(
        "{:>6}: {} 10 0 0 0 0 0 0 {} 20 0 0 0 0 0 0\n",
        name, rx_bytes, tx_bytes
    )
}

/// A full table (two header lines plus rows).
pub fn net_dev_table(rows: &[(&str, u64, u64)]) -> String {
    let mut table = HEADER.to_string();
    for (name, rx, tx) in rows {
        table.push_str(&net_dev_row(name, *rx, *tx));
    }
    table
}

pub fn write_net_dev(dir: &Path, rows: &[(&str, u64, u64)]) -> PathBuf {
    let path = dir.join("dev");
    std::fs::write(&path, net_dev_table(rows)).unwrap();
    path
}

/// Fake /sys/class/net with one directory per interface.
pub fn fake_sys_class_net(dir: &Path, names: &[&str]) -> PathBuf {
    let root = dir.join("class_net");
    std::fs::create_dir_all(&root).unwrap();
    for name in names {
        std::fs::create_dir_all(root.join(name)).unwrap();
    }
    root
}

pub fn snapshot(samples: &[(&str, u64, u64)]) -> Snapshot {
    samples
        .iter()
        .map(|(name, rx, tx)| InterfaceSample::new(name, *rx, *tx))
        .collect()
}

/// Clonable writer for inspecting output produced by a task that owns its writer.
/// Records the buffer length at every flush.
#[derive(Clone, Default)]
pub struct SharedBuf {
    buf: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<Vec<usize>>>,
}

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    /// Buffer length at each flush, in order.
    pub fn flush_points(&self) -> Vec<usize> {
        self.flushes.lock().unwrap().clone()
    }

    /// True when every line was flushed right after its newline, and nothing is left unflushed.
    pub fn flushed_per_line(&self) -> bool {
        let contents = self.contents();
        let line_ends: Vec<usize> = contents
            .match_indices('\n')
            .map(|(i, _)| i + 1)
            .collect();
        line_ends == self.flush_points()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let len = self.buf.lock().unwrap().len();
        self.flushes.lock().unwrap().push(len);
        Ok(())
    }
}
