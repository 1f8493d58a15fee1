// Parse the /proc/net/dev table into a bounded snapshot.

use crate::filter::InterfaceFilter;
use crate::models::{InterfaceSample, Snapshot};

/// `Inter-|   Receive ...` and `face |bytes    packets ...`
const HEADER_LINES: usize = 2;
const FIELD_COUNT: usize = 16;
const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;

/// Builds a snapshot from the table text. Lines without a colon, with fewer than 16 numeric
/// fields, or rejected by `filter` are skipped. Stops once the snapshot is full.
pub fn parse_net_dev(content: &str, filter: &InterfaceFilter) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for line in content.lines().skip(HEADER_LINES) {
        if snapshot.is_full() {
            break;
        }
        let Some((name, data)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim_start();
        if !filter.should_include(name) {
            continue;
        }
        let Some(fields) = parse_fields(data) else {
            continue;
        };
        snapshot.push(InterfaceSample::new(
            name,
            fields[RX_BYTES_FIELD],
            fields[TX_BYTES_FIELD],
        ));
    }
    snapshot
}

/// First 16 whitespace-separated counters; trailing extras are ignored.
fn parse_fields(data: &str) -> Option<[u64; FIELD_COUNT]> {
    let mut fields = [0u64; FIELD_COUNT];
    let mut tokens = data.split_whitespace();
    for slot in fields.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fields_reads_sixteen_counters() {
        let data = " 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16";
        let fields = parse_fields(data).unwrap();
        assert_eq!(fields[RX_BYTES_FIELD], 1);
        assert_eq!(fields[TX_BYTES_FIELD], 9);
        assert_eq!(fields[15], 16);
    }

    #[test]
    fn parse_fields_rejects_short_rows() {
        assert!(parse_fields(" 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15").is_none());
        assert!(parse_fields("").is_none());
    }

    #[test]
    fn parse_fields_rejects_non_numeric() {
        assert!(parse_fields(" 1 2 3 x 5 6 7 8 9 10 11 12 13 14 15 16").is_none());
        assert!(parse_fields(" -1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16").is_none());
    }

    #[test]
    fn parse_fields_ignores_trailing_columns() {
        let data = " 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 junk";
        assert!(parse_fields(data).is_some());
    }
}
