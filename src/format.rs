// Compact decimal byte counts for narrow status bars (999B, 1.5K, 12.0M, ...)

const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];
const DECIMAL_BASE: u64 = 1000;

/// Formats a byte count with decimal (1000-based) scaling.
///
/// Below 1000 the value is printed as an integer with `B`. Otherwise it is divided by 1000
/// until it drops below 1000 or reaches `P`, and printed with one decimal digit.
pub fn human_readable(bytes: u64) -> String {
    if bytes < DECIMAL_BASE {
        return format!("{}{}", bytes, UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= DECIMAL_BASE as f64 && unit_idx < UNITS.len() - 1 {
        value /= DECIMAL_BASE as f64;
        unit_idx += 1;
    }

    format!("{:.1}{}", value, UNITS[unit_idx])
}
