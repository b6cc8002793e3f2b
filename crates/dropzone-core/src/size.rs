//! Byte-size helpers for messages and display.

const MIB: u64 = 1024 * 1024;

/// Convert a byte count to whole mebibytes, rounding half up.
///
/// Used for the limit shown in size rejection messages, so
/// `10 * 1024 * 1024` becomes `10` and `1_572_864` (1.5 MiB) becomes `2`.
#[must_use]
pub fn whole_mebibytes(bytes: u64) -> u64 {
    bytes / MIB + u64::from(bytes % MIB >= MIB / 2)
}

/// Format a byte count for display, e.g. `512 B`, `1.5 KB`, `10.0 MB`.
///
/// Uses binary (1024-based) units with one decimal above bytes.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only; sub-byte precision is irrelevant
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_mebibytes_rounds_half_up() {
        assert_eq!(whole_mebibytes(10 * MIB), 10);
        assert_eq!(whole_mebibytes(MIB + MIB / 2), 2);
        assert_eq!(whole_mebibytes(MIB + MIB / 2 - 1), 1);
        assert_eq!(whole_mebibytes(1000), 0);
        assert_eq!(whole_mebibytes(0), 0);
    }

    #[test]
    fn format_size_picks_a_readable_unit() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * MIB), "10.0 MB");
        assert_eq!(format_size(3 * 1024 * MIB), "3.0 GB");
    }
}
