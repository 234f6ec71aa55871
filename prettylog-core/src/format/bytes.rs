const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;

/// Formats a byte count with binary units and two decimals, e.g. `"2.00Kb"`.
pub fn format_bytes(bytes: u64) -> String {
    let (value, unit) = match bytes {
        b if b >= GIB => (b as f64 / GIB as f64, "Gb"),
        b if b >= MIB => (b as f64 / MIB as f64, "Mb"),
        b if b >= KIB => (b as f64 / KIB as f64, "Kb"),
        b => (b as f64, "b"),
    };

    format!("{value:.2}{unit}")
}
