use itertools::Itertools;

use crate::table::Table;

/// Renders `table` as a Rust module declaring `pub const <name>: [f32; N]`.
///
/// Literals carry nine significant digits so they read back as the same
/// `f32`, each one annotated with the decibel value it was sampled at.
pub fn table_source(table: &Table, name: &str) -> String {
    let params = table.params();

    let header = format!(
        "// Generated by decibel-lut-gen, regenerate instead of editing by hand.\n\
         // {} gains from {:.2} dB to {:.2} dB in steps of {:.6} dB.\n\
         \n\
         #![allow(clippy::excessive_precision)]\n\
         \n\
         pub const {}: [f32; {}] = [\n",
        params.size(), params.min_db(), params.max_db(), params.step(),
        name, params.size());

    let body = table.samples()
        .map(|(db, gain)| format!("    {:<15} // {:>7.2} dB", format!("{:.8e},", gain as f32), db))
        .join("\n");

    format!("{}{}\n];\n", header, body)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::table::generate_table;

    #[test]
    fn emit_small_table() {
        let table = generate_table(-20.0, 0.0, 3).unwrap();
        let expected = "\
// Generated by decibel-lut-gen, regenerate instead of editing by hand.
// 3 gains from -20.00 dB to 0.00 dB in steps of 10.000000 dB.

#![allow(clippy::excessive_precision)]

pub const TEST_LUT: [f32; 3] = [
    1.00000001e-1,  //  -20.00 dB
    3.16227764e-1,  //  -10.00 dB
    1.00000000e0,   //    0.00 dB
];
";
        assert_eq!(table_source(&table, "TEST_LUT"), expected);
    }

    #[test]
    fn one_line_per_entry() {
        let table = generate_table(-96.0, 12.0, 100).unwrap();
        let source = table_source(&table, "DB_LUT_DATA");

        assert!(source.contains("pub const DB_LUT_DATA: [f32; 100] = ["));
        let entries: Vec<&str> = source.lines().filter(|l| l.ends_with(" dB") && l.starts_with("    ")).collect();
        assert_eq!(entries.len(), 100);
        assert!(entries[0].ends_with("-96.00 dB"));
        assert!(entries[99].ends_with("12.00 dB"));
    }

    #[test]
    fn literals_read_back_exactly() {
        let table = generate_table(-96.0, 12.0, 500).unwrap();
        let source = table_source(&table, "DB_LUT_DATA");

        let parsed: Vec<f32> = source.lines()
            .filter(|l| l.ends_with(" dB") && l.starts_with("    "))
            .map(|l| l.trim().split(',').next().unwrap().parse().unwrap())
            .collect();

        assert_eq!(parsed, table.to_f32());
    }
}
