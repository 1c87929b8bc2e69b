use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

extern crate decibel_lut;

use anyhow::{anyhow, Context, Result};
use log::{error, info};

use decibel_lut::emit;
use decibel_lut::table::{Table, TableParams};

const TABLE_NAME: &str = "DB_LUT_DATA";
const ERROR_OVERSAMPLING: usize = 16;

#[derive(Debug, PartialEq)]
struct Config {
    output: String,
    params: TableParams,
}

fn usage(program: &str) -> String {
    format!("Usage: {} <output.rs | -> [<min_db> <max_db> <size>]", program)
}

fn parse_args(args: &[String]) -> Result<Config> {
    let program = args.first().map(String::as_str).unwrap_or("decibel-lut-gen");

    let params = match args.len() {
        2 => TableParams::default(),
        5 => {
            let min_db: f64 = args[2].parse().with_context(|| format!("min_db '{}' is not a number", args[2]))?;
            let max_db: f64 = args[3].parse().with_context(|| format!("max_db '{}' is not a number", args[3]))?;
            let size: usize = args[4].parse().with_context(|| format!("size '{}' is not a count", args[4]))?;
            TableParams::new(min_db, max_db, size)?
        }
        _ => return Err(anyhow!(usage(program)))
    };

    Ok(Config { output: args[1].clone(), params })
}

fn run(config: &Config) -> Result<()> {
    let params = &config.params;
    info!("Generating {} entries from {} dB to {} dB, step {} dB",
          params.size(), params.min_db(), params.max_db(), params.step());

    let table = Table::generate(*params);
    if !table.is_monotonic() {
        return Err(anyhow!("generated table is not monotonic"));
    }

    let report = table.measure_error(ERROR_OVERSAMPLING);
    info!("Worst interpolation error: {:e} absolute at {:.3} dB, {:e} relative; table size {} bytes",
          report.max_abs_error, report.worst_db, report.max_rel_error, params.size() * 4);

    let source = emit::table_source(&table, TABLE_NAME);

    match config.output.as_str() {
        "-" => io::stdout().write_all(source.as_bytes()).context("Could not write table to stdout")?,
        path => {
            fs::write(path, source).with_context(|| format!("Could not write table to {}", path))?;
            info!("Wrote {}", path);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = match parse_args(&args) {
        Err(e) => {
            error!("{:#}", e);
            process::exit(2)
        }
        Ok(c) => c
    };

    if let Err(e) = run(&config) {
        error!("Table generation failed: {:#}", e);
        process::exit(1)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use decibel_lut::GenerationError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_params() {
        let config = parse_args(&args(&["gen", "out.rs"])).unwrap();
        assert_eq!(config, Config { output: "out.rs".to_string(), params: TableParams::default() });
    }

    #[test]
    fn explicit_params() {
        let config = parse_args(&args(&["gen", "-", "-60", "6.5", "512"])).unwrap();
        assert_eq!(config.output, "-");
        assert_eq!(config.params, TableParams::new(-60.0, 6.5, 512).unwrap());
    }

    #[test]
    fn wrong_argument_count() {
        assert!(parse_args(&args(&["gen"])).is_err());
        assert!(parse_args(&args(&["gen", "out.rs", "-60"])).is_err());
        assert!(parse_args(&args(&["gen", "out.rs", "-60", "0", "2", "extra"])).is_err());
    }

    #[test]
    fn malformed_numbers() {
        assert!(parse_args(&args(&["gen", "out.rs", "loud", "0", "16"])).is_err());
        assert!(parse_args(&args(&["gen", "out.rs", "-60", "0", "-16"])).is_err());
    }

    #[test]
    fn invalid_params_keep_their_type() {
        let e = parse_args(&args(&["gen", "out.rs", "0", "-60", "16"])).unwrap_err();
        assert_eq!(e.downcast_ref::<GenerationError>(), Some(&GenerationError::invalid_range(0.0, -60.0)));

        let e = parse_args(&args(&["gen", "out.rs", "-60", "0", "1"])).unwrap_err();
        assert_eq!(e.downcast_ref::<GenerationError>(), Some(&GenerationError::invalid_size(1)));
    }

    #[test]
    fn write_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db_lut_data.rs");
        let config = Config {
            output: path.to_string_lossy().into_owned(),
            params: TableParams::new(-48.0, 0.0, 64).unwrap(),
        };

        run(&config).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert!(written.starts_with("// Generated by decibel-lut-gen"));
        assert!(written.contains("pub const DB_LUT_DATA: [f32; 64] = ["));
        assert!(written.ends_with("];\n"));
    }
}
