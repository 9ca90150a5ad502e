// promo-cli: shared helpers for the command-line tools.

use std::process;

use promo_core::GenerateOptions;

/// Everything parsed from the command line: generation options, the output
/// mode, and the remaining positional arguments.
#[derive(Debug)]
pub struct CliArgs {
    pub options: GenerateOptions,
    pub json: bool,
    pub positional: Vec<String>,
}

/// JSON output envelope for one campaign, mirroring the plain-text output:
/// the best code first, then the full ranked list.
#[derive(Debug, serde::Serialize)]
pub struct CodeReport {
    pub campaign: String,
    pub generated_code: String,
    pub candidates: Vec<String>,
}

impl CodeReport {
    /// Build a report from a non-empty ranked list.
    ///
    /// # Panics
    ///
    /// Panics on an empty list: there is no best code to report.
    /// [`parse_args`] rejects `--count 0`, so the engine always supplies
    /// at least one code here.
    pub fn new(campaign: &str, codes: Vec<String>) -> Self {
        Self {
            campaign: campaign.to_string(),
            generated_code: codes[0].clone(),
            candidates: codes,
        }
    }
}

/// Parse generation flags out of `args`.
///
/// Recognized flags: `--min-len N`, `--max-len N`, `--count N`,
/// `--seed N`, `--no-year`, `--json`. Anything else starting with `-`
/// is an error; everything else is positional.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut options = GenerateOptions::default();
    let mut json = false;
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--min-len" => options.min_len = numeric_value(arg, iter.next())?,
            "--max-len" => options.max_len = numeric_value(arg, iter.next())?,
            "--count" => options.count = numeric_value(arg, iter.next())?,
            "--seed" => options.seed = Some(numeric_value(arg, iter.next())?),
            "--no-year" => options.include_year = false,
            "--json" => json = true,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => positional.push(arg.clone()),
        }
    }

    // The engine returns an empty list for a zero count, which the report
    // output has no way to express. Reject it here.
    if options.count == 0 {
        return Err("--count must be at least 1".to_string());
    }

    Ok(CliArgs {
        options,
        json,
        positional,
    })
}

fn numeric_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid number for {flag}: {value}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
