// promo-codes: generate ranked campaign codes from a campaign name.
//
// The name comes from the positional arguments (joined into one context
// string) or, if none are given, from stdin with one campaign per line.
//
// Usage:
//   promo-codes [OPTIONS] [WORD...]
//
// Options:
//   --min-len N   Minimum code length (default: 6, allowed 6-12)
//   --max-len N   Maximum code length (default: 12, allowed 6-12)
//   --count N     Maximum number of codes (default: 8)
//   --seed N      RNG seed for reproducible output
//   --no-year     Ignore any year found in the name
//   --json        Print a JSON report per campaign
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use promo_cli::CodeReport;
use promo_gen::CodeGenerator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if promo_cli::wants_help(&args) {
        println!("promo-codes: generate ranked campaign codes.");
        println!();
        println!("Usage: promo-codes [OPTIONS] [WORD...]");
        println!();
        println!("WORD arguments are joined into one campaign name.");
        println!("Without them, campaign names are read from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --min-len N   Minimum code length (default: 6, allowed 6-12)");
        println!("  --max-len N   Maximum code length (default: 12, allowed 6-12)");
        println!("  --count N     Maximum number of codes (default: 8)");
        println!("  --seed N      RNG seed for reproducible output");
        println!("  --no-year     Ignore any year found in the name");
        println!("  --json        Print a JSON report per campaign");
        println!("  -h, --help    Print this help");
        return;
    }

    let parsed = promo_cli::parse_args(&args).unwrap_or_else(|e| promo_cli::fatal(&e));
    let generator =
        CodeGenerator::new(parsed.options).unwrap_or_else(|e| promo_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let report_campaign = |campaign: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match generator.generate(campaign) {
            Ok(codes) => {
                if parsed.json {
                    let report = CodeReport::new(campaign, codes);
                    match serde_json::to_string(&report) {
                        Ok(line) => {
                            let _ = writeln!(out, "{line}");
                        }
                        Err(e) => eprintln!("{campaign}: failed to encode report: {e}"),
                    }
                } else {
                    let _ = writeln!(out, "{campaign}:");
                    for code in &codes {
                        let _ = writeln!(out, "  {code}");
                    }
                }
            }
            Err(e) => eprintln!("{campaign}: {e}"),
        }
    };

    if parsed.positional.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let campaign = line.trim();
            if campaign.is_empty() {
                continue;
            }
            report_campaign(campaign, &mut out);
        }
    } else {
        let campaign = parsed.positional.join(" ");
        report_campaign(&campaign, &mut out);
    }
}
