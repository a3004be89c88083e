use std::{
    fs::File,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use insider_colors::{BadgeStyle, ColorTable, MatchTier, NameColorResolver};
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve school and organization names to team colors", long_about = None)]
struct Args {
    /// Names to resolve; read one per line from stdin when omitted
    names: Vec<String>,

    /// Optional JSON color table used instead of the bundled one
    #[arg(long)]
    table: Option<PathBuf>,

    /// Color returned for names with no known match
    #[arg(long, default_value = "#6c757d")]
    fallback: String,

    /// Print the match tier and the matched key next to each color
    #[arg(long)]
    explain: bool,

    /// Optional path to write a JSON report of every lookup
    #[arg(long)]
    json_report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    name: &'a str,
    color: &'a str,
    tier: Option<MatchTier>,
    key: Option<&'a str>,
    badge: BadgeStyle,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init();

    let table = match args.table.as_deref() {
        Some(path) => ColorTable::from_json_file(path)
            .with_context(|| format!("loading color table {}", path.display()))?,
        None => ColorTable::bundled().context("loading bundled color table")?,
    };
    info!("loaded {} color table entries", table.len());
    let resolver = NameColorResolver::new(&table);

    let names = if args.names.is_empty() {
        read_names(io::stdin().lock()).context("reading names from stdin")?
    } else {
        args.names.clone()
    };

    let reports: Vec<LookupReport<'_>> = names
        .iter()
        .map(|name| lookup(&resolver, name, &args.fallback))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        writeln!(out, "{}", format_line(report, args.explain))?;
    }
    out.flush()?;

    if let Some(path) = args.json_report.as_deref() {
        let file = File::create(path)
            .with_context(|| format!("creating JSON report {}", path.display()))?;
        serde_json::to_writer_pretty(file, &reports)
            .with_context(|| format!("writing JSON report {}", path.display()))?;
        eprintln!("[insider_cli] wrote JSON report to {}", path.display());
    }

    Ok(())
}

fn read_names(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }
    Ok(names)
}

fn lookup<'a>(
    resolver: &'a NameColorResolver,
    name: &'a str,
    fallback: &'a str,
) -> LookupReport<'a> {
    let found = resolver.resolve(name);
    let color = found.as_ref().map_or(fallback, |m| m.color);
    LookupReport {
        name,
        color,
        tier: found.as_ref().map(|m| m.tier),
        key: found.as_ref().map(|m| m.key),
        badge: BadgeStyle::for_color(color),
    }
}

fn format_line(report: &LookupReport<'_>, explain: bool) -> String {
    if !explain {
        return format!("{}\t{}", report.name, report.color);
    }
    match (report.tier, report.key) {
        (Some(tier), Some(key)) => {
            format!("{}\t{}\t{tier} {key}", report.name, report.color)
        }
        _ => format!("{}\t{}\tfallback", report.name, report.color),
    }
}
