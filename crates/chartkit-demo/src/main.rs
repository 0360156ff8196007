// File: crates/chartkit-demo/src/main.rs
// Summary: Demo loads OHLC CSV, builds OHLC, XY (log) and box charts, and prints ranges, ticks and statistics.

use anyhow::{Context, Result};
use chartkit_core::{AxisId, AxisRange, Chart, ChartConfig, ChartKind, QuartileMethod};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Bar {
    t: f64,
    o: f64,
    h: f64,
    l: f64,
    c: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "prices.csv".to_string());
    let config = match args.next() {
        Some(p) => load_config(Path::new(&p))?,
        None => ChartConfig::default(),
    };

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let bars = load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} bars", bars.len());
    if bars.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter.");
    }

    let x: Vec<f64> = bars.iter().map(|b| b.t).collect();
    let open: Vec<f64> = bars.iter().map(|b| b.o).collect();
    let high: Vec<f64> = bars.iter().map(|b| b.h).collect();
    let low: Vec<f64> = bars.iter().map(|b| b.l).collect();
    let close: Vec<f64> = bars.iter().map(|b| b.c).collect();

    // 1) OHLC candles
    let mut ohlc = Chart::new(ChartKind::Ohlc, config.clone()).context("invalid chart config")?;
    ohlc.add_ohlc_series("prices", &x, &open, &high, &low, &close)?;
    print_range("OHLC X", &ohlc.axis_range(AxisId::X)?);
    print_range("OHLC Y", &ohlc.axis_range(AxisId::Y(0))?);

    // 2) Closes on a logarithmic Y axis
    let mut log_chart = Chart::new(ChartKind::Xy, config.clone())?;
    log_chart.y_axis_mut().set_logarithmic(true);
    match log_chart.add_xy_series("close", &x, &close) {
        Ok(_) => print_range("Close (log) Y", &log_chart.axis_range(AxisId::Y(0))?),
        Err(e) => println!("Skipping log chart: {e}"),
    }

    // 3) Box plot of per-bar moves under every quartile method
    let deltas: Vec<f64> = bars.iter().map(|b| b.c - b.o).collect();
    let mut box_chart = Chart::new(ChartKind::Box, config)?;
    box_chart.add_box_series("close - open", &deltas)?;
    for method in QuartileMethod::ALL {
        box_chart.set_quartile_method(method)?;
        if let Some(stats) = box_chart.series_map().get("close - open").and_then(|s| s.box_stats()) {
            println!(
                "{:?}: q1={:.4} median={:.4} q3={:.4} whiskers=[{:.4}, {:.4}] outliers={}",
                method,
                stats.q1,
                stats.median,
                stats.q3,
                stats.lower_whisker,
                stats.upper_whisker,
                stats.outliers.len()
            );
        }
    }
    print_range("Box Y", &box_chart.axis_range(AxisId::Y(0))?);

    info!("done");
    Ok(())
}

fn print_range(label: &str, r: &AxisRange) {
    let ticks = r.ticks();
    println!(
        "{label}: [{:.4}, {:.4}] step={} log={} ticks={}",
        r.min,
        r.max,
        r.tick_spacing,
        r.logarithmic,
        ticks.len()
    );
}

/// Read a `ChartConfig` from TOML; absent keys keep their defaults.
fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: ChartConfig = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(width = config.width, height = config.height, theme = ?config.theme, "loaded chart config");
    Ok(config)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load Binance-like OHLC CSV rows.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        anyhow::bail!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };
        let t = i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_to_f64).unwrap_or(row as f64);
        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            out.push(Bar { t, o, h, l, c });
        }
    }
    Ok(out)
}

/// Integer timestamps; epoch milliseconds are reduced to seconds.
fn parse_time_to_f64(s: &str) -> Option<f64> {
    let n = s.trim().parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        return Some(n as f64 / 1000.0);
    }
    Some(n as f64)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
