use std::{
    f64::consts::PI,
    io::{self, Write},
};

use tracing::{debug, info, warn};

use crate::{
    core::{
        bounds::{samples_that_fit, terminal_geometry},
        color::{AnsiCode, NAMED, colorize},
        config::{Config, ConfigBuilder},
        data::{Series, read_columns_from_path},
        error::CliError,
        format::LabelFormat,
        rng::Lcg,
        symbols::Symbols,
    },
    render::render,
};

use super::parse::{ChartArgs, DemoArgs, DemoKind, PlotArgs};

/// Columns a default `{:8.2f} ` gutter takes before the first sample.
const DEMO_GUTTER: usize = 11;

fn parse_color(name: &str) -> Result<Option<AnsiCode>, CliError> {
    if name.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        Ok(Some(AnsiCode::from_name(name)?))
    }
}

pub(crate) fn config_builder(a: &ChartArgs) -> Result<ConfigBuilder, CliError> {
    let colors = a
        .colors
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<Vec<_>, _>>()?;
    let symbols = match (&a.symbols, a.ascii) {
        (Some(s), _) => Symbols::try_from(s.as_str())?,
        (None, true) => Symbols::ASCII,
        (None, false) => Symbols::UNICODE,
    };

    let mut b = Config::builder()
        .offset(a.offset)
        .format(LabelFormat::parse(&a.format)?)
        .x_format(LabelFormat::parse(&a.x_format)?)
        .colors(colors)
        .symbols(symbols)
        .bin_edges(a.bins.iter().copied());
    if let Some(v) = a.min {
        b = b.min(v);
    }
    if let Some(v) = a.max {
        b = b.max(v);
    }
    if let Some(h) = a.height {
        b = b.height(h);
    }
    Ok(b)
}

pub(crate) fn build_config(a: &ChartArgs) -> Result<Config, CliError> {
    Ok(config_builder(a)?.build()?)
}

/// Keep only the requested 1-based columns, in the requested order.
fn select_columns(mut series: Vec<Series>, wanted: &[usize]) -> Vec<Series> {
    if wanted.is_empty() {
        return series;
    }
    let available = series.len();
    let mut picked = Vec::with_capacity(wanted.len());
    for &c in wanted {
        match c.checked_sub(1).and_then(|i| series.get_mut(i)) {
            Some(s) => picked.push(std::mem::take(s)),
            None => warn!(column = c, available, "no such column"),
        }
    }
    picked
}

/// Write a finished chart plus trailing newline; a closed pipe surfaces as
/// [`CliError::Io`].
fn emit<W: Write>(out: &mut W, chart: &str) -> Result<(), CliError> {
    writeln!(out, "{chart}")?;
    out.flush()?;
    Ok(())
}

pub fn plot(a: &PlotArgs) -> Result<(), CliError> {
    let config = build_config(&a.chart)?;
    let series = select_columns(read_columns_from_path(&a.file)?, &a.columns);
    info!(file = %a.file, series = series.len(), "loaded input");

    let chart = render(series, &config)?;
    if chart.is_empty() {
        warn!("nothing to plot");
    } else {
        emit(&mut io::stdout().lock(), &chart)?;
    }
    Ok(())
}

/// Built-in data sets.
pub(crate) fn demo_series(kind: DemoKind, width: usize, rng: &mut Lcg) -> Vec<Series> {
    let wave = |amp: f64, periods: f64, f: fn(f64) -> f64| -> Series {
        (0..width)
            .map(|i| amp * f(i as f64 * (PI * 2.0 * periods) / width as f64))
            .collect()
    };
    match kind {
        DemoKind::Sine => vec![wave(15.0, 2.0, f64::sin)],
        DemoKind::Cosine => vec![
            (0..width)
                .map(|i| {
                    let c = (i as f64 * (PI * 4.0) / width as f64).cos();
                    7.0 * (c * 100.0).round() / 100.0
                })
                .collect(),
        ],
        DemoKind::Flat => vec![vec![2.0; width].into()],
        DemoKind::Walk => {
            let mut v = Vec::with_capacity(width);
            let mut x = (rng.next_f64() * 15.0).round();
            for _ in 0..width {
                v.push(x);
                x += rng.walk_step();
            }
            vec![v.into()]
        }
        DemoKind::Multi => vec![wave(15.0, 2.0, f64::sin), wave(10.0, 4.0, f64::cos)],
        DemoKind::Gaps => {
            let sine = wave(15.0, 2.0, f64::sin);
            let gapped = sine
                .samples()
                .iter()
                .enumerate()
                .map(|(i, s)| if (i / 6) % 4 == 3 { None } else { *s })
                .collect();
            vec![gapped]
        }
    }
}

pub fn demo(a: &DemoArgs) -> Result<(), CliError> {
    let mut builder = config_builder(&a.chart)?;
    if a.kind == DemoKind::Multi && a.chart.colors.is_empty() {
        builder = builder.colors([Some(AnsiCode::blue()), Some(AnsiCode::green())]);
    }
    let config = builder.build()?;
    let width = a
        .width
        .unwrap_or_else(|| samples_that_fit(terminal_geometry(), DEMO_GUTTER));
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    debug!(kind = ?a.kind, width, "generating demo data");

    let chart = render(demo_series(a.kind, width, &mut rng), &config)?;
    emit(&mut io::stdout().lock(), &chart)
}

/// Pretty-print available colour names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in NAMED {
        if name == "reset" {
            continue;
        }
        println!("{}", colorize(&AnsiCode::Static(code), name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
    println!("none  (leave that series uncoloured)\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "asciiline";
    println!(
        "
Example invocations
-------------------
• Plot a column file     : {bin} plot readings.txt
• From stdin             : seq 1 20 | {bin} plot
• Scale to ten rows      : {bin} plot readings.csv --height 10
• Fixed range            : {bin} plot readings.csv --min 0 --max 100
• Two columns, coloured  : {bin} plot readings.csv --columns 2,3 --colors red,blue
• Label bins             : {bin} plot readings.csv --bins 0,0.25,0.5,0.75,1
• Custom labels          : {bin} plot readings.csv --format '{{:6.1f}} ' --offset 4
• ASCII only             : {bin} demo sine --ascii
• Random walk            : {bin} demo walk --seed 7 --height 8
"
    );
}
