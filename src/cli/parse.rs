use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::constants::{DEFAULT_OFFSET, DEFAULT_X_FORMAT, DEFAULT_Y_FORMAT};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "asciiline",
    version,
    about = "Line charts for the terminal, drawn with box-drawing glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot whitespace- or comma-separated columns, one series per column
    Plot(PlotArgs),
    /// Plot a built-in data set
    Demo(DemoArgs),
    /// Show available colour names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Options shared by every chart-drawing subcommand.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Lower bound of the y-axis (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Upper bound of the y-axis (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Rows to scale the value range to (one per unit if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Columns reserved left of the plot
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: usize,

    /// Y-axis label template, e.g. `{:8.2f} `
    #[arg(long, default_value = DEFAULT_Y_FORMAT)]
    pub format: String,

    /// X-axis label template
    #[arg(long, default_value = DEFAULT_X_FORMAT)]
    pub x_format: String,

    /// Colours cycled across series (names, `#RRGGBB` or `none`)
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Exactly ten glyphs overriding the default box-drawing set
    #[arg(long, conflicts_with = "ascii")]
    pub symbols: Option<String>,

    /// Use plain ASCII glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Bin edges to label along the x-axis
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub bins: Vec<f64>,
}

/// `asciiline plot …`
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Plot only these 1-based columns
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<usize>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// 15 · sin over two periods
    Sine,
    /// 7 · cos rounded to two decimals
    Cosine,
    /// A constant series
    Flat,
    /// Integer random walk
    Walk,
    /// Sine and cosine together
    Multi,
    /// Sine with regular gaps of missing samples
    Gaps,
}

/// `asciiline demo …`
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(value_enum, default_value_t = DemoKind::Sine)]
    pub kind: DemoKind,

    /// Samples per series (fits the terminal if omitted)
    #[arg(long)]
    pub width: Option<usize>,

    /// Seed for the random walk
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub chart: ChartArgs,
}
