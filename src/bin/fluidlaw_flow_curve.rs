use env_logger::{Builder, Target};
use fluidlaw::prelude::*;
use log::LevelFilter;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "fluidlaw_flow_curve",
    about = "Computes the flow curve (simple shear) of a fluid law given a JSON file with parameters"
)]
struct Options {
    /// JSON file with the fluid parameters
    param_json: String,

    /// Minimum shear rate
    #[structopt(long, default_value = "1e-3")]
    rate_min: f64,

    /// Maximum shear rate
    #[structopt(long, default_value = "1e3")]
    rate_max: f64,

    /// Number of points
    #[structopt(long, default_value = "13")]
    npoint: usize,

    /// Saves a log-log plot (e.g., /tmp/fluidlaw/flow_curve.svg)
    #[structopt(long)]
    plot: Option<String>,

    /// Saves the flow curve as JSON
    #[structopt(long)]
    json: Option<String>,

    /// Log level (error, warn, info, debug, trace); defaults to RUST_LOG or info
    #[structopt(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse::<LevelFilter>().ok()))
        .unwrap_or(LevelFilter::Info);
    Builder::new().filter_level(level).target(Target::Stderr).init();
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    init_logging(options.log_level.as_deref());

    // load parameters and allocate the law
    let param = ParamFluid::read_json(&options.param_json)?;
    log::info!("read parameters from {}", options.param_json);
    let law = FluidLaw::new(2, &param)?;

    // flow curve
    let rates = FlowCurve::log_spaced_rates(options.rate_min, options.rate_max, options.npoint)?;
    let curve = FlowCurve::new(&law, &rates)?;
    println!("{}", curve);

    // output files
    if let Some(path) = &options.plot {
        curve.save_plot(path)?;
        log::info!("plot saved to {}", path);
    }
    if let Some(path) = &options.json {
        curve.write_json(path)?;
        log::info!("flow curve saved to {}", path);
    }
    Ok(())
}
