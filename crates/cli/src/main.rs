#![deny(unsafe_code)]
//! CLI binary for the swatch palette utility.
//!
//! Subcommands:
//! - `info <COLOR>...`: describe colours in every representation
//! - `build`: assemble a palette from images, colours and generators, then
//!   dedupe, filter, sort and optionally export it
//! - `pick <IMAGE>`: sample one pixel of an image
//! - `list`: print sort orders, filter modes, population modes and named colours
//! - `settings`: show or update the settings file

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use swatch_core::named::{FRAMEWORK, SYSTEM};
use swatch_core::{
    parse_color, CancelToken, ColorInfo, DominanceFilter, DominanceMode, Palette, PopulationMode,
    Settings, SortOrder,
};
use swatch_ops::image_io::{export, load_grid};
use swatch_ops::picker::DEFAULT_INTERVAL;
use swatch_ops::{pick, Operation, Region, Report, Worker};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "swatch", about = "Colour palette builder and inspector")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Settings file.
    #[arg(long, global = true, default_value = "swatch-settings.json")]
    settings: PathBuf,

    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Describe colours as ARGB, CMYK and HSV.
    Info {
        /// Colours as #AARRGGBB, #RRGGBB, cmyk:c,m,y,k, hsv:h,s,v or a name.
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Build a palette. Steps run in order: import, color, populate, dedupe,
    /// filter, sort, then export.
    Build {
        /// Gather every distinct colour of an image (bmp, gif, jpg, png, tif).
        #[arg(long, value_name = "IMAGE")]
        import: Vec<PathBuf>,

        /// Add one colour.
        #[arg(long = "color", value_name = "COLOR")]
        colors: Vec<String>,

        /// Append a generated sequence (reds, greens, blues, cyans, magentas,
        /// yellows, grayscale, framework, system).
        #[arg(long, value_name = "MODE")]
        populate: Vec<String>,

        /// Remove repeated colours, keeping the last of each.
        #[arg(long)]
        dedupe: bool,

        /// Discard swatches by dominance mode.
        #[arg(long, value_name = "MODE")]
        filter: Option<String>,

        /// Dominance threshold in [0, 1]. Defaults to the settings value.
        #[arg(long)]
        threshold: Option<f64>,

        /// Sort order (argb, cmyk, hsv, greyscale, random).
        #[arg(long, value_name = "ORDER")]
        sort: Option<String>,

        /// Seed for the random sort order.
        #[arg(long)]
        seed: Option<u64>,

        /// Export the palette as a grid image; the format follows the extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sample the colour of one pixel in an image.
    Pick {
        image: PathBuf,

        #[arg(long)]
        x: u32,

        #[arg(long)]
        y: u32,
    },
    /// List sort orders, filter modes, population modes and named colours.
    List,
    /// Show the settings, optionally updating them first.
    Settings {
        /// Update a setting, e.g. --set columns=4.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

struct BuildArgs {
    import: Vec<PathBuf>,
    colors: Vec<String>,
    populate: Vec<String>,
    dedupe: bool,
    filter: Option<String>,
    threshold: Option<f64>,
    sort: Option<String>,
    seed: Option<u64>,
    output: Option<PathBuf>,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Corrupt settings are reset to defaults rather than failing the command.
fn load_settings(path: &Path) -> Settings {
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "settings could not be loaded, using defaults");
            Settings::default()
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Info { colors } => {
            let infos = colors
                .iter()
                .map(|c| parse_color(c).map(|argb| (c, ColorInfo::of(argb))))
                .collect::<Result<Vec<_>, _>>()?;
            if cli.json {
                let list: Vec<_> = infos
                    .iter()
                    .map(|(input, info)| serde_json::json!({ "input": input, "info": info }))
                    .collect();
                print_json(&serde_json::Value::Array(list))?;
            } else {
                for (i, (_, info)) in infos.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{info}");
                }
            }
        }
        Command::Build {
            import,
            colors,
            populate,
            dedupe,
            filter,
            threshold,
            sort,
            seed,
            output,
        } => {
            let settings = load_settings(&cli.settings);
            let args = BuildArgs {
                import,
                colors,
                populate,
                dedupe,
                filter,
                threshold,
                sort,
                seed,
                output,
            };
            build(cli.json, &settings, args)?;
        }
        Command::Pick { image, x, y } => {
            let grid = load_grid(&image)?;
            let picked = pick(
                &grid,
                || (x, y),
                || false,
                &CancelToken::new(),
                DEFAULT_INTERVAL,
                |_| {},
            )?;
            let info = ColorInfo::of(picked.last);
            if cli.json {
                print_json(&serde_json::json!({ "x": x, "y": y, "info": info }))?;
            } else {
                println!("{info}");
            }
        }
        Command::List => {
            let framework: Vec<_> = FRAMEWORK.iter().map(|n| n.name).collect();
            let system: Vec<_> = SYSTEM.iter().map(|n| n.name).collect();
            if cli.json {
                print_json(&serde_json::json!({
                    "sort_orders": SortOrder::list_names(),
                    "filter_modes": DominanceMode::list_names(),
                    "population_modes": PopulationMode::list_names(),
                    "framework_colors": framework,
                    "system_colors": system,
                }))?;
            } else {
                println!("Sort orders:");
                println!("  {}", SortOrder::list_names().join(", "));
                println!("Filter modes:");
                println!("  {}", DominanceMode::list_names().join(", "));
                println!("Population modes:");
                println!("  {}", PopulationMode::list_names().join(", "));
                println!("Framework colours ({}):", framework.len());
                println!("  {}", framework.join(", "));
                println!("System colours ({}):", system.len());
                println!("  {}", system.join(", "));
            }
        }
        Command::Settings { set } => {
            let mut settings = load_settings(&cli.settings);
            if !set.is_empty() {
                for pair in &set {
                    let (key, value) = pair
                        .split_once('=')
                        .ok_or_else(|| CliError::Input(format!("expected KEY=VALUE, got {pair}")))?;
                    settings.set(key.trim(), value)?;
                }
                settings.save(&cli.settings)?;
            }
            if cli.json {
                print_json(&serde_json::to_value(&settings)?)?;
            } else {
                println!("settings file: {}", cli.settings.display());
                println!("  grid_mode            = {}", settings.grid_mode.name());
                println!("  columns              = {}", settings.columns);
                println!("  color_space          = {}", settings.color_space.name());
                println!("  keep_in_foreground   = {}", settings.keep_in_foreground);
                println!("  max_alpha_on_preview = {}", settings.max_alpha_on_preview);
                println!("  dominance_threshold  = {}", settings.dominance_threshold);
            }
        }
    }

    Ok(())
}

fn build(json: bool, settings: &Settings, args: BuildArgs) -> Result<(), CliError> {
    // Reject bad input before any step runs.
    let colors = args
        .colors
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<Vec<_>, _>>()?;
    let populate = args
        .populate
        .iter()
        .map(|m| PopulationMode::from_name(m))
        .collect::<Result<Vec<_>, _>>()?;
    let filter = args.filter.as_deref().map(DominanceMode::from_name).transpose()?;
    let threshold = args.threshold.unwrap_or(settings.dominance_threshold);
    if let Some(mode) = filter {
        DominanceFilter::new(mode, threshold)?;
    }
    let sort = args.sort.as_deref().map(SortOrder::from_name).transpose()?;

    let mut worker = Worker::new(Palette::new());
    let mut reports = Vec::new();

    for path in &args.import {
        let grid = load_grid(path)?;
        let region = Region::full(grid.width(), grid.height());
        let op = Operation::Gather {
            source: Arc::new(grid),
            region,
        };
        reports.push(step(&mut worker, op)?);
    }
    worker.with_palette(|p| p.extend(colors.iter().copied()));
    for mode in populate {
        reports.push(step(&mut worker, Operation::Populate(mode))?);
    }
    if args.dedupe {
        reports.push(step(&mut worker, Operation::Dedupe)?);
    }
    if let Some(mode) = filter {
        reports.push(step(&mut worker, Operation::Filter { mode, threshold })?);
    }
    if let Some(order) = sort {
        let op = Operation::Sort {
            order,
            seed: args.seed,
        };
        reports.push(step(&mut worker, op)?);
    }

    let palette = worker.snapshot();
    let exported = match &args.output {
        Some(path) => Some((path, export(&palette, path)?)),
        None => None,
    };

    if json {
        print_json(&serde_json::json!({
            "steps": reports,
            "count": palette.len(),
            "colors": palette,
            "output": exported.map(|(path, format)| serde_json::json!({
                "path": path.display().to_string(),
                "format": format.name(),
            })),
        }))?;
    } else {
        for report in &reports {
            eprintln!("{}", report.status);
        }
        for color in palette.colors() {
            println!("{color}");
        }
        if let Some((path, format)) = exported {
            eprintln!(
                "exported {} swatches as {} -> {}",
                palette.len(),
                format.name(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Runs one operation to completion, turning a failed report into an error.
fn step(worker: &mut Worker, op: Operation) -> Result<Report, CliError> {
    let report = worker.run(op)?;
    if report.is_ok() {
        Ok(report)
    } else {
        Err(CliError::Operation(report.status))
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
