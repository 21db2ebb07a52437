use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use seismic_rt::*;

/// Trace a seismic ray through a horizontally layered model.
#[derive(Parser)]
#[command(name = "seismic-rt", version, about)]
struct Args {
    /// JSON model file; the built-in six layer model when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Incidence angle at the source, degrees from vertical.
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Source depth.
    #[arg(long, allow_hyphen_values = true)]
    depth: Option<f64>,

    #[arg(long, short, value_enum)]
    format: Option<Format>,

    /// Write here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    dump_config: bool,

    /// More logging, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Trace a fan of rays over a range of incidence angles.
    Sweep {
	#[arg(long, allow_hyphen_values = true)]
	from: f64,

	#[arg(long, allow_hyphen_values = true)]
	to: f64,

	#[arg(long, default_value_t = 10)]
	count: usize,

	/// Pick each angle at random inside its interval.
	#[arg(long)]
	jitter: bool,

	#[arg(long)]
	seed: Option<u64>,
    },
}

fn init_logging(args: &Args) {
    let mut builder = env_logger::Builder::from_default_env();
    if args.quiet {
	builder.filter_level(LevelFilter::Error);
    } else if args.verbose > 0 {
	builder.filter_level(match args.verbose {
	    1 => LevelFilter::Info,
	    2 => LevelFilter::Debug,
	    _ => LevelFilter::Trace,
	});
    }
    builder.init();
}

fn effective_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
	Some(path) => Config::load(path)?,
	None => Config::default(),
    };

    if let Some(angle) = args.angle {
	config.incidence_angle = angle.into();
    }
    if let Some(depth) = args.depth {
	config.source_depth = depth.into();
    }
    if let Some(format) = args.format {
	config.render.format = format;
    }
    if let Some(output) = &args.output {
	config.render.output = Some(output.clone());
    }
    if let Some(width) = args.width {
	config.render.width = width;
    }
    if let Some(height) = args.height {
	config.render.height = height;
    }
    if let Some(Command::Sweep { from, to, count, jitter, seed }) = &args.command {
	config.sweep = Some(Sweep {
	    from: *from,
	    to: *to,
	    count: *count,
	    jitter: *jitter,
	    seed: *seed,
	});
    }
    Ok(config)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
	Some(path) => {
	    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
	    Box::new(BufWriter::new(file))
	},
	None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args);

    let config = effective_config(&args)?;
    if args.dump_config {
	println!("{}", serde_json::to_string_pretty(&config)?);
	return Ok(ExitCode::SUCCESS);
    }

    // the sweep range is checked with the model, before anything is traced or written
    let checked = validate(&config.to_raw())
	.and_then(|valid| config.sweep.as_ref().map_or(Ok(()), Sweep::check).map(|_| valid));
    let (model, source) = match checked {
	Ok(valid) => valid,
	Err(err) => {
	    warn!("model rejected: {:?}", err.kind());
	    eprintln!("{}", err);
	    return Ok(ExitCode::FAILURE);
	},
    };
    info!("{} layers, source at {} with incidence angle {}",
	  model.len(), source.depth(), source.incidence_angle());

    let settings = &config.render;
    let mut out = open_output(settings.output.as_deref())?;

    match &config.sweep {
	Some(sweep) => {
	    let rays = sweep.run(&model, &source)?;
	    write_summary(&rays, settings.format, &mut out).context("cannot write sweep summary")?;
	},
	None => {
	    let result = trace(&model, &source);
	    Renderer::new(settings.format, settings.width, settings.height)
		.render(&result, &mut out)
		.context("cannot write trace")?;
	},
    }
    out.flush()?;

    if let Some(path) = &settings.output {
	info!("wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
