use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shapes::{parse_str, report, Shape};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod render;

const DEFAULT_INPUT: &str = "data.txt";

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon areas and pairwise overlap report")]
struct Cmd {
    /// Log debug events (parsed shapes, detected overlaps) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every shape's area followed by the overlap report
    Run {
        #[command(flatten)]
        io: InputArgs,
        /// Also write the JSON report here, plus a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print only the per-shape areas
    Areas {
        #[command(flatten)]
        io: InputArgs,
    },
    /// Print only the overlap report
    Overlaps {
        #[command(flatten)]
        io: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Shape file, one `name, [(x, y), ...]` per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run { io, out } => run(&io, out.as_deref()),
        Action::Areas { io } => areas(&io),
        Action::Overlaps { io } => overlaps(&io),
    }
}

fn load_shapes(path: &Path) -> Result<Vec<Shape>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let shapes = parse_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(input = %path.display(), shapes = shapes.len(), "loaded");
    Ok(shapes)
}

fn run(io: &InputArgs, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %io.input.display(), format = ?io.format, out = ?out, "run");
    let shapes = load_shapes(&io.input)?;
    let overlaps = report(&shapes);
    match io.format {
        Format::Text => {
            print!("{}", render::areas_text(&shapes));
            print!("{overlaps}");
        }
        Format::Json => {
            let doc = render::Document::full(&shapes, &overlaps);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        let doc = render::Document::full(&shapes, &overlaps);
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = provenance::Payload {
            input: io.input.to_string_lossy().into_owned(),
            shapes: shapes.len(),
            overlaps: overlaps.len(),
        };
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote report");
    }
    Ok(())
}

fn areas(io: &InputArgs) -> Result<()> {
    tracing::info!(input = %io.input.display(), format = ?io.format, "areas");
    let shapes = load_shapes(&io.input)?;
    match io.format {
        Format::Text => print!("{}", render::areas_text(&shapes)),
        Format::Json => {
            let doc = render::Document::areas(&shapes);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn overlaps(io: &InputArgs) -> Result<()> {
    tracing::info!(input = %io.input.display(), format = ?io.format, "overlaps");
    let shapes = load_shapes(&io.input)?;
    let overlaps = report(&shapes);
    match io.format {
        Format::Text => print!("{overlaps}"),
        Format::Json => {
            let doc = render::Document::overlaps(&overlaps);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
