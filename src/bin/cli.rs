//! A thin host around the engine: reads a point file, runs one of the two
//! exposed queries, prints the result as flat text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, info_span, warn};

use convex_angle_hull::{generate_angle_hull, io, Angle, ConvexHull, CuttingStrategy};

#[derive(Parser)]
#[command(name = "convex-angle-hull")]
#[command(about = "Convex hull and alpha-angle hull demo over a point file")]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the convex hull of a point file and print its points.
    Hull {
        #[arg(long)]
        input: PathBuf,
    },
    /// Build the alpha-angle hull of a point file and print its arcs.
    AngleHull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        degrees: f64,
        #[arg(long, value_enum, default_value_t = Strategy::Cut)]
        strategy: Strategy,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Cut,
    Uncut,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.action {
        Action::Hull { input } => hull(input),
        Action::AngleHull {
            input,
            degrees,
            strategy,
        } => angle_hull(input, degrees, strategy),
    }
}

fn read_input(path: &PathBuf) -> Result<Vec<convex_angle_hull::Point>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading point file {}", path.display()))?;
    let points = io::read_points(&bytes)
        .with_context(|| format!("decoding point file {}", path.display()))?;
    if points.is_empty() {
        warn!(path = %path.display(), "point file contained no well-formed points");
    }
    Ok(points)
}

fn hull(input: PathBuf) -> Result<()> {
    let _span = info_span!("invocation", command = "hull", input = %input.display()).entered();
    let points = read_input(&input)?;
    info!(count = points.len(), "points read");

    let hull = ConvexHull::build(&points);
    for point in hull.points() {
        println!("{point}");
    }
    Ok(())
}

fn angle_hull(input: PathBuf, degrees: f64, strategy: Strategy) -> Result<()> {
    let _span = info_span!(
        "invocation",
        command = "angle-hull",
        input = %input.display(),
        degrees
    )
    .entered();
    let points = read_input(&input)?;
    info!(count = points.len(), "points read");

    let hull = ConvexHull::build(&points);
    let alpha = Angle::from_deg(degrees);
    let angle_hull = generate_angle_hull(&hull, alpha)
        .with_context(|| format!("building angle hull at {degrees} degrees"))?;
    info!(arcs = angle_hull.len(), "angle hull built");

    let strategy = match strategy {
        Strategy::Cut => CuttingStrategy::Cut,
        Strategy::Uncut => CuttingStrategy::Uncut,
    };
    for line in angle_hull.map_with(strategy, |arc| {
        format!(
            "{} {} {} {} {}",
            arc.center().x,
            arc.center().y,
            arc.radius(),
            arc.rho().radians(),
            arc.beta().radians()
        )
    }) {
        println!("{line}");
    }
    Ok(())
}
