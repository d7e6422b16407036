use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dubins_tsp::api::{
    draw_sites, shortest_path, Configuration, DubinsMetric, MetricKind, NearestNeighbor,
    ReplayToken, SiteCfg, TourCfg, TracingLog,
};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod gml;
mod provenance;

use gml::GmlNode;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Nearest-neighbor tours over oriented points for a Dubins vehicle")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a greedy tour through every node of a GML graph
    Solve(SolveArgs),
    /// Print the shortest Dubins word between two poses
    Cost {
        #[arg(long, value_parser = parse_pose)]
        from: Configuration,
        #[arg(long, value_parser = parse_pose)]
        to: Configuration,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Write a random instance as GML
    Generate {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half side length of the square positions are drawn from
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        /// Give every node heading 0 instead of a random one
        #[arg(long)]
        fixed_heading: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SolveArgs {
    #[arg(long)]
    input: PathBuf,
    /// Minimum turning radius
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    /// Cost model: dubins or euclidean
    #[arg(long, default_value = "dubins")]
    metric: MetricKind,
    /// Start pose as x,y[,heading]
    #[arg(long, value_parser = parse_pose, default_value = "0,0,0")]
    start: Configuration,
    /// End pose as x,y[,heading]; defaults to the start pose
    #[arg(long, value_parser = parse_pose)]
    end: Option<Configuration>,
    /// Write the tour as JSON (plus a provenance sidecar)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write the input graph with tour edges as GML
    #[arg(long)]
    tour_gml: Option<PathBuf>,
}

#[derive(Serialize)]
struct TourReport {
    metric: String,
    radius: f64,
    start: [f64; 3],
    end: [f64; 3],
    nodes: usize,
    tour: Vec<i64>,
    legs: Vec<f64>,
    total_cost: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose, cmd.log_file.as_deref())?;
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Cost { from, to, radius } => cost(from, to, radius),
        Action::Generate {
            count,
            seed,
            extent,
            fixed_heading,
            out,
        } => generate(count, seed, extent, !fixed_heading, out),
        Action::Report => report(),
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// `x,y` or `x,y,heading` (radians).
fn parse_pose(s: &str) -> std::result::Result<Configuration, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("bad pose '{s}': {e}"))?;
    let pose = match parts.as_slice() {
        [x, y] => Configuration::new(*x, *y, 0.0),
        [x, y, h] => Configuration::new(*x, *y, *h),
        _ => return Err(format!("pose '{s}' must be x,y or x,y,heading")),
    };
    pose.validate().map_err(|e| e.to_string())?;
    Ok(pose)
}

fn pose_array(q: &Configuration) -> [f64; 3] {
    [q.x(), q.y(), q.heading]
}

fn solve(args: SolveArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let graph =
        gml::parse_graph(&text).with_context(|| format!("parsing {}", args.input.display()))?;
    let n = graph.nodes.len();
    tracing::info!(
        input = %args.input.display(),
        nodes = n,
        edges = graph.edge_count,
        "loaded graph"
    );

    let cfg = TourCfg {
        radius: args.radius,
        start: args.start,
        end: args.end.unwrap_or(args.start),
        metric: args.metric,
    };
    let log = TracingLog;
    let tour = NearestNeighbor::new(cfg.cost_model()?)
        .with_log(&log)
        .build(&graph.nodes, &cfg.start, &cfg.end)?;

    println!("Solved {} point tour with cost {}.", n, tour.total_cost);
    println!("Tour: {}.", tour.render());

    let ids = tour.ids();
    if let Some(out) = &args.out {
        let report = TourReport {
            metric: cfg.metric.to_string(),
            radius: cfg.radius,
            start: pose_array(&cfg.start),
            end: pose_array(&cfg.end),
            nodes: n,
            tour: ids.clone(),
            legs: tour.legs.clone(),
            total_cost: tour.total_cost,
        };
        write_file(out, &serde_json::to_vec_pretty(&report)?)?;
        let payload = Payload::new(
            "solve",
            serde_json::json!({
                "metric": cfg.metric.to_string(),
                "radius": cfg.radius,
                "start": pose_array(&cfg.start),
                "end": pose_array(&cfg.end)
            }),
        )
        .with_input(&args.input);
        write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), "wrote tour");
    }
    if let Some(path) = &args.tour_gml {
        let edges: Vec<(i64, i64)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
        write_file(path, gml::write_graph(&graph.nodes, &edges).as_bytes())?;
        tracing::info!(out = %path.display(), "wrote tour graph");
    }
    Ok(())
}

fn cost(from: Configuration, to: Configuration, radius: f64) -> Result<()> {
    let metric = DubinsMetric::new(radius)?;
    let path = shortest_path(&from, &to, metric.radius());
    let [a, b, c] = path.segments();
    tracing::debug!(word = %path.word(), a, b, c, "segments");
    println!("{} {}", path.word(), path.length());
    Ok(())
}

fn generate(count: usize, seed: u64, extent: f64, random_heading: bool, out: PathBuf) -> Result<()> {
    // The sampler draws from [-extent, extent]; that width must be finite.
    if !(extent > 0.0 && (2.0 * extent).is_finite()) {
        bail!("--extent must be positive and finite, got {extent}");
    }
    let cfg = SiteCfg {
        count,
        half_extent: extent,
        random_heading,
    };
    let nodes: Vec<GmlNode> = draw_sites(cfg, ReplayToken::new(seed, 0))
        .into_iter()
        .map(|n| GmlNode {
            id: n.id as i64,
            label: None,
            configuration: n.configuration,
        })
        .collect();
    write_file(&out, gml::write_graph(&nodes, &[]).as_bytes())?;
    let payload = Payload::new(
        "generate",
        serde_json::json!({
            "count": count,
            "seed": seed,
            "extent": extent,
            "random_heading": random_heading
        }),
    );
    write_sidecar(&out, payload)?;
    tracing::info!(count, seed, out = %out.display(), "generate");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": dubins_tsp::VERSION,
        "params": {
            "default_cfg": {
                "radius": TourCfg::default().radius,
                "metric": TourCfg::default().metric.to_string()
            }
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
