use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use rect_packer_core::{
    ItemType, PackStats, Placement, best_single_layout, pack_multiple, render,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rect-packer",
    about = "Pack axis-aligned rectangles into a box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Best single-type layout (grid / swapped grid / row-greedy)
    Single(SingleArgs),
    /// Greedy multi-type packing, largest instances first
    Multi(MultiArgs),
}

#[derive(Parser, Debug, Clone)]
struct SingleArgs {
    /// Box width and height
    #[arg(long = "box", num_args = 2, value_names = ["W", "H"], action = ArgAction::Set, required = true)]
    box_dims: Vec<f64>,
    /// Item width and height
    #[arg(long, num_args = 2, value_names = ["W", "H"], action = ArgAction::Set, required = true)]
    item: Vec<f64>,
    /// Maximum number of items available
    #[arg(long)]
    count: Option<usize>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug, Clone)]
struct MultiArgs {
    /// Box width and height
    #[arg(long = "box", num_args = 2, value_names = ["W", "H"], action = ArgAction::Set, required = true)]
    box_dims: Vec<f64>,
    /// Item type as WxHxCOUNT (repeatable; order defines type ids)
    #[arg(long = "item", value_name = "WxHxCOUNT", required = true)]
    items: Vec<ItemSpec>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct OutputArgs {
    /// Print placements as a JSON document instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Write a PNG preview of the layout
    #[arg(long, value_name = "PATH")]
    render: Option<PathBuf>,
    /// Pixels per container unit for --render
    #[arg(long, default_value_t = 10.0)]
    scale: f64,
}

#[derive(Debug, Clone, Copy)]
struct ItemSpec {
    w: f64,
    h: f64,
    capacity: usize,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 3 {
            return Err(format!("expected WxHxCOUNT, got `{s}`"));
        }
        let w = parts[0]
            .parse::<f64>()
            .map_err(|e| format!("bad width in `{s}`: {e}"))?;
        let h = parts[1]
            .parse::<f64>()
            .map_err(|e| format!("bad height in `{s}`: {e}"))?;
        let capacity = parts[2]
            .parse::<usize>()
            .map_err(|e| format!("bad count in `{s}`: {e}"))?;
        Ok(Self { w, h, capacity })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Single(args) => run_single(args),
        Commands::Multi(args) => run_multi(args),
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

fn run_single(args: &SingleArgs) -> anyhow::Result<()> {
    let (box_w, box_h) = (args.box_dims[0], args.box_dims[1]);
    let (item_w, item_h) = (args.item[0], args.item[1]);

    let rects = best_single_layout(box_w, box_h, item_w, item_h, args.count)
        .context("compute single-type layout")?;

    info!("Placed: {} item(s)", rects.len());
    if let Some(count) = args.count {
        info!("Available: {count}");
    }
    let cols = (box_w / item_w).floor();
    let rows = (box_h / item_h).floor();
    info!(
        "Estimate grid (no-rotation): {cols} x {rows} = {}",
        cols * rows
    );

    let placements: Vec<Placement> = rects
        .iter()
        .map(|r| Placement { rect: *r, type_id: 0 })
        .collect();
    emit(box_w, box_h, &placements, &args.output)
}

fn run_multi(args: &MultiArgs) -> anyhow::Result<()> {
    let (box_w, box_h) = (args.box_dims[0], args.box_dims[1]);
    let types: Vec<ItemType> = args
        .items
        .iter()
        .map(|s| ItemType::new(s.w, s.h, s.capacity))
        .collect();

    let placements = pack_multiple(box_w, box_h, &types).context("pack item catalog")?;

    info!(
        "Placed {} total items from {} types",
        placements.len(),
        types.len()
    );
    let mut counts = vec![0usize; types.len()];
    for p in &placements {
        counts[p.type_id] += 1;
    }
    for (type_id, count) in counts.iter().enumerate() {
        info!("Type {type_id}: {count} of {}", types[type_id].capacity);
    }

    emit(box_w, box_h, &placements, &args.output)
}

#[derive(Serialize)]
struct BoxDims {
    w: f64,
    h: f64,
}

#[derive(Serialize)]
struct LayoutDoc<'a> {
    #[serde(rename = "box")]
    bounds: BoxDims,
    placements: &'a [Placement],
    count: usize,
}

fn emit(
    box_w: f64,
    box_h: f64,
    placements: &[Placement],
    out: &OutputArgs,
) -> anyhow::Result<()> {
    if out.json {
        let doc = LayoutDoc {
            bounds: BoxDims { w: box_w, h: box_h },
            placements,
            count: placements.len(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let stats = PackStats::from_placements(box_w, box_h, placements);
        info!("{}", stats.summary());
        for (i, p) in placements.iter().take(50).enumerate() {
            println!(
                "{:3}: x={:.2}, y={:.2}, w={:.2}, h={:.2}, type={}",
                i + 1,
                p.rect.x,
                p.rect.y,
                p.rect.w,
                p.rect.h,
                p.type_id
            );
        }
        if placements.len() > 50 {
            println!("... {} more", placements.len() - 50);
        }
    }

    if let Some(path) = &out.render {
        anyhow::ensure!(
            render::is_available(),
            "rendering support is not compiled into rect-packer-core"
        );
        let png = render::export_png(box_w, box_h, placements, out.scale).context("render layout")?;
        fs::write(path, png).with_context(|| format!("write {}", path.display()))?;
        info!("Layout image written to {}", path.display());
    }
    Ok(())
}
