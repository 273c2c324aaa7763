use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyhit::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod polyfile;

use polyfile::PolyFile;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon hit-testing companion: generate, query, benchmark")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a synthetic ring contour and save it as JSON
    Gen {
        #[arg(long, default_value_t = 10_000)]
        vertices: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Load a contour file and test one point against it
    Query {
        #[arg(long)]
        input: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Build a large synthetic contour and time random queries
    Bench {
        #[arg(long, default_value_t = 50_000)]
        vertices: usize,
        #[arg(long, default_value_t = 1_000_000)]
        queries: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            vertices,
            seed,
            out,
        } => gen(vertices, seed, out),
        Action::Query { input, x, y } => query(input, x, y),
        Action::Bench {
            vertices,
            queries,
            seed,
        } => bench(vertices, queries, seed),
    }
}

fn gen(vertices: usize, seed: u64, out: String) -> Result<()> {
    tracing::info!(vertices, seed, out, "gen");
    let set = synthetic_ring(
        RingCfg {
            vertex_count: VertexCount::Fixed(vertices),
            ..Default::default()
        },
        ReplayToken { seed, index: 0 },
    );
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    PolyFile::from_contours(&set).save(out_path)?;
    Ok(())
}

fn query(input: String, x: f64, y: f64) -> Result<()> {
    let set = PolyFile::load(Path::new(&input))
        .with_context(|| format!("loading {input}"))?
        .into_contours();
    let index = build_index(&set);
    let inside = index.contains_alloc(Vec2::new(x, y));
    tracing::info!(x, y, inside, contours = set.contour_count(), "query");
    println!("{}", if inside { "inside" } else { "outside" });
    Ok(())
}

fn bench(vertices: usize, queries: usize, seed: u64) -> Result<()> {
    tracing::info!(vertices, queries, seed, "bench");
    let set = synthetic_ring(
        RingCfg {
            vertex_count: VertexCount::Fixed(vertices),
            ..Default::default()
        },
        ReplayToken { seed, index: 0 },
    );

    let t0 = Instant::now();
    let index = build_index(&set);
    let build_us = t0.elapsed().as_micros() as u64;
    tracing::info!(
        slabs = index.slab_count(),
        scratch = index.required_scratch_size(),
        build_us,
        "built"
    );

    // Warm-up pass before the timed run.
    warm_up(&index, queries.min(100_000), 1.5, ReplayToken { seed, index: 1 });

    let t1 = Instant::now();
    let inside = warm_up(&index, queries, 1.5, ReplayToken { seed, index: 2 });
    let elapsed = t1.elapsed();
    let per_query_us = elapsed.as_secs_f64() * 1e6 / queries.max(1) as f64;
    tracing::info!(
        inside,
        total_ms = elapsed.as_millis() as u64,
        per_query_us,
        "timed"
    );
    Ok(())
}
