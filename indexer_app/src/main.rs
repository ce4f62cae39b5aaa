//! Octree Indexer
//!
//! Command-line front end for the cloud_index library:
//! - Reads a LAS point cloud tile
//! - Derives its bounding cube
//! - Builds the octree one point at a time with a progress bar
//! - Reports indexing statistics
//! - Optionally persists the populated leaves as RON

use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, Command};
use cloud_index::foundation::time::Stopwatch;
use cloud_index::prelude::*;
use pbr::ProgressBar;
use std::time::Duration;

fn cli() -> Command {
    Command::new("octree_indexer")
        .about("Builds an octree spatial index from a LAS point cloud")
        .arg(
            Arg::new("input")
                .help("LAS file to index")
                .index(1)
                .required_unless_present("config"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML/RON configuration file; command-line flags override it"),
        )
        .arg(
            Arg::new("max-type")
                .long("max-type")
                .value_parser(["nodes", "depth"])
                .default_value("nodes")
                .help("Split on points per leaf (nodes) or on tree depth (depth)"),
        )
        .arg(
            Arg::new("max-value")
                .long("max-value")
                .value_parser(value_parser!(u32))
                .default_value("100")
                .help("Numeric threshold for the split policy"),
        )
        .arg(
            Arg::new("scaled")
                .long("scaled")
                .action(ArgAction::SetTrue)
                .help("Use georeferenced coordinates instead of raw grid values"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Disable the progress bar"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write leaf records to this RON file"),
        )
}

fn split_policy_from(matches: &clap::ArgMatches) -> SplitPolicy {
    let value = *matches.get_one::<u32>("max-value").unwrap_or(&100);
    match matches.get_one::<String>("max-type").map(String::as_str) {
        Some("depth") => SplitPolicy::MaxDepth(value),
        _ => SplitPolicy::MaxPointsPerLeaf(value as usize),
    }
}

/// Assemble the run configuration from an optional config file plus
/// whatever flags were explicitly given on the command line
fn build_config(matches: &clap::ArgMatches) -> Result<IndexerConfig, Box<dyn std::error::Error>> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => IndexerConfig::load_from_file(path)?,
        None => IndexerConfig::default(),
    };

    if let Some(input) = matches.get_one::<String>("input") {
        config.input_file = input.clone();
    }
    let policy_given = ["max-type", "max-value"]
        .iter()
        .any(|id| matches.value_source(id) == Some(ValueSource::CommandLine));
    if policy_given || matches.get_one::<String>("config").is_none() {
        config.split_policy = split_policy_from(matches);
    }
    if matches.get_flag("scaled") {
        config.use_scaled_data = true;
    }
    if matches.get_flag("no-progress") {
        config.progress_bar = false;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output_file = Some(output.clone());
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let matches = cli().get_matches();
    let config = build_config(&matches)?;

    println!("=== Octree Indexer ===");

    let mut stopwatch = Stopwatch::start_new();
    let cloud = LasLoader::load_las(&config.input_file, config.use_scaled_data)?;
    log::info!(
        "Loaded {} points from {} in {:.2}s",
        cloud.len(),
        config.input_file,
        stopwatch.elapsed_secs()
    );

    let aabb = cloud.bounding_box().ok_or("point cloud is empty")?;
    let (origin, edge) = (aabb.min, aabb.longest_edge());

    println!("Basic Data Info:");
    println!("  Points:    {}", cloud.len());
    println!(
        "  Min Coord: {:.3}, {:.3}, {:.3}",
        aabb.min.x, aabb.min.y, aabb.min.z
    );
    println!(
        "  Max Coord: {:.3}, {:.3}, {:.3}",
        aabb.max.x, aabb.max.y, aabb.max.z
    );
    println!("  Map Size:  {:.3}", edge);

    let mut octree = Octree::from_min_corner(origin, edge, config.split_policy);

    stopwatch.restart();
    let mut progress = if config.progress_bar {
        let mut pb = ProgressBar::new(cloud.len() as u64);
        pb.set_max_refresh_rate(Some(Duration::from_millis(100)));
        Some(pb)
    } else {
        None
    };

    let mut rejected = 0usize;
    for point in &cloud {
        if octree.insert_point(point.clone()).is_none() {
            rejected += 1;
        }
        if let Some(pb) = progress.as_mut() {
            pb.inc();
        }
    }
    if let Some(pb) = progress.as_mut() {
        pb.finish();
    }

    let indexed = octree.point_count();
    log::info!("Indexed {} points in {:.2}s", indexed, stopwatch.elapsed_secs());
    if rejected > 0 {
        log::warn!("{rejected} points fell outside the bounding cube and were skipped");
    }

    let mut leaf_count = 0usize;
    let mut deepest = 0u32;
    for leaf in octree.leaves() {
        leaf_count += 1;
        deepest = deepest.max(leaf.depth());
    }

    println!("Generated octree with {indexed} points");
    println!("  Leaves:       {leaf_count}");
    println!("  Deepest leaf: {deepest}");

    if let Some(output) = &config.output_file {
        stopwatch.restart();
        save_leaves(&octree, output)?;
        log::info!(
            "Wrote {} leaf records to {} in {:.2}s",
            leaf_count,
            output,
            stopwatch.elapsed_secs()
        );
    }

    Ok(())
}
