mod cli;
mod config;
mod error;
mod export;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command};
use log::{debug, error, info, warn};
use shelf_engine::{
    EngineConfig, FacetFilter, FacetKey, Footprint, PlanogramSnapshot, ShelfLineItem,
    ViolationReport, build_shelf_lines, dimmed_item_ids, find_compatible_positions,
};
use std::io::Write;

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    if let Err(e) = run(Args::parse()) {
        error!("Error: {e:#}");
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut engine_config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(scale) = args.scale {
        engine_config.layout.scale = scale;
        engine_config.validate()?;
    }
    debug!("Engine config: {engine_config:?}");

    let snapshot = PlanogramSnapshot::load_from_file(&args.input)
        .with_context(|| format!("loading snapshot {}", args.input.display()))?;
    info!(
        "Loaded {} bays and {} placements from {}",
        snapshot.bays.len(),
        snapshot.products.len(),
        args.input.display()
    );

    match args.command {
        Command::Layout { json } => layout(&snapshot, &engine_config, json),
        Command::Place {
            product,
            width,
            height,
            export,
        } => place(&snapshot, &engine_config, product, width.zip(height), export),
        Command::Filter { options } => filter(&snapshot, &engine_config, options),
        Command::Violations { response } => {
            let body = std::fs::read_to_string(&response)
                .with_context(|| format!("reading {}", response.display()))?;
            violations(&snapshot, &ViolationReport::from_json_str_or_default(&body));
            Ok(())
        }
    }
}

fn layout(snapshot: &PlanogramSnapshot, engine_config: &EngineConfig, json: bool) -> Result<()> {
    let lines = build_shelf_lines(&snapshot.products, &snapshot.bays, &engine_config.layout)?;

    if json {
        let stdout = std::io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &lines)?;
        println!();
        return Ok(());
    }

    for (bay_idx, bay_lines) in lines.iter().enumerate() {
        for (shelf_idx, line) in bay_lines.iter().enumerate() {
            let (placed, free): (Vec<&ShelfLineItem>, Vec<&ShelfLineItem>) =
                line.iter().partition(|item| !item.is_empty());
            let free_width: f64 = free.iter().map(|item| item.width()).sum();
            info!(
                "Bay {} shelf {}: {} products, {:.1} free",
                bay_idx + 1,
                shelf_idx + 1,
                placed.len(),
                free_width
            );
        }
    }

    let config = config::Config::from_env()?;
    let path = export::export_shelf_lines(&lines, config.output_dir.as_deref())?;
    info!("Shelf lines saved to: {}", path.display());
    Ok(())
}

fn place(
    snapshot: &PlanogramSnapshot,
    engine_config: &EngineConfig,
    product: Option<String>,
    size: Option<(f64, f64)>,
    export: bool,
) -> Result<()> {
    let footprint = match (product, size) {
        (Some(id), _) => {
            let placement = snapshot
                .product(&id)
                .ok_or_else(|| error::CliError::UnknownProduct(id.clone()))?;
            Footprint::for_product(placement, engine_config.layout.scale)?
        }
        (None, Some((width, height))) => Footprint::new(width, height)?,
        (None, None) => anyhow::bail!("pass either --product or --width/--height"),
    };

    let lines = build_shelf_lines(&snapshot.products, &snapshot.bays, &engine_config.layout)?;
    let positions = find_compatible_positions(&lines, &snapshot.bays, footprint);

    if positions.is_empty() {
        warn!(
            "No space available for a {:.1} x {:.1} product",
            footprint.width(),
            footprint.height()
        );
        return Ok(());
    }

    for pos in &positions {
        info!(
            "Bay {} shelf {}: items {}..={} ({:.1} wide)",
            pos.bay_idx + 1,
            pos.shelf_idx + 1,
            pos.start_item_idx,
            pos.end_item_idx,
            pos.available_width
        );
    }

    if export {
        let config = config::Config::from_env()?;
        let path = export::export_positions(&positions, config.output_dir.as_deref())?;
        info!("Positions saved to: {}", path.display());
    }
    Ok(())
}

fn filter(
    snapshot: &PlanogramSnapshot,
    engine_config: &EngineConfig,
    options: Option<String>,
) -> Result<()> {
    let engine = FacetFilter::new(&engine_config.filter);
    let products = &snapshot.products;

    if let Some(key) = options {
        let values = engine.unique_options(products, &key);
        info!("{} distinct values for {key}", values.len());
        for value in values {
            println!("{value}");
        }
        return Ok(());
    }

    let filters = &snapshot.filters;
    let active: Vec<String> = filters.active_facets().iter().map(ToString::to_string).collect();
    info!("Active facets: [{}]", active.join(", "));
    let kept = engine.filter(products, filters, None);
    info!("{} of {} products match", kept.len(), products.len());

    for facet in [FacetKey::Brand, FacetKey::SubCategory] {
        info!("Counts by {facet}:");
        for (value, count) in engine.facet_counts(products, filters, facet) {
            info!("  {value}: {count}");
        }
    }

    let lines = build_shelf_lines(products, &snapshot.bays, &engine_config.layout)?;
    let dimmed = dimmed_item_ids(&lines, products, filters, &engine);
    info!("{} shelf slots dimmed", dimmed.len());
    Ok(())
}

fn violations(snapshot: &PlanogramSnapshot, report: &ViolationReport) {
    info!("{} violations reported", report.violation_count);
    for violation in &report.violations {
        debug!(
            "{} at {} {}: {:?}",
            violation.kind.as_deref().unwrap_or("unknown"),
            violation.level_name.as_deref().unwrap_or("-"),
            violation.level_value.as_deref().unwrap_or("-"),
            violation.affected_product_ids()
        );
    }

    let affected = report.affected_product_ids();
    let unknown = affected
        .iter()
        .filter(|id| snapshot.product(id).is_none())
        .count();
    if unknown > 0 {
        warn!("{unknown} affected products are not in the snapshot");
    }
    for id in &affected {
        println!("{id}");
    }
}
