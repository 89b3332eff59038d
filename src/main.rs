// src/main.rs
use anyhow::Result;
use clap::Parser;
use gdal::raster::Buffer;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ndvi_calc::cli::{Cli, Commands};
use ndvi_calc::config::RunConfig;
use ndvi_calc::io::{read_band, read_profile, write_band};
use ndvi_calc::processing::{compute_ndvi, validity_mask};
use ndvi_calc::render::write_preview_png;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compute {
            red,
            nir,
            output,
            band,
        } => compute(&red, &nir, &output, band),
        Commands::Preview {
            red,
            nir,
            output,
            band,
        } => preview(&red, &nir, &output, band),
        Commands::Run { config } => {
            let config = RunConfig::from_file(&config)?;
            compute(
                &config.red_path,
                &config.nir_path,
                &config.output_path,
                config.band,
            )
        }
    }
}

/// Persistence path: NDVI as a georeferenced GeoTIFF, profile copied
/// from the red input.
fn compute(red_path: &Path, nir_path: &Path, output_path: &Path, band: usize) -> Result<()> {
    let ndvi = calculate(red_path, nir_path, band)?;
    let profile = read_profile(red_path)?;
    write_band(output_path, &ndvi, &profile)?;
    info!(output = %output_path.display(), "NDVI raster written");
    Ok(())
}

/// Visualization path: NDVI as a false-color PNG for inspection.
fn preview(red_path: &Path, nir_path: &Path, output_path: &Path, band: usize) -> Result<()> {
    let ndvi = calculate(red_path, nir_path, band)?;
    write_preview_png(&ndvi, output_path)?;
    info!(output = %output_path.display(), "NDVI preview written");
    Ok(())
}

fn calculate(red_path: &Path, nir_path: &Path, band: usize) -> Result<Buffer<f32>> {
    let red = read_band(red_path, band)?;
    let nir = read_band(nir_path, band)?;

    let mask = validity_mask(&red, &nir)?;
    let ndvi = compute_ndvi(&red, &nir)?;

    let valid = mask.iter().filter(|&&v| v).count();
    info!(valid, total = mask.len(), "computed NDVI");
    Ok(ndvi)
}
