use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ndvi-calc")]
#[command(about = "NDVI calculator for red/NIR raster pairs", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute NDVI and write a georeferenced Float32 GeoTIFF
    Compute {
        /// Red band raster
        #[arg(short, long)]
        red: PathBuf,

        /// Near-infrared band raster
        #[arg(short, long)]
        nir: PathBuf,

        /// Output raster path
        #[arg(short, long, default_value = "ndvi_result.tif")]
        output: PathBuf,

        /// Band to read from each input (1-based)
        #[arg(short, long, default_value = "1")]
        band: usize,
    },

    /// Compute NDVI and render a false-color preview image
    Preview {
        /// Red band raster
        #[arg(short, long)]
        red: PathBuf,

        /// Near-infrared band raster
        #[arg(short, long)]
        nir: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "ndvi_preview.png")]
        output: PathBuf,

        /// Band to read from each input (1-based)
        #[arg(short, long, default_value = "1")]
        band: usize,
    },

    /// Compute NDVI from a JSON configuration file
    Run {
        /// Configuration file with red_path, nir_path and output_path
        #[arg(short, long)]
        config: PathBuf,
    },
}
