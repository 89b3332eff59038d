// src/io/reader.rs
use anyhow::{anyhow, Context, Result};
use gdal::raster::Buffer;
use gdal::Dataset;
use std::path::Path;

/// Georeferencing profile of a raster file, copied from an input
/// dataset to the output dataset. The NDVI engine never looks inside
/// this; it is threaded between the reader and the writer.
pub struct RasterProfile {
    pub width: usize,
    pub height: usize,
    pub projection: String,
    pub geo_transform: [f64; 6],
}

/// Read one band of a raster file as f32, full size.
///
/// `band_index` is 1-based, matching GDAL. The dataset handle is
/// released before returning. GDAL converts integer pixel types to
/// f32 during the read, so the engine always works in floating point.
pub fn read_band<P: AsRef<Path>>(path: P, band_index: usize) -> Result<Buffer<f32>> {
    let path = path.as_ref();
    let dataset = Dataset::open(path)
        .with_context(|| format!("failed to open raster {}", path.display()))?;
    let band = dataset
        .rasterband(band_index)
        .with_context(|| format!("raster {} has no band {}", path.display(), band_index))?;

    let (width, height) = dataset.raster_size();
    let buffer = band
        .read_as::<f32>((0, 0), (width, height), (width, height), None)
        .with_context(|| format!("failed to read band {} of {}", band_index, path.display()))?;

    Ok(buffer)
}

/// Read the georeferencing profile of a raster file.
pub fn read_profile<P: AsRef<Path>>(path: P) -> Result<RasterProfile> {
    let path = path.as_ref();
    let dataset = Dataset::open(path)
        .with_context(|| format!("failed to open raster {}", path.display()))?;

    let (width, height) = dataset.raster_size();
    let projection = dataset.projection();
    let geo_transform = dataset
        .geo_transform()
        .with_context(|| format!("raster {} has no geo-transform", path.display()))?
        .try_into()
        .map_err(|_| anyhow!("raster {} has a malformed geo-transform", path.display()))?;

    Ok(RasterProfile {
        width,
        height,
        projection,
        geo_transform,
    })
}
