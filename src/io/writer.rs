// src/io/writer.rs
use anyhow::{bail, Context, Result};
use gdal::raster::{Buffer, RasterCreationOptions};
use gdal::{DriverManager, Metadata};
use std::path::Path;

use super::reader::RasterProfile;

/// Write an NDVI array as a single-band Float32 GeoTIFF.
///
/// The projection and geo-transform come from `profile` (taken from
/// the red input); the pixel type is always Float32 and the band count
/// is always 1, regardless of how the inputs were encoded.
pub fn write_band<P: AsRef<Path>>(
    path: P,
    ndvi: &Buffer<f32>,
    profile: &RasterProfile,
) -> Result<()> {
    let path = path.as_ref();
    let shape = ndvi.shape();
    if shape != (profile.width, profile.height) {
        bail!(
            "array shape {:?} does not match profile dimensions {}x{}",
            shape,
            profile.width,
            profile.height
        );
    }

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let creation_options = RasterCreationOptions::from_iter(["COMPRESS=DEFLATE", "TILED=YES"]);

    let mut out_ds = driver
        .create_with_band_type_with_options::<f32, _>(
            path,
            profile.width,
            profile.height,
            1,
            &creation_options,
        )
        .with_context(|| format!("failed to create output raster {}", path.display()))?;

    out_ds.set_projection(&profile.projection)?;
    out_ds.set_geo_transform(&profile.geo_transform)?;

    let mut band = out_ds.rasterband(1)?;
    band.set_description("NDVI")?;

    let mut buffer = Buffer::new(shape, ndvi.data().to_vec());
    band.write((0, 0), shape, &mut buffer)
        .with_context(|| format!("failed to write NDVI band to {}", path.display()))?;

    out_ds.flush_cache()?;
    Ok(())
}
