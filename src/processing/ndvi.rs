// src/processing/ndvi.rs
use gdal::raster::Buffer;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NdviError {
    #[error("band shape mismatch: red is {red:?}, nir is {nir:?}")]
    ShapeMismatch {
        red: (usize, usize),
        nir: (usize, usize),
    },
}

/// Compute NDVI `(NIR - RED) / (NIR + RED)` per pixel.
///
/// A pixel is computed only when both band values are nonzero and their
/// sum is nonzero; every other pixel stays at 0.0. Zero is the input
/// sentinel for missing or saturated samples, and the sum guard keeps
/// equal-and-opposite operands from dividing by zero. Note that a
/// masked pixel is indistinguishable from a computed 0.0 in the result;
/// use [`validity_mask`] when the caller needs to tell them apart.
pub fn compute_ndvi(red: &Buffer<f32>, nir: &Buffer<f32>) -> Result<Buffer<f32>, NdviError> {
    let shape = red.shape();
    if shape != nir.shape() {
        return Err(NdviError::ShapeMismatch {
            red: shape,
            nir: nir.shape(),
        });
    }

    let red_data = red.data();
    let nir_data = nir.data();

    let mut result_data = vec![0.0f32; red_data.len()];
    for (i, result) in result_data.iter_mut().enumerate() {
        let red_val = red_data[i];
        let nir_val = nir_data[i];

        if red_val != 0.0 && nir_val != 0.0 && nir_val + red_val != 0.0 {
            *result = (nir_val - red_val) / (nir_val + red_val);
        }
    }

    Ok(Buffer::new(shape, result_data))
}

/// Per-pixel validity under the same predicate as [`compute_ndvi`]:
/// `true` where the index was actually computed, `false` where the
/// output was left at 0.0.
pub fn validity_mask(red: &Buffer<f32>, nir: &Buffer<f32>) -> Result<Vec<bool>, NdviError> {
    let shape = red.shape();
    if shape != nir.shape() {
        return Err(NdviError::ShapeMismatch {
            red: shape,
            nir: nir.shape(),
        });
    }

    Ok(red
        .data()
        .iter()
        .zip(nir.data())
        .map(|(&r, &n)| r != 0.0 && n != 0.0 && n + r != 0.0)
        .collect())
}
