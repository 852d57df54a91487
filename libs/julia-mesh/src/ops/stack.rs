//! # Layer Stacking
//!
//! Builds a layered point cloud from a sweep of Julia constants.
//!
//! Layer `k` generates a field with `c = base.c + k · c_increment`, traces
//! its contours and lifts them to `z = k`. Layers are independent and are
//! computed in parallel, then concatenated in layer order. No faces are
//! produced.

use crate::error::MeshResult;
use config::constants::{DEFAULT_STACK_C_INCREMENT, DEFAULT_STACK_LAYERS, DEFAULT_THRESHOLD};
use julia_boundary::{concatenate, find_contours, BinaryImage, ContourApproximation, ContourRetrieval};
use julia_field::{generate, Complex, FieldParameters};
use julia_types::{Point3D, PointCloud, PointOrdering};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Parameters for [`stack_layers`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStackParams {
    /// Field parameters of layer 0
    pub base: FieldParameters,
    /// Number of layers
    pub layers: usize,
    /// Added to `c` once per layer
    pub c_increment: Complex,
    /// Binarisation cutoff for contour tracing
    pub cutoff: u8,
    pub retrieval: ContourRetrieval,
    pub approximation: ContourApproximation,
}

impl Default for LayerStackParams {
    fn default() -> Self {
        Self {
            base: FieldParameters::default(),
            layers: DEFAULT_STACK_LAYERS,
            c_increment: Complex::from(DEFAULT_STACK_C_INCREMENT),
            cutoff: DEFAULT_THRESHOLD,
            retrieval: ContourRetrieval::External,
            approximation: ContourApproximation::Simple,
        }
    }
}

impl LayerStackParams {
    /// Field parameters of layer `layer`.
    pub fn layer_parameters(&self, layer: usize) -> FieldParameters {
        self.base
            .with_c(self.base.c + self.c_increment.scale(layer as f64))
    }
}

/// Generates and traces every layer, returning the concatenated cloud.
///
/// # Errors
///
/// Propagates invalid field parameters as [`MeshError::Field`](crate::MeshError::Field).
pub fn stack_layers(params: &LayerStackParams) -> MeshResult<PointCloud<Point3D>> {
    params.base.validate()?;

    let layers: Vec<PointCloud<Point3D>> = (0..params.layers)
        .into_par_iter()
        .map(|layer| -> MeshResult<PointCloud<Point3D>> {
            let field_params = params.layer_parameters(layer);
            let field = generate(&field_params)?;
            let binary = BinaryImage::threshold(&field, params.cutoff);
            let contours = find_contours(&binary, params.retrieval, params.approximation);
            let cloud = concatenate(&contours).lift(layer as f64);
            debug!(
                layer,
                c = %field_params.c,
                contours = contours.len(),
                points = cloud.len(),
                "layer traced"
            );
            Ok(cloud)
        })
        .collect::<MeshResult<Vec<_>>>()?;

    let mut stacked = PointCloud::empty(PointOrdering::Ordered);
    for layer in layers {
        stacked.append(layer);
    }
    info!(
        layers = params.layers,
        points = stacked.len(),
        "layer stack built"
    );
    Ok(stacked)
}
