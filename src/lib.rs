//! # msdf-core
//!
//! A multi-channel signed distance field (MSDF) rasterizer for planar
//! vector shapes: glyph outlines and similar closed contour sets built
//! from linear, quadratic-Bézier, and cubic-Bézier edges.
//!
//! The pipeline, leaf-first:
//!
//! 1. [`math`] / [`geometry`] — scalar kernels and the 2-D vector type.
//! 2. [`algorithms::edge_segment`] — the `Linear`/`Quadratic`/`Cubic` edge
//!    family: point/direction evaluation, signed distance, bounds,
//!    splitting.
//! 3. [`algorithms::contour`] / [`algorithms::shape`] — winding, bounds,
//!    and normalization over ordered edge sequences.
//! 4. [`algorithms::coloring`] — partitions each contour's edges into
//!    red/green/blue-labelled runs meeting at corners.
//! 5. [`algorithms::field`] — the per-pixel evaluator combining per-channel
//!    nearest-edge distances with contour winding into a [`algorithms::MultiDistance`].
//! 6. [`algorithms::error_correction`] — collapses clashing pixel pairs to
//!    a single distance.
//! 7. [`raster`] — the thin driver tying the above to a [`pixmap::Pixmap`].
//!
//! Typical use:
//!
//! ```no_run
//! use msdf_core::{algorithms, config::{ColoringConfig, GenerationConfig}, pixmap::{Pixmap, Rgb}, raster};
//!
//! # fn build_shape() -> algorithms::Shape { algorithms::Shape::new() }
//! let mut shape = build_shape();
//! shape.normalize();
//! let coloring = ColoringConfig::default();
//! algorithms::color_edges_simple(&mut shape, coloring.angle_threshold_radians, coloring.seed);
//!
//! let gen = GenerationConfig::default();
//! let mut pixmap = Pixmap::new(64, 64, Rgb::<f32>::default());
//! raster::generate_msdf(
//!     &mut pixmap,
//!     &shape,
//!     raster::PixelRegion::full(64, 64),
//!     gen.range,
//!     msdf_core::geometry::Vector2::new(gen.scale.0, gen.scale.1),
//!     msdf_core::geometry::Vector2::new(gen.translate.0, gen.translate.1),
//! );
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod execution;
pub mod geometry;
pub mod math;
pub mod pixmap;
pub mod raster;

pub use algorithms::{color_edges_simple, Contour, EdgeColor, EdgeSegment, MultiDistance, Shape, SignedDistance};
pub use config::{ColoringConfig, ErrorCorrectionConfig, GenerationConfig};
pub use error::{MsdfError, MsdfResult};
pub use raster::{correct_errors, generate_msdf, generate_sdf, PixelRegion};
