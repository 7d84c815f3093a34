//! Tile-level scheduling.
//!
//! A single rasterization call is intrinsically single-threaded (spec.md
//! §5): pixels within one `generate_sdf`/`generate_msdf` call share a
//! `contourSD` scratch buffer that forbids concurrent pixel evaluation.
//! Separate rasterization requests, though, are embarrassingly parallel —
//! this module runs a batch of independent tile jobs across a thread pool
//! when built with the `parallel` feature, or sequentially otherwise.

/// Run each job in `jobs` to completion. Sequential without the `parallel`
/// feature; scheduled across rayon's global thread pool with it. Each job
/// is expected to own (or borrow) its pixmap, shape, and region and call
/// one of the `generate_*`/`correct_errors` entry points itself, so every
/// job gets its own `contourSD` scratch.
pub fn run_tiles<F: FnOnce() + Send>(jobs: Vec<F>) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        jobs.into_par_iter().for_each(|job| job());
    }
    #[cfg(not(feature = "parallel"))]
    {
        for job in jobs {
            job();
        }
    }
}

/// Number of worker threads tile scheduling can use. `1` without the
/// `parallel` feature.
pub fn current_num_threads() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}
