//! Batch normalization of OpenAlex works.
//!
//! Each work is normalized independently, so with the `parallel` feature the
//! batch is spread over the `rayon` thread pool. Output order always matches
//! input order.

use crate::generator::{openalex_publication, GeneratorConfig};
use crate::{OpenAlexWork, Publication};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Normalizes every work, preserving order.
pub fn normalize_works(works: &[OpenAlexWork], config: &GeneratorConfig) -> Vec<Publication> {
    #[cfg(feature = "parallel")]
    let iter = works.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = works.iter();

    iter.map(|work| openalex_publication(work, config)).collect()
}
