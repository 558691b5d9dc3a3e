//! Batch sizing and address partitioning.

use std::time::Duration;

use crate::config::BatchConfig;

/// How addresses are grouped and when successive groups start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    pub size: usize,
    pub stagger: Duration,
}

impl BatchPolicy {
    /// Derive the policy from proxy availability: single-wallet batches
    /// when every request leaves directly, wider batches when requests are
    /// spread over a proxy pool.
    #[must_use]
    pub fn for_run(config: &BatchConfig, proxied: bool) -> Self {
        let size = if proxied {
            config.proxied_size
        } else {
            config.direct_size
        };
        Self {
            size: size.max(1),
            stagger: Duration::from_millis(config.stagger_ms),
        }
    }
}

/// Split addresses into contiguous batches of `size`, pairing each address
/// with its zero-based input position. Concatenating the batches in order
/// reproduces the input exactly.
#[must_use]
pub fn indexed_batches(addresses: &[String], size: usize) -> Vec<Vec<(usize, String)>> {
    let indexed: Vec<(usize, String)> = addresses.iter().cloned().enumerate().collect();
    indexed.chunks(size.max(1)).map(<[_]>::to_vec).collect()
}
