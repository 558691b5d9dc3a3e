//! Outbound proxy pool with positional assignment.

/// Ordered pool of proxy URIs, possibly empty.
#[derive(Debug, Clone, Default)]
pub struct ProxyPool {
    uris: Vec<String>,
}

impl ProxyPool {
    #[must_use]
    pub fn new(uris: Vec<String>) -> Self {
        Self { uris }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Proxy for the wallet at zero-based input position `index`: the
    /// matching pool entry when one exists, otherwise the first entry.
    /// `None` when the pool is empty.
    #[must_use]
    pub fn assign(&self, index: usize) -> Option<&str> {
        let first = self.uris.first()?;
        Some(self.uris.get(index).unwrap_or(first).as_str())
    }
}
