//! File-backed wallet and proxy lists.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::ProxyPool;
use crate::error::{Error, Result};
use crate::ports::{AddressSource, ProxySource};

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Newline-delimited wallet list. A missing file aborts the run.
pub struct FileAddressSource {
    path: PathBuf,
}

impl FileAddressSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AddressSource for FileAddressSource {
    fn load(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path).map_err(|source| Error::WalletList {
            path: self.path.clone(),
            source,
        })?;
        Ok(non_empty_lines(&text))
    }
}

/// Newline-delimited proxy list. A missing file means "no proxies".
pub struct FileProxySource {
    path: PathBuf,
}

impl FileProxySource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ProxySource for FileProxySource {
    fn load(&self) -> Result<ProxyPool> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(ProxyPool::new(non_empty_lines(&text))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "proxy list absent, sending requests directly");
                Ok(ProxyPool::default())
            }
            Err(source) => Err(Error::ProxyList {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
