//! Input sources for wallet and proxy lists.

use crate::domain::ProxyPool;
use crate::error::Result;

/// Ordered list of wallet addresses to query. Order defines each wallet's
/// row number in the report.
pub trait AddressSource {
    fn load(&self) -> Result<Vec<String>>;
}

/// Pool of outbound proxy URIs. An empty pool means direct requests.
pub trait ProxySource {
    fn load(&self) -> Result<ProxyPool>;
}
