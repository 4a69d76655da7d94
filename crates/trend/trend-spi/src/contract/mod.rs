//! Contract module containing trait definitions for trend operations

mod bootstrap_provider;
mod detrender;

pub use bootstrap_provider::BootstrapProvider;
pub use detrender::Detrender;
