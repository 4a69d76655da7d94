//! Trait for the external history-fetch collaborator

use crate::model::TimeSeries;

/// Supplies extended historical sample windows ("bootstrap" windows) for a
/// batch of target series. Implementations own all retrieval concerns; the
/// core consumes the resolved series and performs no I/O of its own.
pub trait BootstrapProvider: Send + Sync {
    /// Fetch one history series per target, each reaching `days` days
    /// further back than the target's own window. The returned sequence is
    /// paired positionally with `targets`.
    fn fetch(&self, targets: &[TimeSeries], days: u32) -> Vec<TimeSeries>;
}
