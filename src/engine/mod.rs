//! Calculation engine
//!
//! Selection store, portion aggregation, adequacy and the session that ties
//! them together.

mod adequacy;
mod error;
mod selections;
mod session;
mod summary;
mod totals;

pub use adequacy::compute_adequacy;
pub use error::{EngineError, EngineResult};
pub use selections::SelectionMap;
pub use session::Session;
pub use summary::{build_summary, round_nutrients, round_percentages, round_to, Summary, SummaryRow};
pub use totals::{compute_totals, GroupTotal, TotalsReport};
