//! Home panel core: view state, dispatch store, filter, and search.

pub mod filter;
pub mod journal;
pub mod panel;
pub mod state;
pub mod store;

pub use filter::{FilterCriteria, PRICE_RANGE_MAX, PRICE_RANGE_MIN, PRICE_RANGE_STEP};
pub use journal::{DispatchJournal, DispatchRecord, DEFAULT_JOURNAL_CAPACITY};
pub use panel::HomePanel;
pub use state::{HomeAction, HomeViewState};
pub use store::HomeStore;
