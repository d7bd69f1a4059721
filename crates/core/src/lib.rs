//! Episode catalog, summary types and selection state for podview.

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod load;
pub mod ordered;
pub mod summary;
pub mod view_state;

pub use catalog::{Catalog, Episode, ModelSummary};
pub use error::CatalogError;
pub use summary::{QaItem, Snippet, StructuredSummary, Summary};
pub use view_state::{CurrentView, ViewState, ViewStateController};

#[cfg(any(test, feature = "testing"))]
pub mod testing;
