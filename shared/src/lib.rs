pub mod cache;
pub mod debounce;
pub mod display;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod page;
pub mod paging;
pub mod resource;
pub mod roster;
pub mod route;

pub use endpoint::ApiConfig;
pub use error::{CatalogError, FetchError, MissingParameterError};
pub use model::*;
pub use page::{PAGE_SIZE, Page};
pub use resource::{RecordKind, Resource};
pub use route::Route;
