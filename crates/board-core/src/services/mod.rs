//! Application services - the board's use cases.

mod post;

pub use post::{DEFAULT_PAGE_SIZE, PostService};
