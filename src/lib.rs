//! pagination-links: plans the links of a pagination widget
//!
//! Given the current page and the total page count, this crate decides
//! which links a pagination UI shows (page numbers, previous/next, first/last
//! shortcuts and ellipses), in which order and pointing where. Turning the
//! result into markup is left to the caller.

pub mod commands;
pub mod config;
pub mod error;
pub mod pagination;

pub use config::{EdgeLink, Options};
pub use error::PaginationError;
pub use pagination::{build_pagination_links, Label, Link, PaginationState, Token};
