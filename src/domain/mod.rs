pub mod decorate;
pub mod estate;
pub mod fetch;
pub mod format;
pub mod sort;

pub use decorate::{decorate, decorate_all, DecoratedEstate};
pub use estate::Estate;
pub use fetch::{FetchError, FetchState};
pub use format::{BelgianFormat, DisplayFormat};
pub use sort::{select_sort, Selection, SortSpec};
