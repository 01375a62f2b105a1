pub mod paginate;
pub mod sort;

pub use paginate::{paginate, Page, Pagination};
pub use sort::{FieldKind, SortComparator, SortValue, Sorting, SortingOrder};
