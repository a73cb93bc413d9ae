// List view derivation: sort + paginate over the application list, and the
// table's view state (sort column, direction, page, page size).

pub mod page;
pub mod sort;
pub mod view;

pub use page::{ApplicationPage, PageSize};
pub use sort::{SortDirection, SortField};
pub use view::ListView;

use crate::models::JobApplication;

/// Pure derivation of the visible page. Does not clamp `view.page`; an
/// out-of-range page yields an empty slice.
pub fn derive_page(applications: &[JobApplication], view: &ListView) -> ApplicationPage {
    let sorted = sort::sort_applications(applications, view.sort_field, view.sort_direction);
    page::paginate(&sorted, view.page, view.page_size)
}
