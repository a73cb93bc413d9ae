use serde::Serialize;

use crate::listing::page::{total_pages, PageSize};
use crate::listing::sort::{SortDirection, SortField};

/// Table view state. Newest applications first on a fresh view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ListView {
    fn default() -> Self {
        ListView {
            sort_field: SortField::ApplicationDate,
            sort_direction: SortDirection::Desc,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ListView {
    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn sort_by(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Ignores pages outside `1..=total_pages`. Returns whether the page moved.
    pub fn go_to_page(&mut self, page: usize, total: usize) -> bool {
        if page >= 1 && page <= self.total_pages(total) {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Pulls the page back inside range after the list shrank.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.total_pages(total);
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }
}
