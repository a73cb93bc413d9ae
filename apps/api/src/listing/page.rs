use serde::{Deserialize, Serialize};

use crate::models::JobApplication;

/// Rows per page, restricted to the sizes the table offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub const ALLOWED: [u32; 5] = [10, 20, 30, 40, 50];

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(10)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        if PageSize::ALLOWED.contains(&size) {
            Ok(PageSize(size))
        } else {
            Err(format!(
                "pageSize {size} is not one of {:?}",
                PageSize::ALLOWED
            ))
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPage {
    pub items: Vec<JobApplication>,
    pub page: usize,
    pub page_size: PageSize,
    pub total: usize,
    pub total_pages: usize,
    /// 1-based index of the first visible row, 0 when nothing is visible.
    pub showing_from: usize,
    pub showing_to: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Slices `sorted[(page-1)*size .. page*size]`. `page` is 1-based; 0 is
/// treated as 1.
pub fn paginate(sorted: &[&JobApplication], page: usize, page_size: PageSize) -> ApplicationPage {
    let page = page.max(1);
    let total = sorted.len();
    let total_pages = total_pages(total, page_size);
    let start = (page - 1).saturating_mul(page_size.get());

    let items: Vec<JobApplication> = sorted
        .iter()
        .skip(start)
        .take(page_size.get())
        .map(|app| (*app).clone())
        .collect();

    let (showing_from, showing_to) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + items.len())
    };

    ApplicationPage {
        items,
        page,
        page_size,
        total,
        total_pages,
        showing_from,
        showing_to,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::JobStatus;

    fn apps(n: usize) -> Vec<JobApplication> {
        (0..n)
            .map(|i| JobApplication {
                id: i.to_string(),
                company_name: format!("Company {i}"),
                job_title: "Engineer".to_string(),
                application_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: JobStatus::Applied,
                notes: String::new(),
            })
            .collect()
    }

    fn size(n: u32) -> PageSize {
        PageSize::try_from(n).unwrap()
    }

    #[test]
    fn test_page_size_allowed_set() {
        for n in PageSize::ALLOWED {
            assert!(PageSize::try_from(n).is_ok());
        }
        assert!(PageSize::try_from(0).is_err());
        assert!(PageSize::try_from(25).is_err());
        assert!(serde_json::from_str::<PageSize>("15").is_err());
        assert_eq!(serde_json::from_str::<PageSize>("40").unwrap(), size(40));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(25, size(10)), 3);
        assert_eq!(total_pages(25, size(50)), 1);
    }

    #[test]
    fn test_25_records_by_10() {
        let all = apps(25);
        let refs: Vec<&JobApplication> = all.iter().collect();

        let first = paginate(&refs, 1, size(10));
        let ids: Vec<_> = first.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = paginate(&refs, 3, size(10));
        let ids: Vec<_> = last.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["20", "21", "22", "23", "24"]);
        assert_eq!((last.showing_from, last.showing_to), (21, 25));
        assert!(!last.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let all = apps(5);
        let refs: Vec<&JobApplication> = all.iter().collect();
        let page = paginate(&refs, 4, size(10));
        assert!(page.items.is_empty());
        assert_eq!((page.showing_from, page.showing_to), (0, 0));
    }

    #[test]
    fn test_empty_list() {
        let page = paginate(&[], 1, PageSize::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }
}
