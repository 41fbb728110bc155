// src/table/pagination.rs - Page arithmetic for the pagination bar

/// Page sizes offered by the page-size select
pub const PAGE_SIZE_OPTIONS: [usize; 4] = crate::config::PAGE_SIZE_OPTIONS;

/// Most page buttons shown at once
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Pagination inputs; `page` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page,
            page_size,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn window(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages())
    }

    pub fn range_label(&self) -> String {
        range_label(self.page, self.page_size, self.total)
    }

    pub fn first_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn last_disabled(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// Start/end indices (exclusive end) of this page within `total` items,
    /// for callers that paginate a local list themselves
    pub fn bounds(&self) -> (usize, usize) {
        if self.page_size == 0 || self.page == 0 {
            return (0, 0);
        }
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        (start, end)
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Page numbers to render as buttons, clamped to `1..=total_pages`
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).collect();
    }

    let start = if current <= 3 {
        1
    } else if current + 2 >= total_pages {
        total_pages - MAX_PAGE_BUTTONS + 1
    } else {
        current - 2
    };

    (start..start + MAX_PAGE_BUTTONS).collect()
}

/// `"11–20 of 42"`, or `"0 records"` when there is nothing to show
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 || page_size == 0 || page == 0 {
        return "0 records".to_string();
    }

    let start = ((page - 1) * page_size + 1).min(total);
    let end = (page * page_size).min(total);
    format!("{}–{} of {}", start, end, total)
}

/// Clamps a requested page into the valid range (1 when there are no pages)
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(42, 25), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn window_shows_everything_for_few_pages() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clamps_at_edges_and_centres_in_the_middle() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);

        for current in 1..=20 {
            let window = page_window(current, 20);
            assert_eq!(window.len(), MAX_PAGE_BUTTONS);
            assert!(window.contains(&current));
            assert!(window.iter().all(|p| (1..=20).contains(p)));
        }
    }

    #[test]
    fn range_labels() {
        assert_eq!(range_label(1, 10, 0), "0 records");
        assert_eq!(range_label(1, 10, 42), "1–10 of 42");
        assert_eq!(range_label(5, 10, 42), "41–42 of 42");
    }

    #[test]
    fn navigation_flags() {
        let first = PageInfo::new(1, 10, 42);
        assert!(first.first_disabled());
        assert!(!first.last_disabled());

        let last = PageInfo::new(5, 10, 42);
        assert!(!last.first_disabled());
        assert!(last.last_disabled());
        assert_eq!(last.bounds(), (40, 42));

        let empty = PageInfo::new(1, 10, 0);
        assert!(empty.first_disabled());
        assert!(empty.last_disabled());
        assert_eq!(empty.bounds(), (0, 0));
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
