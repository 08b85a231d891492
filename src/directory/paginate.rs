use serde::Serialize;

const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(total / per_page)`, never less than one.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Items `[(page-1)*per_page, page*per_page)` clipped to what exists.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Page numbers shown around the current page, at most five of them.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<usize> {
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total_pages.min(start + MAX_VISIBLE_PAGES - 1);
    if end - start < MAX_VISIBLE_PAGES - 1 {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start..=end).collect()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_item: usize,
    pub end_item: usize,
    pub page_numbers: Vec<usize>,
}

/// Slices `items` for the requested page. Pages past the end land on the last page.
pub fn paginate<T: Clone>(items: &[T], requested_page: usize, per_page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, per_page);
    let current_page = clamp_page(requested_page, total_pages);
    let slice = page_slice(items, current_page, per_page);
    let (start_item, end_item) = if slice.is_empty() {
        (0, 0)
    } else {
        let start = (current_page - 1) * per_page + 1;
        (start, start + slice.len() - 1)
    };

    Page {
        items: slice.to_vec(),
        current_page,
        items_per_page: per_page,
        total_items,
        total_pages,
        start_item,
        end_item,
        page_numbers: visible_pages(current_page, total_pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(97, 96), 2);
    }

    #[test]
    fn slice_is_clipped() {
        let items: Vec<u32> = (1..=30).collect();
        assert_eq!(page_slice(&items, 3, 12), &items[24..30]);
        assert!(page_slice(&items, 4, 12).is_empty());
        assert_eq!(page_slice(&items, 1, 12).len(), 12);
    }

    #[test]
    fn pages_cover_everything_exactly_once() {
        for len in [0usize, 1, 11, 12, 13, 24, 50, 97] {
            let items: Vec<usize> = (0..len).collect();
            for per_page in [12, 24, 48, 96] {
                let pages = total_pages(len, per_page);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| page_slice(&items, p, per_page).to_vec())
                    .collect();
                assert_eq!(joined, items);
            }
        }
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 12);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, items);
        assert_eq!((page.start_item, page.end_item), (1, 5));

        let page = paginate(&items, 0, 12);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 12);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!((page.start_item, page.end_item), (0, 0));
        assert_eq!(page.page_numbers, vec![1]);
    }

    #[test]
    fn visible_window_follows_current_page() {
        assert_eq!(visible_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(visible_pages(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(9, 10), vec![6, 7, 8, 9, 10]);
    }
}
