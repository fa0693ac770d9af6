//! Client-side list helpers: text search, sorting and offset pagination.

use std::cmp::Ordering;

/// Rows that can be matched against a free-text filter.
pub trait Searchable {
    /// Case handling is up to the implementation; callers pass the filter
    /// already trimmed.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be compared by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        "▲"
    } else {
        "▼"
    }
}

/// Width of the numbered page window shown by the pagination controls.
pub const PAGE_WINDOW: usize = 5;

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 || page_size == 0 {
        0
    } else {
        (total_items + page_size - 1) / page_size
    }
}

/// One page of `items` under classic offset pagination (0-indexed page).
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Entry of the numbered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Numbered page buttons around `current`, at most [`PAGE_WINDOW`] of them,
/// with first/last pages and ellipses when the count exceeds the window.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= PAGE_WINDOW {
        return (0..total_pages).map(PageItem::Page).collect();
    }

    let start = current
        .saturating_sub(PAGE_WINDOW / 2)
        .min(total_pages - PAGE_WINDOW);
    let end = start + PAGE_WINDOW;

    let mut items = Vec::new();
    if start > 0 {
        items.push(PageItem::Page(0));
        if start > 1 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..end).map(PageItem::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages - 1));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let rows = vec![Row("Moto Andina"), Row("Inversiones Norte")];
        let hits = filter_list(rows, "andina");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Moto Andina");
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let rows = vec![Row("a"), Row("b")];
        assert_eq!(filter_list(rows, "   ").len(), 2);
    }

    #[test]
    fn pagination_of_23_items_by_10() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        // Page 3 (index 2) holds items 21–23, i.e. indices 20..23.
        assert_eq!(page_slice(&items, 2, 10), vec![20, 21, 22]);
        assert_eq!(page_slice(&items, 3, 10), Vec::<usize>::new());
    }

    #[test]
    fn total_pages_edge_cases() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        assert_eq!(
            page_window(1, 3),
            vec![PageItem::Page(0), PageItem::Page(1), PageItem::Page(2)]
        );
    }

    #[test]
    fn window_adds_trailing_ellipsis() {
        assert_eq!(
            page_window(0, 10),
            vec![
                PageItem::Page(0),
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Ellipsis,
                PageItem::Page(9),
            ]
        );
    }

    #[test]
    fn window_adds_leading_ellipsis() {
        assert_eq!(
            page_window(9, 10),
            vec![
                PageItem::Page(0),
                PageItem::Ellipsis,
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
            ]
        );
    }

    #[test]
    fn window_centers_on_current() {
        assert_eq!(
            page_window(5, 10),
            vec![
                PageItem::Page(0),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Ellipsis,
                PageItem::Page(9),
            ]
        );
    }
}
