// Pagination arithmetic over a (possibly filtered) sequence

/// Number of pages needed to display `items` at `per_page` items each.
///
/// Always at least 1, so a page selector has a valid value even for an
/// empty list. A `per_page` of zero also reports a single page instead of
/// dividing by zero.
pub fn num_pages<T>(items: &[T], per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    items.len().div_ceil(per_page).max(1)
}

/// The 1-indexed page `page_number` of `items`, `per_page` items per page.
///
/// The slice is clipped to the collection bounds; a page past the end (or
/// page 0) yields an empty list rather than an error.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, per_page: usize) -> Vec<T> {
    let Some(zero_based) = page_number.checked_sub(1) else {
        return Vec::new();
    };
    let start = zero_based.saturating_mul(per_page);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + per_page).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages_empty_is_one() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(num_pages(&empty, 5), 1);
        assert_eq!(num_pages(&empty, 100), 1);
    }

    #[test]
    fn test_num_pages_rounds_up() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(num_pages(&items, 5), 3);
        assert_eq!(num_pages(&items, 4), 3);
        assert_eq!(num_pages(&items, 12), 1);
        assert_eq!(num_pages(&items, 13), 1);
    }

    #[test]
    fn test_num_pages_zero_per_page_is_one() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(num_pages(&items, 0), 1);
    }

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, 1, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, 3, 5), vec![10, 11]);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert!(paginate(&items, 4, 5).is_empty());
        assert!(paginate(&items, 100, 5).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_is_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert!(paginate(&items, 0, 5).is_empty());
    }

    #[test]
    fn test_paginate_preserves_order() {
        let items: Vec<u32> = (0..12).collect();
        let mut all = Vec::new();
        for page in 1..=num_pages(&items, 5) {
            all.extend(paginate(&items, page, 5));
        }
        assert_eq!(all, items);
    }
}
