use super::*;

fn pages_only(items: &[PageItem]) -> Vec<u32> {
    items
        .iter()
        .filter_map(|item| match item {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        })
        .collect()
}

#[test]
fn empty_listing_has_no_items() {
    assert!(page_numbers(1, 0).is_empty());
}

#[test]
fn short_listing_shows_every_page() {
    assert_eq!(page_numbers(2, 3), vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]);
    assert_eq!(page_numbers(1, 1), vec![PageItem::Page(1)]);
}

#[test]
fn middle_page_has_ellipsis_on_both_sides() {
    assert_eq!(
        page_numbers(5, 10),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn first_page_only_trails_with_ellipsis() {
    assert_eq!(
        page_numbers(1, 8),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Ellipsis, PageItem::Page(8)]
    );
}

#[test]
fn adjacent_ranges_do_not_emit_ellipsis() {
    assert_eq!(
        page_numbers(3, 4),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3), PageItem::Page(4)]
    );
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(pages_only(&page_numbers(99, 6)), vec![1, 5, 6]);
    assert_eq!(pages_only(&page_numbers(0, 6)), vec![1, 2, 6]);
}

#[test]
fn pages_are_ascending_unique_and_in_bounds() {
    for total in 0..=15 {
        for current in 0..=total + 1 {
            let items = page_numbers(current, total);
            let pages = pages_only(&items);
            assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total}: {pages:?}");
            assert!(pages.iter().all(|p| (1..=total).contains(p)), "{current}/{total}: {pages:?}");
            if total <= 3 {
                assert!(!items.contains(&PageItem::Ellipsis), "{current}/{total}");
            }
            assert_ne!(items.first(), Some(&PageItem::Ellipsis));
            assert_ne!(items.last(), Some(&PageItem::Ellipsis));
        }
    }
}

#[test]
fn prev_and_next() {
    assert_eq!(prev_page(1), None);
    assert_eq!(prev_page(3), Some(2));
    assert_eq!(next_page(3, 3), None);
    assert_eq!(next_page(2, 3), Some(3));
    assert_eq!(next_page(1, 0), None);
}

#[test]
fn last_representable_page_does_not_overflow() {
    let items = page_numbers(u32::MAX, u32::MAX);
    assert_eq!(pages_only(&items), vec![1, u32::MAX - 1, u32::MAX]);
    assert_eq!(next_page(u32::MAX, u32::MAX), None);
}
