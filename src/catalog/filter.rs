//! Presentation-side live filter over already-loaded items.

use crate::api::Product;

/// Case-insensitive substring match of the in-progress search text against
/// item titles.
///
/// Whitespace-only input shows everything. This is a pure view over loaded
/// items: no network call, no effect on the submitted query.
pub fn live_filter<'a>(items: &'a [Product], typed: &str) -> Vec<&'a Product> {
    if typed.trim().is_empty() {
        return items.iter().collect();
    }
    let needle = typed.to_lowercase();
    items
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 9.99,
            description: String::new(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn test_blank_input_shows_everything() {
        let items = vec![product(1, "iPhone 9"), product(2, "Perfume Oil")];
        assert_eq!(live_filter(&items, "").len(), 2);
        assert_eq!(live_filter(&items, "   ").len(), 2);
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let items = vec![
            product(1, "iPhone 9"),
            product(2, "Samsung Universe 9"),
            product(3, "Perfume Oil"),
        ];

        let hits = live_filter(&items, "PHONE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = live_filter(&items, "9");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_filter_does_not_touch_loaded_items() {
        let items = vec![product(1, "iPhone 9"), product(2, "Perfume Oil")];
        let before = items.clone();
        let _ = live_filter(&items, "phone");
        assert_eq!(items, before);
    }
}
