//! Rizz List Utilities
//!
//! Pure list transformations applied by the page store.

use std::cmp::Ordering;

use crate::models::{Rizz, SortOrder};

/// Append a newly created rizz at the end, ignoring the active sort order
pub fn append_rizz(list: &mut Vec<Rizz>, created: Rizz) {
    list.push(created);
}

/// Replace the rizz with the same ID in place.
/// Returns false (list untouched) if no entry matches.
pub fn replace_rizz(list: &mut [Rizz], updated: Rizz) -> bool {
    match list.iter_mut().find(|rizz| rizz.id == updated.id) {
        Some(rizz) => {
            *rizz = updated;
            true
        }
        None => false,
    }
}

/// Stable sort of the whole list; equal keys keep their current order
pub fn sort_rizz(list: &mut [Rizz], order: SortOrder) {
    match order {
        SortOrder::Vote => list.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortOrder::Alphabetical => list.sort_by(|a, b| compare_content(&a.rizz, &b.rizz)),
    }
}

/// Compare content with the webview's `String.prototype.localeCompare`
#[cfg(target_arch = "wasm32")]
pub fn compare_content(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(
        b,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    result.cmp(&0)
}

/// Native stand-in for `localeCompare`: base letters first, then accents,
/// then lowercase before uppercase. Only Latin-1 accents are folded.
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_content(a: &str, b: &str) -> Ordering {
    let (lower_a, lower_b) = (a.to_lowercase(), b.to_lowercase());
    let folded_a = lower_a.chars().map(base_letter);
    let folded_b = lower_b.chars().map(base_letter);

    folded_a
        .cmp(folded_b)
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| b.cmp(a))
}

#[cfg(not(target_arch = "wasm32"))]
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rizz(id: u32, text: &str, votes: i32) -> Rizz {
        Rizz {
            id,
            rizz: text.to_string(),
            votes,
        }
    }

    fn fetched() -> Vec<Rizz> {
        vec![make_rizz(1, "a", 2), make_rizz(2, "b", 5)]
    }

    fn ids(list: &[Rizz]) -> Vec<u32> {
        list.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_by_vote_descending() {
        let mut list = fetched();
        sort_rizz(&mut list, SortOrder::Vote);
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut list = vec![make_rizz(2, "b", 5), make_rizz(1, "a", 2)];
        sort_rizz(&mut list, SortOrder::Alphabetical);
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut list = vec![
            make_rizz(1, "x", 3),
            make_rizz(2, "y", 7),
            make_rizz(3, "z", 3),
            make_rizz(4, "w", 3),
        ];
        sort_rizz(&mut list, SortOrder::Vote);
        assert_eq!(ids(&list), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut list = vec![
            make_rizz(1, "Banana", 0),
            make_rizz(2, "apple", 0),
            make_rizz(3, "Apple", 0),
            make_rizz(4, "cherry", 0),
        ];
        sort_rizz(&mut list, SortOrder::Alphabetical);
        assert_eq!(ids(&list), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_sort_by_name_folds_accents() {
        let mut list = vec![make_rizz(1, "zebra", 0), make_rizz(2, "éclair", 0)];
        sort_rizz(&mut list, SortOrder::Alphabetical);
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_accent_orders_after_plain_letter() {
        assert_eq!(compare_content("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_content("Élan", "elan"), Ordering::Greater);
        assert_eq!(compare_content("élan", "elk"), Ordering::Less);
    }

    #[test]
    fn test_append_ignores_sort_order() {
        let mut list = fetched();
        sort_rizz(&mut list, SortOrder::Vote);
        append_rizz(&mut list, make_rizz(3, "new", 0));
        assert_eq!(ids(&list), vec![2, 1, 3]);
        assert_eq!(list[2].rizz, "new");
    }

    #[test]
    fn test_append_does_not_resort_with_high_votes() {
        let mut list = fetched();
        sort_rizz(&mut list, SortOrder::Vote);
        append_rizz(&mut list, make_rizz(3, "aaa", 100));
        assert_eq!(ids(&list), vec![2, 1, 3]);
    }

    #[test]
    fn test_replace_updates_only_matching_entry() {
        let mut list = fetched();
        let replaced = replace_rizz(&mut list, make_rizz(1, "a", 1));
        assert!(replaced);
        assert_eq!(list, vec![make_rizz(1, "a", 1), make_rizz(2, "b", 5)]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut list = fetched();
        let replaced = replace_rizz(&mut list, make_rizz(99, "ghost", -1));
        assert!(!replaced);
        assert_eq!(list, fetched());
    }

    #[test]
    fn test_replace_does_not_resort() {
        let mut list = fetched();
        sort_rizz(&mut list, SortOrder::Vote);
        replace_rizz(&mut list, make_rizz(1, "a", 50));
        assert_eq!(ids(&list), vec![2, 1]);
    }
}
