//! Mode finding on top of [`ChainingMap`].

use crate::ChainingMap;

/// Returns the most frequent items and how often they occur.
///
/// Items tying for the highest count are listed in the order in which each
/// one reached that count. An empty input yields `(vec![], 0)`.
///
/// ```rust
/// use strmap::find_mode;
///
/// let (mode, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(mode, vec!["apple"]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<S: AsRef<str>>(items: &[S]) -> (Vec<String>, usize) {
    let mut counts: ChainingMap<usize> = ChainingMap::default();
    let mut mode = Vec::new();
    let mut frequency = 0;

    for item in items {
        let item = item.as_ref();
        let count = counts.get(item).map_or(1, |seen| seen.saturating_add(1));
        counts.put(item, count);

        if count > frequency {
            mode.clear();
            frequency = count;
        }
        if count == frequency {
            mode.push(item.to_owned());
        }
    }

    (mode, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        let (mode, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
        assert_eq!(mode, vec!["apple"]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn test_tied_modes_in_order_reached() {
        let items = ["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"];
        let (mode, frequency) = find_mode(&items);
        assert_eq!(mode, vec!["4", "3", "2"]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_ties_and_all_distinct() {
        let items =
            ["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"];
        let (mode, frequency) = find_mode(&items);
        assert_eq!(mode, vec!["Mint", "Ubuntu"]);
        assert_eq!(frequency, 3);

        let (mode, frequency) = find_mode(&["one", "two", "three"]);
        assert_eq!(mode, vec!["one", "two", "three"]);
        assert_eq!(frequency, 1);
    }

    #[test]
    fn test_empty_input() {
        let items: [&str; 0] = [];
        assert_eq!(find_mode(&items), (Vec::new(), 0));
    }

    #[test]
    fn test_owned_strings_and_growth() {
        let items: Vec<String> = (0..500).map(|i| (i % 37).to_string()).collect();
        let (mut mode, frequency) = find_mode(&items);
        mode.sort();

        // 500 = 13 * 37 + 19, so keys 0..19 appear 14 times
        let mut expected: Vec<String> = (0..19).map(|i: i32| i.to_string()).collect();
        expected.sort();
        assert_eq!(mode, expected);
        assert_eq!(frequency, 14);
    }
}
