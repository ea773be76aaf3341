//! Ordered keyword tables backed by an Aho-Corasick automaton.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, BuildError, MatchKind};

/// Maps substrings to a value, grouped in priority order.
///
/// When several groups match the same haystack the earliest group wins, so
/// specific groups (e.g. `cardnumber`) are listed before generic ones (`name`).
#[derive(Debug)]
pub struct KeywordTable<T> {
    automaton: AhoCorasick,
    /// Group index for each pattern, parallel to the automaton's pattern ids.
    owners: Vec<usize>,
    values: Vec<T>,
}

impl<T> KeywordTable<T> {
    pub fn new<P>(groups: Vec<(T, P)>) -> Result<Self, BuildError>
    where
        P: IntoIterator<Item = &'static str>,
    {
        let mut patterns = Vec::new();
        let mut owners = Vec::new();
        let mut values = Vec::with_capacity(groups.len());
        for (index, (value, keywords)) in groups.into_iter().enumerate() {
            for keyword in keywords {
                patterns.push(keyword);
                owners.push(index);
            }
            values.push(value);
        }

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&patterns)?;

        Ok(Self {
            automaton,
            owners,
            values,
        })
    }

    /// Value of the highest-priority group with any keyword inside `haystack`.
    pub fn find(&self, haystack: &str) -> Option<&T> {
        self.automaton
            .find_overlapping_iter(haystack)
            .map(|m| self.owners[m.pattern().as_usize()])
            .min()
            .map(|group| &self.values[group])
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.automaton.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_group_wins_over_position() {
        let table = KeywordTable::new(vec![
            ("cc-name", vec!["cardholder", "nameoncard"]),
            ("name", vec!["name"]),
        ])
        .unwrap();
        assert_eq!(table.find("nameoncard"), Some(&"cc-name"));
        assert_eq!(table.find("fullname"), Some(&"name"));
        assert_eq!(table.find("city"), None);
    }

    #[test]
    fn matching_ignores_ascii_case() {
        let table = KeywordTable::new(vec![(1u8, vec!["logo"])]).unwrap();
        assert!(table.is_match("CompanyLOGO.png"));
        assert!(!table.is_match("banner.png"));
    }
}
