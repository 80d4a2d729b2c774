use derive_new::new;
use similar::{Algorithm, DiffOp, capture_diff_slices};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

/// Myers' O(ND) shortest edit script between two sequences.
///
/// Runs the linear-space variant, which bisects on the middle snake instead of
/// recording a frontier per edit distance, so memory stays proportional to the
/// input even when the sequences share nothing. A replaced region is emitted as
/// its deletions followed by its insertions.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Hash + Ord> MyersDiff<'d, T> {
    pub fn edits(&self) -> Vec<Edit<&'d T>> {
        if self.a.is_empty() && self.b.is_empty() {
            return Vec::new();
        }

        let (a, b) = (self.a, self.b);
        let mut edits = Vec::with_capacity(a.len().max(b.len()));

        for op in capture_diff_slices(Algorithm::Myers, a, b) {
            let (old, new) = match op {
                DiffOp::Equal {
                    old_index, len, ..
                } => {
                    edits.extend(
                        a[old_index..old_index + len]
                            .iter()
                            .map(|value| Edit::Equal { value }),
                    );
                    continue;
                }
                DiffOp::Delete {
                    old_index, old_len, ..
                } => (old_index..old_index + old_len, 0..0),
                DiffOp::Insert {
                    new_index, new_len, ..
                } => (0..0, new_index..new_index + new_len),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => (
                    old_index..old_index + old_len,
                    new_index..new_index + new_len,
                ),
            };

            edits.extend(a[old].iter().map(|value| Edit::Delete { value }));
            edits.extend(b[new].iter().map(|value| Edit::Insert { value }));
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::{Edit, MyersDiff};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        ("abcabba".chars().collect(), "cbabac".chars().collect())
    }

    fn cost<T>(edits: &[Edit<T>]) -> usize {
        edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Equal { .. }))
            .count()
    }

    #[rstest]
    fn shortest_script_for_classic_example_has_five_edits(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let edits = MyersDiff::new(&a, &b).edits();

        assert_eq!(cost(&edits), 5);
    }

    #[rstest]
    fn script_replays_both_sides(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let edits = MyersDiff::new(&a, &b).edits();

        let old = edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Delete { value } | Edit::Equal { value } => Some(**value),
                Edit::Insert { .. } => None,
            })
            .collect::<Vec<_>>();
        let new = edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Insert { value } | Edit::Equal { value } => Some(**value),
                Edit::Delete { .. } => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(old, a);
        assert_eq!(new, b);
    }

    #[rstest]
    fn replaced_line_between_common_lines() {
        let a = vec!["line1", "line2", "line3", "line4"];
        let b = vec!["line2", "line3_modified", "line4", "line5"];

        let edits = MyersDiff::new(&a, &b).edits();

        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: &"line1" },
                Edit::Equal { value: &"line2" },
                Edit::Delete { value: &"line3" },
                Edit::Insert {
                    value: &"line3_modified"
                },
                Edit::Equal { value: &"line4" },
                Edit::Insert { value: &"line5" },
            ]
        );
    }

    #[rstest]
    #[case::both_empty(vec![], vec![], 0)]
    #[case::only_insertions(vec![], vec!["x", "y"], 2)]
    #[case::only_deletions(vec!["x", "y"], vec![], 2)]
    fn degenerate_inputs(#[case] a: Vec<&str>, #[case] b: Vec<&str>, #[case] expected: usize) {
        let edits = MyersDiff::new(&a, &b).edits();

        assert_eq!(edits.len(), expected);
        assert_eq!(cost(&edits), expected);
    }
}
