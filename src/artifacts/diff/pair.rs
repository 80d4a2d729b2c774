use crate::artifacts::diff::error::DiffError;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    First,
    Second,
    Third,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    pub fn index(&self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
            Slot::Third => 2,
        }
    }

    /// 1-based position, as shown to the user.
    pub fn number(&self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<usize> for Slot {
    type Error = DiffError;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Slot::First),
            2 => Ok(Slot::Second),
            3 => Ok(Slot::Third),
            other => Err(DiffError::InvalidSlot(other)),
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "File {}", self.number())
    }
}

/// One of the three unordered comparisons. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairId {
    FirstSecond,
    SecondThird,
    FirstThird,
}

impl PairId {
    pub const ALL: [PairId; 3] = [PairId::FirstSecond, PairId::SecondThird, PairId::FirstThird];

    /// `(old, new)` sides of the comparison.
    pub fn slots(&self) -> (Slot, Slot) {
        match self {
            PairId::FirstSecond => (Slot::First, Slot::Second),
            PairId::SecondThird => (Slot::Second, Slot::Third),
            PairId::FirstThird => (Slot::First, Slot::Third),
        }
    }

    pub fn title(&self) -> String {
        let (old, new) = self.slots();
        format!("{old} vs {new}")
    }
}

impl Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::{PairId, Slot};
    use crate::artifacts::diff::error::DiffError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, Slot::First)]
    #[case(2, Slot::Second)]
    #[case(3, Slot::Third)]
    fn parses_one_based_slot_numbers(#[case] number: usize, #[case] expected: Slot) {
        assert_eq!(Slot::try_from(number), Ok(expected));
        assert_eq!(expected.number(), number);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn rejects_out_of_range_slots(#[case] number: usize) {
        assert_eq!(Slot::try_from(number), Err(DiffError::InvalidSlot(number)));
    }

    #[rstest]
    #[case(PairId::FirstSecond, "File 1 vs File 2")]
    #[case(PairId::SecondThird, "File 2 vs File 3")]
    #[case(PairId::FirstThird, "File 1 vs File 3")]
    fn titles_follow_display_order(#[case] pair: PairId, #[case] title: &str) {
        assert_eq!(pair.title(), title);
    }

    #[rstest]
    fn third_slot_only_takes_part_in_two_pairs() {
        let involved = PairId::ALL
            .iter()
            .filter(|pair| {
                let (old, new) = pair.slots();
                old == Slot::Third || new == Slot::Third
            })
            .collect::<Vec<_>>();

        assert_eq!(involved, vec![&PairId::SecondThird, &PairId::FirstThird]);
    }
}
