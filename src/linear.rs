//! Sequential navigation over an ordered list of ids.

use crate::command::Step;

/// Ordered ids with one of them as the starting point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<String>,
    current: usize,
}

impl Sequence {
    pub fn new(items: Vec<String>, current: usize) -> Self {
        Self { items, current }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The neighbour of the current item, without wrapping.
    pub fn next(&self, step: Step) -> Option<&str> {
        let index = match step {
            Step::Next => self.current.checked_add(1)?,
            Step::Prev => self.current.checked_sub(1)?,
        };
        self.items.get(index).map(String::as_str)
    }

    /// The item a step continues with after wrapping: the first one when
    /// stepping forward, the last one when stepping back.
    pub fn first(&self, step: Step) -> Option<&str> {
        match step {
            Step::Next => self.items.first(),
            Step::Prev => self.items.last(),
        }
        .map(String::as_str)
    }

    /// The item at 1-based `position`.
    pub fn at(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        self.items.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(current: usize) -> Sequence {
        Sequence::new(vec!["t1".into(), "t2".into(), "t3".into()], current)
    }

    #[test]
    fn steps_without_wrapping() {
        let seq = tabs(0);
        assert_eq!(seq.next(Step::Next), Some("t2"));
        assert_eq!(seq.next(Step::Prev), None);

        let seq = tabs(1);
        assert_eq!(seq.next(Step::Next), Some("t3"));
        assert_eq!(seq.next(Step::Prev), Some("t1"));

        let seq = tabs(2);
        assert_eq!(seq.next(Step::Next), None);
        assert_eq!(seq.next(Step::Prev), Some("t2"));
    }

    #[test]
    fn first_gives_the_wrap_target() {
        let seq = tabs(0);
        assert_eq!(seq.first(Step::Next), Some("t1"));
        assert_eq!(seq.first(Step::Prev), Some("t3"));
    }

    #[test]
    fn positions_are_one_based() {
        let seq = tabs(0);
        assert_eq!(seq.at(0), None);
        assert_eq!(seq.at(1), Some("t1"));
        assert_eq!(seq.at(2), Some("t2"));
        assert_eq!(seq.at(3), Some("t3"));
        assert_eq!(seq.at(4), None);
    }

    #[test]
    fn empty_sequence_finds_nothing() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.next(Step::Next), None);
        assert_eq!(seq.next(Step::Prev), None);
        assert_eq!(seq.first(Step::Next), None);
        assert_eq!(seq.first(Step::Prev), None);
        assert_eq!(seq.at(1), None);
    }

    #[test]
    fn single_item_has_no_neighbours() {
        let seq = Sequence::new(vec!["only".into()], 0);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.next(Step::Next), None);
        assert_eq!(seq.next(Step::Prev), None);
        assert_eq!(seq.first(Step::Prev), Some("only"));
    }
}
