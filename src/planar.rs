//! Geometric navigation over a flat set of positioned windows.
//!
//! An [`Arrangement`] answers "which window is next in this direction?".
//! The answer is computed in two filtering passes over all windows:
//!
//! 1. **Closest in direction.**  Keep the windows whose near edge lies past
//!    the current window's far edge and is closest to it.
//! 2. **Best aligned.**  Of those, keep the ones whose midpoint on the
//!    perpendicular axis is closest to the current window's.
//!
//! The first survivor in input order wins.  Which edges and midpoints are
//! compared depends on the [`Relation`] and [`Direction`]; the combinations
//! are spelled out once in [`Alignment::of`].

use crate::command::Direction;
use crate::geometry::{Rect, Window};
use log::debug;
use serde::Deserialize;

/// What part of a window movement is measured from and to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Compare the facing borders of windows.  Suits tiled windows, which
    /// share borders.
    #[default]
    Border,
    /// Compare window centres.  Suits floating windows, which overlap.
    Center,
}

/// Edge functions and comparator for one `(relation, direction)` pair.
#[derive(Clone, Copy)]
pub struct Alignment {
    /// Edge of a candidate facing the current window.
    pub near: fn(&Rect) -> i32,
    /// Edge of the current window that candidates must lie beyond.
    pub far: fn(&Rect) -> i32,
    /// Perpendicular midpoint used to break ties.
    pub axis: fn(&Rect) -> i32,
    /// `<=` when moving towards smaller coordinates, `>=` otherwise.
    pub comp: fn(i32, i32) -> bool,
}

fn le(a: i32, b: i32) -> bool {
    a <= b
}

fn ge(a: i32, b: i32) -> bool {
    a >= b
}

impl Alignment {
    pub fn of(relation: Relation, direction: Direction) -> Self {
        use Direction::*;
        use Relation::*;
        match (relation, direction) {
            // RELATION  DIRECTION            NEAR                     FAR                      AXIS                     COMP
            (Border, Left)  => Self::new(Rect::right,             Rect::left,              Rect::vertical_middle,   le),
            (Border, Up)    => Self::new(Rect::bottom,            Rect::top,               Rect::horizontal_middle, le),
            (Border, Right) => Self::new(Rect::left,              Rect::right,             Rect::vertical_middle,   ge),
            (Border, Down)  => Self::new(Rect::top,               Rect::bottom,            Rect::horizontal_middle, ge),
            (Center, Left)  => Self::new(Rect::horizontal_middle, Rect::horizontal_middle, Rect::vertical_middle,   le),
            (Center, Up)    => Self::new(Rect::vertical_middle,   Rect::vertical_middle,   Rect::horizontal_middle, le),
            (Center, Right) => Self::new(Rect::horizontal_middle, Rect::horizontal_middle, Rect::vertical_middle,   ge),
            (Center, Down)  => Self::new(Rect::vertical_middle,   Rect::vertical_middle,   Rect::horizontal_middle, ge),
        }
    }

    fn new(
        near: fn(&Rect) -> i32,
        far: fn(&Rect) -> i32,
        axis: fn(&Rect) -> i32,
        comp: fn(i32, i32) -> bool,
    ) -> Self {
        Self { near, far, axis, comp }
    }

    fn decreasing(&self) -> bool {
        (self.comp)(i32::MIN, i32::MAX)
    }

    /// A threshold every window lies beyond.
    fn open_bound(&self) -> i32 {
        if self.decreasing() {
            i32::MAX
        } else {
            i32::MIN
        }
    }

    /// `threshold` moved one unit further in the direction of movement.
    fn beyond(&self, threshold: i32) -> i32 {
        if self.decreasing() {
            threshold.saturating_sub(1)
        } else {
            threshold.saturating_add(1)
        }
    }
}

/// Windows laid out on a plane, with one of them as the starting point.
#[derive(Debug, Clone)]
pub struct Arrangement {
    windows: Vec<Window>,
    current: usize,
    relation: Relation,
}

impl Arrangement {
    /// `current` is the index movement starts from.  An out-of-range index
    /// makes every query come back empty.
    pub fn new(windows: Vec<Window>, current: usize, relation: Relation) -> Self {
        Self {
            windows,
            current,
            relation,
        }
    }

    /// Id of the nearest window in `direction` from the current one.
    ///
    /// Never returns the current window itself.
    pub fn next(&self, direction: Direction) -> Option<&str> {
        let current = self.windows.get(self.current)?;
        let alignment = Alignment::of(self.relation, direction);

        let threshold = (alignment.far)(&current.rect);
        let mut closest = self.closest_in_direction(threshold, &alignment);
        if closest.contains(&self.current) {
            closest = self.closest_in_direction(alignment.beyond(threshold), &alignment);
        }
        debug!("{} closest {:?} beyond {}", direction, closest, threshold);

        self.best_aligned(&closest, (alignment.axis)(&current.rect), &alignment)
    }

    /// Id of the window at the far end of the opposite side, i.e. where
    /// movement in `direction` continues after wrapping around.
    ///
    /// Ties are broken by alignment with the current window.
    pub fn first(&self, direction: Direction) -> Option<&str> {
        let current = self.windows.get(self.current)?;
        let alignment = Alignment::of(self.relation, direction);

        let closest = self.closest_in_direction(alignment.open_bound(), &alignment);
        debug!("{} first candidates {:?}", direction, closest);

        self.best_aligned(&closest, (alignment.axis)(&current.rect), &alignment)
    }

    /// Indices of the windows whose near edge is past `threshold` and
    /// closest to it.
    fn closest_in_direction(&self, threshold: i32, alignment: &Alignment) -> Vec<usize> {
        let near = |w: &Window| (alignment.near)(&w.rect);
        let extreme = self
            .windows
            .iter()
            .map(near)
            .filter(|&n| (alignment.comp)(n, threshold))
            .reduce(|best, n| if (alignment.comp)(best, n) { n } else { best });

        match extreme {
            Some(extreme) => self
                .windows
                .iter()
                .enumerate()
                .filter(|(_, w)| near(*w) == extreme)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    /// First candidate, in input order, whose axis is closest to `reference`.
    fn best_aligned(&self, candidates: &[usize], reference: i32, alignment: &Alignment) -> Option<&str> {
        let distance = |i: usize| (alignment.axis)(&self.windows[i].rect).abs_diff(reference);
        let best = candidates.iter().map(|&i| distance(i)).min()?;
        candidates
            .iter()
            .find(|&&i| distance(i) == best)
            .map(|&i| self.windows[i].id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(id: &str, x: i32, y: i32, w: i32, h: i32) -> Window {
        Window::new(id, Rect::new(x, y, w, h))
    }

    /// ```text
    /// +---+---+---+
    /// | A | B | C |
    /// +---+---+---+
    /// ```
    fn row() -> Vec<Window> {
        vec![
            win("A", 0, 0, 100, 100),
            win("B", 100, 0, 100, 100),
            win("C", 200, 0, 100, 100),
        ]
    }

    /// ```text
    /// +---+---+
    /// | L | T |
    /// |   +---+
    /// |   | M |
    /// |   +---+
    /// |   | D |
    /// +---+---+
    /// ```
    fn column_beside_tall() -> Vec<Window> {
        vec![
            win("L", 0, 0, 100, 300),
            win("T", 100, 0, 100, 100),
            win("M", 100, 100, 100, 100),
            win("D", 100, 200, 100, 100),
        ]
    }

    #[test]
    fn alignment_table_edges() {
        let r = Rect::new(0, 2, 10, 20);
        let a = Alignment::of(Relation::Border, Direction::Left);
        assert_eq!(((a.near)(&r), (a.far)(&r), (a.axis)(&r)), (10, 0, 12));
        let a = Alignment::of(Relation::Border, Direction::Down);
        assert_eq!(((a.near)(&r), (a.far)(&r), (a.axis)(&r)), (2, 22, 5));
        let a = Alignment::of(Relation::Center, Direction::Right);
        assert_eq!(((a.near)(&r), (a.far)(&r), (a.axis)(&r)), (5, 5, 12));
        let a = Alignment::of(Relation::Center, Direction::Up);
        assert_eq!(((a.near)(&r), (a.far)(&r), (a.axis)(&r)), (12, 12, 5));
        assert!((Alignment::of(Relation::Border, Direction::Up).comp)(1, 2));
        assert!((Alignment::of(Relation::Border, Direction::Right).comp)(2, 1));
    }

    #[test]
    fn steps_along_a_row() {
        let a = Arrangement::new(row(), 0, Relation::Border);
        assert_eq!(a.next(Direction::Right), Some("B"));
        let b = Arrangement::new(row(), 1, Relation::Border);
        assert_eq!(b.next(Direction::Right), Some("C"));
        assert_eq!(b.next(Direction::Left), Some("A"));
        let c = Arrangement::new(row(), 2, Relation::Border);
        assert_eq!(c.next(Direction::Right), None);
        assert_eq!(c.next(Direction::Up), None);
        assert_eq!(c.next(Direction::Down), None);
    }

    #[test]
    fn first_is_the_wrap_target() {
        let c = Arrangement::new(row(), 2, Relation::Border);
        assert_eq!(c.first(Direction::Right), Some("A"));
        let a = Arrangement::new(row(), 0, Relation::Border);
        assert_eq!(a.first(Direction::Left), Some("C"));
        assert_eq!(a.first(Direction::Right), Some("A"));
    }

    #[test]
    fn prefers_the_best_aligned_neighbour() {
        // From M, moving left: L is the only candidate.  From L, moving
        // right: T, M and D share the near edge, M is centred on L.
        let windows = column_beside_tall();
        assert_eq!(Arrangement::new(windows.clone(), 2, Relation::Border).next(Direction::Left), Some("L"));
        assert_eq!(Arrangement::new(windows.clone(), 0, Relation::Border).next(Direction::Right), Some("M"));
        assert_eq!(Arrangement::new(windows.clone(), 1, Relation::Border).next(Direction::Down), Some("M"));
        assert_eq!(Arrangement::new(windows, 3, Relation::Border).next(Direction::Up), Some("M"));
    }

    #[test]
    fn first_aligns_with_the_current_window() {
        // From D, wrapping downwards lands on the top window of D's column.
        let windows = column_beside_tall();
        let d = Arrangement::new(windows, 3, Relation::Border);
        assert_eq!(d.next(Direction::Down), None);
        assert_eq!(d.first(Direction::Down), Some("T"));
    }

    #[test]
    fn equal_candidates_resolve_in_input_order() {
        // X and Y are mirror images around the current window's axis.
        let current = win("cur", 0, 100, 100, 100);
        let x = win("X", 100, 50, 100, 100);
        let y = win("Y", 100, 150, 100, 100);
        let a = Arrangement::new(vec![current.clone(), x.clone(), y.clone()], 0, Relation::Border);
        assert_eq!(a.next(Direction::Right), Some("X"));
        let a = Arrangement::new(vec![current, y, x], 0, Relation::Border);
        assert_eq!(a.next(Direction::Right), Some("Y"));
    }

    #[test]
    fn center_relation_skips_windows_on_the_same_line() {
        let windows = vec![
            win("A", 0, 0, 100, 100),
            win("B", 0, 200, 100, 100),
            win("C", 300, 0, 100, 100),
        ];
        let a = Arrangement::new(windows.clone(), 0, Relation::Center);
        assert_eq!(a.next(Direction::Right), Some("C"));
        assert_eq!(a.next(Direction::Left), None);
        assert_eq!(a.next(Direction::Down), Some("B"));
        let b = Arrangement::new(windows, 1, Relation::Center);
        assert_eq!(b.next(Direction::Up), Some("A"));
    }

    #[test]
    fn center_relation_handles_overlap() {
        let windows = vec![win("big", 0, 0, 400, 400), win("small", 150, 150, 200, 50)];
        let big = Arrangement::new(windows.clone(), 0, Relation::Center);
        assert_eq!(big.next(Direction::Right), Some("small"));
        let small = Arrangement::new(windows, 1, Relation::Center);
        assert_eq!(small.next(Direction::Left), Some("big"));
    }

    #[test]
    fn never_returns_the_current_window() {
        let mut windows = column_beside_tall();
        windows.push(win("Z", 0, 0, 0, 0));
        windows.push(win("twin", 0, 0, 100, 300));
        let directions = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
        for relation in [Relation::Border, Relation::Center] {
            for current in 0..windows.len() {
                let a = Arrangement::new(windows.clone(), current, relation);
                for direction in directions {
                    if let Some(id) = a.next(direction) {
                        assert_ne!(id, windows[current].id, "{:?} {} from {}", relation, direction, id);
                    }
                }
            }
        }
    }

    #[test]
    fn empty_arrangement_finds_nothing() {
        let a = Arrangement::new(vec![], 0, Relation::Border);
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.next(direction), None);
            assert_eq!(a.first(direction), None);
        }
    }

    #[test]
    fn out_of_range_current_finds_nothing() {
        let a = Arrangement::new(row(), 7, Relation::Border);
        assert_eq!(a.next(Direction::Right), None);
        assert_eq!(a.first(Direction::Right), None);
    }
}
