//! A coordinate names a position *inside one field repetition*: the whole
//! field, one of its components, or one of a component's subcomponents.
//! Repetition is addressed separately, by walking each occurrence of the
//! field in turn — a coordinate never carries a repetition index.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Field,
    Component(usize),
    Subcomponent(usize, usize),
}

impl Coordinate {
    /// Sort key for the "ascending index order" walk §4.7 describes — field
    /// sorts before every component, each component before its own
    /// subcomponents.
    pub(crate) fn sort_key(self) -> (usize, usize) {
        match self {
            Coordinate::Field => (0, 0),
            Coordinate::Component(i) => (i, 0),
            Coordinate::Subcomponent(i, j) => (i, j),
        }
    }

    pub fn component_index(self) -> Option<usize> {
        match self {
            Coordinate::Field => None,
            Coordinate::Component(i) | Coordinate::Subcomponent(i, _) => Some(i),
        }
    }
}
