
/// Marker value used to construct an optional in the empty state, or to
/// assign one into it.
///
/// ```
/// use inlineopt::{Optional, ABSENT};
///
/// let mut opt = Optional::<u8>::from_absent(ABSENT);
/// assert!(opt.is_empty());
///
/// opt.emplace(7);
/// opt.assign_absent(ABSENT);
/// assert!(opt.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Absent;

/// The absent marker.
pub const ABSENT: Absent = Absent;
