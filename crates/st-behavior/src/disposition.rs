//! What an agent does when it comes into contact with another object.
//!
//! Steering never consults this table; the host does, when it resolves
//! contacts after motion (a flocker touching a light eats it, a predator
//! touching a boid kills it).

use st_core::ObjectCategory;

use crate::AgentKind;

/// Interaction on approach.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Disposition {
    /// Consume / capture the object on contact.
    Attack,
    /// Ignore the object.
    Coexist,
}

use Disposition::{Attack as A, Coexist as C};

/// Rows: [`AgentKind::index`].  Columns: [`ObjectCategory::index`]
/// (boid, predator, obstacle, light, corpse).
const TABLE: [[Disposition; 5]; 3] = [
    /* flocker  */ [C, C, C, A, C],
    /* predator */ [A, C, C, C, C],
    /* grazer   */ [C, C, C, C, C],
];

/// Look up how an agent of kind `me` treats a contacted `other`.
#[inline]
pub fn disposition(me: AgentKind, other: ObjectCategory) -> Disposition {
    TABLE[me.index()][other.index()]
}
