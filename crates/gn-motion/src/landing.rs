//! Landing resolution.
//!
//! The landing gravity comes from the face that was struck: it points from
//! the last open cell into the solid cell.  Landing on a floor keeps gravity,
//! a side wall rotates it into that wall, a ceiling flips it.

use gn_core::{Gravity, State};
use gn_grid::NavGrid;

use crate::collide::Contact;
use crate::is_standing;

/// Pick the landing state for `contact`.
///
/// Candidates whose normal equals `gravity` (a plain floor landing) are tried
/// first, then the rest in contact order.  The first one that yields a valid
/// standing state wins; `None` if none does.
pub fn resolve(grid: &NavGrid, contact: &Contact, gravity: Gravity) -> Option<State> {
    let same  = contact.candidates.iter().filter(|c| c.normal == gravity);
    let other = contact.candidates.iter().filter(|c| c.normal != gravity);

    same.chain(other)
        .map(|c| State::new(c.cell.0, c.cell.1, c.normal))
        .find(|s| is_standing(grid, *s))
}
