//! The demo deck: a two-level cargo bay with a gap in the mezzanine.

use gn_nav::{Gravity, NavGrid, SolidSet, State, TileGrid};

/// `H` hull and `F` floor plating are solid; `.` interior and `D` doorway
/// are open.
pub const DECK: &str = "
    HHHHHHHHHHHHHHHHHHHH
    H..................H
    H..................H
    H....FFFF..........H
    H..................H
    H.........FFFFF....H
    H..................H
    HFFFFFF..FFFFFFFFFFH
    H..................H
    H.................DH
    HHHHHHHHHHHHHHHHHHHH
";

pub const SOLID_TAGS: [&str; 2] = ["H", "F"];

/// Where the crew member stands when the demo starts.
pub const START: State = State { x: 1, y: 6, gravity: Gravity::Down };

pub fn build_deck() -> anyhow::Result<NavGrid> {
    let tiles = TileGrid::from_ascii(DECK)?;
    Ok(NavGrid::new(&tiles, &SolidSet::new(SOLID_TAGS)))
}
