pub mod camera;
pub mod events;
pub mod grid;
pub mod io;
pub mod rules;
pub mod world;

/// A grid coordinate. Signed, because the camera/mouse layer is free to hand
/// us coordinates off the edge of the world.
pub type Coord = i32;

/// The value of a single cell. `0` is dead; `1..=255` is alive, where the
/// number doubles as an age/brightness signal.
pub type CellValue = u8;
