//! Geometry domain: where a show's frame sits on a screen object for each
//! facing, and how a frame image is sized to fit it.

mod fit;
#[cfg(test)]
mod tests;

pub use fit::{FitPolicy, resolve_size};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Altitude of the frame above the screen object's own surface, in map
/// altitude units. Half of one altitude layer (0.046875), so the frame sits
/// over the object but under anything drawn one full layer higher.
pub const SCREEN_ALTITUDE: f32 = 0.023_437_5;

/// One of the four cardinal orientations a screen object can be placed in.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect,
)]
pub enum Facing {
    #[default]
    South,
    North,
    East,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::South, Facing::North, Facing::East, Facing::West];

    fn slot(self) -> usize {
        match self {
            Facing::South => 0,
            Facing::North => 1,
            Facing::East => 2,
            Facing::West => 3,
        }
    }

    /// Next facing when rotating clockwise (as seen from above).
    pub fn rotated_clockwise(self) -> Facing {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }
}

/// Screen placement for a single facing.
///
/// `scale` is relative to the object's draw size, `offset` is in map units
/// from the object's draw position. Both are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeometryPair {
    #[serde(with = "vec2_serde")]
    pub scale: Vec2,
    #[serde(with = "vec2_serde")]
    pub offset: Vec2,
}

impl GeometryPair {
    pub fn new(scale: Vec2, offset: Vec2) -> Self {
        Self { scale, offset }
    }
}

/// Per-facing screen placement for one screen type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "FacingTable", into = "FacingTable")]
pub struct RotationGeometry {
    facings: [Option<GeometryPair>; 4],
}

/// Named-field form of [`RotationGeometry`] used in RON files.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
struct FacingTable {
    south: Option<GeometryPair>,
    north: Option<GeometryPair>,
    east: Option<GeometryPair>,
    west: Option<GeometryPair>,
}

impl From<FacingTable> for RotationGeometry {
    fn from(table: FacingTable) -> Self {
        Self {
            facings: [table.south, table.north, table.east, table.west],
        }
    }
}

impl From<RotationGeometry> for FacingTable {
    fn from(geometry: RotationGeometry) -> Self {
        let [south, north, east, west] = geometry.facings;
        Self {
            south,
            north,
            east,
            west,
        }
    }
}

impl RotationGeometry {
    /// Builder-style setter, mostly for authoring defaults in code.
    pub fn with(mut self, facing: Facing, pair: GeometryPair) -> Self {
        self.set(facing, Some(pair));
        self
    }

    pub fn is_supported(&self, facing: Facing) -> bool {
        self.facings[facing.slot()].is_some()
    }

    /// True if at least one facing can show a picture.
    pub fn supports_any(&self) -> bool {
        Facing::ALL.iter().any(|f| self.is_supported(*f))
    }

    pub fn pair_for(&self, facing: Facing) -> Option<GeometryPair> {
        self.facings[facing.slot()]
    }

    pub fn scale_for(&self, facing: Facing) -> Option<Vec2> {
        self.pair_for(facing).map(|p| p.scale)
    }

    pub fn offset_for(&self, facing: Facing) -> Option<Vec2> {
        self.pair_for(facing).map(|p| p.offset)
    }

    pub fn set(&mut self, facing: Facing, pair: Option<GeometryPair>) {
        self.facings[facing.slot()] = pair;
    }

    /// Overwrite every facing with the authored defaults.
    pub fn reset_to_defaults(&mut self, defaults: &RotationGeometry) {
        self.facings = defaults.facings;
    }

    /// Frame offset for `facing` in map coordinates: (x, altitude, depth).
    ///
    /// Depth is the negated configured y, so a positive configured y moves
    /// the frame up the screen (away from the viewer on the map).
    pub fn world_offset(&self, facing: Facing) -> Option<Vec3> {
        self.offset_for(facing)
            .map(|o| Vec3::new(o.x, SCREEN_ALTITUDE, -o.y))
    }
}

/// Serialize a `Vec2` as an `(x, y)` tuple in content and settings files.
pub(crate) mod vec2_serde {
    use bevy::math::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        (v.x, v.y).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let (x, y) = <(f32, f32)>::deserialize(deserializer)?;
        Ok(Vec2::new(x, y))
    }
}
