//! Drag handles and hit-testing.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::transform::CropRegion;

/// The part of the crop rectangle a gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "n")]
    ResizeN,
    #[serde(rename = "s")]
    ResizeS,
    #[serde(rename = "e")]
    ResizeE,
    #[serde(rename = "w")]
    ResizeW,
    #[serde(rename = "ne")]
    ResizeNE,
    #[serde(rename = "nw")]
    ResizeNW,
    #[serde(rename = "se")]
    ResizeSE,
    #[serde(rename = "sw")]
    ResizeSW,
}

/// Edges moved by a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Handle {
    /// Handles offered to the user: the interior and the four corners.
    pub const EXPOSED: [Handle; 5] = [
        Handle::Move,
        Handle::ResizeNW,
        Handle::ResizeNE,
        Handle::ResizeSW,
        Handle::ResizeSE,
    ];

    pub const CORNERS: [Handle; 4] = [
        Handle::ResizeNW,
        Handle::ResizeNE,
        Handle::ResizeSW,
        Handle::ResizeSE,
    ];

    /// Short tag used by hosts (`"move"`, `"n"`, `"se"`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            Handle::Move => "move",
            Handle::ResizeN => "n",
            Handle::ResizeS => "s",
            Handle::ResizeE => "e",
            Handle::ResizeW => "w",
            Handle::ResizeNE => "ne",
            Handle::ResizeNW => "nw",
            Handle::ResizeSE => "se",
            Handle::ResizeSW => "sw",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Handle> {
        let handle = match tag {
            "move" => Handle::Move,
            "n" => Handle::ResizeN,
            "s" => Handle::ResizeS,
            "e" => Handle::ResizeE,
            "w" => Handle::ResizeW,
            "ne" => Handle::ResizeNE,
            "nw" => Handle::ResizeNW,
            "se" => Handle::ResizeSE,
            "sw" => Handle::ResizeSW,
            _ => return None,
        };
        Some(handle)
    }

    pub fn edges(self) -> Edges {
        let (north, south, east, west) = match self {
            Handle::Move => (false, false, false, false),
            Handle::ResizeN => (true, false, false, false),
            Handle::ResizeS => (false, true, false, false),
            Handle::ResizeE => (false, false, true, false),
            Handle::ResizeW => (false, false, false, true),
            Handle::ResizeNE => (true, false, true, false),
            Handle::ResizeNW => (true, false, false, true),
            Handle::ResizeSE => (false, true, true, false),
            Handle::ResizeSW => (false, true, false, true),
        };
        Edges {
            north,
            south,
            east,
            west,
        }
    }

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// CSS cursor shown over the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::Move => "move",
            Handle::ResizeN => "n-resize",
            Handle::ResizeS => "s-resize",
            Handle::ResizeE => "e-resize",
            Handle::ResizeW => "w-resize",
            Handle::ResizeNE => "ne-resize",
            Handle::ResizeNW => "nw-resize",
            Handle::ResizeSE => "se-resize",
            Handle::ResizeSW => "sw-resize",
        }
    }

    /// Image-space position of a corner handle on `region`.
    pub fn corner_position(self, region: &CropRegion) -> Option<Point> {
        let edges = self.edges();
        if !self.is_corner() {
            return None;
        }
        let x = if edges.west { region.x } else { region.right() };
        let y = if edges.north { region.y } else { region.bottom() };
        Some(Point::new(x, y))
    }
}

/// Find the exposed handle under an image-space point.
///
/// Corners win over the interior when within `tolerance` (per axis) of the
/// corner point. Points outside the region that are not near a corner hit
/// nothing.
pub fn hit_test(region: &CropRegion, point: Point, tolerance: f64) -> Option<Handle> {
    for handle in Handle::CORNERS {
        if let Some(corner) = handle.corner_position(region) {
            if (point.x - corner.x).abs() <= tolerance && (point.y - corner.y).abs() <= tolerance {
                return Some(handle);
            }
        }
    }

    let inside = point.x >= region.x
        && point.x <= region.right()
        && point.y >= region.y
        && point.y <= region.bottom();
    inside.then_some(Handle::Move)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Handle; 9] = [
        Handle::Move,
        Handle::ResizeN,
        Handle::ResizeS,
        Handle::ResizeE,
        Handle::ResizeW,
        Handle::ResizeNE,
        Handle::ResizeNW,
        Handle::ResizeSE,
        Handle::ResizeSW,
    ];

    #[test]
    fn test_tags_round_trip() {
        for h in ALL {
            assert_eq!(Handle::from_tag(h.tag()), Some(h));
        }
        assert_eq!(Handle::from_tag("north"), None);
        assert_eq!(Handle::from_tag(""), None);
    }

    #[test]
    fn test_corner_edges_compose() {
        let se = Handle::ResizeSE.edges();
        assert!(se.south && se.east && !se.north && !se.west);

        let nw = Handle::ResizeNW.edges();
        assert!(nw.north && nw.west && !nw.south && !nw.east);

        assert_eq!(Handle::Move.edges(), Edges::default());
    }

    #[test]
    fn test_corner_edges_are_union_of_sides() {
        let union = |a: Edges, b: Edges| Edges {
            north: a.north || b.north,
            south: a.south || b.south,
            east: a.east || b.east,
            west: a.west || b.west,
        };
        assert_eq!(Handle::ResizeNE.edges(), union(Handle::ResizeN.edges(), Handle::ResizeE.edges()));
        assert_eq!(Handle::ResizeSW.edges(), union(Handle::ResizeS.edges(), Handle::ResizeW.edges()));
    }

    #[test]
    fn test_exposed_handles() {
        assert_eq!(Handle::EXPOSED.len(), 5);
        assert!(Handle::EXPOSED.iter().filter(|h| h.is_corner()).count() == 4);
        assert!(!Handle::ResizeN.is_corner());
    }

    #[test]
    fn test_corner_positions() {
        let r = CropRegion::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(Handle::ResizeNW.corner_position(&r), Some(Point::new(10.0, 20.0)));
        assert_eq!(Handle::ResizeSE.corner_position(&r), Some(Point::new(110.0, 70.0)));
        assert_eq!(Handle::ResizeNE.corner_position(&r), Some(Point::new(110.0, 20.0)));
        assert_eq!(Handle::Move.corner_position(&r), None);
    }

    #[test]
    fn test_hit_test() {
        let r = CropRegion::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(hit_test(&r, Point::new(95.0, 104.0), 10.0), Some(Handle::ResizeNW));
        assert_eq!(hit_test(&r, Point::new(305.0, 298.0), 10.0), Some(Handle::ResizeSE));
        assert_eq!(hit_test(&r, Point::new(200.0, 200.0), 10.0), Some(Handle::Move));
        assert_eq!(hit_test(&r, Point::new(50.0, 200.0), 10.0), None);
    }
}
