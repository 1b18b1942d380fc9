//! Core value types for drafting geometry.

use glam::{DQuat, DVec2, DVec3};

use crate::errors::FrameError;

/// Axis-aligned bounding box in world coordinates.
///
/// `min` must be component-wise less than or equal to `max`. A zero extent
/// along one or more axes is legal (flat or point-like selections).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing a set of points, or `None` for an empty set.
    pub fn from_points(points: impl Iterator<Item = DVec3>) -> Option<Self> {
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        let mut has_points = false;

        for p in points {
            min = min.min(p);
            max = max.max(p);
            has_points = true;
        }

        if has_points {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Half of `size`: the distance from the center to each face.
    pub fn half_extents(&self) -> DVec3 {
        self.size() * 0.5
    }

    /// Merge with another bounding box.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Check if a point is inside the bounding box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
            && point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if another box lies entirely inside this one.
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }
}

/// An oriented view coordinate system: an anchor point plus three mutually
/// orthogonal unit basis vectors, all expressed in world space.
///
/// `basis_z` is the viewing axis; `basis_x` and `basis_y` span the view
/// plane (horizontal and vertical).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewFrame {
    pub origin: DVec3,
    pub basis_x: DVec3,
    pub basis_y: DVec3,
    pub basis_z: DVec3,
}

impl ViewFrame {
    /// World-aligned frame anchored at `origin`.
    pub fn identity(origin: DVec3) -> Self {
        Self {
            origin,
            basis_x: DVec3::X,
            basis_y: DVec3::Y,
            basis_z: DVec3::Z,
        }
    }

    /// Frame whose basis is the world axes rotated by `rotation`.
    ///
    /// The origin is assigned as given, never derived by rotating a point.
    pub fn from_rotation(origin: DVec3, rotation: DQuat) -> Self {
        Self {
            origin,
            basis_x: rotation * DVec3::X,
            basis_y: rotation * DVec3::Y,
            basis_z: rotation * DVec3::Z,
        }
    }

    /// Map a point in frame-local coordinates to world space.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.origin
            + self.basis_x * local.x
            + self.basis_y * local.y
            + self.basis_z * local.z
    }

    /// True when all basis vectors are unit length and mutually
    /// perpendicular within `tol`.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        (self.basis_x.length() - 1.0).abs() < tol
            && (self.basis_y.length() - 1.0).abs() < tol
            && (self.basis_z.length() - 1.0).abs() < tol
            && self.basis_x.dot(self.basis_y).abs() < tol
            && self.basis_y.dot(self.basis_z).abs() < tol
            && self.basis_z.dot(self.basis_x).abs() < tol
    }
}

/// Requested view orientation.
///
/// Discriminants are the command codes the host dispatch layer passes in;
/// [`ViewDirection::from_code`] is the only way to turn a raw code into a
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ViewDirection {
    /// Top-down view of the selection.
    Plan = 0,
    /// Front elevation, looking along world +Y.
    Elevation = 1,
    /// Elevation from the selection's min-X side.
    Left = 2,
    /// Elevation from the selection's max-X side.
    Right = 3,
    /// Upward-looking ceiling plan.
    ReflectedCeilingPlan = 4,
    /// Elevation with a cut plane through the selection.
    ElevationSection = 5,
    /// Plan with a cut plane through the selection.
    PlanSection = 6,
    /// Left elevation with a cut plane.
    LeftSection = 7,
    /// Right elevation with a cut plane.
    RightSection = 8,
}

impl ViewDirection {
    /// Every direction, in command-code order.
    pub const ALL: [ViewDirection; 9] = [
        ViewDirection::Plan,
        ViewDirection::Elevation,
        ViewDirection::Left,
        ViewDirection::Right,
        ViewDirection::ReflectedCeilingPlan,
        ViewDirection::ElevationSection,
        ViewDirection::PlanSection,
        ViewDirection::LeftSection,
        ViewDirection::RightSection,
    ];

    /// Decode a host command code.
    ///
    /// Any code outside the closed set fails; there is deliberately no
    /// fallback direction.
    pub fn from_code(code: i32) -> Result<Self, FrameError> {
        match code {
            0 => Ok(ViewDirection::Plan),
            1 => Ok(ViewDirection::Elevation),
            2 => Ok(ViewDirection::Left),
            3 => Ok(ViewDirection::Right),
            4 => Ok(ViewDirection::ReflectedCeilingPlan),
            5 => Ok(ViewDirection::ElevationSection),
            6 => Ok(ViewDirection::PlanSection),
            7 => Ok(ViewDirection::LeftSection),
            8 => Ok(ViewDirection::RightSection),
            _ => Err(FrameError::InvalidDirection { code }),
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Section variants cut through the selection instead of framing it
    /// from outside.
    pub const fn is_section(self) -> bool {
        matches!(
            self,
            ViewDirection::PlanSection
                | ViewDirection::ElevationSection
                | ViewDirection::LeftSection
                | ViewDirection::RightSection
        )
    }

    /// The non-section direction sharing this direction's orientation.
    pub const fn base(self) -> Self {
        match self {
            ViewDirection::PlanSection => ViewDirection::Plan,
            ViewDirection::ElevationSection => ViewDirection::Elevation,
            ViewDirection::LeftSection => ViewDirection::Left,
            ViewDirection::RightSection => ViewDirection::Right,
            other => other,
        }
    }
}

/// Anchor positions for placing a view on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetLocation {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Caller-positioned; no anchor arithmetic is defined for it.
    Custom,
}

/// Usable extent of a drawing sheet, in sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetOutline {
    pub min: DVec2,
    pub max: DVec2,
}

impl SheetOutline {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}
