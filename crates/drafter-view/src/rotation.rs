//! World-axis rotation sequences.

use glam::{DQuat, DVec3};

/// A world coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub const fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// This axis' component of a vector.
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with this axis' component replaced.
    pub fn with_component(self, v: DVec3, value: f64) -> DVec3 {
        match self {
            Axis::X => DVec3::new(value, v.y, v.z),
            Axis::Y => DVec3::new(v.x, value, v.z),
            Axis::Z => DVec3::new(v.x, v.y, value),
        }
    }
}

/// A rotation about a world axis by a signed angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    pub axis: Axis,
    pub degrees: f64,
}

impl AxisRotation {
    pub const fn new(axis: Axis, degrees: f64) -> Self {
        Self { axis, degrees }
    }

    /// Quaternion form of this rotation.
    pub fn quat(&self) -> DQuat {
        let radians = self.degrees.to_radians();
        match self.axis {
            Axis::X => DQuat::from_rotation_x(radians),
            Axis::Y => DQuat::from_rotation_y(radians),
            Axis::Z => DQuat::from_rotation_z(radians),
        }
    }
}

/// Compose a rotation sequence by transform multiplication, left to right.
///
/// The order is load-bearing: `[r1, r2, r3]` applied to a vector yields
/// `r1(r2(r3(v)))`. An empty sequence is the identity.
pub fn compose(rotations: &[AxisRotation]) -> DQuat {
    rotations
        .iter()
        .fold(DQuat::IDENTITY, |acc, rotation| acc * rotation.quat())
}
