//! Pitch/yaw/roll orientation in degrees.
//!
//! Right-handed, +Y up. With all angles zero the forward vector is −Z and
//! right is +X. Positive yaw turns right (clockwise seen from above),
//! positive pitch tilts up.

use glam::{EulerRot, Quat, Vec3};

/// Wrap an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn normalize_axis(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Euler orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotator {
    /// Rotation about the right axis. Positive looks up.
    pub pitch: f32,
    /// Rotation about the up axis. Positive turns right.
    pub yaw: f32,
    /// Rotation about the forward axis.
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Pure yaw rotation.
    #[must_use]
    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Pure pitch rotation.
    #[must_use]
    pub const fn from_pitch(pitch: f32) -> Self {
        Self::new(pitch, 0.0, 0.0)
    }

    /// Quaternion form: yaw about Y, then pitch about X, then roll about Z.
    ///
    /// Yaw is negated because a positive glam rotation about +Y is
    /// counter-clockwise from above.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (-self.yaw).to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Inverse of [`to_quat`](Self::to_quat); yaw and roll come back normalized.
    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (y, x, z) = q.to_euler(EulerRot::YXZ);
        Self {
            pitch: x.to_degrees(),
            yaw: normalize_axis(-y.to_degrees()),
            roll: normalize_axis(z.to_degrees()),
        }
    }

    #[must_use]
    pub fn forward(self) -> Vec3 {
        self.to_quat() * Vec3::NEG_Z
    }

    #[must_use]
    pub fn right(self) -> Vec3 {
        self.to_quat() * Vec3::X
    }
}
