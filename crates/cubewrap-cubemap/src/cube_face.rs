//! The six faces of a cube map and the axis table that orients them.

use glam::DVec3;

/// One of the three object-space axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Read this axis' component of `v`.
    #[inline]
    #[must_use]
    pub fn get(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Write this axis' component of `v`.
    #[inline]
    pub fn set(self, v: &mut DVec3, value: f64) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// An axis together with the direction it is read in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignedAxis {
    pub axis: Axis,
    /// `1.0` or `-1.0`.
    pub sign: f64,
}

impl SignedAxis {
    const fn pos(axis: Axis) -> Self {
        Self { axis, sign: 1.0 }
    }

    const fn neg(axis: Axis) -> Self {
        Self { axis, sign: -1.0 }
    }

    /// Unit vector pointing along this signed axis.
    #[must_use]
    pub fn unit(self) -> DVec3 {
        let mut v = DVec3::ZERO;
        self.axis.set(&mut v, self.sign);
        v
    }
}

/// Orientation of a face: which object-space axis is the outward normal and
/// which axes increasing image `x` (U) and `y` (V) run along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceAxes {
    pub major: SignedAxis,
    pub u: SignedAxis,
    pub v: SignedAxis,
}

/// Rows indexed by [`CubeFace`] discriminant. Image rows run downward, so most
/// faces read V against the object-space up axis.
const FACE_AXES: [FaceAxes; 6] = [
    // +X
    FaceAxes {
        major: SignedAxis::pos(Axis::X),
        u: SignedAxis::neg(Axis::Z),
        v: SignedAxis::neg(Axis::Y),
    },
    // -X
    FaceAxes {
        major: SignedAxis::neg(Axis::X),
        u: SignedAxis::pos(Axis::Z),
        v: SignedAxis::neg(Axis::Y),
    },
    // +Y
    FaceAxes {
        major: SignedAxis::pos(Axis::Y),
        u: SignedAxis::pos(Axis::X),
        v: SignedAxis::pos(Axis::Z),
    },
    // -Y
    FaceAxes {
        major: SignedAxis::neg(Axis::Y),
        u: SignedAxis::pos(Axis::X),
        v: SignedAxis::neg(Axis::Z),
    },
    // +Z
    FaceAxes {
        major: SignedAxis::pos(Axis::Z),
        u: SignedAxis::pos(Axis::X),
        v: SignedAxis::neg(Axis::Y),
    },
    // -Z
    FaceAxes {
        major: SignedAxis::neg(Axis::Z),
        u: SignedAxis::neg(Axis::X),
        v: SignedAxis::neg(Axis::Y),
    },
];

/// The six faces of a cube map, in the layer order used by DDS cube maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Layer index in `0..6`.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for a layer index, `None` outside `0..6`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<CubeFace> {
        Self::ALL.get(index).copied()
    }

    /// Short label such as `+X`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        }
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Axis table row for this face.
    #[inline]
    #[must_use]
    pub fn axes(self) -> &'static FaceAxes {
        &FACE_AXES[self.index()]
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        self.axes().major.unit()
    }

    /// Direction of increasing image `x` on this face.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        self.axes().u.unit()
    }

    /// Direction of increasing image `y` on this face.
    #[must_use]
    pub fn bitangent(self) -> DVec3 {
        self.axes().v.unit()
    }

    /// The face whose outward normal is closest to `normal`.
    #[must_use]
    pub fn from_normal(normal: DVec3) -> CubeFace {
        let mut best = CubeFace::PosX;
        let mut best_dot = f64::NEG_INFINITY;
        for face in Self::ALL {
            let d = face.normal().dot(normal);
            if d > best_dot {
                best_dot = d;
                best = face;
            }
        }
        best
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
