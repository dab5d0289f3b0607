//! Derivation of the 24-entry seam table from cube geometry.
//!
//! Each face is probed at four positions just past its edges. A probe is
//! projected to a direction and back, which tells which face it really lands
//! on and where. Comparing that with the position a naive modulo wrap would
//! read reveals whether the neighbour's axes are mirrored or swapped relative
//! to the probed face.

use cubewrap_cubemap::{CubeCoord, CubeFace, cube_coord_to_direction, direction_to_cube_coord};

use crate::error::TableError;
use crate::wrap_code::WrapCode;

/// Which edge of a face a probe crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Probe {
    /// Past the `x = w - 1` edge.
    PosU = 0,
    /// Past the `x = 0` edge.
    NegU = 1,
    /// Past the `y = w - 1` edge.
    PosV = 2,
    /// Past the `y = 0` edge.
    NegV = 3,
}

impl Probe {
    /// Probes in table slot order.
    pub const ALL: [Probe; 4] = [Probe::PosU, Probe::NegU, Probe::PosV, Probe::NegV];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header used in emitted tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Probe::PosU => "+U",
            Probe::NegU => "-U",
            Probe::PosV => "+V",
            Probe::NegV => "-V",
        }
    }

    /// Offset direction along (U, V), each in `{-1, 0, 1}`.
    #[must_use]
    pub fn step(self) -> (i8, i8) {
        match self {
            Probe::PosU => (1, 0),
            Probe::NegU => (-1, 0),
            Probe::PosV => (0, 1),
            Probe::NegV => (0, -1),
        }
    }
}

/// Constants of the probe construction, in pixels of the reference face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableParams {
    pub face_width: u32,
    /// Centre the probe offsets are taken from.
    pub probe_center: f64,
    /// Distance from the centre to a probe; puts probes just past the edge.
    pub probe_offset: f64,
    /// Coordinate on the axis a probe does not move along.
    pub probe_rest: f64,
    /// Start of the interior band `[band_min, band_max)`.
    pub band_min: f64,
    pub band_max: f64,
    /// Threshold deciding which half of the face a coordinate is in.
    pub band_mid: f64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            face_width: 256,
            probe_center: 127.75,
            probe_offset: 129.25,
            probe_rest: 64.0,
            band_min: 32.0,
            band_max: 224.0,
            band_mid: 128.0,
        }
    }
}

impl TableParams {
    /// Check that the probes and band describe a usable construction.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.face_width == 0 {
            return Err(TableError::ZeroWidth);
        }
        for (name, value) in [
            ("probe_center", self.probe_center),
            ("probe_offset", self.probe_offset),
            ("probe_rest", self.probe_rest),
            ("band_min", self.band_min),
            ("band_max", self.band_max),
            ("band_mid", self.band_mid),
        ] {
            if !value.is_finite() {
                return Err(TableError::NonFinite { name, value });
            }
        }
        let w = f64::from(self.face_width);
        let ordered = 0.0 <= self.band_min
            && self.band_min < self.band_mid
            && self.band_mid < self.band_max
            && self.band_max <= w;
        if !ordered {
            return Err(TableError::BandOutOfOrder {
                min: self.band_min,
                mid: self.band_mid,
                max: self.band_max,
                width: self.face_width,
            });
        }
        if self.probe_center - self.probe_offset >= 0.0 || self.probe_center + self.probe_offset < w
        {
            return Err(TableError::ProbeInsideFace {
                center: self.probe_center,
                offset: self.probe_offset,
                width: self.face_width,
            });
        }
        if !self.in_band(self.probe_rest) {
            return Err(TableError::RestOutsideBand {
                rest: self.probe_rest,
            });
        }
        Ok(())
    }

    /// Pixel position of `probe`, outside the face along one axis.
    #[must_use]
    pub fn probe_position(&self, probe: Probe) -> (f64, f64) {
        let (du, dv) = probe.step();
        let place = |d: i8| {
            if d == 0 {
                self.probe_rest
            } else {
                self.probe_center + self.probe_offset * f64::from(d)
            }
        };
        (place(du), place(dv))
    }

    #[inline]
    fn in_band(&self, c: f64) -> bool {
        c >= self.band_min && c < self.band_max
    }

    /// Where a coordinate lands when wrapped naively onto the same face.
    ///
    /// Uses a euclidean remainder so negative positions wrap to the far edge.
    #[inline]
    #[must_use]
    pub fn wrap_naive(&self, c: f64) -> f64 {
        (c + 0.5).rem_euclid(f64::from(self.face_width)) - 0.5
    }
}

/// Intermediate values of one probe evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeSample {
    pub face: CubeFace,
    pub probe: Probe,
    /// Probe position on `face`, outside its bounds.
    pub position: (f64, f64),
    /// Where the probe's direction really lands.
    pub reprojected: CubeCoord,
    /// Where a naive modulo wrap would read on `face`.
    pub wrapped: (f64, f64),
    pub code: WrapCode,
}

/// Evaluate a single probe.
#[must_use]
pub fn evaluate_probe(params: &TableParams, face: CubeFace, probe: Probe) -> ProbeSample {
    let (x, y) = params.probe_position(probe);
    let dir = cube_coord_to_direction(x, y, params.face_width, face);
    let reprojected = direction_to_cube_coord(dir, params.face_width);

    let wx = params.wrap_naive(x);
    let wy = params.wrap_naive(y);

    let mut xc = reprojected.x;
    let mut yc = reprojected.y;
    // A coordinate that left the band along U but lands inside it means the
    // neighbour's U runs along our V.
    let swap_uv = params.in_band(xc) != params.in_band(wx);
    if swap_uv {
        std::mem::swap(&mut xc, &mut yc);
    }
    let mirror_u = (xc < params.band_mid) != (wx < params.band_mid);
    let mirror_v = (yc < params.band_mid) != (wy < params.band_mid);

    let code = WrapCode {
        face: reprojected.face,
        mirror_u,
        mirror_v,
        swap_uv,
    };

    tracing::trace!(
        face = %face,
        probe = probe.label(),
        x,
        y,
        to_face = %reprojected.face,
        xc = reprojected.x,
        yc = reprojected.y,
        wx,
        wy,
        code = code.pack(),
        "evaluated probe"
    );

    ProbeSample {
        face,
        probe,
        position: (x, y),
        reprojected,
        wrapped: (wx, wy),
        code,
    }
}

/// Number of entries: six faces, four probes each.
pub const TABLE_LEN: usize = 24;

/// Seam redirection codes, slot `face * 4 + probe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapTable {
    codes: [WrapCode; TABLE_LEN],
}

impl WrapTable {
    /// Build the table from validated parameters.
    pub fn build(params: &TableParams) -> Result<Self, TableError> {
        params.validate()?;
        Ok(Self::synthesize(params))
    }

    /// The table derived from [`TableParams::default`].
    #[must_use]
    pub fn reference() -> Self {
        Self::synthesize(&TableParams::default())
    }

    fn synthesize(params: &TableParams) -> Self {
        let codes = std::array::from_fn(|slot| {
            let face = CubeFace::ALL[slot / 4];
            let probe = Probe::ALL[slot % 4];
            evaluate_probe(params, face, probe).code
        });
        let table = Self { codes };
        tracing::debug!(bytes = ?table.to_bytes(), "synthesized cube wrap table");
        table
    }

    /// Reconstruct a table from its packed form.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; TABLE_LEN]) -> Option<Self> {
        let mut codes = [WrapCode::redirect(CubeFace::PosX); TABLE_LEN];
        for (code, &byte) in codes.iter_mut().zip(bytes) {
            *code = WrapCode::unpack(byte)?;
        }
        Some(Self { codes })
    }

    /// Packed form, as consumed by texture samplers.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; TABLE_LEN] {
        self.codes.map(WrapCode::pack)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, face: CubeFace, probe: Probe) -> WrapCode {
        self.codes[face.index() * 4 + probe.index()]
    }

    /// Lookup by raw slot index.
    #[inline]
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<WrapCode> {
        self.codes.get(slot).copied()
    }

    /// The four codes of one face, in [`Probe::ALL`] order.
    #[must_use]
    pub fn face_codes(&self, face: CubeFace) -> &[WrapCode] {
        let start = face.index() * 4;
        &self.codes[start..start + 4]
    }

    pub fn codes(&self) -> &[WrapCode; TABLE_LEN] {
        &self.codes
    }
}
