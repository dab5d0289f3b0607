//! Packed seam redirection codes.

use cubewrap_cubemap::CubeFace;

/// Bits of a packed code that hold the destination face.
pub const FACE_MASK: u8 = 0x1F;
/// Mirror the U axis (`x = !x & mask`).
pub const MIRROR_U: u8 = 0x20;
/// Mirror the V axis (`y = !y & mask`).
pub const MIRROR_V: u8 = 0x40;
/// Swap U and V after mirroring.
pub const SWAP_UV: u8 = 0x80;

/// Where a sample that crossed a face edge must be read from, and how its
/// coordinates are reoriented on the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapCode {
    /// Face the sample is redirected to.
    pub face: CubeFace,
    pub mirror_u: bool,
    pub mirror_v: bool,
    pub swap_uv: bool,
}

impl WrapCode {
    /// Plain redirect with no reorientation.
    #[must_use]
    pub fn redirect(face: CubeFace) -> Self {
        Self {
            face,
            mirror_u: false,
            mirror_v: false,
            swap_uv: false,
        }
    }

    /// Byte form: `face + mirror_u * 0x20 + mirror_v * 0x40 + swap_uv * 0x80`.
    #[must_use]
    pub fn pack(self) -> u8 {
        let mut byte = self.face as u8;
        if self.mirror_u {
            byte |= MIRROR_U;
        }
        if self.mirror_v {
            byte |= MIRROR_V;
        }
        if self.swap_uv {
            byte |= SWAP_UV;
        }
        byte
    }

    /// Decode a byte produced by [`pack`](Self::pack). Returns `None` when the
    /// face bits do not name one of the six faces.
    #[must_use]
    pub fn unpack(byte: u8) -> Option<Self> {
        let face = CubeFace::from_index(usize::from(byte & FACE_MASK))?;
        Some(Self {
            face,
            mirror_u: byte & MIRROR_U != 0,
            mirror_v: byte & MIRROR_V != 0,
            swap_uv: byte & SWAP_UV != 0,
        })
    }

    /// Apply the reorientation to texel coordinates on a face of width
    /// `mask + 1`. Out-of-range inputs are folded back with the mask.
    #[must_use]
    pub fn apply(self, x: i32, y: i32, mask: i32) -> (i32, i32) {
        let x = (if self.mirror_u { !x } else { x }) & mask;
        let y = (if self.mirror_v { !y } else { y }) & mask;
        if self.swap_uv { (y, x) } else { (x, y) }
    }
}

impl From<WrapCode> for u8 {
    fn from(code: WrapCode) -> u8 {
        code.pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let code = WrapCode {
            face: CubeFace::NegY,
            mirror_u: true,
            mirror_v: false,
            swap_uv: true,
        };
        assert_eq!(code.pack(), 0xA3);
        assert_eq!(WrapCode::redirect(CubeFace::NegZ).pack(), 0x05);
    }

    #[test]
    fn test_unpack_known_bytes() {
        let code = WrapCode::unpack(0x65).unwrap();
        assert_eq!(code.face, CubeFace::NegZ);
        assert!(code.mirror_u);
        assert!(code.mirror_v);
        assert!(!code.swap_uv);

        let code = WrapCode::unpack(0xC0).unwrap();
        assert_eq!(code.face, CubeFace::PosX);
        assert!(!code.mirror_u);
        assert!(code.mirror_v);
        assert!(code.swap_uv);
    }

    #[test]
    fn test_unpack_rejects_invalid_face() {
        assert_eq!(WrapCode::unpack(0x06), None);
        assert_eq!(WrapCode::unpack(0x1F), None);
        assert_eq!(WrapCode::unpack(0xE7), None);
    }

    #[test]
    fn test_every_valid_byte_survives_unpack_pack() {
        for byte in 0..=u8::MAX {
            if let Some(code) = WrapCode::unpack(byte) {
                assert_eq!(code.pack(), byte);
            } else {
                assert!(byte & FACE_MASK > 5, "byte {byte:#04x} rejected");
            }
        }
    }

    #[test]
    fn test_apply_mirror_folds_overflow() {
        // One texel past either edge of a 256 wide face.
        let mirror = WrapCode {
            face: CubeFace::PosX,
            mirror_u: true,
            mirror_v: false,
            swap_uv: false,
        };
        assert_eq!(mirror.apply(256, 10, 255), (255, 10));
        assert_eq!(mirror.apply(-1, 10, 255), (0, 10));

        let plain = WrapCode::redirect(CubeFace::PosX);
        assert_eq!(plain.apply(256, 10, 255), (0, 10));
        assert_eq!(plain.apply(-1, 10, 255), (255, 10));
    }

    #[test]
    fn test_apply_swaps_after_mirroring() {
        let code = WrapCode {
            face: CubeFace::PosY,
            mirror_u: false,
            mirror_v: true,
            swap_uv: true,
        };
        // y = 3 mirrors to 252, then the axes swap.
        assert_eq!(code.apply(256, 3, 255), (252, 0));
    }
}
