//! Structural properties of the synthesized seam table.

use std::collections::BTreeSet;
use std::f64::consts::FRAC_PI_2;

use cubewrap_cubemap::CubeFace;
use cubewrap_table::{FACE_MASK, MIRROR_U, MIRROR_V, Probe, SWAP_UV, TableParams, WrapTable};
use glam::DMat3;

fn neighbors(table: &WrapTable, face: CubeFace) -> BTreeSet<CubeFace> {
    table.face_codes(face).iter().map(|c| c.face).collect()
}

#[test]
fn first_face_matches_recorded_bytes() {
    let bytes = WrapTable::reference().to_bytes();
    assert_eq!(bytes[..4], [0x05, 0x04, 0xC3, 0xA2]);
}

#[test]
fn regeneration_is_byte_identical() {
    let params = TableParams::default();
    let a = WrapTable::build(&params).unwrap().to_bytes();
    let b = WrapTable::build(&params).unwrap().to_bytes();
    assert_eq!(a, b);
}

#[test]
fn every_face_is_a_destination() {
    let bytes = WrapTable::reference().to_bytes();
    let seen: BTreeSet<u8> = bytes.iter().map(|b| b & FACE_MASK).collect();
    assert_eq!(seen, (0..6).collect());
}

#[test]
fn face_bits_are_valid() {
    for byte in WrapTable::reference().to_bytes() {
        let face = byte & !(MIRROR_U | MIRROR_V | SWAP_UV);
        assert!(face < 6, "byte {byte:#04x}");
    }
}

#[test]
fn each_face_reaches_its_four_side_neighbors() {
    let table = WrapTable::reference();
    for face in CubeFace::ALL {
        let n = neighbors(&table, face);
        assert_eq!(n.len(), 4, "{face:?} -> {n:?}");
        assert!(!n.contains(&face));
        assert!(!n.contains(&face.opposite()));
    }
}

#[test]
fn adjacency_is_mutual() {
    let table = WrapTable::reference();
    for face in CubeFace::ALL {
        for other in neighbors(&table, face) {
            assert!(
                neighbors(&table, other).contains(&face),
                "{face:?} reaches {other:?} but not the reverse"
            );
        }
    }
}

#[test]
fn neighbor_relation_is_invariant_under_cube_rotations() {
    let table = WrapTable::reference();
    let rotations = [
        DMat3::from_rotation_x(FRAC_PI_2),
        DMat3::from_rotation_y(FRAC_PI_2),
        DMat3::from_rotation_z(FRAC_PI_2),
    ];
    for rot in rotations {
        let permute = |f: CubeFace| CubeFace::from_normal(rot * f.normal());
        for face in CubeFace::ALL {
            let rotated: BTreeSet<CubeFace> =
                neighbors(&table, face).into_iter().map(permute).collect();
            assert_eq!(rotated, neighbors(&table, permute(face)), "{face:?}");
        }
    }
}

#[test]
fn opposite_edges_lead_to_opposite_faces() {
    let table = WrapTable::reference();
    for face in CubeFace::ALL {
        let pos_u = table.get(face, Probe::PosU).face;
        let neg_u = table.get(face, Probe::NegU).face;
        let pos_v = table.get(face, Probe::PosV).face;
        let neg_v = table.get(face, Probe::NegV).face;
        assert_eq!(pos_u.opposite(), neg_u, "{face:?}");
        assert_eq!(pos_v.opposite(), neg_v, "{face:?}");
    }
}
