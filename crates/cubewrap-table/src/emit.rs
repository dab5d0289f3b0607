//! Rendering of the table as a C++ constant array.

use std::fmt::Write;

use cubewrap_cubemap::CubeFace;

use crate::synthesis::{Probe, WrapTable};

/// Symbol the texture decoder declares the table under.
pub const DEFAULT_SYMBOL: &str = "DDSTexture16::cubeWrapTable";

/// Format `table` as a `const unsigned char` array definition.
///
/// One line per face, entries in `+U, -U, +V, -V` order with an extra space
/// between the U and V pairs, and the face named in a trailing comment.
#[must_use]
pub fn render_table(table: &WrapTable, symbol: &str) -> String {
    let bytes = table.to_bytes();
    let mut out = String::with_capacity(512);

    let _ = writeln!(out, "const unsigned char {symbol}[{}] =", bytes.len());
    out.push_str("{\n");
    out.push_str("  // value = new_face + mirror_U * 0x20 + mirror_V * 0x40 + swap_UV * 0x80\n");
    let _ = writeln!(
        out,
        "  // {}   {}     {}    {}",
        Probe::PosU.label(),
        Probe::NegU.label(),
        Probe::PosV.label(),
        Probe::NegV.label()
    );

    let last = bytes.len() - 1;
    for face in CubeFace::ALL {
        for probe in Probe::ALL {
            let slot = face.index() * 4 + probe.index();
            if probe.index() % 2 == 0 {
                out.push(' ');
            }
            let _ = write!(out, " 0x{:02X}", bytes[slot]);
            out.push(if slot == last { ' ' } else { ',' });
        }
        let _ = writeln!(out, "      // face {} ({})", face.index(), face.name());
    }
    out.push_str("};\n");
    out
}
