//! Writing the generated plugin source tree.
//!
//! The layout matches the standard CTRPluginFramework plugin template:
//!
//! ```text
//! <output_dir>/
//! ├── Includes/
//! │   └── draw_image.hpp     # fixed declaration header
//! └── Sources/
//!     ├── draw_image.cpp     # emitted drawing routine
//!     └── cheats.cpp         # fixed stub
//! ```
//!
//! An existing output directory is removed and rebuilt from scratch, so a
//! stale tree from a previous run can never leak into the new one.

use crate::emit::{CHEATS_STUB, HEADER_SOURCE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const INCLUDES_DIR: &str = "Includes";
pub const SOURCES_DIR: &str = "Sources";
pub const HEADER_FILE: &str = "draw_image.hpp";
pub const DRAW_FILE: &str = "draw_image.cpp";
pub const CHEATS_FILE: &str = "cheats.cpp";

/// Write the plugin tree, replacing `output_dir` wholesale if it exists.
///
/// Returns the written file paths in display order.
pub fn write_plugin_tree(output_dir: &Path, draw_source: &str) -> io::Result<Vec<PathBuf>> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }

    let includes = output_dir.join(INCLUDES_DIR);
    let sources = output_dir.join(SOURCES_DIR);
    fs::create_dir_all(&includes)?;
    fs::create_dir_all(&sources)?;

    let header = includes.join(HEADER_FILE);
    let draw = sources.join(DRAW_FILE);
    let cheats = sources.join(CHEATS_FILE);

    fs::write(&header, HEADER_SOURCE)?;
    fs::write(&draw, draw_source)?;
    fs::write(&cheats, CHEATS_STUB)?;

    Ok(vec![header, draw, cheats])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_three_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("generated");

        let files = write_plugin_tree(&out, "// draw").unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0], out.join("Includes/draw_image.hpp"));
        assert_eq!(files[1], out.join("Sources/draw_image.cpp"));
        assert_eq!(files[2], out.join("Sources/cheats.cpp"));
        for file in &files {
            assert!(file.exists(), "{} should exist", file.display());
        }
    }

    #[test]
    fn draw_file_carries_emitted_source() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("generated");

        write_plugin_tree(&out, "// the emitted routine").unwrap();

        let written = fs::read_to_string(out.join("Sources/draw_image.cpp")).unwrap();
        assert_eq!(written, "// the emitted routine");
    }

    #[test]
    fn fixed_files_carry_boilerplate() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("generated");

        write_plugin_tree(&out, "").unwrap();

        let header = fs::read_to_string(out.join("Includes/draw_image.hpp")).unwrap();
        assert_eq!(header, HEADER_SOURCE);
        let cheats = fs::read_to_string(out.join("Sources/cheats.cpp")).unwrap();
        assert_eq!(cheats, CHEATS_STUB);
    }

    #[test]
    fn existing_output_dir_is_replaced() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("generated");
        fs::create_dir_all(out.join("Sources")).unwrap();
        fs::write(out.join("Sources/stale.cpp"), "old").unwrap();

        write_plugin_tree(&out, "// new").unwrap();

        assert!(!out.join("Sources/stale.cpp").exists());
        assert!(out.join("Sources/draw_image.cpp").exists());
    }
}
