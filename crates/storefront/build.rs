//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so pages can link a URL that is safe to
//! cache forever. The hash is exposed to the crate as `CSS_HASH`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the SHA-256 kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let css_dir = manifest_dir.join("static/css");
    let stylesheet = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", stylesheet.display());

    let hash = match fingerprint(&stylesheet, &css_dir.join("derived")) {
        Ok(hash) => hash,
        Err(e) => {
            // Templates fall back to the unhashed stylesheet
            println!("cargo:warning=CSS fingerprinting skipped: {e}");
            String::new()
        }
    };

    println!("cargo:rustc-env=CSS_HASH={hash}");
}

/// Copy `stylesheet` to `derived/main.<hash>.css`, removing copies of older
/// versions, and return the hash.
fn fingerprint(stylesheet: &Path, derived: &Path) -> io::Result<String> {
    let content = fs::read(stylesheet)?;
    let digest = format!("{:x}", Sha256::digest(&content));
    let hash = digest.get(..HASH_LEN).unwrap_or(&digest).to_string();

    fs::create_dir_all(derived)?;
    let target = format!("main.{hash}.css");

    for entry in fs::read_dir(derived)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("main.") && name.ends_with(".css") && name != target {
            fs::remove_file(entry.path())?;
        }
    }

    fs::copy(stylesheet, derived.join(&target))?;
    Ok(hash)
}
