//! Generates `include/ffisamples.h` from the `extern "C"` exports.

use std::env;
use std::path::PathBuf;

const HEADER: &str = "ffisamples.h";

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let include_dir = PathBuf::from(&crate_dir).join("include");
    std::fs::create_dir_all(&include_dir).unwrap();

    // cbindgen.toml carries enum naming and exported types; the guard,
    // includes and dependency parsing are pinned here so a missing config
    // still yields a usable header.
    let config = cbindgen::Config::from_file(PathBuf::from(&crate_dir).join("cbindgen.toml"))
        .unwrap_or_default();

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .with_include_guard("FFISAMPLES_H")
        .with_no_includes()
        .with_sys_include("stdint.h")
        .with_sys_include("stddef.h")
        .with_parse_deps(false)
        .with_documentation(true)
        .generate()
        .expect("Unable to generate ffisamples.h")
        .write_to_file(include_dir.join(HEADER));

    println!("cargo:rerun-if-changed=src/ffi/");
    println!("cargo:rerun-if-changed=src/mathlib/point.rs");
    println!("cargo:rerun-if-changed=src/sample/types.rs");
    println!("cargo:rerun-if-changed=src/sample/vec2.rs");
    println!("cargo:rerun-if-changed=src/sample/record.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
