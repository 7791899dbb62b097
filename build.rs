#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_record_book_number(&outdir_path, "default_record_book_number.rs")?;
    Ok(())
}

/// Create default_record_book_number.rs, containing definition of
/// constant DEFAULT_RECORD_BOOK_NUMBER
fn write_default_record_book_number(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let default_number = env::var("RUST_DIGITRING_RECORD_BOOK_NUMBER")
        .map(|s| s.parse::<u32>().expect("$RUST_DIGITRING_RECORD_BOOK_NUMBER must be a non-negative integer"))
        .unwrap_or(3404u32);

    let rs_path = outdir_path.join(filename);

    let contents = format!("const DEFAULT_RECORD_BOOK_NUMBER: u32 = {default_number};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&rs_path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut rs_file = File::create(&rs_path)
                .expect("Could not create default_record_book_number.rs");
            write!(rs_file, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_DIGITRING_RECORD_BOOK_NUMBER");

    Ok(())
}
