use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const PALETTE_FILE: &str = "data/palette.tsv";

/// Parse a `#RRGGBB` hex string into bytes.
fn parse_hex(hex: &str, line: usize) -> [u8; 3] {
    let digits = hex.trim().trim_start_matches('#');
    assert!(
        digits.len() == 6,
        "{PALETTE_FILE}:{line}: expected #RRGGBB, got {hex:?}"
    );
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .unwrap_or_else(|e| panic!("{PALETTE_FILE}:{line}: invalid hex {hex:?}: {e}"))
    };
    [channel(0..2), channel(2..4), channel(4..6)]
}

fn main() {
    let source = fs::read_to_string(PALETTE_FILE).unwrap();

    let mut version: Option<u32> = None;
    let mut entries: Vec<(String, [u8; 3])> = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(v) = comment.trim().strip_prefix("version:") {
                version = Some(v.trim().parse().unwrap());
            }
            continue;
        }
        let (name, hex) = line
            .split_once('\t')
            .unwrap_or_else(|| panic!("{PALETTE_FILE}:{}: expected NAME<TAB>#RRGGBB", i + 1));
        entries.push((name.trim().to_string(), parse_hex(hex, i + 1)));
    }

    let version = version.expect("palette.tsv is missing a '# version: N' line");
    assert!(!entries.is_empty(), "palette.tsv has no colors");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("standard_palette.rs");
    let mut file = File::create(&dest_path).unwrap();

    writeln!(file, "/// Version of the standard palette data file.").unwrap();
    writeln!(file, "pub const STANDARD_PALETTE_VERSION: u32 = {version};").unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "/// Standard palette entries as (name, [r, g, b]), in paint-number order."
    )
    .unwrap();
    writeln!(
        file,
        "pub static STANDARD_COLORS: [(&str, [u8; 3]); {}] = [",
        entries.len()
    )
    .unwrap();
    for (name, [r, g, b]) in &entries {
        writeln!(file, "    ({name:?}, [{r}, {g}, {b}]),").unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={PALETTE_FILE}");
}
