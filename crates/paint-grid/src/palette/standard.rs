//! The standard paint palette.
//!
//! Generated at build time from `data/palette.tsv` by build.rs.

include!(concat!(env!("OUT_DIR"), "/standard_palette.rs"));
