pub mod bibtex;
pub mod cassi;

pub use bibtex::{parse_file, parse_str};
pub use cassi::load_abbrev_table;
