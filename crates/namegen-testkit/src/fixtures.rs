//! Sample template and word table fixtures

use std::path::Path;

/// Template covering every construct, authored across lines with CRLF
pub const SAMPLE_TEMPLATE: &str = "[3 $FirstName \" \" $Surname,\r\n\
     1 -$Title \" of the \" $Place+]\r\n\
     {0.5 \", \" %20 \" of \" @REALM}\r\n";

/// Word table with female, male and shared columns
pub const SAMPLE_WORD_TABLE: &str = "FirstName@female\tFirstName@male\tSurname\tTitle\tPlace\r\n\
     Alice\tBob\tSmith\tlady\tnorth\r\n\
     Carol\tDave\tJones\tlord\tsea\r\n";

/// Substitution used by [`SAMPLE_TEMPLATE`]
pub const SAMPLE_REALM: (&str, &str) = ("REALM", "Eagle");

/// Write `nameConstruction.txt`, `names.tsv` and a `namegen.toml` into `dir`
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_sample_project(dir: &Path) {
    std::fs::write(dir.join("nameConstruction.txt"), SAMPLE_TEMPLATE)
        .expect("Failed to write sample template");
    std::fs::write(dir.join("names.tsv"), SAMPLE_WORD_TABLE)
        .expect("Failed to write sample word table");
    let config = format!(
        "[source]\nkind = \"file\"\n\n[substitutions]\n{} = \"{}\"\n",
        SAMPLE_REALM.0, SAMPLE_REALM.1
    );
    std::fs::write(dir.join("namegen.toml"), config).expect("Failed to write sample config");
}
