//! Configuration constants and defaults

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "namegen.toml";

/// Environment variable holding the bearer token for HTTP sources
pub const ACCESS_TOKEN_ENV: &str = "NAMEGEN_ACCESS_TOKEN";

/// Source defaults
pub mod source {
    /// Construction template object or file
    pub const TEMPLATE: &str = "nameConstruction.txt";

    /// Tab-separated word table object or file
    pub const WORD_TABLE: &str = "names.tsv";
}

/// Generation defaults
pub mod generate {
    /// Names produced when a batch arrives without requests
    pub const DEFAULT_COUNT: usize = 20;

    /// Share of synthetic requests drawn as female
    pub const FEMALE_SHARE: f64 = 0.4;

    /// Share of synthetic requests drawn as male
    pub const MALE_SHARE: f64 = 0.4;
}
