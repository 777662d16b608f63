//! Fixed values shared by the resolver, the session model and the web shell.

/// Number of counties on the island; reaching it completes a session.
pub const COUNTY_COUNT: usize = 32;

/// Asset path (relative to the site root) of the county feature collection.
pub const DATASET_ASSET: &str = "assets/data/ireland-counties.geojson";

/// Spellings accepted for the county with dual naming.
pub const DERRY_ALIASES: &[&str] = &[
    "derry",
    "londonderry",
    "london-derry",
    "london derry",
    "slash city",
];

/// Comparison string every entry of [`DERRY_ALIASES`] collapses to. Matches the
/// lowercased partitioned name in the dataset.
pub const DERRY_CANONICAL: &str = "derry - londonderry";
