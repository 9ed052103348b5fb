//! The route record type.

use serde::Deserialize;

/// A single bus route and its published timetable.
///
/// Maps directly to one record of the catalog JSON file. Nothing here
/// is validated beyond field presence: names are free text and
/// departure times are opaque published strings, shown to the user in
/// the order they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// Destination name, e.g. "Tirupati". Matched case-insensitively.
    #[serde(rename = "route")]
    pub name: String,

    /// Departure times in timetable order.
    pub departure_times: Vec<String>,

    /// Short descriptive label, e.g. "Express".
    pub bus_type: String,
}
