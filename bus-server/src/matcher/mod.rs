//! Destination matching.
//!
//! Finds the catalog route that best matches a free-text destination
//! query. Queries arrive noisy: misspelled place names, extra words
//! ("bus to tirupati"), or machine-translated phrasing, so matching is
//! fuzzy rather than exact.

mod similarity;

pub use similarity::token_set_ratio;

use crate::catalog::Route;

/// Minimum score a route must *exceed* to count as a match.
///
/// Tunable. Carried over from the deployed service; scores of exactly
/// this value are rejected.
pub const MATCH_THRESHOLD: u8 = 60;

/// Find the best-matching route for a destination query.
///
/// Scans the whole catalog, scoring each route name against the query
/// with [`token_set_ratio`]. The best route is returned only if its
/// score exceeds [`MATCH_THRESHOLD`]; otherwise `None` (an empty
/// catalog always yields `None`).
///
/// Ties keep the earlier catalog entry: the running best is replaced
/// only on a strict score improvement, so results are deterministic
/// for catalogs with duplicate or equivalent names.
pub fn find_best_match<'a>(query: &str, routes: &'a [Route]) -> Option<&'a Route> {
    let mut best: Option<&Route> = None;
    let mut highest_score = 0u8;

    for route in routes {
        let score = token_set_ratio(query, &route.name);
        if score > highest_score {
            highest_score = score;
            best = Some(route);
        }
    }

    if highest_score > MATCH_THRESHOLD {
        best
    } else {
        None
    }
}
