use std::collections::HashSet;

use indexmap::IndexMap;

use crate::models::{Catalog, Movie, MovieId, UserProfile};

/// Upper bound on partial-match profiles considered and on movies returned.
const MAX_RECOMMENDATIONS: usize = 10;

/// One corpus profile scored against the current selection.
///
/// Built fresh per request, discarded with it.
#[derive(Debug)]
struct MatchRecord<'a> {
    profile: &'a UserProfile,
    match_count: usize,
}

/// Recommends up to ten movies the user has not selected, best first.
///
/// Profiles containing every selected movie (total matches) outrank any
/// amount of partial overlap: when at least one exists, only total matches
/// contribute. Otherwise the ten profiles with the largest nonzero overlap
/// do. Candidates are the contributors' likes minus the selection, ranked by
/// how many contributors share them; equal counts keep first-occurrence
/// order. An empty selection yields an empty result.
pub fn recommend(
    selection: &HashSet<MovieId>,
    corpus: &[UserProfile],
    catalog: &Catalog,
) -> Vec<Movie> {
    if selection.is_empty() {
        return Vec::new();
    }

    // Score every profile, then stable-sort so ties keep corpus order.
    let mut records: Vec<MatchRecord> = corpus
        .iter()
        .map(|profile| MatchRecord {
            profile,
            match_count: profile.overlap_with(selection),
        })
        .collect();
    records.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    let total_matches: Vec<&MatchRecord> = records
        .iter()
        .filter(|record| record.match_count == selection.len())
        .collect();
    let best_matches: Vec<&MatchRecord> = if total_matches.is_empty() {
        records
            .iter()
            .filter(|record| record.match_count > 0)
            .take(MAX_RECOMMENDATIONS)
            .collect()
    } else {
        total_matches
    };

    // Count every movie the contributors liked beyond the selection. The
    // insertion-ordered map pins the tie-break: first seen, first ranked.
    let mut delta_counts: IndexMap<MovieId, usize> = IndexMap::new();
    for record in &best_matches {
        for movie_id in &record.profile.liked {
            if !selection.contains(movie_id) {
                *delta_counts.entry(*movie_id).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(MovieId, usize)> = delta_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    // Ids the catalog does not know are dropped before the cut, so one bad
    // corpus row cannot shorten the list.
    ranked
        .into_iter()
        .filter_map(|(movie_id, _)| match catalog.get(&movie_id) {
            Some(title) => Some(Movie {
                id: movie_id,
                title: title.clone(),
            }),
            None => {
                tracing::warn!(
                    movie_id = %movie_id,
                    "Corpus references a movie missing from the catalog; skipping"
                );
                None
            }
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
