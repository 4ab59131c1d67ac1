use crate::models::{Catalog, Movie};

/// Flattens the id -> title catalog into the browsing list, ordered by title.
///
/// Titles compare by Unicode code point, ascending. Equal titles fall back
/// to id order so the output is reproducible even though the input map is
/// unordered.
pub fn normalize_catalog(catalog: &Catalog) -> Vec<Movie> {
    let mut movies: Vec<Movie> = catalog
        .iter()
        .map(|(id, title)| Movie {
            id: *id,
            title: title.clone(),
        })
        .collect();

    movies.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    movies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn catalog(entries: &[(u64, &str)]) -> Catalog {
        entries
            .iter()
            .map(|(id, title)| (MovieId(*id), title.to_string()))
            .collect()
    }

    #[test]
    fn test_sorts_by_title() {
        let movies = normalize_catalog(&catalog(&[(3, "Zeta"), (1, "Alpha"), (2, "Mid")]));

        assert_eq!(
            movies,
            vec![
                Movie {
                    id: MovieId(1),
                    title: "Alpha".to_string()
                },
                Movie {
                    id: MovieId(2),
                    title: "Mid".to_string()
                },
                Movie {
                    id: MovieId(3),
                    title: "Zeta".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_preserves_entry_count_and_order_invariant() {
        let input = catalog(&[
            (9, "Braveheart (1995)"),
            (23, "Pulp Fiction (1994)"),
            (1, "Toy Story (1995)"),
            (20, "Star Wars (1977)"),
            (18, "Clerks (1994)"),
        ]);

        let movies = normalize_catalog(&input);

        assert_eq!(movies.len(), input.len());
        for pair in movies.windows(2) {
            assert!(pair[0].title <= pair[1].title);
        }
    }

    #[test]
    fn test_equal_titles_order_by_id() {
        let movies = normalize_catalog(&catalog(&[(7, "King Kong"), (2, "King Kong")]));

        let ids: Vec<MovieId> = movies.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MovieId(2), MovieId(7)]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(normalize_catalog(&Catalog::new()).is_empty());
    }
}
