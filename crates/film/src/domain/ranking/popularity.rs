// crates/film/src/domain/ranking/popularity.rs

use std::cmp::Reverse;

use crate::domain::entities::Film;

/// Nombre de films retournés quand l'appelant ne précise rien
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// Trie par nombre de likes décroissant puis tronque à `count`.
///
/// Le tri est stable : à égalité, l'ordre d'entrée (ordre d'insertion du
/// store, donc ordre des ids) est conservé.
pub fn rank_by_popularity(mut films: Vec<Film>, count: usize) -> Vec<Film> {
    films.sort_by_key(|film| Reverse(film.like_count()));
    films.truncate(count);
    films
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FilmDuration, FilmId, FilmName};
    use user::domain::value_objects::UserId;

    fn film(id: u64, likes: u64) -> Film {
        let mut film = Film::builder(
            FilmId::new_unchecked(id),
            FilmName::from_raw(format!("film {id}")),
            FilmDuration::from_raw(90),
        )
        .build();
        for user in 1..=likes {
            film.add_like(UserId::new_unchecked(user));
        }
        film
    }

    fn ids(films: &[Film]) -> Vec<u64> {
        films.iter().map(|f| f.id().as_u64()).collect()
    }

    #[test]
    fn test_most_liked_first() {
        let ranked = rank_by_popularity(vec![film(1, 2), film(2, 0)], 10);
        assert_eq!(ids(&ranked), vec![1, 2]);

        let ranked = rank_by_popularity(vec![film(1, 0), film(2, 3), film(3, 1)], 10);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let ranked = rank_by_popularity(vec![film(1, 1), film(2, 2), film(3, 1), film(4, 2)], 10);
        assert_eq!(ids(&ranked), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_truncates_to_count() {
        let films = vec![film(1, 0), film(2, 5), film(3, 4)];

        assert_eq!(ids(&rank_by_popularity(films.clone(), 1)), vec![2]);
        assert!(rank_by_popularity(films, 0).is_empty());
    }

    #[test]
    fn test_count_larger_than_catalog() {
        assert_eq!(rank_by_popularity(vec![film(1, 0)], 100).len(), 1);
        assert!(rank_by_popularity(Vec::new(), 10).is_empty());
    }
}
