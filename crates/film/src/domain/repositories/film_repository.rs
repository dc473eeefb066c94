// crates/film/src/domain/repositories/film_repository.rs

use shared_kernel::errors::Result;
use user::domain::value_objects::UserId;

use crate::domain::entities::Film;
use crate::domain::validation::FilmDraft;
use crate::domain::value_objects::FilmId;

/// Port de stockage des films et de leurs likes.
///
/// Le repository ne vérifie jamais l'existence des utilisateurs : c'est au
/// use case de garantir l'utilisateur (verrou utilisateur tenu) avant d'appeler
/// `add_like`.
pub trait FilmRepository: Send + Sync {
    fn create_film(&self, draft: FilmDraft) -> Result<Film>;

    fn find_film_by_id(&self, id: FilmId) -> Result<Option<Film>>;

    /// Tous les films, dans l'ordre d'insertion
    fn list_films(&self) -> Result<Vec<Film>>;

    /// Lecture-modification-écriture atomique, `NotFound` avant `apply`
    fn update_film(
        &self,
        id: FilmId,
        apply: &mut dyn FnMut(&mut Film) -> Result<()>,
    ) -> Result<Film>;

    /// Retire le film et son registre de likes. `false` si absent.
    fn delete_film(&self, id: FilmId) -> Result<bool>;

    /// `NotFound` si le film n'existe pas. `false` si le like existait déjà.
    fn add_like(&self, film_id: FilmId, user_id: UserId) -> Result<bool>;

    /// `NotFound` si le film n'existe pas. `false` si aucun like n'existait.
    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> Result<bool>;

    /// Purge tous les likes d'un utilisateur. Retourne le nombre de films touchés.
    fn remove_likes_by_user(&self, user_id: UserId) -> Result<usize>;
}
