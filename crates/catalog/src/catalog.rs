// crates/catalog/src/catalog.rs

use std::sync::Arc;

use film::application::add_like::{AddLikeCommand, AddLikeUseCase};
use film::application::create_film::CreateFilmUseCase;
use film::application::delete_film::{DeleteFilmCommand, DeleteFilmUseCase};
use film::application::get_film::{GetFilmCommand, GetFilmUseCase};
use film::application::get_popular_films::{GetPopularFilmsCommand, GetPopularFilmsUseCase};
use film::application::list_films::ListFilmsUseCase;
use film::application::remove_like::{RemoveLikeCommand, RemoveLikeUseCase};
use film::application::update_film::{UpdateFilmCommand, UpdateFilmUseCase};
use film::domain::entities::Film;
use film::domain::params::{NewFilmParams, PatchFilmParams};
use film::domain::value_objects::FilmId;
use film::infrastructure::memory::{FilmLikesCleaner, InMemoryFilmRepository};
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::telemetry;
use user::application::add_friend::{AddFriendCommand, AddFriendUseCase};
use user::application::create_user::CreateUserUseCase;
use user::application::delete_user::{DeleteUserCommand, DeleteUserUseCase};
use user::application::get_common_friends::{GetCommonFriendsCommand, GetCommonFriendsUseCase};
use user::application::get_user::{GetUserCommand, GetUserUseCase};
use user::application::list_friends::{ListFriendsCommand, ListFriendsUseCase};
use user::application::list_users::ListUsersUseCase;
use user::application::remove_friend::{RemoveFriendCommand, RemoveFriendUseCase};
use user::application::update_user::{UpdateUserCommand, UpdateUserUseCase};
use user::domain::entities::User;
use user::domain::params::{NewUserParams, PatchUserParams};
use user::domain::value_objects::UserId;
use user::infrastructure::memory::InMemoryUserRepository;

use crate::config::CatalogConfig;

/// Point d'entrée du catalogue : tous les use cases, câblés sur des
/// repositories partagés. Une instance = un store indépendant.
pub struct Catalog {
    // --- USERS ---
    create_user: CreateUserUseCase,
    update_user: UpdateUserUseCase,
    get_user: GetUserUseCase,
    list_users: ListUsersUseCase,
    delete_user: DeleteUserUseCase,
    add_friend: AddFriendUseCase,
    remove_friend: RemoveFriendUseCase,
    list_friends: ListFriendsUseCase,
    common_friends: GetCommonFriendsUseCase,

    // --- FILMS ---
    create_film: CreateFilmUseCase,
    update_film: UpdateFilmUseCase,
    get_film: GetFilmUseCase,
    list_films: ListFilmsUseCase,
    delete_film: DeleteFilmUseCase,
    add_like: AddLikeUseCase,
    remove_like: RemoveLikeUseCase,
    popular_films: GetPopularFilmsUseCase,
}

impl Catalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &CatalogConfig, clock: Arc<dyn Clock>) -> Self {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let film_repo = Arc::new(InMemoryFilmRepository::new());
        let likes_cleaner = Arc::new(FilmLikesCleaner::new(film_repo.clone()));

        Self {
            create_user: CreateUserUseCase::new(user_repo.clone(), clock.clone()),
            update_user: UpdateUserUseCase::new(user_repo.clone(), clock),
            get_user: GetUserUseCase::new(user_repo.clone()),
            list_users: ListUsersUseCase::new(user_repo.clone()),
            delete_user: DeleteUserUseCase::new(user_repo.clone(), likes_cleaner),
            add_friend: AddFriendUseCase::new(user_repo.clone()),
            remove_friend: RemoveFriendUseCase::new(user_repo.clone()),
            list_friends: ListFriendsUseCase::new(user_repo.clone()),
            common_friends: GetCommonFriendsUseCase::new(user_repo.clone()),

            create_film: CreateFilmUseCase::new(film_repo.clone()),
            update_film: UpdateFilmUseCase::new(film_repo.clone()),
            get_film: GetFilmUseCase::new(film_repo.clone()),
            list_films: ListFilmsUseCase::new(film_repo.clone()),
            delete_film: DeleteFilmUseCase::new(film_repo.clone()),
            add_like: AddLikeUseCase::new(film_repo.clone(), user_repo.clone()),
            remove_like: RemoveLikeUseCase::new(film_repo.clone(), user_repo),
            popular_films: GetPopularFilmsUseCase::with_default_count(
                film_repo,
                config.default_popular_count,
            ),
        }
    }

    /// Installe le subscriber global avec le filtre de la configuration.
    /// Une seule fois par processus.
    pub fn init_tracing(config: &CatalogConfig) -> Result<()> {
        telemetry::init_tracing(&config.log_filter)
    }

    // ==========================================
    // USERS
    // ==========================================

    pub fn create_user(&self, params: NewUserParams) -> Result<User> {
        self.create_user.execute(params.into())
    }

    pub fn update_user(&self, user_id: UserId, params: PatchUserParams) -> Result<User> {
        self.update_user.execute(UpdateUserCommand { user_id, params })
    }

    pub fn get_user(&self, user_id: UserId) -> Result<User> {
        self.get_user.execute(GetUserCommand { user_id })
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.list_users.execute()
    }

    pub fn delete_user(&self, user_id: UserId) -> Result<bool> {
        self.delete_user.execute(DeleteUserCommand { user_id })
    }

    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> Result<()> {
        self.add_friend.execute(AddFriendCommand { user_id, friend_id })
    }

    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> Result<()> {
        self.remove_friend.execute(RemoveFriendCommand { user_id, friend_id })
    }

    pub fn list_friends(&self, user_id: UserId) -> Result<Vec<User>> {
        self.list_friends.execute(ListFriendsCommand { user_id })
    }

    pub fn common_friends(&self, user_id: UserId, other_id: UserId) -> Result<Vec<User>> {
        self.common_friends
            .execute(GetCommonFriendsCommand { user_id, other_id })
    }

    // ==========================================
    // FILMS
    // ==========================================

    pub fn create_film(&self, params: NewFilmParams) -> Result<Film> {
        self.create_film.execute(params.into())
    }

    pub fn update_film(&self, film_id: FilmId, params: PatchFilmParams) -> Result<Film> {
        self.update_film.execute(UpdateFilmCommand { film_id, params })
    }

    pub fn get_film(&self, film_id: FilmId) -> Result<Film> {
        self.get_film.execute(GetFilmCommand { film_id })
    }

    pub fn list_films(&self) -> Result<Vec<Film>> {
        self.list_films.execute()
    }

    pub fn delete_film(&self, film_id: FilmId) -> Result<bool> {
        self.delete_film.execute(DeleteFilmCommand { film_id })
    }

    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        self.add_like.execute(AddLikeCommand { film_id, user_id })
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        self.remove_like.execute(RemoveLikeCommand { film_id, user_id })
    }

    /// `None` : nombre par défaut de la configuration
    pub fn popular_films(&self, count: Option<usize>) -> Result<Vec<Film>> {
        self.popular_films.execute(GetPopularFilmsCommand { count })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
