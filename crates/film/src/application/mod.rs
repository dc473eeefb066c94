pub mod add_like;
pub mod create_film;
pub mod delete_film;
pub mod get_film;
pub mod get_popular_films;
pub mod list_films;
pub mod remove_like;
pub mod update_film;
