// crates/film/src/application/add_like/add_like_command.rs

use user::domain::value_objects::UserId;

use crate::domain::value_objects::FilmId;

#[derive(Debug, Clone, Copy)]
pub struct AddLikeCommand {
    pub film_id: FilmId,
    pub user_id: UserId,
}
