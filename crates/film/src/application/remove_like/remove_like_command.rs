// crates/film/src/application/remove_like/remove_like_command.rs

use user::domain::value_objects::UserId;

use crate::domain::value_objects::FilmId;

#[derive(Debug, Clone, Copy)]
pub struct RemoveLikeCommand {
    pub film_id: FilmId,
    pub user_id: UserId,
}
