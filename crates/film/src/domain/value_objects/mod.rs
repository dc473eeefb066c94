mod description;
mod film_duration;
mod film_id;
mod film_name;
mod like_set;
mod release_date;

pub use description::Description;
pub use film_duration::FilmDuration;
pub use film_id::FilmId;
pub use film_name::FilmName;
pub use like_set::LikeSet;
pub use release_date::ReleaseDate;
