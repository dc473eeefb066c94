mod birth_date;
mod display_name;
mod email;
mod login;
mod user_id;

pub use birth_date::BirthDate;
pub use display_name::DisplayName;
pub use email::Email;
pub use login::Login;
pub use user_id::UserId;
