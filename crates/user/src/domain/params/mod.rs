mod new_user_params;
mod patch_user_params;

pub use new_user_params::NewUserParams;
pub use patch_user_params::PatchUserParams;
