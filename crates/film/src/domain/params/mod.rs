mod new_film_params;
mod patch_film_params;

pub use new_film_params::NewFilmParams;
pub use patch_film_params::PatchFilmParams;
