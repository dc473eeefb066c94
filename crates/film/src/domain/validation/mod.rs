mod film_validator;

pub use film_validator::{FilmChanges, FilmDraft, FilmValidator};
