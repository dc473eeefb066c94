mod film_builder;

pub use film_builder::FilmBuilder;
