mod film;

pub use film::Film;
