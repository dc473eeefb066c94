// crates/film/src/application/get_popular_films/get_popular_films_command.rs

use serde::Deserialize;

/// `count` absent : la valeur par défaut du use case s'applique
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GetPopularFilmsCommand {
    pub count: Option<usize>,
}

impl GetPopularFilmsCommand {
    pub fn top(count: usize) -> Self {
        Self { count: Some(count) }
    }
}
