mod popularity;

pub use popularity::{rank_by_popularity, DEFAULT_POPULAR_COUNT};
