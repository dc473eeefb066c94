mod friend_graph;

pub use friend_graph::FriendGraph;
