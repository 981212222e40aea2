pub mod game;

pub use game::collections;
pub use game::CollectionsPlugin;
