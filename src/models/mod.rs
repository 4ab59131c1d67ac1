mod movie;
mod snapshot;
mod user_profile;

pub use movie::{Catalog, Movie, MovieId};
pub use snapshot::Snapshot;
pub use user_profile::UserProfile;
