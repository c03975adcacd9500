mod load;
mod models;
mod snapshot;
mod validation;

pub use load::{load_snapshot, parse_snapshot};
pub use models::{
    Album, AlbumId, Artist, ArtistId, CatalogTree, Item, ItemId, MediaType, Release, ReleaseId,
};
pub use snapshot::{CatalogSnapshot, ReleaseAncestors, SnapshotBuildResult};
pub use validation::{check_tree, Problem as SnapshotProblem};
