mod edit;
mod models;
mod resolver;
mod submission;

pub use edit::{EditError, ListingEdit};
pub use models::{
    AlbumSummary, ArtistSummary, ConcreteItem, DraftDefaults, DraftField, DraftListing, Listing,
    ListingId, ListingPayload, ListingStatus, Owner, Quality, ReleaseSummary, UserId,
};
pub use resolver::{
    ResolverView, SelectOption, Selection, SelectionError, SelectionResolver, Transition,
};
pub use submission::{ListingSession, ListingSink, MemoryListingSink, SubmissionError};
