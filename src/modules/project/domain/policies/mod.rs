pub mod listing_policy;

pub use listing_policy::ListingPolicy;
