pub mod grid;

mod search;
pub use search::CollectionSearch;

const COLLECTION_SEARCH_KEY: &str = "collection_search";
