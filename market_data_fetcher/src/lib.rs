pub mod cache;
pub mod fetcher;
pub mod models;
pub mod providers;

pub use cache::SeriesCache;
pub use fetcher::SeriesFetcher;
