pub mod corpus;
pub mod error;
pub mod feeds;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod session;
pub mod traits;

pub use corpus::{assemble, merge_feeds};
pub use error::FeedError;
pub use feeds::CmsFeedClient;
pub use models::{Article, HomeFeed, RawArticleCard, SearchRequest, SectionFeed};
pub use ranking::{filter_section, rank, suggest, SUGGESTION_LIMIT};
pub use scoring::{score, tokenize};
pub use session::SearchSession;
pub use traits::FeedSource;
