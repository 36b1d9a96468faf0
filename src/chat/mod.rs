pub mod composer;
pub mod fixtures;
pub mod ids;
pub mod page;
pub mod quota;
pub mod render;
pub mod search;
pub mod store;
pub mod tier;

pub use page::ChatPage;
pub use quota::DailyQuota;
pub use tier::Tier;
