pub mod use_demo_feed;
pub mod use_freshness;
