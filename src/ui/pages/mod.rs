pub mod skip_select;

pub use skip_select::SkipSelectPage;
