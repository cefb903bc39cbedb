pub mod http_blocklist;
pub mod range_file;

pub use http_blocklist::{parse_blocklist_body, HttpBlocklistSource};
pub use range_file::FileRangeSource;
