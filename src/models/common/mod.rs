pub mod error_code;
pub mod record;
pub mod response;

pub use error_code::ErrorCode;
pub use record::RecordMeta;
pub use response::ApiResponse;
