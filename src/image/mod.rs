pub mod appender;
pub mod layout;

pub use appender::{AppendReport, ImageAppender};
pub use layout::{FotaImage, PADDING_LEN, TRAILER_LEN};
