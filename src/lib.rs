pub mod body;
pub mod headers;
pub mod hint;
pub mod message;
pub mod render;
pub mod report;
pub mod structure;
pub mod subject;

pub use body::check_body;
pub use hint::{Hint, Severity};
pub use message::{MessagePart, MessageView};
pub use report::AnalysisResult;
pub use structure::check_eml;
pub use subject::check_subject;
