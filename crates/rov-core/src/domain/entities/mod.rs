pub mod destination;
pub mod report;
pub mod template;
pub mod toolchain;

pub use destination::Destination;
pub use report::{BuildStatus, RewriteSummary, ScaffoldReport};
pub use template::TemplateLocation;
pub use toolchain::Toolchain;
