mod navbar;
mod report;

pub use navbar::Navbar;
pub use report::{
    Region,
    Report,
    ReportFilters,
    ReportView,
    TimeRange,
    PLACEHOLDER_REGIONS,
    STACKED_PLACEHOLDERS,
    TITLED_CARDS,
};
