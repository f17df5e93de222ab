// Make common test utilities available
pub mod common;
pub mod report;
pub mod theme_state;
