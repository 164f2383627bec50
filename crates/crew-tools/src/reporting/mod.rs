//! Text reports handed back to the calling agent.
//!
//! Both reports are plain text with a fixed section order so an agent can
//! rely on their layout:
//!
//! - [`ReportFormatter::render_statistics`]: header, missing values,
//!   numeric columns, categorical columns, quality summary.
//! - [`ReportFormatter::render_info`]: shape, column types, sample rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use crew_tools::reporting::ReportFormatter;
//!
//! let formatter = ReportFormatter::new(4, 5);
//! println!("{}", formatter.render_statistics(&stats));
//! ```

mod formatter;
mod table;

pub use formatter::ReportFormatter;
pub use table::render_table;
