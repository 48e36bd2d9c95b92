//! Background processors.
//!
//! - `NoticeRelay`: receives [`Notice`](crate::events::Notice)s from the
//!   office and writes them to the structured log.

pub mod notice_log;

pub use notice_log::NoticeRelay;
