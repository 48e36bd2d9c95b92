//! Notice system for the box office.
//!
//! Every state-changing operation emits a [`Notice`] describing what
//! happened; the fallback path emits one for unmatched calls. Notices are
//! ephemeral and carry the facts of the operation, not live references –
//! consumers needing current state re-read the office.

pub mod channels;
pub mod types;

pub use channels::{DEFAULT_CHANNEL_BUFFER, NoticeReceiver, NoticeSender, notice_channel};
pub use types::Notice;
