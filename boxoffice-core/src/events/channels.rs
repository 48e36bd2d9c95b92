//! Notice channel factory and handles.

use super::types::Notice;
use tokio::sync::mpsc;

/// Default buffer size for the notice channel.
///
/// Enough to absorb bursts while keeping memory bounded.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Sender handle for notices.
pub type NoticeSender = mpsc::Sender<Notice>;
/// Receiver handle for notices.
pub type NoticeReceiver = mpsc::Receiver<Notice>;

/// Create a new notice channel.
///
/// Returns a (sender, receiver) pair. Multiple senders can be cloned
/// from the returned sender.
pub fn notice_channel() -> (NoticeSender, NoticeReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}
