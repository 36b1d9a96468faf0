use super::types::MessageId;

/// Events the auth worker reports back to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The simulated request finished; `summary` is shown as a toast.
    Completed { summary: String },
}

/// Something worth a toast that happened on a chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatNotice {
    Sent(MessageId),
    QuotaReached,
}
