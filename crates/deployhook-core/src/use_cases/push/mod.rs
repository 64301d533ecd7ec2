pub(crate) mod process_push_event;

#[cfg(any(test, feature = "testkit"))]
pub use process_push_event::MockProcessPushEventInterface;
pub use process_push_event::{ProcessPushEvent, ProcessPushEventInterface, PushOutcome};
