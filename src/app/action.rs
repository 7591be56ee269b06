/// Side effects requested by the event handler and performed by the main
/// loop, which owns the managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Kick off the celebratory confetti burst.
    TriggerCelebration,

    /// Exit the application.
    Quit,
}
