use crate::effects::ConfettiAssets;
use crate::i18n::StringTable;
use crossterm::event::Event as CrosstermEvent;
use std::sync::Arc;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Confetti assets finished loading (or were already resident).
    /// Delivered through the event queue, so the container is signalled on
    /// the next loop turn, after it has been attached and is ticking.
    EffectsReady { assets: Arc<ConfettiAssets> },

    /// A locale bundle finished loading.
    LocaleLoaded { tag: String, table: StringTable },

    /// Tick for animation and UI refresh
    Tick,
}
