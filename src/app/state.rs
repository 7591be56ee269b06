use crate::app::action::Action;
use crate::config::AppConfig;
use crate::effects::ConfettiContainer;
use crate::i18n::{Localizer, StringTable, SUPPORTED_LOCALES};

pub const COUNTER_MIN: u8 = 0;
pub const COUNTER_MAX: u8 = 25;
pub const COUNTER_START: u8 = 16;

/// Hitting 21 makes it rain.
pub const BLACKJACK: u8 = 21;

/// Presentation attribute derived from the counter value. Re-computed at
/// every successful transition so the styling layer keys off the tone
/// instead of inspecting the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Lucky,
    Blackjack,
    Boundary,
}

impl Tone {
    pub fn for_value(value: u8) -> Self {
        match value {
            18 => Tone::Lucky,
            BLACKJACK => Tone::Blackjack,
            COUNTER_MIN | COUNTER_MAX => Tone::Boundary,
            _ => Tone::Neutral,
        }
    }
}

/// Bounded counter. The value stays within `[COUNTER_MIN, COUNTER_MAX]`;
/// out-of-range requests are silent no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: u8,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: COUNTER_START,
        }
    }

    /// Construct at an arbitrary value, clamped into range.
    pub fn with_value(value: u8) -> Self {
        Self {
            value: value.min(COUNTER_MAX),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn at_min(&self) -> bool {
        self.value == COUNTER_MIN
    }

    pub fn at_max(&self) -> bool {
        self.value == COUNTER_MAX
    }

    /// Clamped increment. Returns true if the value changed.
    pub fn increase(&mut self) -> bool {
        if self.value < COUNTER_MAX {
            self.value += 1;
            true
        } else {
            false
        }
    }

    /// Clamped decrement. Returns true if the value changed.
    pub fn decrease(&mut self) -> bool {
        if self.value > COUNTER_MIN {
            self.value -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Decrement,
    Increment,
}

pub struct AppState {
    pub config: AppConfig,
    pub counter: Counter,
    pub tone: Tone,
    pub localizer: Localizer,
    pub focus: Control,
    pub confetti: ConfettiContainer,
    pub term_size: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Base string table; bundle lookups fall back to these.
        let mut base = StringTable::new();
        base.insert("title", config.ui.title.clone());
        base.insert("increase", "increase");
        base.insert("decrease", "decrease");
        base.insert("quit", "quit");

        // One-time localization registration, tied to construction.
        let localizer = Localizer::register(SUPPORTED_LOCALES, config.ui.bundle_dir.clone(), base);

        let counter = Counter::new();
        let tone = Tone::for_value(counter.value());
        Self {
            config,
            counter,
            tone,
            localizer,
            focus: Control::Increment,
            confetti: ConfettiContainer::new(),
            term_size: (80, 24),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn apply_increase(&mut self) -> Option<Action> {
        if self.counter.increase() {
            self.after_change()
        } else {
            None
        }
    }

    pub fn apply_decrease(&mut self) -> Option<Action> {
        if self.counter.decrease() {
            self.after_change()
        } else {
            None
        }
    }

    /// Observes every successful transition: reflects the new value into
    /// the tone and fires the celebration on entry into 21. Entered only
    /// when the value actually changed, so staying at 21 across re-renders
    /// never re-triggers.
    fn after_change(&mut self) -> Option<Action> {
        self.tone = Tone::for_value(self.counter.value());
        self.dirty = true;
        (self.counter.value() == BLACKJACK).then_some(Action::TriggerCelebration)
    }

    /// Display title: localized lookup with the configured title as the
    /// base-table fallback.
    pub fn title(&self) -> &str {
        self.localizer.text("title", &self.config.ui.title)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Control::Decrement => Control::Increment,
            Control::Increment => Control::Decrement,
        };
        self.dirty = true;
    }
}
