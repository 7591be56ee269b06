use crate::app::event::AppEvent;
use crate::config::EffectsConfig;
use crate::effects::palette::ConfettiAssets;
use std::sync::{Arc, OnceLock};
use tokio::sync::mpsc;

/// Owns the lazily-acquired confetti assets and turns celebration
/// triggers into `EffectsReady` events.
pub struct EffectsManager {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    config: EffectsConfig,
    cache: Arc<OnceLock<Arc<ConfettiAssets>>>,
}

impl EffectsManager {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, config: EffectsConfig) -> Self {
        Self {
            event_tx,
            config,
            cache: Arc::new(OnceLock::new()),
        }
    }

    /// Fire-and-forget celebration trigger. Loads the assets on first use;
    /// either way the container signal arrives as an event on a later loop
    /// turn. A failed load yields no visible effect and nothing else.
    pub fn make_it_rain(&self) {
        if !self.config.enabled {
            return;
        }
        let tx = self.event_tx.clone();
        if let Some(assets) = self.cache.get() {
            let assets = assets.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::EffectsReady { assets });
            });
            return;
        }
        let cache = self.cache.clone();
        let palette_file = self.config.palette_file.clone();
        tokio::spawn(async move {
            match ConfettiAssets::load(palette_file.as_deref()) {
                Ok(assets) => {
                    let assets = Arc::new(assets);
                    let _ = cache.set(assets.clone());
                    let _ = tx.send(AppEvent::EffectsReady { assets });
                }
                Err(e) => tracing::debug!("confetti assets unavailable: {e}"),
            }
        });
    }
}
