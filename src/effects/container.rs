use crate::effects::palette::ConfettiAssets;
use crate::effects::particle::Particle;
use rand::RngExt;
use ratatui::style::Color;

/// Particles per burst.
const BURST_PARTICLES: usize = 64;

/// Holds in-flight confetti. The `popped` flag resets itself once the
/// burst finishes animating, so callers can signal the container again and
/// again without any explicit reset.
#[derive(Debug, Default)]
pub struct ConfettiContainer {
    popped: bool,
    particles: Vec<Particle>,
}

impl ConfettiContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn popped(&self) -> bool {
        self.popped
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Play one burst from `origin` (fractional cell coordinates). Bursts
    /// stack additively when a new one lands while the last is still
    /// falling.
    pub fn pop(&mut self, assets: &ConfettiAssets, origin: (f32, f32)) {
        self.popped = true;
        let mut rng = rand::rng();
        self.particles.reserve(BURST_PARTICLES);
        for _ in 0..BURST_PARTICLES {
            // Terminal cells are roughly twice as tall as wide, so
            // horizontal speeds get the wider range.
            let vx = rng.random_range(-18.0..18.0);
            let vy = rng.random_range(-26.0..-6.0);
            self.particles.push(Particle {
                x: origin.0,
                y: origin.1,
                vx,
                vy,
                glyph: assets.glyphs[rng.random_range(0..assets.glyphs.len())],
                color: assets.colors[rng.random_range(0..assets.colors.len())],
                age: 0.0,
                lifetime: rng.random_range(1.0..2.2),
            });
        }
    }

    /// Advance the burst by `dt` seconds. Returns true while a redraw is
    /// still needed (live particles, or the frame that clears the last
    /// ones). Clears `popped` when the final particle dies.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.particles.is_empty() {
            return false;
        }
        for p in &mut self.particles {
            p.update(dt);
        }
        self.particles.retain(Particle::alive);
        if self.particles.is_empty() {
            self.popped = false;
        }
        true
    }

    /// Occupied cells for the render overlay.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char, Color)> + '_ {
        self.particles.iter().map(|p| {
            let (x, y) = p.cell();
            (x, y, p.glyph, p.color)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_spawns_a_burst_and_sets_popped() {
        let mut c = ConfettiContainer::new();
        assert!(!c.popped());
        c.pop(&ConfettiAssets::builtin(), (20.0, 10.0));
        assert!(c.popped());
        assert_eq!(c.cells().count(), BURST_PARTICLES);
    }

    #[test]
    fn popped_resets_itself_when_burst_finishes() {
        let mut c = ConfettiContainer::new();
        c.pop(&ConfettiAssets::builtin(), (20.0, 10.0));
        let mut frames = 0;
        while c.tick(0.05) {
            frames += 1;
            assert!(frames < 200, "burst never drained");
        }
        assert!(!c.popped());
        assert!(!c.is_active());
    }

    #[test]
    fn second_pop_while_active_stacks() {
        let mut c = ConfettiContainer::new();
        let assets = ConfettiAssets::builtin();
        c.pop(&assets, (20.0, 10.0));
        c.tick(0.05);
        let before = c.cells().count();
        c.pop(&assets, (20.0, 10.0));
        assert_eq!(c.cells().count(), before + BURST_PARTICLES);
        assert!(c.popped());
    }

    #[test]
    fn tick_without_particles_is_inert() {
        let mut c = ConfettiContainer::new();
        assert!(!c.tick(0.05));
    }
}
