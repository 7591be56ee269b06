use ratatui::style::Color;

/// Downward pull in cells per second squared. Terminal coordinates grow
/// downward, so gravity is positive.
pub const GRAVITY: f32 = 22.0;

/// One piece of confetti: position and velocity in fractional cell
/// coordinates, plus its glyph, color, and remaining life.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
    pub color: Color,
    pub age: f32,
    pub lifetime: f32,
}

impl Particle {
    /// Advance one frame: position from velocity, velocity from gravity.
    pub fn update(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.vy += GRAVITY * dt;
        self.age += dt;
    }

    pub fn alive(&self) -> bool {
        self.age < self.lifetime
    }

    /// Cell the particle currently occupies.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(vx: f32, vy: f32) -> Particle {
        Particle {
            x: 10.0,
            y: 10.0,
            vx,
            vy,
            glyph: '*',
            color: Color::Red,
            age: 0.0,
            lifetime: 2.0,
        }
    }

    #[test]
    fn constant_horizontal_velocity_moves_x() {
        let mut p = particle(20.0, 0.0);
        for _ in 0..20 {
            p.update(0.05);
        }
        // one second at 20 cells/s
        assert!((p.x - 30.0).abs() < 0.01);
    }

    #[test]
    fn gravity_pulls_downward() {
        let mut p = particle(0.0, -10.0);
        let mut apex = p.y;
        for _ in 0..40 {
            p.update(0.05);
            apex = apex.min(p.y);
        }
        // rose above the origin, then fell back past it
        assert!(apex < 10.0);
        assert!(p.y > 10.0);
    }

    #[test]
    fn particle_expires_after_lifetime() {
        let mut p = particle(0.0, 0.0);
        assert!(p.alive());
        for _ in 0..41 {
            p.update(0.05);
        }
        assert!(!p.alive());
    }
}
