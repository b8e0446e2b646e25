//! Confetti shown once a session completes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::ui::theme::CONFETTI;

const GLYPHS: [char; 5] = ['*', '+', '·', '•', '✦'];

/// Where the effect may draw. Implemented by the front end; the session
/// core never sees viewport dimensions.
pub trait ViewportSize {
    /// `(columns, rows)`, or `None` before the first size is known.
    fn viewport_size(&self) -> Option<(u16, u16)>;
}

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    glyph: char,
    color: Color,
}

#[derive(Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl Confetti {
    pub const DEFAULT_DENSITY: usize = 80;

    /// Scatter `count` particles over the viewport. `None` if no size is known yet.
    pub fn launch(viewport: &dyn ViewportSize, count: usize, seed: u64) -> Option<Self> {
        let (cols, rows) = viewport.viewport_size()?;
        if cols == 0 || rows == 0 {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let width = cols as f64;
        let height = rows as f64;
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(-height..0.0),
                vx: rng.random_range(-0.3..0.3),
                vy: rng.random_range(0.2..0.8),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: CONFETTI[rng.random_range(0..CONFETTI.len())],
            })
            .collect();
        Some(Self {
            particles,
            width,
            height,
            rng,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle one frame. Particles leaving the bottom re-enter at the top.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            if particle.x < 0.0 {
                particle.x += self.width;
            } else if particle.x >= self.width {
                particle.x -= self.width;
            }
            if particle.y >= self.height {
                particle.y = 0.0;
                particle.x = self.rng.random_range(0.0..self.width);
            }
        }
    }

    /// Follow a viewport resize without restarting the effect.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = (cols as f64).max(1.0);
        self.height = (rows as f64).max(1.0);
        for particle in &mut self.particles {
            particle.x = particle.x.min(self.width - 1.0).max(0.0);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.y >= 0.0 && p.y < self.height && p.x >= 0.0 && p.x < self.width)
            .count()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in &self.particles {
            if particle.y < 0.0 || particle.x < 0.0 {
                continue;
            }
            let x = particle.x as u16;
            let y = particle.y as u16;
            if x >= area.width || y >= area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_char(particle.glyph).set_fg(particle.color);
            }
        }
    }
}
