//! Win/lose presentation: a terminal bell cue and a confetti shower.
//! Driven only by `SessionEvent`s, never by the scoring code directly.

use crate::models::SessionEvent;
use rand::Rng;

pub const CONFETTI_PARTICLES: usize = 120;
const CONFETTI_GLYPHS: [char; 6] = ['*', '+', 'o', '.', '~', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Win,
    Lose,
}

impl Cue {
    /// Bell characters written for the cue.
    pub fn bell(&self) -> &'static str {
        match self {
            Cue::Win => "\x07",
            Cue::Lose => "\x07\x07",
        }
    }
}

/// One falling piece; coordinates are fractions of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub drift: f32,
    pub glyph: char,
    pub color: u8,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, y: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y,
            speed: rng.gen_range(0.01..0.04),
            drift: rng.gen_range(-0.005..0.005),
            glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
            color: rng.gen_range(0..6),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Confetti {
    pub particles: Vec<Particle>,
}

impl Confetti {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..CONFETTI_PARTICLES)
            .map(|_| {
                let y = rng.gen_range(-1.0..0.0);
                Particle::spawn(rng, y)
            })
            .collect();
        Self { particles }
    }

    /// Advances every particle; the ones that fall off the bottom come
    /// back in above the top edge.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            particle.y += particle.speed;
            particle.x = (particle.x + particle.drift).rem_euclid(1.0).min(0.999);
            if particle.y >= 1.0 {
                let y = rng.gen_range(-0.2..0.0);
                *particle = Particle::spawn(rng, y);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Feedback {
    pub cue: Option<Cue>,
    pub confetti: Option<Confetti>,
    bell_pending: bool,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event<R: Rng + ?Sized>(&mut self, event: &SessionEvent, rng: &mut R) {
        match event {
            SessionEvent::Completed { won: true, .. } => {
                self.cue = Some(Cue::Win);
                self.confetti = Some(Confetti::new(rng));
            }
            SessionEvent::Completed { won: false, .. } => {
                self.cue = Some(Cue::Lose);
                self.confetti = None;
            }
        }
        self.bell_pending = true;
    }

    /// The cue to play now, handed out once per event.
    pub fn take_bell(&mut self) -> Option<Cue> {
        if self.bell_pending {
            self.bell_pending = false;
            self.cue
        } else {
            None
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(confetti) = self.confetti.as_mut() {
            confetti.tick(rng);
        }
    }

    pub fn is_active(&self) -> bool {
        self.cue.is_some()
    }

    pub fn stop(&mut self) {
        self.cue = None;
        self.confetti = None;
        self.bell_pending = false;
    }
}
