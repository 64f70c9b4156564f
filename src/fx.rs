//! Cosmetic overlays for the pet canvas: action particles and the twinkling
//! star field. None of this feeds back into pet state.

use crate::event::ActionKind;
use rand::Rng;

pub const CANVAS_W: usize = 24;
pub const CANVAS_H: usize = 7;
pub const MAX_PARTICLES: usize = 12;
pub const MAX_LIFE: u8 = 12;
pub const DEFAULT_STARS: usize = 30;

const SPAWN_CHANCE: f64 = 0.6;
const TWINKLE_ODDS: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u8,
    pub glyph: char,
}

impl Particle {
    pub fn cell(&self) -> Option<(usize, usize)> {
        let (x, y) = (self.x.round(), self.y.round());
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < CANVAS_W && y < CANVAS_H).then_some((x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    pub x: usize,
    pub y: usize,
    pub on: bool,
}

/// Spawns one particle of the given flavor, somewhere around the pet's head.
pub fn spawn<R: Rng>(kind: ActionKind, rng: &mut R) -> Particle {
    let mid = CANVAS_W as f32 / 2.0;
    match kind {
        // crumbs tumble down from the mouth
        ActionKind::Feed => Particle {
            x: mid + rng.gen_range(-2.0..2.0),
            y: 5.0,
            vx: rng.gen_range(-0.3..0.3),
            vy: rng.gen_range(0.25..0.5),
            life: rng.gen_range(6..=10),
            glyph: if rng.gen_bool(0.5) { '·' } else { '•' },
        },
        ActionKind::Play => Particle {
            x: if rng.gen_bool(0.5) {
                mid - rng.gen_range(5.0..9.0)
            } else {
                mid + rng.gen_range(5.0..9.0)
            },
            y: CANVAS_H as f32 - 2.0,
            vx: rng.gen_range(-0.4..0.4),
            vy: rng.gen_range(-0.6..-0.3),
            life: rng.gen_range(8..=MAX_LIFE),
            glyph: ['♥', '*', '+'][rng.gen_range(0..3)],
        },
        ActionKind::Sleep => Particle {
            x: mid + 5.0 + rng.gen_range(0.0..2.0),
            y: 2.0,
            vx: rng.gen_range(0.0..0.15),
            vy: rng.gen_range(-0.25..-0.15),
            life: rng.gen_range(8..=MAX_LIFE),
            glyph: if rng.gen_bool(0.5) { 'z' } else { 'Z' },
        },
    }
}

/// Opening burst when an action starts.
pub fn burst<R: Rng>(kind: ActionKind, rng: &mut R) -> Vec<Particle> {
    let n = match kind {
        ActionKind::Feed => 4,
        ActionKind::Play => 6,
        ActionKind::Sleep => 2,
    };
    (0..n).map(|_| spawn(kind, rng)).collect()
}

/// Advances every particle one frame and drops the dead or escaped ones.
/// While an action is running, occasionally tops the set up again.
pub fn step<R: Rng>(particles: &mut Vec<Particle>, active: Option<ActionKind>, rng: &mut R) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.life = p.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0 && p.cell().is_some());

    if let Some(kind) = active {
        if particles.len() < MAX_PARTICLES && rng.gen_bool(SPAWN_CHANCE) {
            particles.push(spawn(kind, rng));
        }
    }
    particles.truncate(MAX_PARTICLES);
}

pub fn seed_stars<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0..CANVAS_W),
            y: rng.gen_range(0..CANVAS_H),
            on: rng.gen_bool(0.5),
        })
        .collect()
}

pub fn twinkle<R: Rng>(stars: &mut [Star], rng: &mut R) {
    for s in stars {
        if rng.gen_ratio(1, TWINKLE_ODDS) {
            s.on = !s.on;
        }
    }
}
