//! Decorative particle effects for the room backgrounds.
//!
//! A [`ParticleField`] owns a fixed number of slots, all holding particles of
//! one [`Variant`]. Each frame every slot is advanced once; particles that run
//! out of life or fall off the surface are replaced in place so the pool never
//! grows or shrinks. Drawing lives in [`surface`], the browser binding
//! (canvas lookup, resize listener, animation frame loop) in [`engine`].
//! The room-wide lightning flash is in [`lightning`].

use std::f64::consts::TAU;

use rand::Rng;

mod animator;
pub mod engine;
pub mod lightning;
pub mod surface;

pub use animator::Animator;
pub use engine::ParticleEngine;
pub use lightning::{Lightning, first_flash_delay, next_flash_delay};
pub use surface::{Surface, draw_field};

/// Letters used by the falling-glyph rain.
pub const GLYPHS: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', 'ק',
    'ר', 'ש', 'ת',
];

pub const CONFETTI_PALETTE: [&str; 8] = [
    "#ffd700", "#ff6b6b", "#4ecdc4", "#45b7d1", "#f9ca24", "#ff4757", "#2ed573", "#5f27cd",
];

const DEFAULT_POOL: usize = 80;
const GLYPH_POOL: usize = 60;
const CONFETTI_POOL: usize = 150;

/// Fire particles start with this much life at most; opacity is scaled against it.
const FIRE_MAX_LIFE: f64 = 150.0;
const FIRE_SHRINK: f64 = 0.995;

// Off-surface margins used when recycling or respawning above the top edge.
const GLYPH_MARGIN: f64 = 20.0;
const FLAKE_MARGIN: f64 = 10.0;
const FIRE_TOP_MARGIN: f64 = 10.0;
const GOLD_RESPAWN_Y: f64 = -5.0;

/// The built-in particle behaviours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Slowly falling gold motes, wrapping at the edges.
    #[default]
    Gold,
    /// Embers rising from below the bottom edge and burning out.
    Fire,
    /// Wobbling dust, wrapping on all four edges.
    Dust,
    /// Static twinkling stars.
    Stars,
    /// Falling letter rain.
    Matrix,
    /// Spinning gold flakes falling from the top.
    GoldFall,
    /// Spinning, wobbling confetti.
    Confetti,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Gold,
        Variant::Fire,
        Variant::Dust,
        Variant::Stars,
        Variant::Matrix,
        Variant::GoldFall,
        Variant::Confetti,
    ];

    /// Parse a page tag. Both the short tags used in the room markup (`gold`,
    /// `matrix`, ...) and the descriptive names (`fall-gold`, `falling-glyph`,
    /// ...) are accepted; anything else falls back to [`Variant::Gold`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "fire" | "rising-fire" => Variant::Fire,
            "dust" | "drifting-dust" => Variant::Dust,
            "stars" | "star" | "twinkling-star" => Variant::Stars,
            "matrix" | "glyph" | "falling-glyph" => Variant::Matrix,
            "goldfall" | "falling-gold-flake" => Variant::GoldFall,
            "confetti" | "falling-confetti" => Variant::Confetti,
            _ => Variant::Gold,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Variant::Gold => "gold",
            Variant::Fire => "fire",
            Variant::Dust => "dust",
            Variant::Stars => "stars",
            Variant::Matrix => "matrix",
            Variant::GoldFall => "goldfall",
            Variant::Confetti => "confetti",
        }
    }

    /// Number of slots a field of this variant holds.
    pub fn pool_size(self) -> usize {
        match self {
            Variant::Matrix => GLYPH_POOL,
            Variant::Confetti => CONFETTI_POOL,
            _ => DEFAULT_POOL,
        }
    }
}

/// One particle. Each case carries only what its behaviour reads.
///
/// Rotations are in degrees, phases in radians.
#[derive(Clone, Debug, PartialEq)]
pub enum Particle {
    Gold {
        x: f64,
        y: f64,
        speed_x: f64,
        speed_y: f64,
        size: f64,
        opacity: f64,
        hue: f64,
    },
    Fire {
        x: f64,
        y: f64,
        speed_x: f64,
        speed_y: f64,
        size: f64,
        opacity: f64,
        hue: f64,
        life: f64,
        max_life: f64,
    },
    Dust {
        x: f64,
        y: f64,
        speed_x: f64,
        speed_y: f64,
        wobble: f64,
        wobble_speed: f64,
        size: f64,
        opacity: f64,
    },
    Star {
        x: f64,
        y: f64,
        twinkle_phase: f64,
        twinkle_speed: f64,
        size: f64,
        opacity: f64,
        color: &'static str,
    },
    Glyph {
        x: f64,
        y: f64,
        speed: f64,
        glyph: char,
        size: f64,
        opacity: f64,
        change_rate: f64,
    },
    GoldFlake {
        x: f64,
        y: f64,
        speed_x: f64,
        speed_y: f64,
        rotation: f64,
        rot_speed: f64,
        size: f64,
        opacity: f64,
    },
    Confetti {
        x: f64,
        y: f64,
        speed_x: f64,
        speed_y: f64,
        wobble: f64,
        wobble_speed: f64,
        rotation: f64,
        rot_speed: f64,
        size: f64,
        opacity: f64,
        color: &'static str,
    },
}

/// What the field should do with a slot after advancing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fate {
    Keep,
    /// Replace the slot with a fresh particle; `from_top` spawns it above the surface.
    Respawn { from_top: bool },
}

/// `lo + u * span` with `u` uniform in [0, 1). Unlike `gen_range` this never
/// panics on an empty span, which happens with a zero-sized viewport.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, span: f64) -> f64 {
    lo + rng.r#gen::<f64>() * span
}

/// Centered spread: uniform in [-span/2, span/2).
fn spread<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * span
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    let idx = (rng.r#gen::<f64>() * items.len() as f64) as usize;
    items[idx.min(items.len() - 1)]
}

pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    pick(rng, &GLYPHS)
}

impl Particle {
    /// Create a particle of `variant` on a `width` x `height` surface.
    ///
    /// Falling variants (glyph, gold flake, confetti) start just above the top
    /// edge when `from_top` is set, anywhere on the surface otherwise. Fire
    /// always starts just below the bottom edge.
    pub fn spawn<R: Rng + ?Sized>(
        variant: Variant,
        width: f64,
        height: f64,
        from_top: bool,
        rng: &mut R,
    ) -> Self {
        match variant {
            Variant::Gold => Particle::Gold {
                x: uniform(rng, 0.0, width),
                y: uniform(rng, 0.0, height),
                size: uniform(rng, 1.0, 3.0),
                speed_x: spread(rng, 0.5),
                speed_y: uniform(rng, 0.2, 0.8),
                opacity: uniform(rng, 0.2, 0.6),
                hue: uniform(rng, 45.0, 15.0),
            },
            Variant::Fire => {
                let life = uniform(rng, 50.0, 100.0);
                Particle::Fire {
                    x: uniform(rng, 0.0, width),
                    y: uniform(rng, height, 20.0),
                    size: uniform(rng, 1.0, 4.0),
                    speed_x: spread(rng, 1.5),
                    speed_y: -uniform(rng, 1.0, 2.0),
                    // Tied to life so an ember only ever fades.
                    opacity: life / FIRE_MAX_LIFE * 0.8,
                    life,
                    max_life: FIRE_MAX_LIFE,
                    hue: uniform(rng, 10.0, 40.0),
                }
            }
            Variant::Dust => Particle::Dust {
                x: uniform(rng, 0.0, width),
                y: uniform(rng, 0.0, height),
                size: uniform(rng, 0.5, 2.0),
                speed_x: spread(rng, 0.8),
                speed_y: spread(rng, 0.3),
                opacity: uniform(rng, 0.1, 0.3),
                wobble: uniform(rng, 0.0, TAU),
                wobble_speed: uniform(rng, 0.01, 0.02),
            },
            Variant::Stars => Particle::Star {
                x: uniform(rng, 0.0, width),
                y: uniform(rng, 0.0, height),
                size: uniform(rng, 0.5, 2.0),
                twinkle_speed: uniform(rng, 0.01, 0.03),
                twinkle_phase: uniform(rng, 0.0, TAU),
                opacity: uniform(rng, 0.3, 0.7),
                color: if rng.r#gen::<f64>() > 0.3 {
                    "#fff"
                } else if rng.r#gen::<f64>() > 0.5 {
                    "#aaf"
                } else {
                    "#ffa"
                },
            },
            Variant::Matrix => Particle::Glyph {
                x: uniform(rng, 0.0, width),
                y: if from_top {
                    -GLYPH_MARGIN
                } else {
                    uniform(rng, 0.0, height)
                },
                speed: uniform(rng, 1.0, 3.0),
                glyph: random_glyph(rng),
                size: uniform(rng, 10.0, 14.0),
                opacity: uniform(rng, 0.1, 0.5),
                change_rate: uniform(rng, 0.0, 0.02),
            },
            Variant::GoldFall => Particle::GoldFlake {
                x: uniform(rng, 0.0, width),
                y: if from_top {
                    -FLAKE_MARGIN
                } else {
                    uniform(rng, 0.0, height)
                },
                size: uniform(rng, 2.0, 4.0),
                speed_y: uniform(rng, 0.5, 1.5),
                speed_x: spread(rng, 0.3),
                opacity: uniform(rng, 0.3, 0.7),
                rotation: uniform(rng, 0.0, 360.0),
                rot_speed: spread(rng, 3.0),
            },
            Variant::Confetti => Particle::Confetti {
                x: uniform(rng, 0.0, width),
                y: if from_top {
                    -FLAKE_MARGIN
                } else {
                    uniform(rng, 0.0, height)
                },
                size: uniform(rng, 4.0, 8.0),
                speed_y: uniform(rng, 1.0, 2.0),
                speed_x: spread(rng, 2.0),
                opacity: uniform(rng, 0.2, 0.8),
                rotation: uniform(rng, 0.0, 360.0),
                rot_speed: spread(rng, 8.0),
                color: pick(rng, &CONFETTI_PALETTE),
                wobble: uniform(rng, 0.0, TAU),
                wobble_speed: uniform(rng, 0.05, 0.1),
            },
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Particle::Gold { .. } => Variant::Gold,
            Particle::Fire { .. } => Variant::Fire,
            Particle::Dust { .. } => Variant::Dust,
            Particle::Star { .. } => Variant::Stars,
            Particle::Glyph { .. } => Variant::Matrix,
            Particle::GoldFlake { .. } => Variant::GoldFall,
            Particle::Confetti { .. } => Variant::Confetti,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match *self {
            Particle::Gold { x, y, .. }
            | Particle::Fire { x, y, .. }
            | Particle::Dust { x, y, .. }
            | Particle::Star { x, y, .. }
            | Particle::Glyph { x, y, .. }
            | Particle::GoldFlake { x, y, .. }
            | Particle::Confetti { x, y, .. } => (x, y),
        }
    }

    pub fn opacity(&self) -> f64 {
        match *self {
            Particle::Gold { opacity, .. }
            | Particle::Fire { opacity, .. }
            | Particle::Dust { opacity, .. }
            | Particle::Star { opacity, .. }
            | Particle::Glyph { opacity, .. }
            | Particle::GoldFlake { opacity, .. }
            | Particle::Confetti { opacity, .. } => opacity,
        }
    }

    pub fn size(&self) -> f64 {
        match *self {
            Particle::Gold { size, .. }
            | Particle::Fire { size, .. }
            | Particle::Dust { size, .. }
            | Particle::Star { size, .. }
            | Particle::Glyph { size, .. }
            | Particle::GoldFlake { size, .. }
            | Particle::Confetti { size, .. } => size,
        }
    }

    /// Advance one frame on a `width` x `height` surface.
    fn advance<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) -> Fate {
        match self {
            Particle::Gold {
                x,
                y,
                speed_x,
                speed_y,
                ..
            } => {
                *x += *speed_x;
                *y += *speed_y;
                if *y > height {
                    *y = GOLD_RESPAWN_Y;
                    *x = uniform(rng, 0.0, width);
                }
                wrap(x, width);
                Fate::Keep
            }
            Particle::Fire {
                x,
                y,
                speed_x,
                speed_y,
                size,
                opacity,
                life,
                max_life,
                ..
            } => {
                *x += *speed_x;
                *y += *speed_y;
                *life -= 1.0;
                *opacity = (*life / *max_life).max(0.0) * 0.8;
                *size *= FIRE_SHRINK;
                if *life <= 0.0 || *y < -FIRE_TOP_MARGIN {
                    Fate::Respawn { from_top: false }
                } else {
                    Fate::Keep
                }
            }
            Particle::Dust {
                x,
                y,
                speed_x,
                speed_y,
                wobble,
                wobble_speed,
                ..
            } => {
                *wobble += *wobble_speed;
                *x += *speed_x + wobble.sin() * 0.3;
                *y += *speed_y;
                wrap(x, width);
                wrap(y, height);
                Fate::Keep
            }
            Particle::Star {
                twinkle_phase,
                twinkle_speed,
                ..
            } => {
                *twinkle_phase += *twinkle_speed;
                Fate::Keep
            }
            Particle::Glyph {
                y,
                speed,
                glyph,
                change_rate,
                ..
            } => {
                *y += *speed;
                if rng.r#gen::<f64>() < *change_rate {
                    *glyph = random_glyph(rng);
                }
                if *y > height + GLYPH_MARGIN {
                    Fate::Respawn { from_top: true }
                } else {
                    Fate::Keep
                }
            }
            Particle::GoldFlake {
                x,
                y,
                speed_x,
                speed_y,
                rotation,
                rot_speed,
                ..
            } => {
                *y += *speed_y;
                *x += *speed_x;
                *rotation += *rot_speed;
                if *y > height + FLAKE_MARGIN {
                    Fate::Respawn { from_top: true }
                } else {
                    Fate::Keep
                }
            }
            Particle::Confetti {
                x,
                y,
                speed_x,
                speed_y,
                wobble,
                wobble_speed,
                rotation,
                rot_speed,
                ..
            } => {
                *wobble += *wobble_speed;
                *y += *speed_y;
                *x += *speed_x + wobble.sin() * 0.5;
                *rotation += *rot_speed;
                if *y > height + FLAKE_MARGIN {
                    Fate::Respawn { from_top: true }
                } else {
                    Fate::Keep
                }
            }
        }
    }
}

/// Move a coordinate that left [0, extent] to the opposite edge.
fn wrap(v: &mut f64, extent: f64) {
    if *v < 0.0 {
        *v = extent;
    } else if *v > extent {
        *v = 0.0;
    }
}

/// Fixed-slot pool of particles of a single variant.
#[derive(Clone, Debug)]
pub struct ParticleField {
    variant: Variant,
    width: f64,
    height: f64,
    slots: Vec<Particle>,
}

impl ParticleField {
    /// Fill a field with [`Variant::pool_size`] particles.
    pub fn new<R: Rng + ?Sized>(variant: Variant, width: f64, height: f64, rng: &mut R) -> Self {
        Self::with_pool_size(variant, width, height, variant.pool_size(), rng)
    }

    pub fn with_pool_size<R: Rng + ?Sized>(
        variant: Variant,
        width: f64,
        height: f64,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let slots = (0..count)
            .map(|_| Particle::spawn(variant, width, height, false, rng))
            .collect();
        Self {
            variant,
            width,
            height,
            slots,
        }
    }

    /// Build a field from existing particles. `None` if any of them is not a
    /// `variant` particle.
    pub fn from_particles(
        variant: Variant,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Option<Self> {
        if particles.iter().any(|p| p.variant() != variant) {
            return None;
        }
        Some(Self {
            variant,
            width: width.max(0.0),
            height: height.max(0.0),
            slots: particles,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.slots
    }

    /// Adopt new surface dimensions. Existing particles keep their positions;
    /// wrapping and recycling pull stragglers back over the next frames.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Rebuild every slot for the current dimensions.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (variant, width, height) = (self.variant, self.width, self.height);
        for slot in self.slots.iter_mut() {
            *slot = Particle::spawn(variant, width, height, false, rng);
        }
    }

    /// Advance every slot by one frame, replacing expired particles in place.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (variant, width, height) = (self.variant, self.width, self.height);
        for slot in self.slots.iter_mut() {
            if let Fate::Respawn { from_top } = slot.advance(width, height, rng) {
                *slot = Particle::spawn(variant, width, height, from_top, rng);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_PI_2;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_pool_sizes() {
        let mut rng = rng();
        for variant in Variant::ALL {
            let field = ParticleField::new(variant, 800.0, 600.0, &mut rng);
            assert_eq!(field.len(), variant.pool_size(), "{variant:?}");
            assert!(field.particles().iter().all(|p| p.variant() == variant));
        }
        assert_eq!(Variant::Gold.pool_size(), 80);
        assert_eq!(Variant::Matrix.pool_size(), 60);
        assert_eq!(Variant::Confetti.pool_size(), 150);
    }

    #[test]
    fn test_variant_tags() {
        assert_eq!(Variant::from_tag("matrix"), Variant::Matrix);
        assert_eq!(Variant::from_tag("falling-glyph"), Variant::Matrix);
        assert_eq!(Variant::from_tag("Rising-Fire"), Variant::Fire);
        assert_eq!(Variant::from_tag("goldfall"), Variant::GoldFall);
        assert_eq!(Variant::from_tag("nonsense"), Variant::Gold);
        assert_eq!(Variant::default(), Variant::Gold);
        for variant in Variant::ALL {
            assert_eq!(Variant::from_tag(variant.tag()), variant);
        }
    }

    #[test]
    fn test_gold_wraps_horizontally_and_respawns_on_top() {
        let mut rng = rng();
        let mut p = Particle::Gold {
            x: 99.8,
            y: 49.9,
            speed_x: 0.5,
            speed_y: 0.5,
            size: 2.0,
            opacity: 0.5,
            hue: 50.0,
        };
        assert_eq!(p.advance(100.0, 50.0, &mut rng), Fate::Keep);
        let (x, y) = p.position();
        assert_eq!(y, GOLD_RESPAWN_Y);
        assert!((0.0..=100.0).contains(&x));

        let mut p = Particle::Gold {
            x: 0.1,
            y: 10.0,
            speed_x: -0.5,
            speed_y: 0.1,
            size: 2.0,
            opacity: 0.5,
            hue: 50.0,
        };
        p.advance(100.0, 50.0, &mut rng);
        assert_eq!(p.position().0, 100.0);
    }

    #[test]
    fn test_dust_wraps_vertically_both_ways() {
        let mut rng = rng();
        let mut p = Particle::Dust {
            x: 50.0,
            y: 0.05,
            speed_x: 0.0,
            speed_y: -0.1,
            wobble: 0.0,
            wobble_speed: 0.0,
            size: 1.0,
            opacity: 0.2,
        };
        p.advance(100.0, 40.0, &mut rng);
        assert_eq!(p.position().1, 40.0);
        p.advance(100.0, 40.0, &mut rng);
        // 40.0 - 0.1 stays inside
        assert!((p.position().1 - 39.9).abs() < 1e-9);
    }

    #[test]
    fn test_dust_wobble_nudges_x() {
        let mut rng = rng();
        let mut p = Particle::Dust {
            x: 50.0,
            y: 20.0,
            speed_x: 0.1,
            speed_y: 0.0,
            wobble: 0.0,
            wobble_speed: FRAC_PI_2,
            size: 1.0,
            opacity: 0.2,
        };
        assert_eq!(p.advance(100.0, 40.0, &mut rng), Fate::Keep);
        let (x, y) = p.position();
        // 0.1 drift plus sin(pi/2) * 0.3
        assert!((x - 50.4).abs() < 1e-9, "x={x}");
        assert_eq!(y, 20.0);
    }

    #[test]
    fn test_fire_replaced_above_top() {
        let mut rng = rng();
        let mut p = Particle::Fire {
            x: 10.0,
            y: -9.5,
            speed_x: 0.0,
            speed_y: -1.0,
            size: 3.0,
            opacity: 0.5,
            hue: 20.0,
            life: 100.0,
            max_life: FIRE_MAX_LIFE,
        };
        assert_eq!(
            p.advance(200.0, 200.0, &mut rng),
            Fate::Respawn { from_top: false }
        );
        assert!(p.opacity() > 0.0);
    }

    #[test]
    fn test_glyph_past_bottom_respawns_above_top() {
        let mut rng = rng();
        let glyph = Particle::Glyph {
            x: 30.0,
            y: 120.5,
            speed: 1.0,
            glyph: 'א',
            size: 12.0,
            opacity: 0.3,
            change_rate: 0.0,
        };
        let mut field =
            ParticleField::from_particles(Variant::Matrix, 100.0, 100.0, vec![glyph]).unwrap();
        field.update(&mut rng);
        assert_eq!(field.particles()[0].position().1, -GLYPH_MARGIN);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_confetti_wobbles_and_spins() {
        let mut rng = rng();
        let mut p = Particle::Confetti {
            x: 50.0,
            y: 10.0,
            speed_x: 0.0,
            speed_y: 1.0,
            wobble: 0.0,
            wobble_speed: FRAC_PI_2,
            rotation: 10.0,
            rot_speed: 4.0,
            size: 5.0,
            opacity: 0.5,
            color: CONFETTI_PALETTE[0],
        };
        assert_eq!(p.advance(100.0, 100.0, &mut rng), Fate::Keep);
        assert_eq!(p.position(), (50.5, 11.0));
        match p {
            Particle::Confetti { rotation, wobble, .. } => {
                assert_eq!(rotation, 14.0);
                assert_eq!(wobble, FRAC_PI_2);
            }
            other => panic!("expected confetti, got {other:?}"),
        }
    }

    #[test]
    fn test_fire_expires_when_life_runs_out() {
        let mut rng = rng();
        let mut p = Particle::Fire {
            x: 10.0,
            y: 100.0,
            speed_x: 0.0,
            speed_y: -1.0,
            size: 3.0,
            opacity: 0.1,
            hue: 20.0,
            life: 1.0,
            max_life: FIRE_MAX_LIFE,
        };
        assert_eq!(
            p.advance(200.0, 200.0, &mut rng),
            Fate::Respawn { from_top: false }
        );
        assert_eq!(p.opacity(), 0.0);
    }

    #[test]
    fn test_fire_spawns_below_bottom_edge() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::spawn(Variant::Fire, 300.0, 200.0, false, &mut rng);
            let (_, y) = p.position();
            assert!((200.0..220.0).contains(&y));
            assert!(p.opacity() <= 0.8);
        }
    }

    #[test]
    fn test_falling_variants_respawn_above_top() {
        let mut rng = rng();
        let mut field = ParticleField::new(Variant::GoldFall, 100.0, 30.0, &mut rng);
        for slot in field.slots_mut() {
            if let Particle::GoldFlake { y, .. } = slot {
                *y = 45.0;
            }
        }
        field.update(&mut rng);
        for p in field.particles() {
            assert_eq!(p.position().1, -FLAKE_MARGIN);
        }
    }

    #[test]
    fn test_zero_sized_surface_does_not_panic() {
        let mut rng = rng();
        for variant in Variant::ALL {
            let mut field = ParticleField::new(variant, 0.0, 0.0, &mut rng);
            for _ in 0..200 {
                field.update(&mut rng);
            }
            assert_eq!(field.len(), variant.pool_size());
        }
    }

    #[test]
    fn test_reinitialize_keeps_slot_count() {
        let mut rng = rng();
        let mut field = ParticleField::new(Variant::Stars, 100.0, 100.0, &mut rng);
        field.resize(1000.0, 20.0);
        field.reinitialize(&mut rng);
        assert_eq!(field.len(), 80);
        for p in field.particles() {
            let (x, y) = p.position();
            assert!(x < 1000.0 && y < 20.0);
        }
    }
}
