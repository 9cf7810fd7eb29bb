//! Drawing side of the particle effects.

use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use super::{Particle, ParticleField};

/// The 2D primitives the particle renderer needs.
///
/// Implemented for the browser canvas context; tests use a recording surface.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, color: &str);
    /// Shadow blur used as a glow around subsequent fills.
    fn set_glow(&mut self, blur: f64, color: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    /// Circle filled with a radial gradient from `color` at the center to transparent.
    fn fill_radial_glow(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, font: &str, x: f64, y: f64);
}

/// Clear the surface and draw every particle in pool order.
pub fn draw_field<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
    surface.clear(field.width(), field.height());
    for particle in field.particles() {
        surface.save();
        draw_particle(particle, surface);
        surface.restore();
    }
}

fn draw_particle<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    match *particle {
        Particle::Gold {
            x,
            y,
            size,
            opacity,
            hue,
            ..
        } => {
            let color = format!("hsl({hue}, 80%, 60%)");
            surface.set_alpha(opacity);
            surface.set_fill(&color);
            surface.fill_circle(x, y, size);
            // Second pass with the shadow enabled gives the soft halo.
            surface.set_glow(10.0, &color);
            surface.fill_circle(x, y, size);
        }
        Particle::Fire {
            x,
            y,
            size,
            opacity,
            hue,
            ..
        } => {
            surface.set_alpha(opacity);
            surface.fill_radial_glow(x, y, size * 2.0, &format!("hsl({hue}, 100%, 70%)"));
        }
        Particle::Dust {
            x, y, size, opacity, ..
        } => {
            surface.set_alpha(opacity);
            surface.set_fill("#c8b89a");
            surface.fill_circle(x, y, size);
        }
        Particle::Star {
            x,
            y,
            twinkle_phase,
            size,
            opacity,
            color,
            ..
        } => {
            let twinkle = twinkle_phase.sin() * 0.5 + 0.5;
            surface.set_alpha(opacity * twinkle);
            surface.set_fill(color);
            surface.set_glow(8.0, color);
            surface.fill_circle(x, y, size * twinkle);
        }
        Particle::Glyph {
            x,
            y,
            glyph,
            size,
            opacity,
            ..
        } => {
            let mut buf = [0u8; 4];
            surface.set_alpha(opacity);
            surface.set_fill("#00ff88");
            surface.set_glow(8.0, "#00ff88");
            surface.fill_text(glyph.encode_utf8(&mut buf), &format!("{size}px monospace"), x, y);
        }
        Particle::GoldFlake {
            x,
            y,
            rotation,
            size,
            opacity,
            ..
        } => {
            surface.set_alpha(opacity);
            surface.translate(x, y);
            surface.rotate(rotation * PI / 180.0);
            surface.set_fill("#ffd700");
            surface.set_glow(5.0, "#ffd700");
            surface.fill_rect(-size / 2.0, -size / 2.0, size, size);
        }
        Particle::Confetti {
            x,
            y,
            rotation,
            size,
            opacity,
            color,
            ..
        } => {
            surface.set_alpha(opacity);
            surface.translate(x, y);
            surface.rotate(rotation * PI / 180.0);
            surface.set_fill(color);
            surface.fill_rect(-size / 2.0, -size / 4.0, size, size / 2.0);
        }
    }
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_glow(&mut self, blur: f64, color: &str) {
        self.set_shadow_blur(blur);
        self.set_shadow_color(color);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius.max(0.0), 0.0, TAU).ok();
        self.fill();
    }

    fn fill_radial_glow(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        let radius = radius.max(0.0);
        let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            return;
        };
        gradient.add_color_stop(0.0, color).ok();
        gradient.add_color_stop(1.0, "transparent").ok();
        self.set_fill_style_canvas_gradient(&gradient);
        self.fill_circle(x, y, radius);
    }

    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }

    fn rotate(&mut self, radians: f64) {
        CanvasRenderingContext2d::rotate(self, radians).ok();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, font: &str, x: f64, y: f64) {
        self.set_font(font);
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}


#[cfg(test)]
mod tests {
    use super::recording::{Op, RecordingSurface};
    use super::*;
    use crate::particles::Variant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draw_clears_first_and_balances_save_restore() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(Variant::Dust, 320.0, 240.0, &mut rng);
        let mut surface = RecordingSurface::default();
        draw_field(&field, &mut surface);
        assert_eq!(surface.ops[0], Op::Clear(320.0, 240.0));
        let saves = surface.ops.iter().filter(|op| **op == Op::Save).count();
        let restores = surface.ops.iter().filter(|op| **op == Op::Restore).count();
        assert_eq!(saves, field.len());
        assert_eq!(restores, field.len());
        let circles = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(..)))
            .count();
        assert_eq!(circles, field.len());
    }

    #[test]
    fn test_glyph_draws_monospace_text() {
        let field_particle = Particle::Glyph {
            x: 5.0,
            y: 6.0,
            speed: 1.0,
            glyph: 'א',
            size: 12.0,
            opacity: 0.4,
            change_rate: 0.0,
        };
        let mut surface = RecordingSurface::default();
        draw_particle(&field_particle, &mut surface);
        assert!(surface.ops.contains(&Op::Alpha(0.4)));
        assert!(
            surface
                .ops
                .contains(&Op::Text("א".into(), "12px monospace".into(), 5.0, 6.0))
        );
    }

    #[test]
    fn test_star_alpha_follows_twinkle() {
        let star = Particle::Star {
            x: 1.0,
            y: 1.0,
            twinkle_phase: -PI / 2.0,
            twinkle_speed: 0.01,
            size: 2.0,
            opacity: 0.9,
            color: "#fff",
        };
        let mut surface = RecordingSurface::default();
        draw_particle(&star, &mut surface);
        // sin(-pi/2) maps to zero: fully transparent, zero radius.
        assert!(surface.ops.contains(&Op::Alpha(0.0)));
        assert!(surface.ops.contains(&Op::Circle(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_confetti_is_rotated_half_height_rect() {
        let confetti = Particle::Confetti {
            x: 10.0,
            y: 20.0,
            speed_x: 0.0,
            speed_y: 1.0,
            wobble: 0.0,
            wobble_speed: 0.1,
            rotation: 0.0,
            rot_speed: 1.0,
            size: 8.0,
            opacity: 0.5,
            color: "#4ecdc4",
        };
        let mut surface = RecordingSurface::default();
        draw_particle(&confetti, &mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Alpha(0.5),
                Op::Translate(10.0, 20.0),
                Op::Rotate(0.0),
                Op::Fill("#4ecdc4".into()),
                Op::Rect(-4.0, -2.0, 8.0, 4.0),
            ]
        );
    }
}
