use rand::Rng;

use super::{ParticleField, Surface, draw_field};

/// Frame driver for a [`ParticleField`].
///
/// The browser loop calls [`Animator::frame`] once per animation frame and
/// keeps rescheduling while it returns `true`. After [`Animator::stop`] a
/// frame is a no-op: no update, no draw.
pub struct Animator<R: Rng> {
    field: ParticleField,
    rng: R,
    active: bool,
}

impl<R: Rng> Animator<R> {
    pub fn new(field: ParticleField, rng: R) -> Self {
        Self {
            field,
            rng,
            active: true,
        }
    }

    /// Run one update pass and one draw pass. Returns whether the loop should continue.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.active {
            return false;
        }
        self.field.update(&mut self.rng);
        draw_field(&self.field, surface);
        true
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
