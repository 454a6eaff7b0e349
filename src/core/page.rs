use super::avatar::{avatar_key, section_description, AvatarRig};
use super::carousel::Carousel;
use super::constants::*;
use super::guide::{GuideEvent, GuideSelector};
use super::narration::{Narrator, Utterance};
use super::particles::{FieldParams, ParticleField};
use super::sections::{validate_layout, LayoutError, Section, UnmatchedPolicy};
use glam::Vec2;
use rand::Rng;

/// What changed during one tick, for the DOM layer to mirror.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    pub guide: Option<GuideEvent>,
    pub speech: Option<Utterance>,
    pub testimonial: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub offset_px: f32,
    pub opacity: f32,
}

pub fn hero_parallax(scroll_y: f32) -> HeroParallax {
    let y = scroll_y.max(0.0);
    HeroParallax {
        offset_px: y * HERO_PARALLAX_FACTOR,
        opacity: (1.0 - y * HERO_FADE_PER_PX).max(0.0),
    }
}

/// Spotlight gradient center in percent of the viewport.
pub fn spotlight_center(pointer: Vec2) -> Vec2 {
    Vec2::splat(50.0) + pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)) * SPOTLIGHT_SPAN_PCT
}

/// Pointer position in client pixels to [-1, 1] on both axes.
pub fn pointer_ndc(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    ((client / viewport - Vec2::splat(0.5)) * 2.0).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// Single owner of all mutable page state. Browser callbacks go through
/// these methods; after `teardown` every one of them is a no-op.
pub struct PageState {
    background: ParticleField,
    dust: Option<ParticleField>,
    guide: GuideSelector,
    avatar: AvatarRig,
    narrator: Narrator,
    carousel: Carousel,
    scroll_y: f32,
    pointer: Vec2,
    mounted: bool,
}

impl PageState {
    pub fn new<R: Rng + ?Sized>(
        sections: &'static [Section],
        viewport: Vec2,
        initial_scroll: f32,
        policy: UnmatchedPolicy,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        if let Err(e) = validate_layout(sections) {
            log::warn!("[page] section layout: {}", e);
        }
        let guide = GuideSelector::new(sections, initial_scroll, policy)?;
        Ok(Self {
            background: ParticleField::new(FieldParams::network(), viewport.x, viewport.y, rng),
            dust: None,
            guide,
            avatar: AvatarRig::new(),
            narrator: Narrator::default(),
            carousel: Carousel::new(TESTIMONIAL_COUNT, TESTIMONIAL_PERIOD_SEC),
            scroll_y: initial_scroll,
            pointer: Vec2::ZERO,
            mounted: true,
        })
    }

    /// Adds the avatar panel's particle dust on a surface of `size`.
    pub fn with_dust<R: Rng + ?Sized>(mut self, size: Vec2, rng: &mut R) -> Self {
        self.dust = Some(ParticleField::new(FieldParams::dust(), size.x, size.y, rng));
        self
    }

    pub fn background(&self) -> &ParticleField {
        &self.background
    }

    pub fn dust(&self) -> Option<&ParticleField> {
        self.dust.as_ref()
    }

    pub fn guide(&self) -> &GuideSelector {
        &self.guide
    }

    pub fn avatar(&self) -> &AvatarRig {
        &self.avatar
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn testimonial(&self) -> usize {
        self.carousel.index()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<GuideEvent> {
        if !self.mounted {
            return None;
        }
        self.scroll_y = scroll_y;
        self.guide.on_scroll(scroll_y)
    }

    pub fn on_pointer(&mut self, ndc: Vec2) {
        if !self.mounted {
            return;
        }
        self.pointer = ndc;
        self.avatar.set_pointer(ndc);
    }

    pub fn on_resize(&mut self, viewport: Vec2) {
        if self.mounted {
            self.background.resize(viewport.x, viewport.y);
        }
    }

    pub fn on_dust_resize(&mut self, size: Vec2) {
        if !self.mounted {
            return;
        }
        if let Some(d) = &mut self.dust {
            d.resize(size.x, size.y);
        }
    }

    pub fn dismiss_guide(&mut self) -> Option<GuideEvent> {
        if !self.mounted {
            return None;
        }
        self.guide.dismiss()
    }

    pub fn reopen_guide(&mut self) -> Option<GuideEvent> {
        if !self.mounted {
            return None;
        }
        self.guide.reopen()
    }

    /// Returns whether narration is now enabled.
    pub fn toggle_narration(&mut self) -> bool {
        if !self.mounted {
            return self.narrator.is_enabled();
        }
        self.narrator.toggle()
    }

    pub fn toggle_avatar_expanded(&mut self) -> bool {
        if !self.mounted {
            return self.avatar.is_expanded();
        }
        self.avatar.toggle_expanded()
    }

    /// Speech for the avatar's current section, for the "Narrate" button.
    pub fn narrate_current(&self) -> Option<Utterance> {
        if !self.mounted {
            return None;
        }
        let key = self.avatar.key()?;
        self.narrator.utter(section_description(key))
    }

    pub fn tick(&mut self, dt_sec: f32) -> FrameUpdate {
        if !self.mounted {
            return FrameUpdate::default();
        }
        self.background.tick(dt_sec);
        if let Some(d) = &mut self.dust {
            d.tick(dt_sec);
        }
        let guide = self.guide.tick(dt_sec);
        let key = avatar_key(self.guide.content().section);
        let speech = self
            .avatar
            .set_section(key)
            .and_then(|text| self.narrator.utter(text));
        self.avatar.tick(dt_sec);
        FrameUpdate {
            guide,
            speech,
            testimonial: self.carousel.tick(dt_sec),
        }
    }

    pub fn teardown(&mut self) {
        self.guide.teardown();
        self.mounted = false;
    }
}
