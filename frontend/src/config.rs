use log::Level;

use crate::effects::decrypt::{Alphabet, DecryptSettings, RevealRate};
use crate::effects::scroll::{Curve, SectionReveal};
use crate::error::EffectError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DECRYPT_TICK_MS: u32 = 30;
pub const DECRYPT_DELAY_MS: u32 = 2500;
pub const NAV_DECRYPT_DELAY_MS: u32 = 1000;
pub const PRELOADER_DECRYPT_DELAY_MS: u32 = 100;
pub const PRELOADER_MS: u32 = 1800;
pub const LONG_PRESS_MS: u32 = 500;
pub const KEYSTROKE_MS: u32 = 50;
pub const INTRO_FADE_DELAY_MS: u32 = 4000;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// The two layouts of the page. `Studio` is the landing page with the work
/// panel; `Showcase` is the stand-alone work overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVariant {
    Studio,
    Showcase,
}

impl PageVariant {
    pub fn reveal_ticks_per_glyph(self) -> u32 {
        match self {
            PageVariant::Studio => 4,
            PageVariant::Showcase => 3,
        }
    }

    /// Only the studio page carries the case-files panel.
    pub fn has_work_panel(self) -> bool {
        self == PageVariant::Studio
    }

    pub fn decrypt_settings(self) -> DecryptSettings {
        DecryptSettings {
            tick_ms: DECRYPT_TICK_MS,
            rate: RevealRate::one_glyph_every(self.reveal_ticks_per_glyph()),
            alphabet: Alphabet::default(),
        }
    }

    pub fn section_reveal(self) -> Result<SectionReveal, EffectError> {
        let reveal = match self {
            PageVariant::Studio => SectionReveal::new(
                Curve::new(&[0.0, 0.4, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.0])?,
                Curve::new(&[0.0, 0.5, 1.0], &[50.0, 0.0, -50.0])?,
            ),
            PageVariant::Showcase => SectionReveal::new(
                Curve::new(&[0.2, 0.4, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])?,
                Curve::new(&[0.2, 0.5], &[50.0, 0.0])?,
            ),
        };
        Ok(reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_tune_the_reveal_rate() {
        assert_eq!(PageVariant::Studio.decrypt_settings().rate.per_tick(), 0.25);
        assert_eq!(
            PageVariant::Showcase.decrypt_settings().rate.per_tick(),
            1.0 / 3.0
        );
    }

    #[test]
    fn only_the_studio_page_has_a_work_panel() {
        assert!(PageVariant::Studio.has_work_panel());
        assert!(!PageVariant::Showcase.has_work_panel());
    }

    #[test]
    fn variant_curves_are_well_formed() {
        for variant in [PageVariant::Studio, PageVariant::Showcase] {
            let reveal = variant.section_reveal().unwrap();
            assert_eq!(reveal.opacity.sample(0.0), 0.0);
            assert_eq!(reveal.opacity.sample(0.6), 1.0);
            assert_eq!(reveal.offset_px.sample(0.0), 50.0);
        }
    }
}
