use crate::core::Utterance;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Thin adapter over `window.speechSynthesis`. Every failure is logged and
/// swallowed; the page carries on without narration.
pub struct Speech {
    synth: Option<web::SpeechSynthesis>,
}

impl Speech {
    pub fn new(window: &web::Window) -> Self {
        let synth = match window.speech_synthesis() {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[speech] speechSynthesis unavailable: {:?}", e);
                None
            }
        };
        Self { synth }
    }

    /// Interrupts whatever is being spoken and says `u` instead.
    pub fn speak(&self, u: &Utterance) {
        let Some(synth) = &self.synth else {
            return;
        };
        synth.cancel();
        match web::SpeechSynthesisUtterance::new_with_text(&u.text) {
            Ok(utter) => {
                utter.set_lang(u.lang);
                utter.set_rate(u.rate);
                utter.set_pitch(u.pitch);
                if let Err(e) = call_speak(synth, &utter) {
                    log::warn!("[speech] speak failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("[speech] utterance rejected: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}

// `SpeechSynthesis::speak` has no catching binding; go through the JS
// function so a synchronous throw comes back as an `Err`.
fn call_speak(
    synth: &web::SpeechSynthesis,
    utter: &web::SpeechSynthesisUtterance,
) -> Result<JsValue, JsValue> {
    let speak: js_sys::Function =
        js_sys::Reflect::get(synth, &JsValue::from_str("speak"))?.dyn_into()?;
    speak.call1(synth, utter)
}
