//! Voice Input
//!
//! Single-utterance speech recognition over the browser API. Chrome still
//! ships the API behind a vendor prefix, so the constructor is looked up by
//! name instead of through the web-sys binding directly.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

const LANG: &str = "ja-JP";

fn constructor() -> Option<js_sys::Function> {
    let win = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(ctor) = js_sys::Reflect::get(&win, &JsValue::from_str(name)) {
            if ctor.is_function() {
                return Some(ctor.unchecked_into());
            }
        }
    }
    None
}

/// Build a recognizer for one-shot dictation, or `None` when the browser has
/// no speech support. `on_transcript` receives the recognized text;
/// `on_state` tracks whether the microphone is live.
pub fn create(
    on_transcript: impl Fn(String) + 'static,
    on_state: impl Fn(bool) + Clone + 'static,
) -> Option<SpeechRecognition> {
    let ctor = constructor()?;
    let rec: SpeechRecognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .ok()?
        .unchecked_into();

    rec.set_lang(LANG);
    rec.set_continuous(false);
    rec.set_interim_results(false);

    let state = on_state.clone();
    let onstart = Closure::<dyn FnMut()>::new(move || state(true));
    rec.set_onstart(Some(onstart.as_ref().unchecked_ref()));
    onstart.forget();

    let state = on_state.clone();
    let onend = Closure::<dyn FnMut()>::new(move || state(false));
    rec.set_onend(Some(onend.as_ref().unchecked_ref()));
    onend.forget();

    let state = on_state.clone();
    let onerror = Closure::<dyn FnMut(JsValue)>::new(move |_err: JsValue| state(false));
    rec.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let state = on_state;
    let onresult = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(move |ev: SpeechRecognitionEvent| {
        let transcript = ev
            .results()
            .and_then(|list| list.get(0))
            .and_then(|result| result.get(0))
            .map(|alternative| alternative.transcript());
        if let Some(text) = transcript {
            on_transcript(text);
        }
        state(false);
    });
    rec.set_onresult(Some(onresult.as_ref().unchecked_ref()));
    onresult.forget();

    Some(rec)
}

/// Start or stop dictation depending on the current listening state
pub fn toggle(rec: &SpeechRecognition, listening: bool) -> Result<(), String> {
    if listening {
        rec.stop();
        Ok(())
    } else {
        rec.start().map_err(|e| format!("{:?}", e))
    }
}
