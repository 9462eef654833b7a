//! Browser bindings for the magic link email factor form.
//!
//! The host page loads the wasm module and calls one of the exported init
//! functions once the form is in the DOM:
//!
//! ```javascript
//! import init, { initMagicLinkSignIn } from "./magic_link_web.js";
//!
//! await init();
//! initMagicLinkSignIn();
//! ```
//!
//! Build and run the browser tests with:
//! ```bash
//! wasm-pack build packages/magic-link-web --target web
//! wasm-pack test --headless --firefox packages/magic-link-web
//! ```

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod form;

#[cfg(target_arch = "wasm32")]
pub use self::exports::*;

#[cfg(target_arch = "wasm32")]
mod exports {
    use magic_link::Variant;
    use wasm_bindgen::prelude::*;

    use crate::{console, form};

    /// Bind the sign-in handler (`#magic-link` control).
    #[wasm_bindgen(js_name = initMagicLinkSignIn)]
    pub fn init_magic_link_sign_in() -> Result<bool, JsValue> {
        console::init();
        form::attach(Variant::SignIn, None)
    }

    /// Bind the sign-up handler (`#magic-link-signup` control).
    #[wasm_bindgen(js_name = initMagicLinkSignUp)]
    pub fn init_magic_link_sign_up() -> Result<bool, JsValue> {
        console::init();
        form::attach(Variant::SignUp, None)
    }

    /// Bind a handler by variant name (`sign-in` or `sign-up`), optionally
    /// to a form other than `#email-factor`.
    #[wasm_bindgen(js_name = initMagicLinkForm)]
    pub fn init_magic_link_form(variant: &str, form_id: Option<String>) -> Result<bool, JsValue> {
        console::init();
        let variant: Variant = variant.parse().map_err(|e: String| JsValue::from_str(&e))?;
        form::attach(variant, form_id.as_deref())
    }
}
