use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use seafood_catalog::app::share::{PopupWindow, ShareEnvironment};
use seafood_catalog::error::ShareError;
use seafood_catalog::SharePayload;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Share sheet and clipboard as exposed on `window.navigator`.
pub struct BrowserShare;

fn rejected(value: JsValue) -> ShareError {
    ShareError::Rejected(super::describe(&value))
}

/// `navigator` and one of its members, when the member exists.
fn navigator_member(name: &str) -> Option<(JsValue, JsValue)> {
    let window = web_sys::window()?;
    let navigator = Reflect::get(&window, &JsValue::from_str("navigator")).ok()?;
    let member = Reflect::get(&navigator, &JsValue::from_str(name)).ok()?;
    if member.is_undefined() || member.is_null() {
        return None;
    }
    Some((navigator, member))
}

async fn call_promise(function: &Function, this: &JsValue, arg: &JsValue) -> Result<(), ShareError> {
    let promise: Promise = function
        .call1(this, arg)
        .map_err(rejected)?
        .dyn_into()
        .map_err(rejected)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
}

#[async_trait(?Send)]
impl ShareEnvironment for BrowserShare {
    fn has_native_share(&self) -> bool {
        navigator_member("share").is_some_and(|(_, share)| share.is_function())
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let (navigator, share) = navigator_member("share").ok_or(ShareError::Unavailable)?;
        let share: Function = share.dyn_into().map_err(|_| ShareError::Unavailable)?;

        let data = Object::new();
        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(rejected)?;
        }

        call_promise(&share, &navigator, &data).await
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let (_, clipboard) = navigator_member("clipboard").ok_or(ShareError::Unavailable)?;
        let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(rejected)?
            .dyn_into()
            .map_err(|_| ShareError::Unavailable)?;

        call_promise(&write, &clipboard, &JsValue::from_str(text)).await
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn open_window(&self, popup: &PopupWindow) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(error) =
            window.open_with_url_and_target_and_features(&popup.url, popup.name, popup.features)
        {
            web_sys::console::error_1(&error);
        }
    }
}
