//! EmailJS relay
//!
//! Sends the contact template through the EmailJS browser SDK (`emailjs`
//! global). Whether to use it at all is decided by `RelayEmailGateway`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use lost_found_core::gateway::{EmailRelay, TemplateParams};
use lost_found_core::EmailConfig;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init, catch)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    async fn emailjs_send(service_id: &str, template_id: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

pub struct EmailJsRelay {
    service_id: String,
    template_id: String,
}

impl EmailJsRelay {
    /// Initialise the SDK with the public key
    pub fn connect(config: &EmailConfig) -> Result<Self, String> {
        emailjs_init(&config.public_key).map_err(js_error)?;
        Ok(Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
        })
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), String> {
        let js_params = serde_wasm_bindgen::to_value(params).map_err(|e| e.to_string())?;
        emailjs_send(&self.service_id, &self.template_id, js_params)
            .await
            .map(|_| ())
            .map_err(js_error)
    }
}
