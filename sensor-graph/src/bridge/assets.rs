//! Shader text fetched from the page's origin

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::config::{FRAGMENT_SHADER_ASSET, VERTEX_SHADER_ASSET};
use crate::error::SetupError;
use crate::renderer::ShaderSources;

/// Fetch both shader stages
pub async fn load_shaders(window: &Window) -> Result<ShaderSources, SetupError> {
    Ok(ShaderSources {
        vertex: fetch_text(window, VERTEX_SHADER_ASSET).await?,
        fragment: fetch_text(window, FRAGMENT_SHADER_ASSET).await?,
    })
}

async fn fetch_text(window: &Window, name: &str) -> Result<String, SetupError> {
    let failed = |reason: String| SetupError::ShaderSource {
        name: name.to_string(),
        reason,
    };

    let response = JsFuture::from(window.fetch_with_str(name))
        .await
        .map_err(|e| failed(format!("{:?}", e)))?
        .dyn_into::<Response>()
        .map_err(|_| failed("not a Response".to_string()))?;

    if !response.ok() {
        return Err(failed(format!("HTTP {}", response.status())));
    }

    let text = response.text().map_err(|e| failed(format!("{:?}", e)))?;
    JsFuture::from(text)
        .await
        .map_err(|e| failed(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| failed("body is not text".to_string()))
}
