use leptos::{mount_to, view};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::HeroProjectionChart;
use crate::application::ProjectionChart;
use crate::domain::{
    errors::{AppError, ChartResult},
    logging::LogComponent,
    projection::ChartConfig,
};
use crate::{log_error, log_info};

/// Parse an optional JSON config; `None` means landing defaults
pub fn parse_config(config_json: Option<String>) -> ChartResult<ChartConfig> {
    match config_json.as_deref().map(str::trim) {
        Some(json) if !json.is_empty() => ChartConfig::from_json(json),
        _ => Ok(ChartConfig::default()),
    }
}

/// Mount the hero chart inside the element with id `element_id`.
#[wasm_bindgen(js_name = mountProjectionChart)]
pub fn mount_projection_chart(
    element_id: &str,
    class: Option<String>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = parse_config(config_json).inspect_err(|e| {
        log_error!(LogComponent::Presentation("WasmApi"), "❌ {}", e);
    })?;

    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .ok_or_else(|| AppError::MountError(format!("element #{} not found", element_id)))?;
    let parent = element.dyn_into::<web_sys::HtmlElement>().map_err(|_| {
        AppError::MountError(format!("element #{} is not an HTML element", element_id))
    })?;

    log_info!(
        LogComponent::Presentation("WasmApi"),
        "🚀 Mounting projection chart into #{}",
        element_id
    );

    let class = class.unwrap_or_default();
    mount_to(parent, move || {
        view! { <HeroProjectionChart class=class config=Some(config) /> }
    });
    Ok(())
}

/// Generated series and risk band as JSON, for hosts that draw their own chart.
#[wasm_bindgen(js_name = projectionSnapshot)]
pub fn projection_snapshot(config_json: Option<String>) -> Result<String, JsValue> {
    Ok(snapshot_json(config_json)?)
}

pub fn snapshot_json(config_json: Option<String>) -> ChartResult<String> {
    let config = parse_config(config_json)?;
    let snapshot = ProjectionChart::build(&config).snapshot();
    Ok(serde_json::to_string(&snapshot)?)
}
