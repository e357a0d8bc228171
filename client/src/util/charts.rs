//! Vital-sign chart options and the ECharts bridge.
//!
//! Option builders are pure and take the noise source as a closure so tests
//! can pin the output. The browser side serialises an option to JSON, parses
//! it into a JS object and hands it to the page's `echarts` global.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use serde::Serialize;

pub const SAMPLE_COUNT: usize = 50;
pub const ECG_TITLE: &str = "ECG Waveform";
pub const SPO2_TITLE: &str = "SpO2 Levels";

/// Element ids of the chart containers.
pub const ECG_CONTAINER_ID: &str = "ecgChart";
pub const SPO2_CONTAINER_ID: &str = "spo2Chart";

/// Subset of the ECharts option object the dashboard uses.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub title: ChartTitle,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<LineSeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Axis {
    fn category() -> Self {
        Self { kind: "category", min: None, max: None }
    }

    fn value(range: Option<(f64, f64)>) -> Self {
        Self { kind: "value", min: range.map(|r| r.0), max: range.map(|r| r.1) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[index, value]` pairs.
    pub data: Vec<(usize, f64)>,
    pub smooth: bool,
    pub line_style: LineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: u32,
}

/// Simulated ECG trace: a sine wave with up to 2 units of added noise.
/// `noise` must yield values in `[0, 1)`.
#[allow(clippy::cast_precision_loss)]
pub fn ecg_series(mut noise: impl FnMut() -> f64) -> Vec<(usize, f64)> {
    (0..SAMPLE_COUNT)
        .map(|i| (i, (i as f64 / 5.0).sin() * 10.0 + noise() * 2.0))
        .collect()
}

/// Simulated oxygen saturation between 95 and 98 percent.
pub fn spo2_series(mut noise: impl FnMut() -> f64) -> Vec<(usize, f64)> {
    (0..SAMPLE_COUNT).map(|i| (i, 95.0 + noise() * 3.0)).collect()
}

fn line_option(title: &str, y_range: Option<(f64, f64)>, data: Vec<(usize, f64)>) -> ChartOption {
    ChartOption {
        title: ChartTitle { text: title.to_owned() },
        x_axis: Axis::category(),
        y_axis: Axis::value(y_range),
        series: vec![LineSeries { kind: "line", data, smooth: true, line_style: LineStyle { width: 2 } }],
    }
}

pub fn ecg_option(noise: impl FnMut() -> f64) -> ChartOption {
    line_option(ECG_TITLE, None, ecg_series(noise))
}

pub fn spo2_option(noise: impl FnMut() -> f64) -> ChartOption {
    line_option(SPO2_TITLE, Some((90.0, 100.0)), spo2_series(noise))
}

#[cfg(feature = "hydrate")]
mod bridge {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type EChartsInstance;

        #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
        pub fn init(dom: &web_sys::Element) -> Result<EChartsInstance, JsValue>;

        #[wasm_bindgen(catch, js_namespace = echarts, js_name = getInstanceByDom)]
        pub fn instance_by_dom(dom: &web_sys::Element) -> Result<Option<EChartsInstance>, JsValue>;

        #[wasm_bindgen(method, js_name = setOption)]
        pub fn set_option(this: &EChartsInstance, option: &JsValue);

        #[wasm_bindgen(method)]
        pub fn resize(this: &EChartsInstance);
    }
}

#[cfg(feature = "hydrate")]
fn container(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Initialise a chart in the element with id `container_id`.
#[cfg(feature = "hydrate")]
pub fn mount_chart(container_id: &str, option: &ChartOption) {
    let Some(element) = container(container_id) else {
        leptos::logging::warn!("chart container #{container_id} not found");
        return;
    };
    let json = match serde_json::to_string(option) {
        Ok(json) => json,
        Err(e) => {
            leptos::logging::error!("chart option encode failed: {e}");
            return;
        }
    };
    let Ok(option) = js_sys::JSON::parse(&json) else {
        leptos::logging::error!("chart option parse failed for #{container_id}");
        return;
    };
    match bridge::init(&element) {
        Ok(chart) => chart.set_option(&option),
        Err(e) => leptos::logging::warn!("echarts unavailable: {e:?}"),
    }
}

/// Mount both vital-sign charts with browser randomness as the noise source.
#[cfg(feature = "hydrate")]
pub fn mount_vital_charts() {
    mount_chart(ECG_CONTAINER_ID, &ecg_option(js_sys::Math::random));
    mount_chart(SPO2_CONTAINER_ID, &spo2_option(js_sys::Math::random));
}

/// Resize both charts to their containers.
#[cfg(feature = "hydrate")]
pub fn resize_vital_charts() {
    for id in [ECG_CONTAINER_ID, SPO2_CONTAINER_ID] {
        if let Some(element) = container(id) {
            if let Ok(Some(chart)) = bridge::instance_by_dom(&element) {
                chart.resize();
            }
        }
    }
}
