//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 line renderer lives in `assets/js/line-chart.js`, is embedded at
//! compile time and evaluated as a global once D3 has loaded. This module
//! serializes a series and calls that global.

use dsc_core::series::Series;
use serde_json::json;

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DSC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop. Call once at
/// app startup.
///
/// The script is stored on `window` and evaluated at global scope by an
/// indirect eval once `d3` exists, then its functions are promoted to
/// `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__dscChartScript = {};",
        serde_json::to_string(LINE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__dscChartScript);
                    delete window.__dscChartScript;
                    if (typeof renderSeriesChart !== 'undefined') window.renderSeriesChart = renderSeriesChart;
                    if (typeof destroySeriesChart !== 'undefined') window.destroySeriesChart = destroySeriesChart;
                    window.__dscChartsReady = true;
                    console.log('DSC charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON document for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Global holding the interval of the render waiting on D3, if any.
const RENDER_POLL: &str = "window.__dscRenderPoll";

/// Render `series` into the element with id `container_id`.
///
/// Polls until D3, the chart script and the container all exist, so it can
/// be called before the container is mounted. A render still waiting from an
/// earlier call is cancelled first.
pub fn render_series_chart(container_id: &str, series: &Series, height: u32) {
    call_js(&render_script(container_id, series, height));
}

/// Destroy/clean up a chart in the given container, cancelling any render
/// still waiting on D3.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

fn render_script(container_id: &str, series: &Series, height: u32) -> String {
    let data_json = serde_json::to_string(series).unwrap_or_default();
    let config_json = json!({ "height": height }).to_string();
    let escaped_data = escape_for_js(&data_json);
    let escaped_config = escape_for_js(&config_json);
    format!(
        r#"
        (function() {{
            clearInterval({RENDER_POLL});
            {RENDER_POLL} = setInterval(function() {{
                if (window.__dscChartsReady &&
                    typeof window.renderSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval({RENDER_POLL});
                    {RENDER_POLL} = undefined;
                    try {{
                        window.renderSeriesChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[DSC] renderSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn destroy_script(container_id: &str) -> String {
    format!(
        r#"
        clearInterval({RENDER_POLL});
        {RENDER_POLL} = undefined;
        if (typeof window.destroySeriesChart !== 'undefined') {{
            window.destroySeriesChart('{container_id}');
        }} else {{
            var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';
        }}
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsc_core::series::SeriesMode;

    #[test]
    fn escape_keeps_json_inside_single_quotes() {
        let escaped = escape_for_js(r#"{"label":"it's \"b\" vs a"}"#);
        assert_eq!(escaped, r#"{"label":"it\'s \\"b\\" vs a"}"#);
    }

    #[test]
    fn escape_strips_newlines() {
        assert_eq!(escape_for_js("{\n\"a\": 1\n}"), "{\"a\": 1}");
    }

    fn sample_series() -> Series {
        let rows: Vec<dsc_core::dataset::Record> =
            serde_json::from_value(json!([{"a": 1, "b": 2}])).unwrap();
        dsc_core::series::build_series(&rows, "a", "b", SeriesMode::Numeric).unwrap()
    }

    #[test]
    fn render_cancels_pending_render_before_polling() {
        let js = render_script("chart", &sample_series(), 300);
        let cancel = js.find("clearInterval(window.__dscRenderPoll)").unwrap();
        let start = js.find("window.__dscRenderPoll = setInterval").unwrap();
        assert!(cancel < start);
        assert!(js.contains("window.renderSeriesChart('chart'"));
    }

    #[test]
    fn destroy_cancels_pending_render_and_calls_renderer_cleanup() {
        let js = destroy_script("chart");
        assert!(js.contains("clearInterval(window.__dscRenderPoll)"));
        assert!(js.contains("window.destroySeriesChart('chart')"));
        assert!(!js.contains("setInterval"));
    }
}
