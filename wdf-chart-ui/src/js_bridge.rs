//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module serializes chart descriptions and calls
//! those globals.

use crate::chart::{ChartData, ChartSpec};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WDF JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call from every chart mount: the scripts are only stored and
/// evaluated on the first call. Evaluation happens at global scope via an
/// indirect `eval()` once D3 is ready, and each renderer is then promoted
/// to `window.*` explicitly.
pub fn init_charts() -> anyhow::Result<()> {
    let all_js = [TOOLTIP_JS, AREA_CHART_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");
    let scripts = serde_json::to_string(&all_js)?;

    call_js(&format!(
        r#"
        if (!window.__wdfChartsRequested) {{
            window.__wdfChartsRequested = true;
            window.__wdfChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__wdfChartScripts);
                    delete window.__wdfChartScripts;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__wdfChartsReady = true;
                    console.log('WDF charts initialized');
                }}
            }}, 100);
        }}
        "#
    ));
    Ok(())
}

/// Render a chart into the element with id `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
/// Polling stops after ten seconds, e.g. when the container was unmounted
/// before it appeared.
pub fn render_chart(container_id: &str, spec: &ChartSpec, data: &ChartData) -> anyhow::Result<()> {
    init_charts()?;

    let (data_json, config_json) = spec.to_json(data)?;
    // Embed as JS string literals; the renderers parse them back.
    let data_literal = serde_json::to_string(&data_json)?;
    let config_literal = serde_json::to_string(&config_json)?;
    let id_literal = serde_json::to_string(container_id)?;
    let render_fn = spec.kind.render_fn();

    log::info!(
        "Rendering {:?} chart into #{} ({} points)",
        spec.kind,
        container_id,
        data.len()
    );

    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (++attempts > 100) {{
                    clearInterval(poll);
                    console.warn('[WDF] gave up waiting to render', {id_literal});
                    return;
                }}
                if (window.__wdfChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}({id_literal}, {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[WDF] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
    Ok(())
}
