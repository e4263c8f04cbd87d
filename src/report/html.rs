use crate::log::template::{filter_rule, render_entry, render_region_row};
use crate::report::report_model::PanelSnapshot;

// ============================================================================
// HTML reporter — self-contained copy of the panel view
// ============================================================================

/// Generate a self-contained HTML document of the panel.
///
/// Features:
/// - Region index with gone/active markers
/// - Full event log; the region filter is applied by a stylesheet, so the
///   hidden entries stay in the document
/// - `show-accname` list class when accessible names are displayed
/// - Inline CSS (no external dependencies)
pub fn generate_panel_html(snapshot: &PanelSnapshot) -> String {
    let selected = snapshot.selected_row();
    let mut regions = String::new();
    for (row, record) in snapshot.regions.iter().enumerate() {
        regions.push_str(&render_region_row(record, selected == Some(row)));
        regions.push('\n');
    }

    let mut events = String::new();
    for entry in &snapshot.entries {
        events.push_str(&render_entry(entry));
        events.push('\n');
    }

    let filter_style = snapshot.filter.map(filter_rule).unwrap_or_default();

    let list_class = if snapshot.state.use_acc_name { "show-accname" } else { "" };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Live regions — tab {tab_id}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; display: flex; font-size: 13px; }}
#regions {{ list-style: none; margin: 0; padding: 8px; width: 240px; border-right: 1px solid #ccc; }}
#regions .tab {{ display: block; width: 100%; text-align: left; background: none; border: 0; padding: 4px; cursor: pointer; }}
#regions .tab.gone {{ text-decoration: line-through; color: #999; }}
#regions .tab.active {{ background: #e3f2fd; }}
#events {{ flex: 1; overflow-y: auto; height: 100vh; }}
#events ol {{ margin: 0; padding: 8px 8px 8px 32px; }}
#events li {{ padding: 4px 0; border-bottom: 1px solid #eee; }}
#events li.new {{ color: #2e7d32; }}
#events li.removal {{ color: #c62828; }}
#events li.url {{ background: #f5f5f5; font-weight: bold; }}
.meta {{ margin-right: 12px; }}
.id {{ font-style: normal; font-weight: bold; margin-right: 6px; }}
.time {{ color: #999; font-size: 11px; }}
.content.accname {{ display: none; }}
ol.show-accname .content.accname {{ display: block; }}
ol.show-accname .content.html {{ display: none; }}
</style>
<style id="filterStyle">{filter_style}</style>
</head>
<body>
<ul id="regions" role="tablist">
{regions}</ul>
<div id="events" role="tabpanel">
<ol class="{list_class}">
{events}</ol>
</div>
</body>
</html>"##,
        tab_id = snapshot.state.tab_id,
        filter_style = filter_style,
        regions = regions,
        list_class = list_class,
        events = events,
    )
}
