use crate::event::event_model::RegionDetail;
use crate::format::escape::{encode_uri, escape_html};
use crate::format::timestamp::format_timestamp;
use crate::log::entry::LogEntry;
use crate::region::region_model::{RegionId, RegionRecord};

// ============================================================================
// Entry templates — every interpolated payload value is escaped here
// ============================================================================

/// Render one log entry as an `<li>` fragment for the events list.
pub fn render_entry(entry: &LogEntry) -> String {
    let time = time_div(entry);
    match entry {
        LogEntry::Discovered {
            region, in_dom, ..
        } => format!(
            "<li class=\"new region-{id}\">Region #{id} is {verb} DOM {time}</li>",
            id = region,
            verb = if *in_dom { "found in" } else { "added to" },
        ),
        LogEntry::Removed { region, .. } => format!(
            "<li class=\"removal region-{id}\">Region #{id} was removed from DOM, or is no longer a live region {time}</li>",
            id = region,
        ),
        LogEntry::PageLoaded { url, .. } => format!(
            "<li class=\"url\"><div class=\"ellipsis\">Page Loaded [{url}]</div>{time}</li>",
            url = escape_html(url),
        ),
        LogEntry::Detail { detail, .. } => render_detail(detail, &time),
    }
}

fn render_detail(detail: &RegionDetail, time: &str) -> String {
    let id = detail.region.map(|r| r.to_string()).unwrap_or_default();
    let class = match detail.region {
        Some(region) => format!("region region-{}", region),
        None => "region".to_string(),
    };

    let mut html = format!("<li class=\"{}\">", class);
    push_meta(&mut html, "role", "Role", detail.role.as_deref());
    push_meta(&mut html, "type", "Politeness", detail.politeness.as_deref());
    push_meta(&mut html, "atomic", "Atomic", detail.atomic.as_deref());
    push_meta(&mut html, "relevant", "Relevant", detail.relevant.as_deref());
    if let Some(ref frame) = detail.frame_url {
        html.push_str(&format!(
            "<span class=\"frame meta\"><strong>Frame:</strong> {}</span>",
            escape_html(frame)
        ));
    }
    html.push_str(&format!(
        "<div class=\"path\"><em class=\"id\">{}</em><a href=\"#\">{}</a></div>",
        id,
        escape_html(detail.path.as_deref().unwrap_or(""))
    ));
    html.push_str(&format!(
        "<div class=\"content accname\">{}</div>",
        escape_html(detail.acc_name.as_deref().unwrap_or(""))
    ));
    html.push_str(&format!(
        "<div class=\"content html\"><pre>{}</pre></div>",
        escape_html(detail.html.as_deref().unwrap_or(""))
    ));
    html.push_str(time);
    html.push_str("</li>");
    html
}

fn push_meta(html: &mut String, class: &str, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        html.push_str(&format!(
            "<span class=\"{} meta\"><strong>{}:</strong> {}</span>",
            class,
            label,
            escape_html(&encode_uri(value))
        ));
    }
}

fn time_div(entry: &LogEntry) -> String {
    format!("<div class=\"time\">{}</div>", format_timestamp(entry.time()))
}

/// Render one row of the region index.
pub fn render_region_row(record: &RegionRecord, selected: bool) -> String {
    let mut classes = String::from("tab");
    if !record.is_active() {
        classes.push_str(" gone");
    }
    if selected {
        classes.push_str(" active");
    }
    format!(
        "<li role=\"none\" class=\"region region-{id}\"><button role=\"tab\" aria-selected=\"{selected}\" aria-controls=\"events\" class=\"{classes}\" data-region=\"{id}\"><em class=\"id\">{id}</em>{path}</button></li>",
        id = record.id,
        selected = selected,
        classes = classes,
        path = escape_html(&record.path),
    )
}

/// Stylesheet rule hiding every events-list entry not tagged with `region`.
pub fn filter_rule(region: RegionId) -> String {
    format!("#events li:not(.region-{}) {{ display: none; }}", region)
}

// ============================================================================
// Plain-text rendering
// ============================================================================

/// One-line text form of an entry, for terminal output.
pub fn render_entry_text(entry: &LogEntry) -> String {
    let time = format_timestamp(entry.time());
    match entry {
        LogEntry::Discovered {
            region,
            path,
            in_dom,
            ..
        } => format!(
            "[{}] Region #{} is {} DOM ({})",
            time,
            region,
            if *in_dom { "found in" } else { "added to" },
            path
        ),
        LogEntry::Removed { region, .. } => format!(
            "[{}] Region #{} was removed from DOM, or is no longer a live region",
            time, region
        ),
        LogEntry::PageLoaded { url, .. } => format!("[{}] Page Loaded [{}]", time, url),
        LogEntry::Detail { detail, .. } => {
            let mut parts = Vec::new();
            if let Some(ref role) = detail.role {
                parts.push(format!("Role: {}", role));
            }
            if let Some(ref politeness) = detail.politeness {
                parts.push(format!("Politeness: {}", politeness));
            }
            if let Some(ref atomic) = detail.atomic {
                parts.push(format!("Atomic: {}", atomic));
            }
            if let Some(ref relevant) = detail.relevant {
                parts.push(format!("Relevant: {}", relevant));
            }
            if let Some(ref frame) = detail.frame_url {
                parts.push(format!("Frame: {}", frame));
            }
            let id = detail
                .region
                .map(|r| format!("#{}", r))
                .unwrap_or_else(|| "#?".to_string());
            let name = detail.acc_name.as_deref().unwrap_or("");
            if parts.is_empty() {
                format!("[{}] Region {} \"{}\"", time, id, name)
            } else {
                format!("[{}] Region {} [{}] \"{}\"", time, id, parts.join(", "), name)
            }
        }
    }
}
