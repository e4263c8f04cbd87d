use crate::log::template::render_entry_text;
use crate::report::report_model::PanelSnapshot;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a panel snapshot for terminal output.
///
/// Produces output like:
/// ```text
/// === Live regions (tab 7) ===
///
/// #3 active  div#status
/// #4 gone    div.toast
///
/// [12:00:01:250] Region #3 is added to DOM (div#status)
/// [12:00:01:250] Region #3 [Role: status] "Saved"
///
/// === 2 regions (1 active, 1 gone), 2 of 2 entries shown ===
/// ```
pub fn format_console_report(snapshot: &PanelSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Live regions (tab {}) ===\n\n", snapshot.state.tab_id));

    let selected = snapshot.selected_row();
    for (row, record) in snapshot.regions.iter().enumerate() {
        let status = if record.is_active() { "active" } else { "gone" };
        let marker = if selected == Some(row) { "*" } else { " " };
        out.push_str(&format!("{}#{} {:<7} {}\n", marker, record.id, status, record.path));
    }
    if !snapshot.regions.is_empty() {
        out.push('\n');
    }

    let mut shown = 0;
    for entry in snapshot.visible_entries() {
        out.push_str(&render_entry_text(entry));
        out.push('\n');
        shown += 1;
    }

    // Summary line
    out.push_str(&format!(
        "\n=== {} regions ({} active, {} gone), {} of {} entries shown",
        snapshot.regions.len(),
        snapshot.active_regions(),
        snapshot.gone_regions(),
        shown,
        snapshot.entries.len()
    ));

    if let Some(region) = snapshot.filter {
        out.push_str(&format!(" (filter: #{})", region));
    }

    out.push_str(" ===\n");

    out
}
