use chrono::NaiveTime;
use live_region_panel::event::event_model::RegionDetail;
use live_region_panel::log::entry::{EventLog, LogEntry};
use live_region_panel::log::renderer::{LogRenderer, ScrollSurface, VirtualSurface};
use live_region_panel::log::template::{render_entry, render_entry_text, render_region_row};
use live_region_panel::region::region_model::{RegionId, RegionRecord, RegionStatus};

fn t() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(8, 30, 0, 42).unwrap()
}

fn removed(id: u64) -> LogEntry {
    LogEntry::Removed {
        region: RegionId(id),
        time: t(),
    }
}

fn detail(id: Option<u64>) -> RegionDetail {
    RegionDetail {
        region: id.map(RegionId),
        ..RegionDetail::default()
    }
}

/// Surface with room for 5 rows of 20 units.
fn renderer() -> LogRenderer<VirtualSurface> {
    LogRenderer::new(VirtualSurface::new(100.0, 20.0))
}

fn fill(r: &mut LogRenderer<VirtualSurface>, n: usize) {
    for i in 0..n {
        r.append(&removed(i as u64));
    }
}

// =========================================================================
// Auto-scroll
// =========================================================================

#[test]
fn follows_new_entries_while_at_bottom() {
    let mut r = renderer();
    fill(&mut r, 12);
    let s = r.surface();
    assert_eq!(s.scroll_height(), 240.0);
    assert_eq!(s.scroll_top(), 140.0);
    assert!(r.is_at_bottom());
}

#[test]
fn stays_put_when_user_scrolled_up() {
    let mut r = renderer();
    fill(&mut r, 12);
    r.surface_mut().scroll_to(40.0);
    assert!(!r.is_at_bottom());

    r.append(&removed(99));

    assert_eq!(r.surface().scroll_top(), 40.0);
    assert_eq!(r.surface().scroll_height(), 260.0);
}

#[test]
fn within_tolerance_counts_as_bottom() {
    let mut r = renderer();
    fill(&mut r, 12);
    // 9 units above the bottom edge
    r.surface_mut().scroll_to(131.0);
    assert!(r.is_at_bottom());

    r.append(&removed(99));
    assert_eq!(r.surface().scroll_top(), 160.0);
}

#[test]
fn exactly_tolerance_away_does_not_follow() {
    let mut r = renderer();
    fill(&mut r, 12);
    r.surface_mut().scroll_to(130.0);
    assert!(!r.is_at_bottom());

    r.append(&removed(99));
    assert_eq!(r.surface().scroll_top(), 130.0);
}

#[test]
fn resumes_following_after_scrolling_back_down() {
    let mut r = renderer();
    fill(&mut r, 12);
    r.surface_mut().scroll_to(0.0);
    r.append(&removed(50));
    assert_eq!(r.surface().scroll_top(), 0.0);

    let bottom = r.surface().scroll_height();
    r.surface_mut().scroll_to(bottom);
    r.append(&removed(51));
    assert_eq!(r.surface().scroll_top(), r.surface().scroll_height() - 100.0);
}

#[test]
fn clear_empties_surface() {
    let mut r = renderer();
    fill(&mut r, 8);
    r.clear();
    assert!(r.surface().fragments().is_empty());
    assert_eq!(r.surface().scroll_top(), 0.0);
    assert!(r.is_at_bottom());
}

#[test]
fn redraw_replays_log() {
    let mut log = EventLog::new();
    log.append(removed(1));
    log.append(removed(2));
    let mut r = renderer();
    fill(&mut r, 4);

    r.redraw(&log);
    assert_eq!(r.surface().fragments().len(), 2);
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn filter_is_display_only() {
    let mut log = EventLog::new();
    log.append(removed(1));
    log.append(removed(2));
    log.append(LogEntry::Detail {
        detail: detail(Some(2)),
        time: t(),
    });
    log.append(LogEntry::PageLoaded {
        url: "https://example.com".into(),
        time: t(),
    });

    let mut r = renderer();
    r.set_filter(Some(RegionId(2)));
    assert_eq!(r.visible(&log).count(), 2);
    assert_eq!(log.len(), 4, "log is untouched by filtering");
    assert_eq!(r.filter_style(), "#events li:not(.region-2) { display: none; }");

    r.set_filter(None);
    assert_eq!(r.visible(&log).count(), 4);
    assert_eq!(r.filter_style(), "");
}

#[test]
fn untagged_detail_is_hidden_under_filter() {
    let mut r = renderer();
    r.set_filter(Some(RegionId(1)));
    let entry = LogEntry::Detail {
        detail: detail(None),
        time: t(),
    };
    assert!(!r.is_visible(&entry));
}

#[test]
fn acc_name_toggle_only_changes_list_class() {
    let mut r = renderer();
    assert_eq!(r.list_class(), "");
    r.set_show_acc_name(true);
    assert_eq!(r.list_class(), "show-accname");
    assert!(r.surface().fragments().is_empty());
}

// =========================================================================
// Templates
// =========================================================================

#[test]
fn discovered_entry_wording() {
    let added = LogEntry::Discovered {
        region: RegionId(3),
        path: "div#status".into(),
        in_dom: false,
        time: t(),
    };
    assert_eq!(
        render_entry(&added),
        "<li class=\"new region-3\">Region #3 is added to DOM <div class=\"time\">08:30:00:042</div></li>"
    );

    let found = LogEntry::Discovered {
        region: RegionId(3),
        path: "div#status".into(),
        in_dom: true,
        time: t(),
    };
    assert!(render_entry(&found).contains("Region #3 is found in DOM"));
}

#[test]
fn removed_and_page_loaded_entries() {
    assert!(render_entry(&removed(3)).starts_with(
        "<li class=\"removal region-3\">Region #3 was removed from DOM, or is no longer a live region"
    ));

    let loaded = LogEntry::PageLoaded {
        url: "https://example.com/?a=1&b=<2>".into(),
        time: t(),
    };
    assert_eq!(
        render_entry(&loaded),
        "<li class=\"url\"><div class=\"ellipsis\">Page Loaded [https://example.com/?a=1&amp;b=&lt;2&gt;]</div><div class=\"time\">08:30:00:042</div></li>"
    );
}

#[test]
fn detail_entry_renders_present_sections_only() {
    let entry = LogEntry::Detail {
        detail: RegionDetail {
            region: Some(RegionId(3)),
            path: Some("div#status".into()),
            role: Some("status".into()),
            relevant: Some("additions text".into()),
            acc_name: Some("Saved".into()),
            html: Some("<p>Saved</p>".into()),
            ..RegionDetail::default()
        },
        time: t(),
    };
    let html = render_entry(&entry);
    assert!(html.starts_with("<li class=\"region region-3\">"));
    assert!(html.contains("<span class=\"role meta\"><strong>Role:</strong> status</span>"));
    assert!(html.contains("<strong>Relevant:</strong> additions%20text"));
    assert!(!html.contains("Politeness"));
    assert!(!html.contains("Atomic"));
    assert!(!html.contains("Frame"));
    assert!(html.contains("<a href=\"#\">div#status</a>"));
    assert!(html.contains("<div class=\"content accname\">Saved</div>"));
    assert!(html.contains("<pre>&lt;p&gt;Saved&lt;/p&gt;</pre>"));
}

#[test]
fn detail_entry_with_missing_fields_still_renders() {
    let entry = LogEntry::Detail {
        detail: RegionDetail::default(),
        time: t(),
    };
    let html = render_entry(&entry);
    assert!(html.starts_with("<li class=\"region\">"));
    assert!(html.contains("<em class=\"id\"></em><a href=\"#\"></a>"));
    assert!(html.ends_with("</li>"));
}

#[test]
fn hostile_payload_cannot_break_out_of_entry() {
    let hostile = "<img src=x onerror=\"alert('x')\">&</li><li>";
    let entry = LogEntry::Detail {
        detail: RegionDetail {
            region: Some(RegionId(1)),
            path: Some(hostile.into()),
            role: Some(hostile.into()),
            politeness: Some(hostile.into()),
            atomic: Some(hostile.into()),
            relevant: Some(hostile.into()),
            acc_name: Some(hostile.into()),
            html: Some(hostile.into()),
            frame_url: Some(hostile.into()),
        },
        time: t(),
    };
    let html = render_entry(&entry);

    // Strip the markup the template itself produces; whatever remains came
    // from the payload and must not contain raw special characters.
    let mut text = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    for ch in ['<', '>', '"', '\''] {
        assert!(!text.contains(ch), "raw {:?} leaked into {}", ch, html);
    }
    for (i, _) in text.match_indices('&') {
        let rest = &text[i..];
        assert!(
            rest.starts_with("&amp;")
                || rest.starts_with("&lt;")
                || rest.starts_with("&gt;")
                || rest.starts_with("&quot;")
                || rest.starts_with("&#39;"),
            "bare & in {}",
            text
        );
    }
    assert_eq!(html.matches("<li").count(), 1);
    assert_eq!(html.matches("</li>").count(), 1);
    assert!(!html.contains("<img"));
}

#[test]
fn region_row_marks_gone_and_selected() {
    let mut record = RegionRecord::active(RegionId(3), "div#<status>");
    let row = render_region_row(&record, false);
    assert!(row.contains("class=\"tab\""));
    assert!(row.contains("<em class=\"id\">3</em>div#&lt;status&gt;"));

    record.status = RegionStatus::Gone;
    let row = render_region_row(&record, true);
    assert!(row.contains("class=\"tab gone active\""));
    assert!(row.contains("aria-selected=\"true\""));
}

#[test]
fn text_rendering_for_console() {
    let entry = LogEntry::Detail {
        detail: RegionDetail {
            region: Some(RegionId(3)),
            role: Some("status".into()),
            acc_name: Some("Saved".into()),
            ..RegionDetail::default()
        },
        time: t(),
    };
    assert_eq!(render_entry_text(&entry), "[08:30:00:042] Region #3 [Role: status] \"Saved\"");
    assert_eq!(
        render_entry_text(&removed(3)),
        "[08:30:00:042] Region #3 was removed from DOM, or is no longer a live region"
    );
}
