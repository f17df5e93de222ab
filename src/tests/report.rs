use dioxus::prelude::*;
use crate::views::{
    Region,
    ReportFilters,
    ReportView,
    TimeRange,
    PLACEHOLDER_REGIONS,
    STACKED_PLACEHOLDERS,
    TITLED_CARDS,
};
use super::common::{ count, render_dom };

#[component]
fn ReportHarness(filters: ReportFilters) -> Element {
    rsx! {
        ReportView { filters }
    }
}

fn render_report(filters: ReportFilters) -> String {
    render_dom(VirtualDom::new_with_props(ReportHarness, ReportHarnessProps { filters }))
}

fn all_filters() -> Vec<ReportFilters> {
    TimeRange::ALL
        .into_iter()
        .flat_map(|time_range| Region::ALL.into_iter().map(move |region| ReportFilters { time_range, region }))
        .collect()
}

/// Tag counts describing the page layout.
fn structure(html: &str) -> Vec<usize> {
    ["<div", "<select", "<option", "<dl", "<dt", "<svg", "<pattern", "role=\"separator\""]
        .iter()
        .map(|tag| count(html, tag))
        .collect()
}

#[test]
fn test_placeholder_total() {
    assert_eq!(STACKED_PLACEHOLDERS, 3);
    assert_eq!(TITLED_CARDS, 4);
    assert_eq!(PLACEHOLDER_REGIONS, 8);
}

#[test]
fn test_report_renders_eight_placeholders_for_every_filter() {
    for filters in all_filters() {
        let html = render_report(filters);
        assert_eq!(count(&html, "data-placeholder=\"true\""), PLACEHOLDER_REGIONS, "{:?}", filters);
    }
}

#[test]
fn test_filters_do_not_change_layout() {
    let baseline = structure(&render_report(ReportFilters::default()));
    for filters in all_filters() {
        assert_eq!(structure(&render_report(filters)), baseline, "{:?}", filters);
    }
}

#[test]
fn test_report_header_and_cards() {
    let html = render_report(ReportFilters::default());
    assert!(html.contains("Report"));
    assert_eq!(count(&html, "<select"), 2);
    assert_eq!(count(&html, "<option"), TimeRange::ALL.len() + Region::ALL.len());
    assert_eq!(count(&html, "Title"), TITLED_CARDS);
    for label in ["Today", "Last 7 days", "Last 4 weeks", "Last 12 months", "US-West", "US-East", "EU-Central-1"] {
        assert!(html.contains(label), "missing option {}", label);
    }
}

#[test]
fn test_pattern_ids_are_unique() {
    let html = render_report(ReportFilters::default());
    let mut ids: Vec<_> = html
        .match_indices("id=\"report-")
        .map(|(start, m)| {
            let rest = &html[start + m.len()..];
            format!("report-{}", &rest[..rest.find('"').unwrap_or(0)])
        })
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(total, PLACEHOLDER_REGIONS);
    assert_eq!(ids.len(), total);
}

#[test]
fn test_filter_values_round_trip_through_select_values() {
    for range in TimeRange::ALL {
        assert_eq!(TimeRange::from_value(range.value()), Some(range));
    }
    for region in Region::ALL {
        assert_eq!(Region::from_value(region.value()), Some(region));
    }
    assert_eq!(TimeRange::from_value("9"), None);
    assert_eq!(Region::from_value(""), None);
    assert_eq!(ReportFilters::default(), ReportFilters { time_range: TimeRange::Today, region: Region::UsWest });
}
