use dioxus::prelude::*;
use crate::components::{ Card, ContentPlaceholder, Divider, SelectNative, SelectOption };

/// Placeholders stacked in the left column of the overview card.
pub const STACKED_PLACEHOLDERS: usize = 3;
/// Titled cards below the overview.
pub const TITLED_CARDS: usize = 4;
/// Every placeholder on the page: the stack, the large chart and one per titled card.
pub const PLACEHOLDER_REGIONS: usize = STACKED_PLACEHOLDERS + 1 + TITLED_CARDS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Today,
    Last7Days,
    Last4Weeks,
    Last12Months,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Today,
        TimeRange::Last7Days,
        TimeRange::Last4Weeks,
        TimeRange::Last12Months,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Self::Today => "1",
            Self::Last7Days => "2",
            Self::Last4Weeks => "3",
            Self::Last12Months => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::Last4Weeks => "Last 4 weeks",
            Self::Last12Months => "Last 12 months",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|range| SelectOption::new(range.value(), range.label()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    UsWest,
    UsEast,
    EuCentral1,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::UsWest, Region::UsEast, Region::EuCentral1];

    pub fn value(&self) -> &'static str {
        match self {
            Self::UsWest => "1",
            Self::UsEast => "2",
            Self::EuCentral1 => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UsWest => "US-West",
            Self::UsEast => "US-East",
            Self::EuCentral1 => "EU-Central-1",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|region| SelectOption::new(region.value(), region.label()))
            .collect()
    }
}

/// Header filters. They do not drive any content yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ReportFilters {
    pub time_range: TimeRange,
    pub region: Region,
}

#[component]
pub fn Report() -> Element {
    rsx! {
        ReportView { filters: ReportFilters::default() }
    }
}

#[component]
pub fn ReportView(filters: ReportFilters) -> Element {
    let mut time_range = use_signal(|| filters.time_range);
    let mut region = use_signal(|| filters.region);

    rsx! {
        div {
            class: "p-4 sm:p-6 lg:p-8",
            header {
                div {
                    class: "sm:flex sm:items-center sm:justify-between",
                    h3 {
                        class: "text-lg font-semibold text-gray-900 dark:text-gray-50",
                        "Report"
                    }
                    div {
                        class: "mt-4 flex flex-col gap-2 sm:mt-0 sm:flex-row sm:items-center",
                        SelectNative {
                            value: time_range().value(),
                            options: TimeRange::options(),
                            onchange: move |value: String| match TimeRange::from_value(&value) {
                                Some(range) => {
                                    log::debug!("Time range set to {}", range.label());
                                    time_range.set(range);
                                }
                                None => log::warn!("Unknown time range value: {}", value),
                            },
                        }
                        SelectNative {
                            value: region().value(),
                            options: Region::options(),
                            onchange: move |value: String| match Region::from_value(&value) {
                                Some(next) => {
                                    log::debug!("Region set to {}", next.label());
                                    region.set(next);
                                }
                                None => log::warn!("Unknown region value: {}", value),
                            },
                        }
                    }
                }
            }
            Divider {}
            main {
                Card { padded: false,
                    div {
                        class: "grid-cols-12 divide-y divide-gray-200 dark:divide-gray-800 md:grid md:divide-x md:divide-y-0",
                        div {
                            class: "divide-y divide-gray-200 px-2 dark:divide-gray-800 md:col-span-4",
                            for index in 0..STACKED_PLACEHOLDERS {
                                div {
                                    key: "{index}",
                                    class: "h-28 py-2",
                                    ContentPlaceholder { pattern_id: format!("report-stack-{}", index) }
                                }
                            }
                        }
                        div {
                            class: "h-56 p-2 md:col-span-8 md:h-auto",
                            ContentPlaceholder { pattern_id: "report-overview" }
                        }
                    }
                }
                dl {
                    class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                    for index in 0..TITLED_CARDS {
                        TitledCard {
                            key: "{index}",
                            title: "Title",
                            pattern_id: format!("report-card-{}", index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TitledCard(#[props(into)] title: String, #[props(into)] pattern_id: String) -> Element {
    rsx! {
        Card { padded: false,
            div {
                class: "border-b border-gray-200 px-4 py-2 dark:border-gray-800",
                dt {
                    class: "text-sm font-medium text-gray-900 dark:text-gray-50",
                    "{title}"
                }
            }
            div {
                class: "h-60 p-2",
                ContentPlaceholder { pattern_id }
            }
        }
    }
}
