use crate::mock_data;
use dioxus::prelude::*;
use shared_ui::{
    format_reading_time, BpStatusBadge, Card, CardContent, CardHeader, CardTitle, PageHeader,
    TrendChart,
};

/// Reading log with trend chart.
#[component]
pub fn History() -> Element {
    let readings = use_hook(mock_data::reading_history);
    let trend = mock_data::trend_from_history(&readings);

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Reading History",
                subtitle: "Your blood pressure measurements over time",
            }

            TrendChart { data: trend, title: "Blood Pressure Trends" }

            Card {
                CardHeader {
                    CardTitle { "All Readings" }
                }
                CardContent {
                    div { class: "table-scroll",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Date & Time" }
                                    th { "Systolic" }
                                    th { "Diastolic" }
                                    th { "Heart Rate" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for reading in readings.iter() {
                                    tr { key: "{reading.id}",
                                        td { {format_reading_time(&reading.timestamp)} }
                                        td { class: "numeric", "{reading.systolic} mmHg" }
                                        td { class: "numeric", "{reading.diastolic} mmHg" }
                                        td { class: "numeric", "{reading.heart_rate} BPM" }
                                        td { BpStatusBadge { status: reading.status } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
