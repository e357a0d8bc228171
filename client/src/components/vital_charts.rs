//! ECG and SpO2 chart cards.

use leptos::prelude::*;

use crate::util::charts::{ECG_CONTAINER_ID, SPO2_CONTAINER_ID};

/// Chart containers. Charts are drawn once after hydration and resized with
/// the window.
#[component]
pub fn VitalCharts() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || crate::util::charts::mount_vital_charts());
        let resize = window_event_listener(leptos::ev::resize, |_| crate::util::charts::resize_vital_charts());
        on_cleanup(move || resize.remove());
    }

    view! {
        <div class="charts-grid">
            <section class="card chart-card">
                <div id=ECG_CONTAINER_ID class="chart"></div>
            </section>
            <section class="card chart-card">
                <div id=SPO2_CONTAINER_ID class="chart"></div>
            </section>
        </div>
    }
}
