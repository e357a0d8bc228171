//! Current-location card fed by `util::geolocation`.

use leptos::prelude::*;

use crate::state::location::LocationState;

#[component]
pub fn LocationCard() -> impl IntoView {
    let location = expect_context::<RwSignal<LocationState>>();

    let content = move || match location.get() {
        LocationState::Pending => view! { <div class="location-loading">"Locating…"</div> }.into_any(),
        LocationState::Resolved { address, fix } => view! {
            <div class="location-address">
                <div class="street-address">{address}</div>
            </div>
            <div class="location-coordinates">
                {fix.coordinates_text()}
                <br/>
                {fix.accuracy_text()}
            </div>
        }
        .into_any(),
        LocationState::Failed { message, fix } => {
            let coordinates = fix.map(|f| format!(" {}", f.coordinates_text()));
            view! {
                <div class="location-error">
                    {message}
                    {coordinates}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="card location-card">
            <h3>"Current Location"</h3>
            <div class="location-content">{content}</div>
        </section>
    }
}
