//! Health dashboard page: vitals, location, emergency actions and the
//! profile sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page loads the profile once if a session exists, draws the
//! charts and starts location tracking. The profile button reruns the load
//! and opens the sidebar only when that run commits. The call-doctor button
//! resolves a number and hands it to the phone dialer.

use leptos::prelude::*;

use crate::components::location_card::LocationCard;
use crate::components::sidebar::Sidebar;
use crate::components::vital_charts::VitalCharts;
use crate::config::{ConfigError, PortalConfig};
use crate::error::{PortalError, report_error};
use crate::net::session::BrowserSessionProvider;
use crate::net::store::RestRecordStore;
use crate::net::types::Session;
use crate::notify::ToastNotifier;
use crate::pages::dashboard_actions::{PROFILE_LOAD_ALERT, ProfileOpen, call_doctor, open_profile};
use crate::state::location::LocationState;
use crate::state::profile::ProfileState;
use crate::state::sidebar::SidebarState;
use crate::state::toast::ToastState;
use crate::util::browser::{assign_location, show_alert};
use crate::util::generation::RequestGeneration;

fn store_for(config: &PortalConfig) -> impl FnOnce(&Session) -> RestRecordStore + '_ {
    move |session| RestRecordStore::new(config, &session.access_token)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<Result<PortalConfig, ConfigError>>();
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let location = expect_context::<RwSignal<LocationState>>();
    let generation = expect_context::<RequestGeneration>();
    let notifier = ToastNotifier::new(expect_context::<RwSignal<ToastState>>());

    match &config {
        Ok(config) => {
            #[cfg(feature = "hydrate")]
            {
                if let Some(watch_id) = crate::util::geolocation::start_tracking(config, location, notifier) {
                    on_cleanup(move || crate::util::geolocation::stop_tracking(watch_id));
                }

                let config = config.clone();
                let generation = generation.clone();
                leptos::task::spawn_local(async move {
                    let sessions = BrowserSessionProvider::new(&config);
                    let mut sink = profile;
                    let outcome = open_profile(&sessions, store_for(&config), &notifier, &mut sink, &generation).await;
                    leptos::logging::log!("initial profile load: {outcome:?}");
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = config;
        }
        Err(e) => {
            let report = report_error(&PortalError::from(e.clone()), &notifier);
            location.set(LocationState::failed(report.message, None));
        }
    }

    let on_profile = {
        let config = config.clone();
        let generation = generation.clone();
        move |_| {
            let config = match config.clone() {
                Ok(config) => config,
                Err(e) => {
                    report_error(&PortalError::from(e), &notifier);
                    return;
                }
            };
            let generation = generation.clone();
            leptos::task::spawn_local(async move {
                let sessions = BrowserSessionProvider::new(&config);
                let mut sink = profile;
                match open_profile(&sessions, store_for(&config), &notifier, &mut sink, &generation).await {
                    ProfileOpen::SignUp => assign_location(&config.sign_up_path),
                    ProfileOpen::Open => sidebar.update(SidebarState::open),
                    ProfileOpen::Stale => {}
                    ProfileOpen::Failed => show_alert(PROFILE_LOAD_ALERT),
                }
            });
        }
    };

    let on_call_doctor = move |_| {
        let config = match config.clone() {
            Ok(config) => config,
            Err(e) => {
                report_error(&PortalError::from(e), &notifier);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let sessions = BrowserSessionProvider::new(&config);
            call_doctor(&sessions, store_for(&config), &notifier).await.perform();
        });
    };

    let user_badge = move || profile.get().headers.map(|h| h.user_badge).unwrap_or_default();

    view! {
        <Sidebar/>
        <div id="contentWrapper" class="content-wrapper" class:sidebar-open=move || sidebar.get().open>
            <header class="top-bar">
                <h1>"Health Dashboard"</h1>
                <button id="userProfile" class="user-profile" title="Profile" on:click=on_profile>
                    <span class="user-icon">"👤"</span>
                    <span class="user-name">{user_badge}</span>
                </button>
            </header>
            <main class="dashboard-main">
                <VitalCharts/>
                <LocationCard/>
                <section class="card emergency-card">
                    <h3>"Emergency"</h3>
                    <button class="emergency-btn call-doctor" on:click=on_call_doctor>
                        "📞 Call Doctor"
                    </button>
                </section>
            </main>
        </div>
    }
}
