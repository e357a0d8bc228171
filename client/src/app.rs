//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::PortalConfig;
use crate::pages::dashboard::DashboardPage;
use crate::state::{location::LocationState, profile::ProfileState, sidebar::SidebarState, toast::ToastState};
use crate::util::generation::RequestGeneration;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the portal config (or the reason it is missing), all shared
/// state signals, and the profile request generation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env();
    if let Err(e) = &config {
        leptos::logging::error!("{e}");
    }
    provide_context(config);

    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(SidebarState::default()));
    provide_context(RwSignal::new(ProfileState::default()));
    provide_context(RwSignal::new(LocationState::default()));
    provide_context(RequestGeneration::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/health-portal.css"/>
        <Title text="Health Dashboard"/>

        <ToastStack/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
