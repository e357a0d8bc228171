//! Profile sidebar: navigation list plus the four data sections.
//!
//! ARCHITECTURE
//! ============
//! Visibility classes are derived from `SidebarState` on every render, so the
//! overlay, the panel and the navigation highlight always agree. The sidebar
//! never opens itself; the dashboard opens it after a successful load.

use leptos::prelude::*;

use crate::components::profile_sections::SectionContent;
use crate::state::profile::ProfileState;
use crate::state::sidebar::{Section, SidebarState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let close = move |_| sidebar.update(SidebarState::close);
    let portal_title = move || {
        profile
            .get()
            .headers
            .map(|h| h.portal_title)
            .unwrap_or_default()
    };
    let nav_heading = move || {
        profile
            .get()
            .headers
            .map(|h| h.nav_heading)
            .unwrap_or_default()
    };

    let nav_items = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li
                    class="nav-item"
                    class:active=move || sidebar.get().is_active(section)
                    data-section=section.key()
                    on:click=move |_| sidebar.update(|s| s.select(section))
                >
                    {section.title()}
                </li>
            }
        })
        .collect_view();

    let panels = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <div
                    id=section.element_id()
                    class="sidebar-section"
                    class:visible=move || sidebar.get().is_visible(section)
                >
                    <h3>{section.title()}</h3>
                    <div class="sidebar-section-content">
                        <SectionContent section/>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            id="overlay"
            class="overlay"
            class:show=move || sidebar.get().open
            on:click=close
        ></div>
        <aside class="sidebar" class:open=move || sidebar.get().open>
            <header class="sidebar-header">
                <h2 class="portal-title">{portal_title}</h2>
                <button id="closeSidebar" class="close-sidebar" title="Close" on:click=close>
                    "×"
                </button>
            </header>
            <nav class="sidebar-section sidebar-nav-container" class:visible=move || sidebar.get().open>
                <h3 class="nav-heading">{nav_heading}</h3>
                <ul class="sidebar-nav">{nav_items}</ul>
            </nav>
            {panels}
        </aside>
    }
}
