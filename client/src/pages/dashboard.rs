//! Dashboard: profile card, live stats and module launcher cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use cybernet::nav::Page;
use leptos::prelude::*;

use crate::components::dashboard_card::DashboardCard;
use crate::components::page_section::PageSection;
use crate::components::profile_card::ProfileCard;
use crate::components::stats_grid::StatsGrid;
use crate::state::use_portal;

/// Launcher cards: module name and blurb.
const MODULES: [(&str, &str); 4] = [
    ("Neural Interface", "Direct link to the neural processing grid"),
    ("Security Center", "Threat monitoring and access control"),
    ("Data Analytics", "Real-time stream analysis"),
    ("Network Monitor", "Node health and traffic overview"),
];

fn module_card_id(name: &str) -> String {
    let slug = name.to_ascii_lowercase().replace(' ', "-");
    format!("module-{slug}")
}

#[component]
fn ModuleCard(name: &'static str, blurb: &'static str) -> impl IntoView {
    let portal = use_portal();
    let on_open = Callback::new(move |()| portal.with_value(|p| p.open_module(name)));
    view! {
        <DashboardCard extra_class="module-card" id=module_card_id(name) on_click=on_open>
            <h3 class="card-title">{name}</h3>
            <p class="card-description">{blurb}</p>
        </DashboardCard>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageSection page=Page::Dashboard>
            <div class="dashboard">
                <h2 class="dashboard-title">"Command Center"</h2>
                <div class="dashboard-grid">
                    <ProfileCard/>
                    <DashboardCard>
                        <h3 class="card-title">"System Status"</h3>
                        <StatsGrid/>
                    </DashboardCard>
                    {MODULES
                        .into_iter()
                        .map(|(name, blurb)| view! { <ModuleCard name blurb/> })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
