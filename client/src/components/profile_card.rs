//! Dashboard profile card.

use leptos::prelude::*;

use crate::components::dashboard_card::DashboardCard;
use crate::state::use_portal_state;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let state = use_portal_state();
    let profile = move || state.with(|s| s.profile.clone());

    view! {
        <DashboardCard extra_class="profile-card">
            {move || {
                profile()
                    .map(|p| {
                        view! {
                            <div class="user-avatar" id="userAvatar">{p.avatar}</div>
                            <h3 id="welcomeMessage">{p.welcome}</h3>
                            <p class="user-email" id="userEmail">{p.email}</p>
                            <div class="user-meta">
                                <span>"Last login: " <span id="lastLogin">{p.last_login}</span></span>
                                <span>"Member since: " <span id="memberSince">{p.member_since}</span></span>
                            </div>
                        }
                    })
            }}
        </DashboardCard>
    }
}
