//! Profile Page Component
//!
//! Mock login: the form only toggles to the spend dashboard. Nothing is
//! sent anywhere and nothing is remembered across reloads.

use leptos::prelude::*;

use crate::components::SpendDashboard;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub logged_in: bool,
    pub email: String,
    pub password: String,
    pub signup_notice_visible: bool,
}

impl SessionState {
    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Back to the login form with empty credentials
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.email.clear();
        self.password.clear();
    }

    pub fn toggle_signup_notice(&mut self) {
        self.signup_notice_visible = !self.signup_notice_visible;
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());

    let logged_in = move || session.with(|s| s.logged_in);

    view! {
        <div class="profile-content">
            <div
                id="login-section"
                class="login-section"
                style:display=move || display(!logged_in())
            >
                <h2>"Log in"</h2>
                <input
                    id="email-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || session.with(|s| s.email.clone())
                    on:input=move |ev| session.update(|s| s.email = event_target_value(&ev))
                />
                <input
                    id="password-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || session.with(|s| s.password.clone())
                    on:input=move |ev| session.update(|s| s.password = event_target_value(&ev))
                />
                <button id="login-btn" on:click=move |_| session.update(|s| s.login())>
                    "Log in"
                </button>
                <p class="signup-prompt">
                    "No account? "
                    <a
                        href="#"
                        id="signup-link"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            session.update(|s| s.toggle_signup_notice());
                        }
                    >
                        "Sign up"
                    </a>
                </p>
                <p
                    id="signup-notice"
                    class="signup-notice"
                    style:display=move || display(session.with(|s| s.signup_notice_visible))
                >
                    "Sign-ups are coming soon!"
                </p>
            </div>

            <div
                id="user-dashboard"
                class="user-dashboard"
                style:display=move || display(logged_in())
            >
                <h2>"Your spending"</h2>
                <SpendDashboard />
                <button id="logout-btn" on:click=move |_| session.update(|s| s.logout())>
                    "Log out"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let mut session = SessionState::default();
        session.email = "visitor@example.com".to_string();
        session.password = "hunter2".to_string();

        session.login();
        assert!(session.logged_in);
        assert_eq!(session.email, "visitor@example.com");

        session.logout();
        assert!(!session.logged_in);
        assert!(session.email.is_empty());
        assert!(session.password.is_empty());
    }

    #[test]
    fn test_signup_notice_toggles() {
        let mut session = SessionState::default();
        session.toggle_signup_notice();
        assert!(session.signup_notice_visible);
        session.toggle_signup_notice();
        assert!(!session.signup_notice_visible);
    }
}
