//! Pages
//!
//! The navigator: four pages, exactly one of which is rendered per pass.
//! [`render`] is a pure function of the selected [`Page`] and the
//! [`RenderContext`]; nothing carries over between passes.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;

pub use about::AboutPage;
pub use contact::{ContactPage, ContactView};
pub use dashboard::{DashboardInputs, DashboardPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;

use chrono::NaiveDate;
use leptos::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::components::document;
use crate::config::AppConfig;

/// The four navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    HealthDashboard,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::HealthDashboard, Page::Contact];

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::About => "📘 About",
            Page::HealthDashboard => "🩺 Health Dashboard",
            Page::Contact => "📬 Contact",
        }
    }

    /// Plain name for the document title
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::HealthDashboard => "Health Dashboard",
            Page::Contact => "Contact",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::HealthDashboard => "dashboard",
            Page::Contact => "contact",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::HealthDashboard => "/dashboard",
            Page::Contact => "/contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error for an unknown page slug
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "dashboard" | "health_dashboard" | "health-dashboard" => Ok(Page::HealthDashboard),
            "contact" => Ok(Page::Contact),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}

/// Inputs of one render pass
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub app: AppConfig,
    /// Last day of the weekly step sample
    pub today: NaiveDate,
    pub dashboard: DashboardInputs,
    pub contact: ContactView,
}

impl RenderContext {
    pub fn new(app: AppConfig, today: NaiveDate) -> Self {
        Self {
            app,
            today,
            dashboard: DashboardInputs::default(),
            contact: ContactView::default(),
        }
    }

    pub fn with_dashboard(mut self, dashboard: DashboardInputs) -> Self {
        self.dashboard = dashboard;
        self
    }

    pub fn with_contact(mut self, contact: ContactView) -> Self {
        self.contact = contact;
        self
    }
}

/// Render the selected page as a complete HTML document
pub fn render(page: Page, ctx: &RenderContext) -> String {
    let RenderContext {
        app,
        today,
        dashboard,
        contact,
    } = ctx.clone();

    let html = match page {
        Page::Home => document(app, page, || view! { <HomePage /> }),
        Page::About => document(app, page, || view! { <AboutPage /> }),
        Page::HealthDashboard => document(app, page, move || {
            view! { <DashboardPage inputs=dashboard today=today /> }
        }),
        Page::Contact => document(app, page, move || view! { <ContactPage contact=contact /> }),
    };

    tracing::debug!(page = %page, "Rendered page");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new(
            AppConfig::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        )
    }

    #[test]
    fn test_parse_page() {
        assert_eq!("about".parse::<Page>().unwrap(), Page::About);
        assert_eq!("Dashboard".parse::<Page>().unwrap(), Page::HealthDashboard);
        assert!("settings".parse::<Page>().is_err());

        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_each_page_renders_own_title() {
        let ctx = ctx();
        let titles = [
            (Page::Home, "🌟 Welcome to Your Wellness Hub"),
            (Page::About, "📖 About This Application"),
            (Page::HealthDashboard, "🩺 Health Dashboard</h1>"),
            (Page::Contact, "📞 Contact Us"),
        ];

        for (page, title) in titles {
            let html = render(page, &ctx);
            assert!(html.contains(title), "{page} missing {title}");

            for (other, other_title) in titles {
                if other != page {
                    assert!(!html.contains(other_title), "{page} rendered {other}");
                }
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let ctx = ctx().with_dashboard(DashboardInputs {
            steps_today: Some(4321),
            ..Default::default()
        });

        for page in Page::ALL {
            assert_eq!(render(page, &ctx), render(page, &ctx));
        }
    }
}
