use crate::models::{NavItem, PageFrame, Role, SessionRecord};

const ANONYMOUS_MENU: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Login", "/login"),
    ("Sign Up", "/signup"),
];

const ADMIN_MENU: &[(&str, &str)] = &[
    ("Home", "/admin-dashboard"),
    ("Dashboard", "/admin-dashboard"),
    ("Feedback Analysis", "/feedback-analysis"),
    ("Blacklist", "/blacklist"),
];

const VISITOR_MENU: &[(&str, &str)] = &[
    ("Home", "/visitor-dashboard"),
    ("Visitor Registration", "/visitor-registration"),
    ("Feedback", "/feedback"),
    ("Check-in/Check-out", "/checkin-checkout"),
    ("Visitor Badge", "/visitor-badge"),
];

/// Menu entries for a role, in display order.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let menu = match role {
        Role::Anonymous => ANONYMOUS_MENU,
        Role::Admin => ADMIN_MENU,
        Role::Visitor => VISITOR_MENU,
    };
    menu.iter()
        .map(|(name, path)| NavItem {
            name: (*name).to_string(),
            path: (*path).to_string(),
        })
        .collect()
}

/// page_frame
///
/// Builds the shared page chrome for whoever is viewing.
pub fn page_frame(title: &str, user: Option<SessionRecord>) -> PageFrame {
    let role = Role::from(user.as_ref());
    PageFrame {
        title: title.to_string(),
        role,
        nav: nav_items(role),
        user,
    }
}
