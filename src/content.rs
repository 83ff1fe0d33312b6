//! Static page content. Every figure here is display copy, not computed.

use crate::models::{ActivityItem, CategoryAverage, QuickAction, RecentFeedback, SelectOption, StatCard};

fn stat(title: &str, value: &str, description: &str) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
    }
}

fn action(title: &str, description: &str, path: &str) -> QuickAction {
    QuickAction {
        title: title.to_string(),
        description: description.to_string(),
        path: path.to_string(),
    }
}

pub fn admin_stats() -> Vec<StatCard> {
    vec![
        stat("Total Visitors Today", "142", "+12% from yesterday"),
        stat("Active Check-ins", "28", "Currently on premises"),
        stat("Feedback Score", "4.8", "Average rating this week"),
        stat("Security Alerts", "3", "Requiring attention"),
    ]
}

pub fn recent_activity() -> Vec<ActivityItem> {
    [
        ("10 minutes ago", "John Doe checked in at Reception", "checkin"),
        ("25 minutes ago", "New feedback received - 5 stars", "feedback"),
        ("1 hour ago", "Security alert resolved", "security"),
        ("2 hours ago", "Sarah Johnson checked out", "checkout"),
    ]
    .into_iter()
    .map(|(time, event, kind)| ActivityItem {
        time: time.to_string(),
        event: event.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

pub fn visitor_quick_actions() -> Vec<QuickAction> {
    vec![
        action("Visitor Registration", "Register for your visit and get verified", "/visitor-registration"),
        action("Check-in/Check-out", "Manage your visit status", "/checkin-checkout"),
        action("Share Feedback", "Help us improve our services", "/feedback"),
        action("Get Visitor Badge", "Download your digital visitor badge", "/visitor-badge"),
    ]
}

pub fn home_features() -> Vec<QuickAction> {
    vec![
        action("Visitor Registration", "Quick digital registration with photo capture", "/visitor-registration"),
        action("Check-in/Check-out", "Track arrivals and departures in real time", "/checkin-checkout"),
        action("Feedback Analysis", "Understand visitor satisfaction", "/feedback-analysis"),
        action("Security Blacklist", "Keep restricted visitors out", "/blacklist"),
    ]
}

/// Average across all categories, as shown on the analysis page.
pub const AVERAGE_RATING: f32 = 4.7;

pub fn category_averages() -> Vec<CategoryAverage> {
    [
        ("Service Quality", 4.8, 142),
        ("Facilities", 4.6, 138),
        ("Staff Friendliness", 4.9, 145),
        ("Check-in Process", 4.5, 140),
    ]
    .into_iter()
    .map(|(category, rating, responses)| CategoryAverage {
        category: category.to_string(),
        rating,
        responses,
    })
    .collect()
}

pub fn recent_feedback() -> Vec<RecentFeedback> {
    [
        (5, "Excellent service and very professional staff. The check-in process was quick and efficient.", "March 16, 2024", "John D."),
        (4, "Good facilities but could improve the waiting area comfort.", "March 15, 2024", "Sarah M."),
        (5, "Outstanding experience! Everything was well organized.", "March 15, 2024", "Robert K."),
    ]
    .into_iter()
    .map(|(rating, comment, date, visitor)| RecentFeedback {
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
        visitor: visitor.to_string(),
    })
    .collect()
}

pub fn feedback_categories() -> Vec<SelectOption> {
    options(&[
        ("serviceQuality", "Service Quality"),
        ("facilities", "Facilities"),
        ("staff", "Staff Friendliness"),
        ("checkinProcess", "Check-in Process"),
    ])
}

pub fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption {
            value: (*value).to_string(),
            label: (*label).to_string(),
        })
        .collect()
}

/// Badge details that are fixed for every visitor.
pub const BADGE_VISITOR_ID: &str = "VIS-2024-001";
pub const BADGE_LOCATION: &str = "Main Building";
pub const BADGE_HOST: &str = "John Smith";
