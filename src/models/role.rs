/// Closed set of roles the villa backend hands out. The stored value is
/// still a free-form string; parsing happens once, here, and everything
/// downstream works with the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Guide,
    User,
    Unknown,
}

impl Role {
    /// Case-insensitive parse preserving the matching rules the site has
    /// always used: ADMIN and MANAGER match as substrings (the backend
    /// emits variants like "ROLE_ADMIN"), GUIDE matches as a substring,
    /// USER must match exactly. Overlapping strings resolve in this order.
    pub fn parse(raw: &str) -> Role {
        let upper = raw.trim().to_uppercase();
        if upper.contains("ADMIN") {
            Role::Admin
        } else if upper.contains("MANAGER") {
            Role::Manager
        } else if upper.contains("GUIDE") {
            Role::Guide
        } else if upper == "USER" {
            Role::User
        } else {
            Role::Unknown
        }
    }
}

/// Where a fresh login lands, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    AdminDashboard,
    GuideDashboard,
    Home,
}

pub fn post_login_landing(role: &str) -> Landing {
    match Role::parse(role) {
        Role::Admin | Role::Manager => Landing::AdminDashboard,
        Role::Guide => Landing::GuideDashboard,
        _ => Landing::Home,
    }
}

/// The protected areas of the navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteArea {
    /// Booking pages: open to browse, gated at the moment of selection.
    Booking,
    AdminDashboard,
    GuideDashboard,
    ClientDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Auth,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RedirectTarget),
    /// Inline login-or-go-home prompt instead of a navigation.
    ShowPrompt,
}

/// The authorization policy. Token is checked first: without one, whatever
/// is left in storage for the other keys is ignored.
///
/// The client dashboard sends a wrong-role user home while the admin and
/// guide dashboards send them to the login page. The asymmetry is the
/// site's observed behavior and is kept on purpose.
pub fn authorize(area: RouteArea, token: Option<&str>, role: Option<&str>) -> GuardDecision {
    let authenticated = token.map(|t| !t.is_empty()).unwrap_or(false);
    if !authenticated {
        return match area {
            RouteArea::Booking => GuardDecision::ShowPrompt,
            _ => GuardDecision::Redirect(RedirectTarget::Auth),
        };
    }

    let role = Role::parse(role.unwrap_or(""));
    match area {
        RouteArea::Booking => GuardDecision::Allow,
        RouteArea::AdminDashboard => match role {
            Role::Admin | Role::Manager => GuardDecision::Allow,
            _ => GuardDecision::Redirect(RedirectTarget::Auth),
        },
        RouteArea::GuideDashboard => match role {
            Role::Guide => GuardDecision::Allow,
            _ => GuardDecision::Redirect(RedirectTarget::Auth),
        },
        RouteArea::ClientDashboard => match role {
            Role::User => GuardDecision::Allow,
            _ => GuardDecision::Redirect(RedirectTarget::Home),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_substring_based() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("role_admin"), Role::Admin);
        assert_eq!(Role::parse("Manager"), Role::Manager);
        assert_eq!(Role::parse("ROLE_MANAGER"), Role::Manager);
        assert_eq!(Role::parse("tour guide"), Role::Guide);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("USER"), Role::User);
        // USER must be exact, not a substring
        assert_eq!(Role::parse("POWERUSER"), Role::Unknown);
        assert_eq!(Role::parse(""), Role::Unknown);
        // overlap resolves admin-first
        assert_eq!(Role::parse("ADMIN_GUIDE"), Role::Admin);
    }

    #[test]
    fn login_lands_by_role() {
        assert_eq!(post_login_landing("ADMIN"), Landing::AdminDashboard);
        assert_eq!(post_login_landing("ROLE_MANAGER"), Landing::AdminDashboard);
        assert_eq!(post_login_landing("GUIDE"), Landing::GuideDashboard);
        assert_eq!(post_login_landing("USER"), Landing::Home);
        assert_eq!(post_login_landing("anything-else"), Landing::Home);
    }

    #[test]
    fn every_area_redirects_or_prompts_without_a_token() {
        assert_eq!(
            authorize(RouteArea::Booking, None, Some("ADMIN")),
            GuardDecision::ShowPrompt
        );
        // leftover role in storage is irrelevant without a token
        for area in [
            RouteArea::AdminDashboard,
            RouteArea::GuideDashboard,
            RouteArea::ClientDashboard,
        ] {
            assert_eq!(
                authorize(area, None, Some("ADMIN")),
                GuardDecision::Redirect(RedirectTarget::Auth)
            );
            assert_eq!(
                authorize(area, Some(""), Some("ADMIN")),
                GuardDecision::Redirect(RedirectTarget::Auth)
            );
        }
    }

    #[test]
    fn admin_area_admits_admin_and_manager_only() {
        for role in ["ADMIN", "admin", "ROLE_ADMIN", "MANAGER", "manager"] {
            assert_eq!(
                authorize(RouteArea::AdminDashboard, Some("tok"), Some(role)),
                GuardDecision::Allow,
                "role {role} should reach the admin dashboard"
            );
        }
        for role in ["USER", "GUIDE", "", "visitor"] {
            assert_eq!(
                authorize(RouteArea::AdminDashboard, Some("tok"), Some(role)),
                GuardDecision::Redirect(RedirectTarget::Auth)
            );
        }
    }

    #[test]
    fn guide_area_admits_guides_only() {
        assert_eq!(
            authorize(RouteArea::GuideDashboard, Some("tok"), Some("GUIDE")),
            GuardDecision::Allow
        );
        assert_eq!(
            authorize(RouteArea::GuideDashboard, Some("tok"), Some("USER")),
            GuardDecision::Redirect(RedirectTarget::Auth)
        );
    }

    #[test]
    fn client_area_sends_wrong_roles_home_not_to_auth() {
        assert_eq!(
            authorize(RouteArea::ClientDashboard, Some("tok"), Some("user")),
            GuardDecision::Allow
        );
        for role in ["ADMIN", "GUIDE", "POWERUSER", ""] {
            assert_eq!(
                authorize(RouteArea::ClientDashboard, Some("tok"), Some(role)),
                GuardDecision::Redirect(RedirectTarget::Home),
                "role {role} should bounce home"
            );
        }
    }

    #[test]
    fn booking_area_allows_any_authenticated_role() {
        for role in ["USER", "ADMIN", "GUIDE", "whatever"] {
            assert_eq!(
                authorize(RouteArea::Booking, Some("tok"), Some(role)),
                GuardDecision::Allow
            );
        }
    }
}
