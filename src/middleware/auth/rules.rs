//! Path-based access rules.
//!
//! An ordered list of `(pattern, access)` pairs evaluated top to bottom; the first match wins.
//! Patterns are either an exact path (`/login`) or a prefix ending in `/**`
//! (`/actuator/**` matches `/actuator`, `/actuator/health`, ...).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(base) => PathPattern::Prefix(base.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == p,
            PathPattern::Prefix(base) => {
                path == base
                    || path
                        .strip_prefix(base.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessRule {
    pub pattern: PathPattern,
    pub access: Access,
}

/// Paths reachable without authentication.
pub const PUBLIC_PATHS: [&str; 6] = [
    "/register",
    "/login",
    "/v3/api-docs/**",
    "/swagger-ui/**",
    "/swagger-ui.html",
    "/actuator/**",
];

#[derive(Debug, Clone)]
pub struct AccessRules {
    rules: Vec<AccessRule>,
    fallback: Access,
}

impl AccessRules {
    pub fn new(fallback: Access) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn rule(mut self, pattern: &str, access: Access) -> Self {
        self.rules.push(AccessRule {
            pattern: PathPattern::parse(pattern),
            access,
        });
        self
    }

    /// `PUBLIC_PATHS` are public, any other request must be authenticated.
    pub fn standard() -> Self {
        PUBLIC_PATHS
            .iter()
            .fold(Self::new(Access::Authenticated), |rules, path| {
                rules.rule(path, Access::Public)
            })
    }

    pub fn access_for(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.access)
            .unwrap_or(self.fallback)
    }

    pub fn requires_authentication(&self, path: &str) -> bool {
        self.access_for(path) == Access::Authenticated
    }
}

impl Default for AccessRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_patterns_match_only_themselves() {
        let p = PathPattern::parse("/login");
        assert!(p.matches("/login"));
        assert!(!p.matches("/login/"));
        assert!(!p.matches("/loginx"));
    }

    #[test]
    fn prefix_patterns_match_on_segment_boundaries() {
        let p = PathPattern::parse("/actuator/**");
        assert!(p.matches("/actuator"));
        assert!(p.matches("/actuator/health"));
        assert!(p.matches("/actuator/health/liveness"));
        assert!(!p.matches("/actuatorx"));
        assert!(!p.matches("/api/actuator/health"));
    }

    #[test]
    fn root_wildcard_matches_everything() {
        let p = PathPattern::parse("/**");
        assert!(p.matches("/"));
        assert!(p.matches("/hello"));
    }

    #[test]
    fn standard_rules() {
        let rules = AccessRules::standard();

        for public in [
            "/register",
            "/login",
            "/v3/api-docs",
            "/v3/api-docs/swagger-config",
            "/swagger-ui/index.html",
            "/swagger-ui.html",
            "/actuator/health",
        ] {
            assert_eq!(rules.access_for(public), Access::Public, "{public}");
        }

        for protected in ["/hello", "/", "/register/extra", "/users/1"] {
            assert!(rules.requires_authentication(protected), "{protected}");
        }
    }

    #[test]
    fn first_match_wins() {
        let rules = AccessRules::new(Access::Public)
            .rule("/admin/open", Access::Public)
            .rule("/admin/**", Access::Authenticated)
            .rule("/admin/open", Access::Authenticated);

        assert_eq!(rules.access_for("/admin/open"), Access::Public);
        assert_eq!(rules.access_for("/admin/users"), Access::Authenticated);
        assert_eq!(rules.access_for("/elsewhere"), Access::Public);
    }
}
