use std::fmt;

/// Plugin verdict on whether dev-mode instrumentation is allowed for a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    Include,
    Exclude,
    Unknown,
    /// Any value outside the three known ones, kept verbatim.
    Unrecognized(String),
}

/// Page action icon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Enabled,
    Disabled,
}

impl Permission {
    /// Classifies a raw plugin answer. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "include" => Permission::Include,
            "exclude" => Permission::Exclude,
            "unknown" => Permission::Unknown,
            other => Permission::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Permission::Include => "include",
            Permission::Exclude => "exclude",
            Permission::Unknown => "unknown",
            Permission::Unrecognized(raw) => raw,
        }
    }

    /// Icon to display, or `None` for an unrecognized verdict (icon left unchanged).
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Permission::Include => Some(Icon::Enabled),
            Permission::Exclude | Permission::Unknown => Some(Icon::Disabled),
            Permission::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip_through_as_str() {
        for raw in ["include", "exclude", "unknown"] {
            assert_eq!(Permission::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn unrecognized_is_preserved() {
        let permission = Permission::parse("Include");
        assert_eq!(permission, Permission::Unrecognized("Include".into()));
        assert_eq!(permission.to_string(), "Include");
        assert_eq!(permission.icon(), None);
    }

    #[test]
    fn icon_mapping() {
        assert_eq!(Permission::Include.icon(), Some(Icon::Enabled));
        assert_eq!(Permission::Exclude.icon(), Some(Icon::Disabled));
        assert_eq!(Permission::Unknown.icon(), Some(Icon::Disabled));
    }
}
