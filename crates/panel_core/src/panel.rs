/// Entry count requested from the top-skills endpoint, fixed by contract.
pub const TOP_SKILLS_LIMIT: u32 = 7;

/// The four trigger/region pairs, in display order.
///
/// Doubles as the registration table: every trigger dispatch is a `match`
/// over this enum, and every output region is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Panel {
    Profile,
    Search,
    Projects,
    TopSkills,
}

impl Panel {
    /// All panels in display order.
    pub const ALL: [Panel; 4] = [
        Panel::Profile,
        Panel::Search,
        Panel::Projects,
        Panel::TopSkills,
    ];

    /// Human-readable label for frontends.
    pub fn label(self) -> &'static str {
        match self {
            Panel::Profile => "Profile",
            Panel::Search => "Search",
            Panel::Projects => "Projects",
            Panel::TopSkills => "Top skills",
        }
    }

    /// Builds the request path for this panel from the current field values.
    ///
    /// Interpolated values are percent-encoded. Search always carries `q`,
    /// even when the query is empty; Projects omits its query string entirely
    /// when the skill filter is empty.
    pub fn request_path(self, query: &str, skill: &str) -> String {
        match self {
            Panel::Profile => "/profile".to_string(),
            Panel::Search => format!("/search?q={}", urlencoding::encode(query)),
            Panel::Projects => {
                if skill.is_empty() {
                    "/projects".to_string()
                } else {
                    format!("/projects?skill={}", urlencoding::encode(skill))
                }
            }
            Panel::TopSkills => format!("/skills/top?limit={TOP_SKILLS_LIMIT}"),
        }
    }
}
