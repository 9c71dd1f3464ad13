//! Role kinds: the tag of each role variant.

use std::fmt;
use std::str::FromStr;

/// The closed set of academic role variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Attends classes in a program.
    Student,
    /// Teaches in a department.
    Teacher,
}

impl RoleKind {
    /// Slug used in role specs on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            RoleKind::Student => "student",
            RoleKind::Teacher => "teacher",
        }
    }

    /// Name shown in brackets in front of an activity line.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoleKind::Student => "Student",
            RoleKind::Teacher => "Teacher",
        }
    }

    pub fn all() -> &'static [RoleKind] {
        &[RoleKind::Student, RoleKind::Teacher]
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for RoleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(RoleKind::Student),
            "teacher" => Ok(RoleKind::Teacher),
            _ => Err(format!(
                "Unknown role kind '{}'. Valid: student, teacher",
                s
            )),
        }
    }
}
