//! Scripted demonstrations of composing roles onto members.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DemoSettings;
use crate::member::Member;
use crate::roles::{Student, Teacher};
use crate::sink::Sink;

pub const OPENING_BANNER: &str = ">>> ACADEMIC SYSTEM VIA COMPOSITION <<<";
pub const HYBRID_BANNER: &str = ">>> HYBRID CASE (No Multiple Inheritance) <<<";

/// One scripted scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoCase {
    /// A member holding a single student role.
    Student,
    /// A member holding a single teacher role.
    Teacher,
    /// One member holding both a student and a teacher role.
    Hybrid,
}

impl DemoCase {
    pub fn slug(&self) -> &'static str {
        match self {
            DemoCase::Student => "student",
            DemoCase::Teacher => "teacher",
            DemoCase::Hybrid => "hybrid",
        }
    }

    pub fn all() -> &'static [DemoCase] {
        &[DemoCase::Student, DemoCase::Teacher, DemoCase::Hybrid]
    }

    /// Banner printed before this case, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            DemoCase::Hybrid => Some(HYBRID_BANNER),
            _ => None,
        }
    }

    /// Build this case's member with its roles attached.
    pub fn member(&self) -> Member {
        match self {
            DemoCase::Student => {
                let mut m = Member::new("Andrews Simões", "111.222.333-44");
                m.add_role(Student::new("2024-01", "Ciência da Computação"));
                m
            }
            DemoCase::Teacher => {
                let mut m = Member::new("Elvio Reis", "555.666.777-88");
                m.add_role(Teacher::new("Back-end", "Criptografia"));
                m
            }
            DemoCase::Hybrid => {
                // a doctoral student who also substitutes as a teacher
                let mut m = Member::new("Thaís Nascimento", "999.888.777-66");
                m.add_role(Student::new("DOC-2024", "Doutorado em Computação"));
                m.add_role(Teacher::new("Computação", "Compiladores"));
                m
            }
        }
    }
}

impl fmt::Display for DemoCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for DemoCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(DemoCase::Student),
            "teacher" => Ok(DemoCase::Teacher),
            "hybrid" => Ok(DemoCase::Hybrid),
            _ => Err(format!(
                "Unknown demo case '{}'. Valid: student, teacher, hybrid",
                s
            )),
        }
    }
}

/// Run `cases` in order, writing everything to `sink`.
pub fn run(settings: &DemoSettings, cases: &[DemoCase], sink: &mut dyn Sink) {
    if settings.banners {
        sink.line(OPENING_BANNER);
        sink.line("");
    }

    for case in cases {
        debug!(case = %case, "Running demo case");
        let member = case.member();

        if settings.banners {
            if let Some(banner) = case.banner() {
                sink.line(banner);
            }
        }
        if settings.show_identity {
            member.show_identity(sink);
        }
        member.run_daily_activities(sink);
    }
}
