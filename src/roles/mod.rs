//! Academic roles: behaviors a member gains by composition.
//!
//! A [`Role`] is a closed sum over the concrete role structs. Each struct
//! implements [`AcademicRole`]; the enum delegates to whichever variant it
//! holds.

pub mod kind;
pub mod student;
pub mod teacher;

use std::str::FromStr;

use crate::sink::Sink;

pub use kind::RoleKind;
pub use student::Student;
pub use teacher::Teacher;

/// The capability every role variant provides.
pub trait AcademicRole {
    /// Which variant this is.
    fn kind(&self) -> RoleKind;

    /// Emit one line describing the activity, prefixed by `[RoleName]`.
    fn perform_activity(&self, sink: &mut dyn Sink);

    /// Short summary of the role. Pure.
    fn describe(&self) -> String;
}

/// A role held by a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Student(Student),
    Teacher(Teacher),
}

impl Role {
    pub fn student(enrollment_id: impl Into<String>, program: impl Into<String>) -> Self {
        Role::Student(Student::new(enrollment_id, program))
    }

    pub fn teacher(department: impl Into<String>, specialty: impl Into<String>) -> Self {
        Role::Teacher(Teacher::new(department, specialty))
    }
}

impl AcademicRole for Role {
    fn kind(&self) -> RoleKind {
        match self {
            Role::Student(s) => s.kind(),
            Role::Teacher(t) => t.kind(),
        }
    }

    fn perform_activity(&self, sink: &mut dyn Sink) {
        match self {
            Role::Student(s) => s.perform_activity(sink),
            Role::Teacher(t) => t.perform_activity(sink),
        }
    }

    fn describe(&self) -> String {
        match self {
            Role::Student(s) => s.describe(),
            Role::Teacher(t) => t.describe(),
        }
    }
}

impl From<Student> for Role {
    fn from(s: Student) -> Self {
        Role::Student(s)
    }
}

impl From<Teacher> for Role {
    fn from(t: Teacher) -> Self {
        Role::Teacher(t)
    }
}

/// Parses `student:<enrollment_id>:<program>` or
/// `teacher:<department>:<specialty>`.
///
/// Only the structure is checked. The last field keeps any further colons.
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind: RoleKind = parts.next().unwrap_or_default().parse()?;

        let (first, second) = match (parts.next(), parts.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                let usage = RoleKind::all()
                    .iter()
                    .map(|k| match k {
                        RoleKind::Student => format!("{}:<enrollment_id>:<program>", k.slug()),
                        RoleKind::Teacher => format!("{}:<department>:<specialty>", k.slug()),
                    })
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(format!("Malformed role '{}'. Expected {}", s, usage));
            }
        };

        Ok(match kind {
            RoleKind::Student => Role::student(first, second),
            RoleKind::Teacher => Role::teacher(first, second),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_delegates_to_variant() {
        let student = Student::new("2024-01", "Ciência da Computação");
        let role = Role::from(student.clone());

        assert_eq!(role.kind(), RoleKind::Student);
        assert_eq!(role.describe(), student.describe());

        let mut via_enum: Vec<String> = Vec::new();
        let mut via_struct: Vec<String> = Vec::new();
        role.perform_activity(&mut via_enum);
        student.perform_activity(&mut via_struct);
        assert_eq!(via_enum, via_struct);
    }

    #[test]
    fn test_teacher_constructor() {
        let role = Role::teacher("Computação", "Compiladores");
        assert_eq!(role.kind(), RoleKind::Teacher);
        assert_eq!(role, Role::Teacher(Teacher::new("Computação", "Compiladores")));
    }

    #[test]
    fn test_parse_student() {
        let role: Role = "student:DOC-2024:Doutorado em Computação".parse().unwrap();
        assert_eq!(role, Role::student("DOC-2024", "Doutorado em Computação"));
    }

    #[test]
    fn test_parse_teacher_keeps_extra_colons() {
        let role: Role = "teacher:Computação:Compiladores: teoria".parse().unwrap();
        assert_eq!(role.describe(), "Teacher of Compiladores: teoria");
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = "dean:a:b".parse::<Role>().unwrap_err();
        assert!(err.contains("Unknown role kind"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = "student:only-id".parse::<Role>().unwrap_err();
        assert!(err.contains("Malformed role"));
        assert!(err.contains("teacher:<department>:<specialty>"));
        assert!("teacher".parse::<Role>().is_err());
    }
}
