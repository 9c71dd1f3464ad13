//! The teacher role.

use crate::sink::Sink;

use super::kind::RoleKind;
use super::AcademicRole;

/// Teaches a specialty within a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    department: String,
    specialty: String,
}

impl Teacher {
    pub fn new(department: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            specialty: specialty.into(),
        }
    }
}

impl AcademicRole for Teacher {
    fn kind(&self) -> RoleKind {
        RoleKind::Teacher
    }

    fn perform_activity(&self, sink: &mut dyn Sink) {
        sink.line(&format!(
            "  -> [{}] Teaching in the {} department ({})",
            self.kind(),
            self.department,
            self.specialty
        ));
    }

    fn describe(&self) -> String {
        format!("Teacher of {}", self.specialty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_line() {
        let teacher = Teacher::new("Back-end", "Criptografia");
        let mut lines: Vec<String> = Vec::new();
        teacher.perform_activity(&mut lines);

        assert_eq!(
            lines,
            vec!["  -> [Teacher] Teaching in the Back-end department (Criptografia)"]
        );
    }

    #[test]
    fn test_describe() {
        let teacher = Teacher::new("Computação", "Compiladores");
        assert_eq!(teacher.describe(), "Teacher of Compiladores");
        assert_eq!(teacher.describe(), teacher.describe());
    }
}
