//! The student role.

use crate::sink::Sink;

use super::kind::RoleKind;
use super::AcademicRole;

/// Enrolled in a program under an enrollment id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    enrollment_id: String,
    program: String,
}

impl Student {
    pub fn new(enrollment_id: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            program: program.into(),
        }
    }
}

impl AcademicRole for Student {
    fn kind(&self) -> RoleKind {
        RoleKind::Student
    }

    fn perform_activity(&self, sink: &mut dyn Sink) {
        sink.line(&format!(
            "  -> [{}] Attending class in the {} program (Enrollment: {})",
            self.kind(),
            self.program,
            self.enrollment_id
        ));
    }

    fn describe(&self) -> String {
        format!("Student of {}", self.program)
    }
}
