//! The member container.
//!
//! A member has an identity and an ordered, growth-only list of roles. It
//! does not *become* a student or a teacher; it holds those roles and
//! delegates to them.

use tracing::{debug, trace};

use crate::roles::{AcademicRole, Role};
use crate::sink::Sink;

/// Line emitted after a member's activities.
pub const SEPARATOR: &str = "-------------------------------------------------";

/// Line emitted when a member holds no roles.
pub const NO_ACTIVITY: &str = "  - No academic activity registered.";

#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    national_id: String,
    /// Insertion order is the activity order.
    roles: Vec<Role>,
}

impl Member {
    pub fn new(name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            roles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    /// Roles in the order they were added.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Append a role. Duplicates are allowed.
    pub fn add_role(&mut self, role: impl Into<Role>) {
        let role = role.into();
        debug!(
            member = %self.name,
            role = %role.kind(),
            position = self.roles.len(),
            "Role added"
        );
        self.roles.push(role);
    }

    pub fn show_identity(&self, sink: &mut dyn Sink) {
        sink.line(&format!(
            "Member: {} (National ID: {})",
            self.name, self.national_id
        ));
    }

    /// Header, one line per role in insertion order (or the no-activity
    /// line), then the separator.
    pub fn run_daily_activities(&self, sink: &mut dyn Sink) {
        trace!(member = %self.name, roles = self.roles.len(), "Running daily activities");

        sink.line(&format!("Activities of {}:", self.name));
        if self.roles.is_empty() {
            sink.line(NO_ACTIVITY);
        } else {
            for role in &self.roles {
                role.perform_activity(sink);
            }
        }
        sink.line(SEPARATOR);
    }
}
