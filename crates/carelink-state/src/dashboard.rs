//! Role-based dashboard dispatch.
//!
//! The portal branches its landing page on the signed-in role. That is plain
//! runtime dispatch over a closed enum, expressed as a `match` — no
//! inheritance, no registry.

use carelink_core::models::Role;

/// A section of a role's dashboard, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Appointments,
    TestResults,
    Messages,
    VitalsTracking,
    PatientRoster,
    Schedule,
    PatientQueue,
    VitalsEntry,
}

/// The section list a role's dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardView {
    pub role: Role,
    pub sections: &'static [DashboardSection],
}

impl DashboardView {
    /// Dispatch on the signed-in role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        use DashboardSection as S;
        let sections: &'static [S] = match role {
            Role::Patient => &[
                S::Appointments,
                S::TestResults,
                S::Messages,
                S::VitalsTracking,
            ],
            Role::Doctor => &[S::PatientRoster, S::Schedule, S::Messages],
            Role::Nurse => &[S::PatientQueue, S::VitalsEntry, S::Messages],
        };
        Self { role, sections }
    }
}
