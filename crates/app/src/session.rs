use dioxus::prelude::*;
use shared_types::{SessionAdmin, SessionUser, UserRole};

/// End-user authentication slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserSession {
    pub current_user: Signal<Option<SessionUser>>,
}

impl UserSession {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }

    /// Read-only snapshot handed to guard predicates.
    pub fn snapshot(&self) -> UserSnapshot {
        match self.current_user.read().as_ref() {
            Some(user) => UserSnapshot::SignedIn {
                role: user.role,
                blocked: user.blocked,
            },
            None => UserSnapshot::SignedOut,
        }
    }
}

/// What guard predicates see of the end-user slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSnapshot {
    SignedOut,
    SignedIn { role: UserRole, blocked: bool },
}

/// Admin authentication slice, independent of the end-user slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdminSession {
    pub current_admin: Signal<Option<SessionAdmin>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            current_admin: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_admin.read().is_some()
    }

    pub fn set_admin(&mut self, admin: SessionAdmin) {
        self.current_admin.set(Some(admin));
    }

    pub fn clear(&mut self) {
        self.current_admin.set(None);
    }
}

/// Hook to access the end-user session slice.
pub fn use_user_session() -> UserSession {
    use_context::<UserSession>()
}

/// Hook to access the admin session slice.
pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>()
}
