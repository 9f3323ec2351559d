use crate::models::{Role, User};
use crate::session::Session;

/// What the signed-in user may do in the UI.
///
/// Derived once from the session and handed to views, which only ever ask the
/// boolean queries. This hides controls; the API enforces the real permissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    create: bool,
    edit: bool,
    delete: bool,
}

impl Capabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            create: true,
            edit: true,
            delete: true,
        }
    }

    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::all(),
            Role::User => Self::none(),
        }
    }

    pub fn for_user(user: Option<&User>) -> Self {
        user.map(|u| Self::for_role(u.role)).unwrap_or_default()
    }

    pub fn for_session(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::for_user(session.user.as_ref())
        } else {
            Self::none()
        }
    }

    pub fn can_create(&self) -> bool {
        self.create
    }

    pub fn can_edit(&self) -> bool {
        self.edit
    }

    pub fn can_delete(&self) -> bool {
        self.delete
    }

    /// No mutation at all: edit screens render as read-only details.
    pub fn is_read_only(&self) -> bool {
        !(self.create || self.edit || self.delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: String::new(),
            email: String::new(),
            role,
        }
    }

    #[test]
    fn test_admin_gets_every_capability() {
        let caps = Capabilities::for_user(Some(&user(Role::Admin)));
        assert!(caps.can_create());
        assert!(caps.can_edit());
        assert!(caps.can_delete());
        assert!(!caps.is_read_only());
    }

    #[test]
    fn test_standard_user_is_read_only() {
        let caps = Capabilities::for_user(Some(&user(Role::User)));
        assert!(!caps.can_create());
        assert!(!caps.can_edit());
        assert!(!caps.can_delete());
        assert!(caps.is_read_only());
    }

    #[test]
    fn test_anonymous_session_has_nothing() {
        assert_eq!(Capabilities::for_user(None), Capabilities::none());

        // A session that is still authenticating carries no user yet.
        let mut session = Session::default();
        session.begin();
        assert_eq!(Capabilities::for_session(&session), Capabilities::none());
    }

    #[test]
    fn test_for_session() {
        let session = Session::authenticated(user(Role::Admin), "tok".into());
        assert_eq!(Capabilities::for_session(&session), Capabilities::all());
    }
}
