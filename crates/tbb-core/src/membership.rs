use serde::{Deserialize, Deserializer};

/// Membership status as reported by the admin directory (`getChatMember`).
///
/// Only `creator` and `administrator` carry privilege; every other status
/// (member, restricted, left, kicked, anything unknown) is unprivileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberStatus {
    Creator,
    Administrator,
    Member,
    Other,
}

impl MemberStatus {
    /// Map a wire status string. Unknown strings degrade to `Other`.
    pub fn from_api(status: &str) -> Self {
        match status {
            "creator" => MemberStatus::Creator,
            "administrator" => MemberStatus::Administrator,
            "member" => MemberStatus::Member,
            _ => MemberStatus::Other,
        }
    }

    pub fn is_privileged(self) -> bool {
        matches!(self, MemberStatus::Creator | MemberStatus::Administrator)
    }
}

impl<'de> Deserialize<'de> for MemberStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MemberStatus::from_api(&s))
    }
}

/// The oracle's answer for one (chat, user) pair.
///
/// Produced fresh for every request, never cached. A failed query is a
/// negative verdict with an explanation, never an implicit grant.
#[derive(Clone, Debug)]
pub struct AdminVerdict {
    pub is_admin: bool,
    pub status: Option<MemberStatus>,
    pub error: Option<String>,
}

impl AdminVerdict {
    pub fn from_status(status: MemberStatus) -> Self {
        Self {
            is_admin: status.is_privileged(),
            status: Some(status),
            error: None,
        }
    }

    /// Fail-closed verdict: the caller could not determine membership.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            is_admin: false,
            status: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_and_administrator_are_privileged() {
        assert!(AdminVerdict::from_status(MemberStatus::Creator).is_admin);
        assert!(AdminVerdict::from_status(MemberStatus::Administrator).is_admin);
    }

    #[test]
    fn other_statuses_are_unprivileged() {
        assert!(!AdminVerdict::from_status(MemberStatus::Member).is_admin);
        assert!(!AdminVerdict::from_status(MemberStatus::Other).is_admin);
    }

    #[test]
    fn query_failure_is_never_an_admin_grant() {
        let v = AdminVerdict::failure("network unreachable");
        assert!(!v.is_admin);
        assert_eq!(v.status, None);
        assert_eq!(v.error.as_deref(), Some("network unreachable"));
    }

    #[test]
    fn status_parses_from_wire_strings() {
        assert_eq!(MemberStatus::from_api("creator"), MemberStatus::Creator);
        assert_eq!(
            MemberStatus::from_api("administrator"),
            MemberStatus::Administrator
        );
        assert_eq!(MemberStatus::from_api("member"), MemberStatus::Member);
        assert_eq!(MemberStatus::from_api("restricted"), MemberStatus::Other);
        assert_eq!(MemberStatus::from_api("kicked"), MemberStatus::Other);
    }

    #[test]
    fn status_deserializes_from_json() {
        let status: MemberStatus = serde_json::from_str("\"administrator\"").unwrap();
        assert_eq!(status, MemberStatus::Administrator);
        let status: MemberStatus = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(status, MemberStatus::Other);
    }
}
