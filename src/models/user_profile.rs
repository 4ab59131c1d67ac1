use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::MovieId;

/// A corpus member and the movies they have liked.
///
/// Membership is what matters, so the liked movies live in a set. An ordered
/// set specifically: every pass over a profile walks ids ascending, no matter
/// what order the data service returned them, which keeps downstream
/// tie-breaking independent of wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: u64,
    /// Liked movie ids; `movies` on the wire.
    #[serde(rename = "movies")]
    pub liked: BTreeSet<MovieId>,
}

impl UserProfile {
    /// Number of liked movies that appear in `selection`.
    pub fn overlap_with(&self, selection: &std::collections::HashSet<MovieId>) -> usize {
        self.liked.iter().filter(|id| selection.contains(id)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_profile_parses_mixed_id_representations() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id": 7, "movies": [1, "2", 9, "30"]}"#).unwrap();
        assert_eq!(profile.user_id, 7);
        let liked: Vec<u64> = profile.liked.iter().map(|id| id.0).collect();
        assert_eq!(liked, vec![1, 2, 9, 30]);
    }

    #[test]
    fn test_profile_dedupes_liked_ids() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id": 1, "movies": [3, 3, "3"]}"#).unwrap();
        assert_eq!(profile.liked.len(), 1);
    }

    #[test]
    fn test_overlap_with() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id": 1, "movies": [1, 2, 3, 9]}"#).unwrap();
        let selection: HashSet<MovieId> = [MovieId(1), MovieId(2), MovieId(5)].into();
        assert_eq!(profile.overlap_with(&selection), 2);
    }
}
