#[cfg(test)]
mod tests {
    use crate::application::add_friend::{AddFriendCommand, AddFriendUseCase};
    use crate::domain::repositories::UserRepository;
    use crate::domain::value_objects::UserId;
    use crate::infrastructure::memory::InMemoryUserRepository;
    use crate::utils::{seed_user, user_repo};
    use shared_kernel::errors::DomainError;
    use std::sync::Arc;

    fn setup() -> (AddFriendUseCase, Arc<InMemoryUserRepository>) {
        let repo = user_repo();
        (AddFriendUseCase::new(repo.clone()), repo)
    }

    #[test]
    fn test_add_friend_is_symmetric() {
        let (use_case, repo) = setup();
        let a = seed_user(repo.as_ref(), "a");
        let b = seed_user(repo.as_ref(), "b");

        use_case
            .execute(AddFriendCommand { user_id: a.id(), friend_id: b.id() })
            .unwrap();

        let a = repo.find_user_by_id(a.id()).unwrap().unwrap();
        let b = repo.find_user_by_id(b.id()).unwrap().unwrap();
        assert!(a.is_friend_of(b.id()));
        assert!(b.is_friend_of(a.id()));
    }

    #[test]
    fn test_add_friend_twice_is_noop() {
        let (use_case, repo) = setup();
        let a = seed_user(repo.as_ref(), "a");
        let b = seed_user(repo.as_ref(), "b");
        let cmd = AddFriendCommand { user_id: a.id(), friend_id: b.id() };

        use_case.execute(cmd).unwrap();
        use_case.execute(cmd).unwrap();
        use_case
            .execute(AddFriendCommand { user_id: b.id(), friend_id: a.id() })
            .unwrap();

        assert_eq!(repo.find_friends(a.id()).unwrap().len(), 1);
        assert!(repo.friendships_are_symmetric());
    }

    #[test]
    fn test_add_friend_reports_user_before_friend() {
        let (use_case, repo) = setup();
        let a = seed_user(repo.as_ref(), "a");
        let ghost = UserId::new_unchecked(404);
        let other_ghost = UserId::new_unchecked(405);

        let result = use_case.execute(AddFriendCommand { user_id: ghost, friend_id: other_ghost });
        assert!(matches!(result, Err(DomainError::NotFound { ref id, .. }) if id == "404"));

        let result = use_case.execute(AddFriendCommand { user_id: a.id(), friend_id: ghost });
        assert!(matches!(result, Err(DomainError::NotFound { ref id, .. }) if id == "404"));

        let result = use_case.execute(AddFriendCommand { user_id: ghost, friend_id: a.id() });
        assert!(matches!(result, Err(DomainError::NotFound { ref id, .. }) if id == "404"));
        assert!(repo.find_friends(a.id()).unwrap().is_empty());
    }

    #[test]
    fn test_add_friend_self_is_rejected() {
        let (use_case, repo) = setup();
        let a = seed_user(repo.as_ref(), "a");

        let result = use_case.execute(AddFriendCommand { user_id: a.id(), friend_id: a.id() });

        assert!(matches!(result, Err(DomainError::Validation { field: "friend_id", .. })));
        assert!(repo.find_friends(a.id()).unwrap().is_empty());
    }

    #[test]
    fn test_add_friend_self_unknown_is_not_found() {
        let (use_case, _) = setup();
        let ghost = UserId::new_unchecked(7);

        let result = use_case.execute(AddFriendCommand { user_id: ghost, friend_id: ghost });

        assert!(result.unwrap_err().is_not_found());
    }
}
