#[cfg(test)]
mod tests {
    use crate::application::list_friends::{ListFriendsCommand, ListFriendsUseCase};
    use crate::domain::repositories::UserRepository;
    use crate::domain::value_objects::UserId;
    use crate::utils::{seed_user, user_repo};

    #[test]
    fn test_list_friends_sorted_by_id() {
        let repo = user_repo();
        let a = seed_user(repo.as_ref(), "a");
        let b = seed_user(repo.as_ref(), "b");
        let c = seed_user(repo.as_ref(), "c");
        repo.add_friendship(a.id(), c.id()).unwrap();
        repo.add_friendship(a.id(), b.id()).unwrap();
        let use_case = ListFriendsUseCase::new(repo);

        let friends = use_case.execute(ListFriendsCommand { user_id: a.id() }).unwrap();

        let ids: Vec<_> = friends.iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![b.id(), c.id()]);
        assert!(friends[0].is_friend_of(a.id()));
    }

    #[test]
    fn test_list_friends_unknown_user() {
        let use_case = ListFriendsUseCase::new(user_repo());

        let result = use_case.execute(ListFriendsCommand { user_id: UserId::new_unchecked(1) });

        assert!(result.unwrap_err().is_not_found());
    }
}
