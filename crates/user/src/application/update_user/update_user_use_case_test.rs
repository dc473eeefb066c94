#[cfg(test)]
mod tests {
    use crate::application::update_user::{UpdateUserCommand, UpdateUserUseCase};
    use crate::domain::params::PatchUserParams;
    use crate::domain::repositories::UserRepository;
    use crate::domain::value_objects::UserId;
    use crate::infrastructure::memory::InMemoryUserRepository;
    use crate::utils::{fixed_clock, seed_user, user_repo};
    use chrono::NaiveDate;
    use shared_kernel::errors::DomainError;
    use std::sync::Arc;

    fn setup() -> (UpdateUserUseCase, Arc<InMemoryUserRepository>) {
        let repo = user_repo();
        let use_case = UpdateUserUseCase::new(repo.clone(), fixed_clock());
        (use_case, repo)
    }

    fn command(user_id: UserId, params: PatchUserParams) -> UpdateUserCommand {
        UpdateUserCommand { user_id, params }
    }

    #[test]
    fn test_update_email_only_leaves_other_fields() {
        let (use_case, repo) = setup();
        let user = seed_user(repo.as_ref(), "dolore");
        let friend = seed_user(repo.as_ref(), "friend");
        repo.add_friendship(user.id(), friend.id()).unwrap();
        let before = repo.find_user_by_id(user.id()).unwrap().unwrap();

        let params = PatchUserParams {
            email: Some("updated@mail.ru".into()),
            ..Default::default()
        };
        let updated = use_case.execute(command(user.id(), params)).unwrap();

        assert_eq!(updated.email().as_str(), "updated@mail.ru");
        assert_eq!(updated.login(), before.login());
        assert_eq!(updated.display_name(), before.display_name());
        assert_eq!(updated.birthday(), before.birthday());
        assert_eq!(updated.friends(), before.friends());
    }

    #[test]
    fn test_update_blank_display_name_takes_new_login() {
        let (use_case, repo) = setup();
        let user = seed_user(repo.as_ref(), "old_login");

        let params = PatchUserParams {
            login: Some("new_login".into()),
            display_name: Some("".into()),
            ..Default::default()
        };
        let updated = use_case.execute(command(user.id(), params)).unwrap();

        assert_eq!(updated.display_name().as_str(), "new_login");
    }

    #[test]
    fn test_update_unknown_user_is_not_found_before_validation() {
        let (use_case, _) = setup();

        // payload invalide ET id inconnu : NotFound l'emporte
        let params = PatchUserParams {
            email: Some("invalid".into()),
            ..Default::default()
        };
        let result = use_case.execute(command(UserId::new_unchecked(9999), params));

        assert!(matches!(result, Err(DomainError::NotFound { entity: "User", .. })));
    }

    #[test]
    fn test_update_invalid_field_has_no_effect() {
        let (use_case, repo) = setup();
        let user = seed_user(repo.as_ref(), "dolore");

        let params = PatchUserParams {
            email: Some("fresh@mail.ru".into()),
            birthday: NaiveDate::from_ymd_opt(2446, 8, 20),
            ..Default::default()
        };
        let result = use_case.execute(command(user.id(), params));

        assert!(matches!(result, Err(DomainError::Validation { field: "birthday", .. })));
        let stored = repo.find_user_by_id(user.id()).unwrap().unwrap();
        assert_eq!(stored.email(), user.email());
    }

    #[test]
    fn test_update_with_empty_payload_is_noop() {
        let (use_case, repo) = setup();
        let user = seed_user(repo.as_ref(), "dolore");

        let updated = use_case
            .execute(command(user.id(), PatchUserParams::default()))
            .unwrap();

        assert_eq!(updated, user);
    }

    #[test]
    fn test_update_with_empty_payload_on_unknown_user_is_not_found() {
        let (use_case, _) = setup();

        let result = use_case.execute(command(UserId::new_unchecked(9999), PatchUserParams::default()));

        assert!(matches!(result, Err(DomainError::NotFound { entity: "User", .. })));
    }
}
