#[cfg(test)]
mod tests {
    use crate::application::create_user::{CreateUserCommand, CreateUserUseCase};
    use crate::domain::params::NewUserParams;
    use crate::domain::repositories::UserRepository;
    use crate::infrastructure::memory::InMemoryUserRepository;
    use crate::utils::{fixed_clock, user_params, user_repo};
    use chrono::NaiveDate;
    use shared_kernel::errors::DomainError;
    use std::sync::Arc;

    fn setup() -> (CreateUserUseCase, Arc<InMemoryUserRepository>) {
        let repo = user_repo();
        let use_case = CreateUserUseCase::new(repo.clone(), fixed_clock());
        (use_case, repo)
    }

    #[test]
    fn test_create_user_success() {
        let (use_case, repo) = setup();
        let params = NewUserParams::new("mail@mail.ru", "dolore")
            .with_display_name("Nick Name")
            .with_birthday(NaiveDate::from_ymd_opt(1946, 8, 20).unwrap());

        let user = use_case.execute(params.into()).unwrap();

        assert_eq!(user.id().as_u64(), 1);
        assert_eq!(user.display_name().as_str(), "Nick Name");
        assert!(user.friends().is_empty());
        assert_eq!(repo.find_user_by_id(user.id()).unwrap(), Some(user));
    }

    #[test]
    fn test_create_user_display_name_falls_back_to_login() {
        let (use_case, _) = setup();

        let user = use_case
            .execute(user_params("nickname").with_display_name("  ").into())
            .unwrap();

        assert_eq!(user.display_name().as_str(), "nickname");
    }

    #[test]
    fn test_create_user_birthday_today_is_accepted() {
        let (use_case, _) = setup();
        let params = user_params("born_today").with_birthday(crate::utils::today());

        assert!(use_case.execute(params.into()).is_ok());
    }

    #[test]
    fn test_create_user_rejected_leaves_store_untouched() {
        let (use_case, repo) = setup();
        let params = NewUserParams::new("mail@mail.ru", "dolore ullamco");

        let result = use_case.execute(params.into());

        assert!(matches!(result, Err(DomainError::Validation { field: "login", .. })));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_create_user_from_json_payload() {
        let (use_case, _) = setup();
        let command: CreateUserCommand = serde_json::from_str(
            r#"{ "login": "dolore", "email": "mail@mail.ru", "birthday": "1946-08-20" }"#,
        )
        .unwrap();

        let user = use_case.execute(command).unwrap();
        assert_eq!(user.display_name().as_str(), "dolore");
    }

    #[test]
    fn test_create_user_ids_are_never_reused() {
        let (use_case, repo) = setup();
        let first = use_case.execute(user_params("first").into()).unwrap();
        repo.delete_user(first.id(), &mut |_| Ok(())).unwrap();

        let second = use_case.execute(user_params("second").into()).unwrap();
        assert_eq!(second.id().as_u64(), 2);
    }
}
