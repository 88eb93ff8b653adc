use integration_tests::test_authenticator;

#[tokio::test]
async fn login_is_true_only_for_the_exact_seeded_pair() {
    let auth = test_authenticator();

    assert!(auth.login("admin", "1234").await);

    // それ以外のあらゆる組み合わせは false
    for (username, password) in [
        ("admin", ""),
        ("", "1234"),
        ("", ""),
        ("ADMIN", "1234"),
        ("admin", "12345"),
        (" admin", "1234"),
        ("guest", "guest"),
    ] {
        assert!(
            !auth.login(username, password).await,
            "unexpected success for {username:?}/{password:?}"
        );
    }
}

#[tokio::test]
async fn authenticator_never_errors_and_keeps_no_session() {
    let auth = test_authenticator();

    assert!(auth.login("admin", "1234").await);

    // セッションは発行されないため、ログイン後も未認証のまま
    assert!(!auth.is_authenticated());

    // ログアウトは観測可能な効果を持たない
    auth.logout().await;
    assert!(!auth.is_authenticated());
    assert!(auth.login("admin", "1234").await);
}
