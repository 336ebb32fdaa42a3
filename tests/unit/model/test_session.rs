use api_session_client::prelude::*;
use std::collections::HashSet;

#[test]
fn test_tokens_are_unique() {
    let tokens: HashSet<String> = (0..100)
        .map(|_| SessionToken::generate().token().to_string())
        .collect();
    assert_eq!(tokens.len(), 100);
}

#[test]
fn test_token_issued_now() {
    let before = Utc::now();
    let token = SessionToken::generate();
    let after = Utc::now();
    assert!(token.issued_at() >= before);
    assert!(token.issued_at() <= after);
    assert_eq!(token.token().len(), 21);
}

#[test]
fn test_token_serialization() {
    let token = SessionToken::generate();
    let json = serde_json::to_string(&token).expect("serialize");
    let back: SessionToken = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, token);
}

#[test]
fn test_session_state_serialization() {
    assert_eq!(
        serde_json::to_value(SessionState::Ready).unwrap(),
        json!("Ready")
    );
}
