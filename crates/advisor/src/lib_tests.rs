use super::*;
use chess_rules::START_FEN;

#[test]
fn test_parse_plain_token() {
    let mv = parse_move_token("e2e4").unwrap();
    assert_eq!(mv.from, Square::new(1, 4));
    assert_eq!(mv.to, Square::new(3, 4));
    assert_eq!(mv.promotion, None);
}

#[test]
fn test_parse_promotion_token() {
    let mv = parse_move_token("e7e8q").unwrap();
    assert_eq!(mv.from, Square::new(6, 4));
    assert_eq!(mv.to, Square::new(7, 4));
    assert_eq!(mv.promotion, Some(PieceKind::Queen));

    let mv = parse_move_token("a2a1N").unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Knight));
}

#[test]
fn test_parse_rejects_malformed_tokens() {
    for bad in ["", "e2", "e2e", "e2e9", "i2e4", "e2e4x", "e2e4qq", "é2e4"] {
        assert!(
            matches!(parse_move_token(bad), Err(SuggestionError::MalformedToken(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_parse_trims_whitespace() {
    assert!(parse_move_token(" e2e4\n").is_ok());
}

#[test]
fn test_best_move_from_response() {
    let response = SuggestionResponse {
        success: true,
        data: Some("bestmove e2e4 ponder e7e5".to_string()),
    };
    let mv = best_move_from_response(&response).unwrap();
    assert_eq!(mv.from, Square::new(1, 4));
    assert_eq!(mv.to, Square::new(3, 4));
}

#[test]
fn test_best_move_missing_data() {
    let empty = SuggestionResponse {
        success: false,
        data: None,
    };
    assert_eq!(
        best_move_from_response(&empty),
        Err(SuggestionError::MissingData)
    );

    let blank = SuggestionResponse {
        success: true,
        data: Some("   ".to_string()),
    };
    assert_eq!(
        best_move_from_response(&blank),
        Err(SuggestionError::MissingData)
    );

    let tokenless = SuggestionResponse {
        success: true,
        data: Some("bestmove".to_string()),
    };
    assert!(matches!(
        best_move_from_response(&tokenless),
        Err(SuggestionError::MalformedToken(_))
    ));
}

#[test]
fn test_query_serialization() {
    let query = SuggestionQuery::best_move(START_FEN);
    let json = serde_json::to_string(&query).unwrap();
    assert!(json.contains("\"FEN\""));
    assert!(json.contains("\"depth\":13"));
    assert!(json.contains("\"mode\":\"bestmove\""));

    let back: SuggestionQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(back, query);
}

#[test]
fn test_response_deserialization() {
    let response: SuggestionResponse =
        serde_json::from_str(r#"{"success":true,"data":"bestmove g1f3"}"#).unwrap();
    assert!(response.success);
    assert_eq!(response.data.as_deref(), Some("bestmove g1f3"));

    // a payload without data still deserializes
    let response: SuggestionResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert_eq!(response.data, None);
}

#[test]
fn test_apply_suggestion_drives_the_engine() {
    let mut board = Board::new();
    let mv = parse_move_token("e2e4").unwrap();
    apply_suggestion(&mut board, mv).unwrap();
    assert_eq!(
        board.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    // illegal suggestions are rejected by the engine, not the translator
    let mv = parse_move_token("e4e2").unwrap();
    assert!(apply_suggestion(&mut board, mv).is_err());
}
