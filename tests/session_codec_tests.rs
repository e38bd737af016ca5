//! Session codec tests - exact round trips and rejection of bad blobs

use serde_json::{json, Value};
use tui_warehouse::core::{deserialize, serialize, SessionState};
use tui_warehouse::types::InputSymbol;

fn blob_value(state: &SessionState) -> Value {
    serde_json::from_str(&serialize(state).unwrap()).unwrap()
}

fn decode_value(value: &Value) -> Result<SessionState, tui_warehouse::core::FormatError> {
    deserialize(&value.to_string())
}

#[test]
fn test_roundtrip_along_a_played_session() {
    let mut state = SessionState::new("1234").unwrap();
    for ch in "EENNNNWWSXSXNNN".chars() {
        let input = match ch {
            'N' => InputSymbol::TurnOrMoveNorth,
            'E' => InputSymbol::TurnOrMoveEast,
            'S' => InputSymbol::TurnOrMoveSouth,
            'W' => InputSymbol::TurnOrMoveWest,
            _ => InputSymbol::Demolish,
        };
        state.apply_input(input);

        let decoded = deserialize(&serialize(&state).unwrap()).unwrap();
        assert_eq!(decoded, state);
    }
    assert!(state.score() > 200);
}

#[test]
fn test_resumed_session_plays_identically() {
    let inputs = [
        InputSymbol::TurnOrMoveEast,
        InputSymbol::TurnOrMoveEast,
        InputSymbol::TurnOrMoveNorth,
        InputSymbol::TurnOrMoveNorth,
        InputSymbol::Demolish,
        InputSymbol::TurnOrMoveNorth,
    ];

    let mut live = SessionState::new("warehouse").unwrap();
    let mut resumed = deserialize(&serialize(&live).unwrap()).unwrap();
    for input in inputs {
        assert_eq!(live.apply_input(input), resumed.apply_input(input));
        resumed = deserialize(&serialize(&resumed).unwrap()).unwrap();
    }
    assert_eq!(live, resumed);
}

#[test]
fn test_rejects_operator_outside_grid() {
    let state = SessionState::new("1234").unwrap();
    let mut value = blob_value(&state);
    value["bob"]["row"] = json!(9);
    let err = decode_value(&value).unwrap_err();
    assert_eq!(err.code(), "invalid_operator");
}

#[test]
fn test_rejects_operator_on_crate() {
    let state = SessionState::new("1234").unwrap();
    let mut value = blob_value(&state);
    value["bob"]["row"] = json!(0);
    value["bob"]["col"] = json!(1);
    let err = decode_value(&value).unwrap_err();
    assert_eq!(err.code(), "invalid_operator");
}

#[test]
fn test_rejects_empty_target() {
    let state = SessionState::new("1234").unwrap();
    let mut value = blob_value(&state);
    value["bob"]["targetRow"] = json!(5);
    let err = decode_value(&value).unwrap_err();
    assert_eq!(err.code(), "invalid_target");
}

#[test]
fn test_rejects_ragged_board_and_bad_tier() {
    let state = SessionState::new("1234").unwrap();

    let mut value = blob_value(&state);
    value["board"][3] = json!([0, 0, 0]);
    assert_eq!(decode_value(&value).unwrap_err().code(), "invalid_board_shape");

    let mut value = blob_value(&state);
    value["board"][3][3] = json!(7);
    assert_eq!(decode_value(&value).unwrap_err().code(), "invalid_tier");
}

#[test]
fn test_rejects_finished_session_without_win() {
    let state = SessionState::new("1234").unwrap();
    let mut value = blob_value(&state);
    value["isPlaying"] = json!(false);
    assert_eq!(decode_value(&value).unwrap_err().code(), "inconsistent_state");
}

#[test]
fn test_rejects_unknown_and_missing_fields() {
    let state = SessionState::new("1234").unwrap();

    let mut value = blob_value(&state);
    value["lives"] = json!(3);
    assert_eq!(decode_value(&value).unwrap_err().code(), "invalid_json");

    let mut value = blob_value(&state);
    value.as_object_mut().unwrap().remove("score");
    assert_eq!(decode_value(&value).unwrap_err().code(), "invalid_json");

    let mut value = blob_value(&state);
    value["bob"]["direction"] = json!("up");
    assert_eq!(decode_value(&value).unwrap_err().code(), "invalid_json");
}

#[test]
fn test_rejects_foreign_format_tag() {
    let state = SessionState::new("1234").unwrap();
    let mut value = blob_value(&state);
    value["format"] = json!("sokoban");
    assert_eq!(decode_value(&value).unwrap_err().code(), "unsupported_format");
}
