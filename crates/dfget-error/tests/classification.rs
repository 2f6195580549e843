use std::error::Error;
use std::sync::Arc;

use dfget_error::{
    ContextError, ERR_NOT_INITIALIZED, ERR_RANGE_NOT_SATISFIABLE, ErrorCategory, ResultExt,
    TaggedError, category_of, chain, is_convert_failed, is_invalid_value, is_nil,
    is_not_initialized, is_range_not_satisfiable, tagged, tagged_err, wrap,
};

// Layers a caller might stack on top of a tagged error.
#[derive(Debug, thiserror::Error)]
enum PieceError {
    #[error("piece {index} unavailable")]
    Unavailable {
        index: u32,
        #[source]
        source: TaggedError,
    },
    #[error("piece rejected")]
    Tagged(#[from] TaggedError),
    #[error("peer i/o")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("task {task_id} failed")]
struct TaskError {
    task_id: String,
    #[source]
    source: PieceError,
}

fn read_range(len: u64, start: u64, end: u64) -> Result<u64, TaggedError> {
    if end > len || start > end {
        return tagged_err!(
            ErrorCategory::RangeNotSatisfiable,
            "range {start}-{end} exceeds length {len}"
        );
    }
    Ok(end - start)
}

fn fetch_piece(index: u32) -> Result<u64, PieceError> {
    let n = read_range(100, 90, 120).map_err(|source| PieceError::Unavailable { index, source })?;
    Ok(n)
}

#[test]
fn range_error_survives_nested_wrapping() {
    let err = TaskError {
        task_id: "t-1".into(),
        source: fetch_piece(4).unwrap_err(),
    };
    assert!(is_range_not_satisfiable(Some(&err)));
    assert!(!is_invalid_value(Some(&err)));

    let tagged = chain::find_tagged(&err).expect("tagged cause");
    assert_eq!(tagged.message(), "range 90-120 exceeds length 100");
    assert_eq!(
        tagged.describe(),
        r#"{"Code":3,"Msg":"range 90-120 exceeds length 100"}"#
    );

    let outer = wrap(err, "scheduler");
    assert!(is_range_not_satisfiable(Some(&outer)));
    assert_eq!(chain::causes(&outer).count(), 4);
}

#[test]
fn from_and_boxed_layers_classify() {
    let err = PieceError::from(ERR_NOT_INITIALIZED);
    assert!(is_not_initialized(Some(&err)));

    let boxed: Box<dyn Error + Send + Sync> = Box::new(ContextError::new("init", err));
    assert!(is_not_initialized(Some(&*boxed)));
    assert!(!is_nil(Some(&*boxed)));
}

#[test]
fn unrelated_chains_never_classify() {
    let err = TaskError {
        task_id: "t-2".into(),
        source: PieceError::from(std::io::Error::other("reset by peer")),
    };
    assert_eq!(category_of(Some(&err)), None);
    assert!(!is_range_not_satisfiable(Some(&err)));
    assert!(!is_convert_failed(Some(&err)));
    assert!(!is_not_initialized(Some(&err)));
    assert!(!is_invalid_value(Some(&err)));
}

#[derive(Debug, thiserror::Error)]
#[error("piece {index} failed")]
struct BoxedPieceError {
    index: u32,
    #[source]
    source: Box<TaggedError>,
}

#[derive(Debug, thiserror::Error)]
#[error("shared piece failure")]
struct SharedPieceError {
    #[source]
    source: Arc<TaggedError>,
}

#[test]
fn boxed_and_shared_tagged_sources_classify() {
    let boxed = BoxedPieceError {
        index: 2,
        source: Box::new(ERR_RANGE_NOT_SATISFIABLE),
    };
    assert!(is_range_not_satisfiable(Some(&boxed)));
    assert_eq!(chain::find_tagged(&boxed), Some(&ERR_RANGE_NOT_SATISFIABLE));

    let shared = Arc::new(ERR_RANGE_NOT_SATISFIABLE);
    let layered = wrap(
        SharedPieceError {
            source: Arc::clone(&shared),
        },
        "scheduler",
    );
    assert!(is_range_not_satisfiable(Some(&layered)));
    assert!(!is_invalid_value(Some(&layered)));

    let bare: Box<TaggedError> = Box::new(ERR_RANGE_NOT_SATISFIABLE);
    assert!(is_range_not_satisfiable(Some(&bare)));
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct Opaque(TaggedError);

#[test]
fn transparent_wrappers_hide_the_tagged_error() {
    // `transparent` forwards `source()` to the inner error, skipping the inner error itself.
    let err = Opaque(ERR_NOT_INITIALIZED);
    assert_eq!(err.to_string(), r#"{"Code":1,"Msg":"not initialized"}"#);
    assert!(!is_not_initialized(Some(&err)));
}

#[test]
fn no_error_is_nil_and_matches_nothing() {
    assert!(is_nil(None));
    assert!(!is_range_not_satisfiable(None));
    assert_eq!(category_of(None), None);
}

#[test]
fn result_ext_classifies_across_context() {
    let res = fetch_piece(9).context("download").context("task t-3");
    assert!(res.is_range_not_satisfiable());
    assert_eq!(res.category(), Some(ErrorCategory::RangeNotSatisfiable));

    let ok = read_range(10, 0, 5).context("unused");
    assert_eq!(ok.ok(), Some(5));
}

#[test]
fn formatted_convert_error() {
    let err = tagged!(ErrorCategory::ConvertFailed, "cannot convert {} to {}", "a", "b");
    assert_eq!(err.message(), "cannot convert a to b");
    assert!(is_convert_failed(Some(&err)));
    assert_eq!(err.to_string(), r#"{"Code":2,"Msg":"cannot convert a to b"}"#);
}

#[test]
fn sentinels_are_shared_constants() {
    let a = ERR_RANGE_NOT_SATISFIABLE;
    let b = TaggedError::sentinel(ErrorCategory::RangeNotSatisfiable);
    assert_eq!(a, b);
    assert_eq!(a.code(), 3);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert!(is_range_not_satisfiable(Some(&ERR_RANGE_NOT_SATISFIABLE))));
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn describe_parses_as_json_without_quotes() {
    let err = TaggedError::new(ErrorCategory::InvalidValue, "bad port");
    let value: serde_json::Value = serde_json::from_str(&err.describe()).expect("json");
    assert_eq!(value["Code"], 0);
    assert_eq!(value["Msg"], "bad port");

    let quoted = TaggedError::new(ErrorCategory::InvalidValue, r#"bad "port""#);
    assert!(serde_json::from_str::<serde_json::Value>(&quoted.describe()).is_err());
    assert!(serde_json::from_str::<serde_json::Value>(&quoted.to_json().expect("json")).is_ok());
}
