use super::*;

#[test]
fn loadable_default_is_loading() {
    let state: Loadable<Vec<i64>> = Loadable::default();
    assert!(state.is_loading());
}

#[test]
fn from_result_ok_is_ready() {
    let state = Loadable::from_result(Ok::<_, String>(5));
    assert_eq!(state, Loadable::Ready(5));
    assert!(!state.is_loading());
}

#[test]
fn from_result_err_keeps_message() {
    let state: Loadable<i32> = Loadable::from_result(Err("404 NOT FOUND"));
    assert_eq!(state, Loadable::Failed("404 NOT FOUND".to_owned()));
    assert!(!state.is_loading());
}

#[test]
fn ready_mut_allows_in_place_edit() {
    let mut state = Loadable::Ready(vec![1, 2, 3]);
    if let Some(items) = state.ready_mut() {
        items.retain(|n| *n != 2);
    }
    assert_eq!(state, Loadable::Ready(vec![1, 3]));
}

#[test]
fn ready_mut_is_none_unless_ready() {
    let mut loading: Loadable<Vec<i32>> = Loadable::Loading;
    assert!(loading.ready_mut().is_none());
    let mut failed: Loadable<Vec<i32>> = Loadable::Failed("boom".to_owned());
    assert!(failed.ready_mut().is_none());
}
