use super::*;

#[test]
fn path_builders_format_ids() {
    assert_eq!(edit_opportunity_path(5), "/dashboard/editopportunity/5");
    assert_eq!(opportunity_path(8), "/opportunities/8");
}

#[test]
fn parse_id_accepts_numbers_only() {
    assert_eq!(parse_id(Some("17")), Some(17));
    assert_eq!(parse_id(Some("abc")), None);
    assert_eq!(parse_id(Some("")), None);
    assert_eq!(parse_id(None), None);
}

#[test]
fn dashboard_search_is_its_own_path() {
    assert_ne!(DASHBOARD_PATH, DASHBOARD_SEARCH_PATH);
    assert!(DASHBOARD_SEARCH_PATH.starts_with(DASHBOARD_PATH));
}
