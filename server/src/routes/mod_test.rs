use super::*;

fn route_paths() -> Vec<String> {
    generate_route_list(client::app::App)
        .iter()
        .map(|route| route.path().to_owned())
        .collect()
}

#[tokio::test]
async fn every_static_page_path_is_its_own_route() {
    let paths = route_paths();
    for expected in [
        "/",
        "/signin",
        "/dashboard",
        "/dashboard/opportunities/search",
        "/dashboard/addopportunity",
        "/dashboard/addpartner",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing route {expected} in {paths:?}");
    }
}

#[tokio::test]
async fn parameterized_routes_are_declared() {
    let paths = route_paths();
    assert!(paths.iter().any(|p| p.starts_with("/dashboard/editopportunity/")), "{paths:?}");
    assert!(paths.iter().any(|p| p.starts_with("/opportunities/")), "{paths:?}");
}
