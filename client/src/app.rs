//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_params_map,
};

use crate::components::alert::{Alert, AlertMessage};
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    opportunity_detail::OpportunityDetailPage,
    opportunity_form::{FormMode, OpportunityFormPage},
    partner_form::AddPartnerPage,
    signin::SigninPage,
};
use crate::routes::parse_id;
use crate::state::session::AppContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the shared session and hands it to every routed page. Each path is
/// its own `<Route>`, so moving between two paths that show the same page
/// still remounts it and reruns its mount fetch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/volops.css"/>
        <Title text="Volunteer Force"/>

        <Router>
            <Nav/>
            <main class="container">
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=|| view! { <HomePage app=session()/> }/>
                    <Route path=StaticSegment("signin") view=|| view! { <SigninPage app=session()/> }/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <DashboardPage app=session()/> }/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("opportunities"), StaticSegment("search"))
                        view=|| view! { <DashboardPage app=session()/> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("addopportunity"))
                        view=|| view! { <OpportunityFormPage app=session() mode=FormMode::Create/> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("editopportunity"), ParamSegment("id"))
                        view=EditOpportunityRoute
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("addpartner"))
                        view=|| view! { <AddPartnerPage app=session()/> }
                    />
                    <Route path=(StaticSegment("opportunities"), ParamSegment("id")) view=OpportunityDetailRoute/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

fn session() -> AppContext {
    expect_context::<AppContext>()
}

/// The `:id` route parameter as a number; `None` when it is not one.
fn route_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| parse_id(params.read().get("id").as_deref()))
}

#[component]
fn EditOpportunityRoute() -> impl IntoView {
    let app = session();
    let id = route_id();
    move || match id.get() {
        Some(id) => view! { <OpportunityFormPage app=app mode=FormMode::Edit(id)/> }.into_any(),
        None => invalid_id().into_any(),
    }
}

#[component]
fn OpportunityDetailRoute() -> impl IntoView {
    let app = session();
    let id = route_id();
    move || match id.get() {
        Some(id) => view! { <OpportunityDetailPage app=app id=id/> }.into_any(),
        None => invalid_id().into_any(),
    }
}

fn invalid_id() -> impl IntoView {
    view! { <Alert message=Signal::stored(Some(AlertMessage::danger("No opportunity with that id.")))/> }
}
