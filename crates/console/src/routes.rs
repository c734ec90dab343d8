use crate::components::ResourceManager;
use crate::guard::Protected;
use crate::pages::{ContactList, Dashboard, NotFound, SchoolInfo, SignInPage, SignUpPage};
use panchayat_console_common::resources::{
    Award, Banner, Event, GalleryItem, GloriousPerson, HonoredOfficial, ImportantLink, Member,
    Notice, Officer, Program, Report, RtiDocument, SelfDeclaration, Suvichar,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/")]
    Dashboard,
    #[at("/administrative-officers")]
    Officers,
    #[at("/grambody")]
    Members,
    #[at("/mananiy-adhikari")]
    HonoredOfficials,
    #[at("/notice-manager")]
    Notices,
    #[at("/events")]
    Events,
    #[at("/gallery")]
    Gallery,
    #[at("/awards")]
    Awards,
    #[at("/mahitiadhikar")]
    RtiDocuments,
    #[at("/swayamghoshna")]
    SelfDeclarations,
    #[at("/reports")]
    Reports,
    #[at("/banner")]
    Banners,
    #[at("/govprograms")]
    Programs,
    #[at("/gloriouspersons")]
    GloriousPersons,
    #[at("/implinks")]
    ImportantLinks,
    #[at("/suvichar")]
    Suvichar,
    #[at("/school-info")]
    School,
    #[at("/contact-list")]
    Inquiries,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar entries in display order
    pub const MENU: &'static [(Self, &'static str)] = &[
        (Self::Dashboard, "Dashboard"),
        (Self::Officers, "Administrative Officers"),
        (Self::Members, "Gram Panchayat Body"),
        (Self::HonoredOfficials, "Mananiy Adhikari"),
        (Self::Notices, "Notices"),
        (Self::Events, "Events"),
        (Self::Gallery, "Gallery"),
        (Self::Awards, "Awards"),
        (Self::RtiDocuments, "Mahiti Adhikar"),
        (Self::SelfDeclarations, "Swayam Ghoshna"),
        (Self::Reports, "Reports"),
        (Self::Banners, "Banners"),
        (Self::Programs, "Government Programs"),
        (Self::GloriousPersons, "Glorious Persons"),
        (Self::ImportantLinks, "Important Links"),
        (Self::Suvichar, "Suvichar"),
        (Self::School, "School Info"),
        (Self::Inquiries, "Inquiries"),
    ];

    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp | Self::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    let page = match &route {
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::NotFound => html! { <NotFound /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Officers => html! { <ResourceManager<Officer> /> },
        Route::Members => html! { <ResourceManager<Member> /> },
        Route::HonoredOfficials => html! { <ResourceManager<HonoredOfficial> /> },
        Route::Notices => html! { <ResourceManager<Notice> /> },
        Route::Events => html! { <ResourceManager<Event> /> },
        Route::Gallery => html! { <ResourceManager<GalleryItem> /> },
        Route::Awards => html! { <ResourceManager<Award> /> },
        Route::RtiDocuments => html! { <ResourceManager<RtiDocument> /> },
        Route::SelfDeclarations => html! { <ResourceManager<SelfDeclaration> /> },
        Route::Reports => html! { <ResourceManager<Report> /> },
        Route::Banners => html! { <ResourceManager<Banner> /> },
        Route::Programs => html! { <ResourceManager<Program> /> },
        Route::GloriousPersons => html! { <ResourceManager<GloriousPerson> /> },
        Route::ImportantLinks => html! { <ResourceManager<ImportantLink> /> },
        Route::Suvichar => html! { <ResourceManager<Suvichar> /> },
        Route::School => html! { <SchoolInfo /> },
        Route::Inquiries => html! { <ContactList /> },
    };

    if route.is_protected() {
        html! { <Protected>{ page }</Protected> }
    } else {
        page
    }
}
