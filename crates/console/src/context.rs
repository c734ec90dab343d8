//! Context handles shared by every screen

use panchayat_console_common::{AuthenticatedClient, PublicClient, SessionStore};
use yew::prelude::*;

/// API clients built once by the app root
#[derive(Clone, PartialEq)]
pub struct ApiContext {
    pub public: PublicClient,
    pub client: AuthenticatedClient,
}

#[hook]
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
        .expect("SessionStore not found. Make sure the component is rendered inside App")
}

#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
        .expect("ApiContext not found. Make sure the component is rendered inside App")
}

/// Client for screens inside the protected subtree
#[hook]
pub fn use_client() -> AuthenticatedClient {
    use_api().client
}
