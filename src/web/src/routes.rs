use crate::LeagueAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(crate::tenants::routes::routes())
            .merge(crate::teams::routes::routes())
            .merge(crate::standings::routes::routes())
            .merge(crate::matches::routes::routes())
            .merge(crate::players::routes::routes())
    }
}
