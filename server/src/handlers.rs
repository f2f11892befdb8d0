use actix_web::{http::StatusCode, web, Error, HttpResponse};
use garageql::{Ctx, Schema};
use juniper::http::graphiql::graphiql_source;
use juniper::http::GraphQLRequest;

const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> HttpResponse {
    let html = graphiql_source(GRAPHQL_PATH, None);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

async fn graphql(
    schema: web::Data<Schema>,
    ctx: web::Data<Ctx>,
    data: web::Json<GraphQLRequest>,
) -> Result<HttpResponse, Error> {
    let (ok, body) = web::block(move || {
        let res = data.execute_sync(schema.get_ref(), ctx.get_ref());
        serde_json::to_string(&res).map(|body| (res.is_ok(), body))
    })
    .await??;
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(body))
}

/// Mounts execution (`POST`) and GraphiQL (`GET`) on the same path.
/// Expects [Schema] and [Ctx] as app data.
pub fn register(config: &mut web::ServiceConfig) {
    config.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(graphql))
            .route(web::get().to(graphiql)),
    );
}
