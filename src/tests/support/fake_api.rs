use actix_web::{web, App, HttpServer};

/// A throwaway HTTP server standing in for the portfolio API.
pub struct FakeApi {
    pub base_url: String,
}

/// Binds `configure` on an ephemeral local port and serves it in the
/// background for the rest of the test.
pub async fn spawn_fake_api<F>(configure: F) -> FakeApi
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake api");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    FakeApi {
        base_url: format!("http://{}", addr),
    }
}
