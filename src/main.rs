mod routes;
mod services;
mod state;
mod supabase;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let client = supabase::SupabaseClient::from_env().expect("supabase configuration required");
    tracing::info!(url = %client.base_url(), bucket = client.bucket(), "supabase client initialized");
    let state = state::AppState::from_supabase(client);

    // Fall back to the bare API when the Leptos site config is missing.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site not configured; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "campaign console listening");
    axum::serve(listener, app).await.expect("server failed");
}
