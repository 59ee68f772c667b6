use gaadi::config::Config;
use gaadi::db::PgPool;
use gaadi::engine::Engine;
use gaadi::server::serve;
use gaadi::simulation::Simulation;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections)
        .await
        .unwrap();

    let simulation = Simulation::new();
    let board = simulation.board();
    let _refresh = simulation.spawn(config.badge_refresh, config.presence_refresh);

    let addr = config.listen_addr();
    let engine = Engine::new(pool, config).await.unwrap();

    serve(engine, board, addr).await;
}
