use player_application::context::AppContext;
use player_application::controller::parse_body;
use player_application::{AppError, PlayerConfig, PlayerController};
use player_domain::persist::InMemoryRepository;
use player_domain::player::Player;
use std::collections::HashMap;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEED: &[&str] = &[
    r#"{"name":"Aragorn","title":"King of Gondor","race":"HUMAN","profession":"WARRIOR","birthday":1136073600000,"experience":150000}"#,
    r#"{"name":"Legolas","title":"Prince of Mirkwood","race":"ELF","profession":"ROGUE","birthday":1041379200000,"experience":98000}"#,
    r#"{"name":"Gimli","title":"","race":"DWARF","profession":"WARRIOR","birthday":1262304000000,"experience":76000}"#,
    r#"{"name":"Frodo","title":"Ring-bearer","race":"HOBBIT","profession":"ROGUE","birthday":1325376000000,"experience":2500,"banned":false}"#,
    r#"{"name":"Grishnakh","title":"Scout","race":"ORC","profession":"NAZGUL","birthday":978307200000,"experience":40,"banned":true}"#,
];

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn report<T: serde::Serialize>(label: &str, result: Result<T, AppError>) -> anyhow::Result<()> {
    match result {
        Ok(body) => println!("{label}: 200 {}", serde_json::to_string(&body)?),
        Err(err) => println!("{label}: {} {err}", err.status()),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "player_application=debug,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::from_env();
    tracing::info!(
        default_page_size = config.default_page_size(),
        max_page_size = ?config.max_page_size(),
        "starting player demo"
    );

    let repo = Arc::new(InMemoryRepository::<Player>::new());
    let controller = PlayerController::new(Arc::clone(&repo), config);

    for (i, json) in SEED.iter().enumerate() {
        let ctx = AppContext::builder()
            .request_id(format!("seed-{i}"))
            .actor("seeder")
            .build();
        let created = controller.create(&ctx, parse_body(json)?).await;
        report("POST /players", created)?;
    }

    let ctx = AppContext::builder()
        .request_id("session")
        .actor("demo")
        .build();

    let first_page = controller.list(&ctx, &HashMap::new()).await;
    report("GET /players", first_page)?;

    let query = params(&[("order", "LEVEL"), ("pageNumber", "1")]);
    let page = controller.list(&ctx, &query).await;
    report("GET /players?order=LEVEL&pageNumber=1", page)?;

    let query = params(&[("profession", "ROGUE")]);
    let rogues = controller.count(&ctx, &query).await;
    report("GET /players/count?profession=ROGUE", rogues)?;

    let query = params(&[("race", "ENT")]);
    let unknown_race = controller.list(&ctx, &query).await;
    report("GET /players?race=ENT", unknown_race)?;

    report("GET /players/3", controller.get(&ctx, Some("3")).await)?;
    report("GET /players/0", controller.get(&ctx, Some("0")).await)?;

    let changes = parse_body(r#"{"experience":12000,"title":null}"#)?;
    let updated = controller.update(&ctx, Some("4"), changes).await;
    report("POST /players/4", updated)?;

    for _ in 0..2 {
        let deleted = controller.delete(&ctx, Some("5")).await;
        report("DELETE /players/5", deleted)?;
    }

    tracing::info!(remaining = repo.len(), "demo finished");
    Ok(())
}
