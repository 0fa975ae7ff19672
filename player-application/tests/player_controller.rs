use anyhow::Result;
use player_application::context::AppContext;
use player_application::controller::parse_body;
use player_application::dto::{CountDto, PlayerListDto};
use player_application::{PlayerConfig, PlayerController};
use player_domain::persist::InMemoryRepository;
use player_domain::player::{MAX_BIRTHDAY_MILLIS, MIN_BIRTHDAY_MILLIS, Player, PlayerId};
use player_domain::validation::PlayerFields;
use std::collections::HashMap;
use std::sync::Arc;

type Controller = PlayerController<InMemoryRepository<Player>>;

const YEAR_MS: i64 = 365 * 24 * 3600 * 1000;

fn controller_with(config: PlayerConfig) -> Controller {
    PlayerController::new(Arc::new(InMemoryRepository::new()), config)
}

fn controller() -> Controller {
    controller_with(PlayerConfig::default())
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn body(name: &str, race: &str, profession: &str, experience: i64) -> PlayerFields {
    PlayerFields {
        name: Some(name.into()),
        title: Some(format!("{name} the Bold")),
        race: Some(race.into()),
        profession: Some(profession.into()),
        birthday: Some(MIN_BIRTHDAY_MILLIS),
        experience: Some(experience),
        banned: None,
    }
}

fn born(mut fields: PlayerFields, birthday: i64) -> PlayerFields {
    fields.birthday = Some(birthday);
    fields
}

async fn seeded() -> Result<Controller> {
    let c = controller();
    let ctx = AppContext::default();
    let rows = [
        ("Thorin", "DWARF", "WARRIOR", 40_000, 1),
        ("Balin", "DWARF", "CLERIC", 12_000, 2),
        ("Tauriel", "ELF", "ROGUE", 9_000, 3),
        ("Bilbo", "HOBBIT", "ROGUE", 300, 4),
        ("Azog", "ORC", "WARLOCK", 700_000, 5),
    ];
    for (name, race, profession, exp, years) in rows {
        let birthday = MIN_BIRTHDAY_MILLIS + years * YEAR_MS;
        let fields = born(body(name, race, profession, exp), birthday);
        c.create(&ctx, fields).await?;
    }
    Ok(c)
}

#[tokio::test]
async fn create_then_get_round_trips() -> Result<()> {
    let c = controller();
    let ctx = AppContext::builder().request_id("rt-1").build();

    let fields = body("Gandalf", "HUMAN", "SORCERER", 0);
    let created = c.create(&ctx, fields).await?;
    assert_eq!(created.id, Some(PlayerId::new(1)));
    assert_eq!(created.level, 0);
    assert_eq!(created.until_next_level, 100);
    assert!(!created.banned);

    let fetched = c.get(&ctx, Some("1")).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Gandalf the Bold");
    assert_eq!(fetched.birthday.timestamp_millis(), MIN_BIRTHDAY_MILLIS);
    Ok(())
}

#[tokio::test]
async fn create_from_json_body() -> Result<()> {
    let c = controller();
    let ctx = AppContext::default();
    let json = format!(
        r#"{{"name":"Radagast","title":"","race":"HUMAN","profession":"DRUID","birthday":{MAX_BIRTHDAY_MILLIS},"experience":10000000,"banned":true}}"#
    );
    let created = c.create(&ctx, parse_body(&json)?).await?;
    assert_eq!(created.level, 446);
    assert_eq!(created.until_next_level, 12_800);
    assert!(created.banned);
    assert_eq!(created.title, "");
    Ok(())
}

#[tokio::test]
async fn create_rejects_missing_or_invalid_fields() {
    let c = controller();
    let ctx = AppContext::default();

    let mut missing_title = body("Saruman", "HUMAN", "SORCERER", 0);
    missing_title.title = None;
    let err = c.create(&ctx, missing_title).await.unwrap_err();
    assert!(err.is_bad_request());

    let long_name = body("Thirteen_Char", "HUMAN", "SORCERER", 0);
    let early = body("Early", "HUMAN", "SORCERER", 0);
    let early = born(early, MIN_BIRTHDAY_MILLIS - 1);
    let unknown_race = body("Ent", "ENT", "DRUID", 0);
    let too_much = body("Greedy", "ORC", "ROGUE", 10_000_001);

    for fields in [long_name, early, unknown_race, too_much] {
        let err = c.create(&ctx, fields).await.unwrap_err();
        assert_eq!(err.status(), 400);
    }
}

#[tokio::test]
async fn bad_ids_are_bad_requests_and_unknown_ids_not_found() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    for raw in [None, Some("0"), Some("-7"), Some("abc")] {
        assert_eq!(c.get(&ctx, raw).await.unwrap_err().status(), 400);
        assert_eq!(c.delete(&ctx, raw).await.unwrap_err().status(), 400);
        let err = c.update(&ctx, raw, PlayerFields::default()).await;
        assert_eq!(err.unwrap_err().status(), 400);
    }

    let missing = Some("999");
    assert_eq!(c.get(&ctx, missing).await.unwrap_err().status(), 404);
    assert_eq!(c.delete(&ctx, missing).await.unwrap_err().status(), 404);
    let err = c.update(&ctx, missing, PlayerFields::default()).await;
    assert_eq!(err.unwrap_err().status(), 404);
    Ok(())
}

#[tokio::test]
async fn empty_update_leaves_record_unchanged() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let before = c.get(&ctx, Some("2")).await?;
    let after = c.update(&ctx, Some("2"), parse_body("{}")?).await?;
    assert_eq!(before, after);
    assert_eq!(c.get(&ctx, Some("2")).await?, before);
    Ok(())
}

#[tokio::test]
async fn partial_update_merges_and_rederives() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let before = c.get(&ctx, Some("4")).await?;
    let changes = parse_body(r#"{"name":"Baggins","experience":100,"race":null}"#)?;
    let updated = c.update(&ctx, Some("4"), changes).await?;

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.name, "Baggins");
    assert_eq!(updated.race, before.race);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.experience, 100);
    assert_eq!(updated.level, 1);
    assert_eq!(updated.until_next_level, 200);

    let changes = parse_body(r#"{"profession":"BARD"}"#)?;
    let bad = c.update(&ctx, Some("4"), changes).await.unwrap_err();
    assert_eq!(bad.status(), 400);
    assert_eq!(c.get(&ctx, Some("4")).await?, updated);
    Ok(())
}

#[tokio::test]
async fn delete_removes_record() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    c.delete(&ctx, Some("1")).await?;
    assert_eq!(c.get(&ctx, Some("1")).await.unwrap_err().status(), 404);
    let CountDto(n) = c.count(&ctx, &HashMap::new()).await?;
    assert_eq!(n, 4);
    Ok(())
}

#[tokio::test]
async fn list_defaults_to_three_by_id() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let PlayerListDto(players) = c.list(&ctx, &HashMap::new()).await?;
    let ids: Vec<_> = players.iter().map(|p| p.id.map(|id| id.value())).collect();
    assert_eq!(ids, [Some(1), Some(2), Some(3)]);
    Ok(())
}

#[tokio::test]
async fn list_filters_sorts_and_pages() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let query = params(&[
        ("order", "EXPERIENCE"),
        ("pageSize", "2"),
        ("pageNumber", "1"),
    ]);
    let PlayerListDto(players) = c.list(&ctx, &query).await?;
    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Balin", "Thorin"]);

    let query = params(&[("race", "DWARF"), ("order", "NAME")]);
    let PlayerListDto(players) = c.list(&ctx, &query).await?;
    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Balin", "Thorin"]);

    let query = params(&[("profession", "ROGUE"), ("minLevel", "10")]);
    let PlayerListDto(players) = c.list(&ctx, &query).await?;
    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Tauriel"]);

    let query = params(&[("pageNumber", "9")]);
    let PlayerListDto(players) = c.list(&ctx, &query).await?;
    assert!(players.is_empty());
    Ok(())
}

#[tokio::test]
async fn count_applies_filters_but_not_paging() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let CountDto(all) = c.count(&ctx, &params(&[("pageSize", "1")])).await?;
    assert_eq!(all, 5);

    let after = (MIN_BIRTHDAY_MILLIS + 3 * YEAR_MS).to_string();
    let query = params(&[("after", after.as_str())]);
    let CountDto(n) = c.count(&ctx, &query).await?;
    assert_eq!(n, 3);

    let before = (MIN_BIRTHDAY_MILLIS + 2 * YEAR_MS).to_string();
    let query = params(&[("before", before.as_str())]);
    let CountDto(n) = c.count(&ctx, &query).await?;
    assert_eq!(n, 2);

    let query = params(&[("minExperience", "9000"), ("maxExperience", "40000")]);
    let CountDto(n) = c.count(&ctx, &query).await?;
    assert_eq!(n, 3);

    let CountDto(n) = c.count(&ctx, &params(&[("banned", "true")])).await?;
    assert_eq!(n, 0);

    let query = params(&[("name", "in"), ("title", "Bold")]);
    let CountDto(n) = c.count(&ctx, &query).await?;
    assert_eq!(n, 2);
    Ok(())
}

#[tokio::test]
async fn unknown_enum_in_filter_is_bad_request() -> Result<()> {
    let c = seeded().await?;
    let ctx = AppContext::default();

    let rejected = [
        ("race", "ENT"),
        ("profession", "bard"),
        ("order", "RACE"),
        ("banned", "1"),
    ];
    for (k, v) in rejected {
        let query = params(&[(k, v)]);
        assert_eq!(c.list(&ctx, &query).await.unwrap_err().status(), 400);
    }

    let query = params(&[("race", "human")]);
    assert_eq!(c.count(&ctx, &query).await.unwrap_err().status(), 400);
    Ok(())
}

#[tokio::test]
async fn max_page_size_is_enforced() -> Result<()> {
    let c = controller_with(PlayerConfig::builder().max_page_size(2).build());
    let ctx = AppContext::default();
    for i in 0..4 {
        let name = format!("P{i}");
        c.create(&ctx, body(&name, "ELF", "DRUID", i)).await?;
    }

    let query = params(&[("pageSize", "50")]);
    let PlayerListDto(players) = c.list(&ctx, &query).await?;
    assert_eq!(players.len(), 2);
    Ok(())
}
