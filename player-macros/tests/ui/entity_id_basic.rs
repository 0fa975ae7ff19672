use player_macros::entity_id;

#[entity_id]
struct PlayerId(i64);

#[entity_id]
#[derive(Default)]
struct TicketId(u64);

fn main() {
    let id = PlayerId::new(7);
    assert_eq!(id.value(), 7);
    assert_eq!(id.to_string(), "7");
    assert_eq!("  42 ".parse::<PlayerId>().unwrap(), PlayerId(42));
    assert!("abc".parse::<PlayerId>().is_err());

    let raw: i64 = id.into();
    assert_eq!(raw, 7);
    assert!(PlayerId::from(1) < PlayerId::from(2));

    // transparent 序列化：直接输出内部数值
    assert_eq!(serde_json::to_string(&id).unwrap(), "7");

    let t = TicketId::default();
    let _copy = t;
    let _ = format!("{:?}", t);
}
