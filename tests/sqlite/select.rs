//! Filtering, ordering, paging and projections against a seeded database.

use crate::common::{QUser, QUserDto, User, UserDto, age_eq, insert_user, name_eq, names, setup_db};
use qdsl::prelude::*;

#[test]
fn fetch_one_by_name() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let found = factory
        .select_from(user)
        .r#where(user.name.eq("user1"))
        .fetch_one()?;

    let found = found.expect("user1 exists");
    assert_eq!(found.age, 10);
    assert_eq!(found.department_id, Some(1));
    Ok(())
}

#[test]
fn order_offset_limit() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let page = factory
        .select_from(user)
        .order_by(user.name.desc())
        .offset(1)
        .limit(2)
        .fetch()?;

    assert_eq!(names(&page), ["user3", "user2"]);
    Ok(())
}

#[test]
fn offset_without_limit() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let rest = factory
        .select_from(user)
        .order_by(user.age.asc())
        .offset(3)
        .fetch()?;

    assert_eq!(names(&rest), ["user4"]);
    Ok(())
}

#[test]
fn multi_key_ordering() -> qdsl::Result<()> {
    let conn = setup_db();
    insert_user(&conn, 5, "user0", 30, Some(2));
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let users = factory
        .select_from(user)
        .order_by((user.age.desc(), user.name.asc()))
        .fetch()?;

    assert_eq!(names(&users), ["user4", "user0", "user3", "user2", "user1"]);
    Ok(())
}

#[test]
fn null_ordering() -> qdsl::Result<()> {
    let conn = setup_db();
    insert_user(&conn, 5, "user5", 50, None);
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let first = factory
        .select(user.name)
        .from(user)
        .order_by([user.department_id.desc().nulls_first(), user.name.asc()])
        .fetch()?;
    assert_eq!(first, ["user5", "user3", "user4", "user1", "user2"]);

    let last = factory
        .select(user.name)
        .from(user)
        .order_by((user.department_id.asc().nulls_last(), user.name.asc()))
        .fetch()?;
    assert_eq!(last, ["user1", "user2", "user3", "user4", "user5"]);
    Ok(())
}

#[test]
fn absent_filters_leave_query_unfiltered() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let all = factory
        .select_from(user)
        .r#where((name_eq(user, None), age_eq(user, None)))
        .fetch()?;
    assert_eq!(all.len(), 4);

    let one = factory
        .select_from(user)
        .r#where((name_eq(user, Some("user2")), age_eq(user, None)))
        .fetch()?;
    assert_eq!(names(&one), ["user2"]);

    let none = factory
        .select_from(user)
        .r#where((name_eq(user, Some("user2")), age_eq(user, Some(10))))
        .fetch()?;
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn combined_optional_predicates() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let either = any_of([name_eq(user, Some("user1")), age_eq(user, Some(40))]);
    let users = factory
        .select_from(user)
        .r#where(either)
        .order_by(user.id.asc())
        .fetch()?;
    assert_eq!(names(&users), ["user1", "user4"]);

    let nothing = all_of([name_eq(user, None), age_eq(user, None)]);
    assert!(nothing.is_none());
    Ok(())
}

#[test]
fn dto_projection() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let dtos = factory
        .select(QUserDto::new(user.name, user.age))
        .from(user)
        .r#where(user.age.loe(20))
        .order_by(user.name.asc())
        .fetch()?;

    assert_eq!(
        dtos,
        [
            UserDto { name: "user1".into(), age: 10 },
            UserDto { name: "user2".into(), age: 20 },
        ]
    );
    Ok(())
}

#[test]
fn tuple_projection() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let rows = factory
        .select((user.name, user.age * 2_i32, user.department_id))
        .from(user)
        .r#where(user.age.between(20, 30))
        .order_by(user.age.asc())
        .fetch()?;

    assert_eq!(
        rows,
        [
            ("user2".to_string(), 40, Some(1)),
            ("user3".to_string(), 60, Some(2)),
        ]
    );
    Ok(())
}

#[test]
fn distinct_values() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let departments = factory
        .select(user.department_id)
        .from(user)
        .distinct()
        .order_by(user.department_id.asc())
        .fetch()?;

    assert_eq!(departments, [Some(1), Some(2)]);
    Ok(())
}

#[test]
fn text_and_set_predicates() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let listed = factory
        .select(user.name)
        .from(user)
        .r#where(user.age.in_list([10, 40]))
        .order_by(user.name.asc())
        .fetch()?;
    assert_eq!(listed, ["user1", "user4"]);

    let none = factory
        .select(user.name)
        .from(user)
        .r#where(user.age.in_list(Vec::<i32>::new()))
        .fetch()?;
    assert!(none.is_empty());

    let liked = factory
        .select(user.name)
        .from(user)
        .r#where((user.name.like("user%"), !user.age.gt(20)))
        .order_by(user.name.asc())
        .fetch()?;
    assert_eq!(liked, ["user1", "user2"]);
    Ok(())
}

#[test]
fn model_fields_map_in_order() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let fourth: Option<User> = factory
        .select_from(user)
        .r#where(user.id.eq(4_i64))
        .fetch_one()?;

    assert_eq!(
        fourth,
        Some(User {
            id: 4,
            name: "user4".into(),
            age: 40,
            department_id: Some(2),
        })
    );
    assert_eq!(<QUser as Entity>::TABLE, "users");
    assert_eq!(QUser::COLUMNS, ["id", "name", "age", "department_id"]);
    Ok(())
}
