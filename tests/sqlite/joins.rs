//! Joins through declared relations.

use crate::common::{QDepartment, QUser, insert_user, names, setup_db};
use qdsl::prelude::*;

#[test]
fn join_many_to_one_and_filter_target() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let users = factory
        .select_from(user)
        .join(user.department, department)
        .r#where(department.name.eq("dept1"))
        .order_by(user.name.asc())
        .fetch()?;

    assert_eq!(names(&users), ["user1", "user2"]);
    Ok(())
}

#[test]
fn join_one_to_many_from_inverse_side() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let members = factory
        .select((department.name, user.name))
        .from(department)
        .inner_join(department.users, user)
        .r#where(department.id.eq(2_i64))
        .order_by(user.name.asc())
        .fetch()?;

    assert_eq!(
        members,
        [
            ("dept2".to_string(), "user3".to_string()),
            ("dept2".to_string(), "user4".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn left_join_keeps_unmatched_rows() -> qdsl::Result<()> {
    let conn = setup_db();
    insert_user(&conn, 5, "user5", 50, None);
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let rows = factory
        .select((user.name, coalesce(department.name, "none")))
        .from(user)
        .left_join(user.department, department)
        .order_by(user.name.asc())
        .fetch()?;

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4], ("user5".to_string(), "none".to_string()));

    let inner = factory
        .select_from(user)
        .join(user.department, department)
        .fetch_count()?;
    assert_eq!(inner, 4);
    Ok(())
}

#[test]
fn self_join_through_second_alias() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());
    let colleague = QUser::aliased("colleague");

    let pairs = factory
        .select((user.name, colleague.name))
        .from(user)
        .join(user.department, department)
        .join(department.users, colleague)
        .r#where(user.id.ne(colleague.id))
        .order_by((user.name.asc(), colleague.name.asc()))
        .fetch()?;

    assert_eq!(
        pairs,
        [
            ("user1".to_string(), "user2".to_string()),
            ("user2".to_string(), "user1".to_string()),
            ("user3".to_string(), "user4".to_string()),
            ("user4".to_string(), "user3".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn right_join_keeps_targets_without_owners() -> qdsl::Result<()> {
    let conn = setup_db();
    conn.execute("INSERT INTO departments (id, name) VALUES (3, 'dept3')", [])
        .expect("Failed to insert department");
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let rows = factory
        .select((department.name, coalesce(user.name, "none")))
        .from(user)
        .right_join(user.department, department)
        .order_by((department.name.asc(), user.name.asc()))
        .fetch()?;

    let rows: Vec<(&str, &str)> = rows.iter().map(|(d, u)| (d.as_str(), u.as_str())).collect();
    assert_eq!(
        rows,
        [
            ("dept1", "user1"),
            ("dept1", "user2"),
            ("dept2", "user3"),
            ("dept2", "user4"),
            ("dept3", "none"),
        ]
    );
    Ok(())
}
