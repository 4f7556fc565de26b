//! CASE, arithmetic and NULL handling evaluated by the backend.

use crate::common::{QDepartment, QUser, insert_user, setup_db};
use qdsl::prelude::*;

#[test]
fn searched_case() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let bands = factory
        .select((
            user.name,
            case()
                .when(user.age.lt(20), "young")
                .when(user.age.lt(35), "middle")
                .otherwise("senior"),
        ))
        .from(user)
        .order_by(user.name.asc())
        .fetch()?;

    let bands: Vec<(&str, &str)> = bands.iter().map(|(n, b)| (n.as_str(), b.as_str())).collect();
    assert_eq!(
        bands,
        [
            ("user1", "young"),
            ("user2", "middle"),
            ("user3", "middle"),
            ("user4", "senior"),
        ]
    );
    Ok(())
}

#[test]
fn simple_case() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let labels = factory
        .select(
            user.age
                .when(10)
                .then("ten")
                .when(20)
                .then("twenty")
                .otherwise("other"),
        )
        .from(user)
        .order_by(user.age.asc())
        .fetch()?;

    assert_eq!(labels, ["ten", "twenty", "other", "other"]);
    Ok(())
}

#[test]
fn case_in_ordering() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    // user3 first, everyone else by age
    let ordered = factory
        .select(user.name)
        .from(user)
        .order_by((
            case().when(user.name.eq("user3"), 0).otherwise(1).asc(),
            user.age.asc(),
        ))
        .fetch()?;

    assert_eq!(ordered, ["user3", "user1", "user2", "user4"]);
    Ok(())
}

#[test]
fn arithmetic_projection() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let values = factory
        .select((user.age + 1_i32, user.age - user.age, user.age * 2.5_f64))
        .from(user)
        .r#where(user.name.eq("user2"))
        .fetch_one()?;

    assert_eq!(values, Some((21, 0, 50.0)));
    Ok(())
}

#[test]
fn coalesce_and_null_checks() -> qdsl::Result<()> {
    let conn = setup_db();
    insert_user(&conn, 5, "user5", 50, None);
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let orphans = factory
        .select((user.name, coalesce(user.department_id, 0_i64)))
        .from(user)
        .r#where(user.department_id.is_null())
        .fetch()?;
    assert_eq!(orphans, [("user5".to_string(), 0)]);

    let assigned = factory
        .select_from(user)
        .r#where(user.department_id.is_not_null())
        .fetch_count()?;
    assert_eq!(assigned, 4);
    Ok(())
}

#[test]
fn boolean_operators() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let names = factory
        .select(user.name)
        .from(user)
        .join(user.department, department)
        .r#where((department.name.eq("dept1") & user.age.gt(10)) | user.age.eq(40))
        .order_by(user.name.asc())
        .fetch()?;

    assert_eq!(names, ["user2", "user4"]);
    Ok(())
}
