//! Statement text and bound parameters.

use crate::common::{QDepartment, QUser, setup_db};
use qdsl::prelude::*;

const USER_COLUMNS: &str =
    r#""user"."id", "user"."name", "user"."age", "user"."department_id""#;

#[test]
fn select_with_filter() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let statement = factory
        .select_from(user)
        .r#where(user.name.eq("user1"))
        .statement()?;

    assert_eq!(
        statement.sql,
        format!(r#"SELECT {USER_COLUMNS} FROM "users" AS "user" WHERE "user"."name" = ?"#)
    );
    assert_eq!(statement.params, [Value::Text("user1".into())]);
    Ok(())
}

#[test]
fn predicates_are_conjoined_in_order() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let statement = factory
        .select(user.id)
        .from(user)
        .r#where(user.age.goe(18))
        .r#where((user.name.like("u%"), user.department_id.is_not_null()))
        .statement()?;

    assert_eq!(
        statement.sql,
        r#"SELECT "user"."id" FROM "users" AS "user" WHERE "user"."age" >= ? AND "user"."name" LIKE ? AND "user"."department_id" IS NOT NULL"#
    );
    assert_eq!(
        statement.params,
        [Value::Integer(18), Value::Text("u%".into())]
    );
    Ok(())
}

#[test]
fn paging_clauses() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let paged = factory
        .select(user.id)
        .from(user)
        .order_by(user.name.desc().nulls_last())
        .offset(10)
        .limit(5)
        .statement()?;
    assert_eq!(
        paged.sql,
        r#"SELECT "user"."id" FROM "users" AS "user" ORDER BY "user"."name" DESC NULLS LAST LIMIT 5 OFFSET 10"#
    );

    let offset_only = factory.select(user.id).from(user).offset(3).statement()?;
    assert!(offset_only.sql.ends_with("LIMIT -1 OFFSET 3"));

    let zero_offset = factory.select(user.id).from(user).offset(0).statement()?;
    assert!(!zero_offset.sql.contains("OFFSET"));
    assert!(!zero_offset.sql.contains("LIMIT"));
    Ok(())
}

#[test]
fn join_clause() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let statement = factory
        .select(user.name)
        .from(user)
        .left_join(user.department, department)
        .statement()?;

    assert_eq!(
        statement.sql,
        r#"SELECT "user"."name" FROM "users" AS "user" LEFT JOIN "departments" AS "department" ON "user"."department_id" = "department"."id""#
    );
    Ok(())
}

#[test]
fn scalar_subquery() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();
    let u2 = QUser::aliased("u2");

    let statement = factory
        .select(user.name)
        .from(user)
        .r#where(user.age.eq(select(u2.age.max()).from(u2)))
        .statement()?;

    assert_eq!(
        statement.sql,
        r#"SELECT "user"."name" FROM "users" AS "user" WHERE "user"."age" = (SELECT MAX("u2"."age") FROM "users" AS "u2")"#
    );
    Ok(())
}

#[test]
fn count_statements() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let plain = factory
        .select_from(user)
        .r#where(user.age.gt(1))
        .order_by(user.name.asc())
        .limit(2)
        .count_statement()?;
    assert_eq!(
        plain.sql,
        r#"SELECT COUNT(*) FROM "users" AS "user" WHERE "user"."age" > ?"#
    );

    let grouped = factory
        .select(department.name)
        .from(user)
        .join(user.department, department)
        .group_by(department.name)
        .count_statement()?;
    assert_eq!(
        grouped.sql,
        r#"SELECT COUNT(*) FROM (SELECT "department"."name" FROM "users" AS "user" JOIN "departments" AS "department" ON "user"."department_id" = "department"."id" GROUP BY "department"."name")"#
    );
    Ok(())
}

#[test]
fn right_join_clause() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let statement = factory
        .select(department.name)
        .from(user)
        .right_join(user.department, department)
        .statement()?;

    assert_eq!(
        statement.sql,
        r#"SELECT "department"."name" FROM "users" AS "user" RIGHT JOIN "departments" AS "department" ON "user"."department_id" = "department"."id""#
    );
    Ok(())
}

#[test]
fn oversized_paging_values_are_clamped() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let statement = factory
        .select(user.id)
        .from(user)
        .offset(u64::MAX)
        .limit(u64::MAX)
        .statement()?;

    assert!(statement.sql.ends_with(&format!(
        "LIMIT {max} OFFSET {max}",
        max = i64::MAX
    )));
    Ok(())
}
