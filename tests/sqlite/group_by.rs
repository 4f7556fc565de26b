//! GROUP BY and HAVING.

use crate::common::{QDepartment, QUser, setup_db};
use qdsl::prelude::*;

#[test]
fn average_age_per_department() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let averages = factory
        .select((department.name, user.age.avg()))
        .from(user)
        .join(user.department, department)
        .group_by(department.name)
        .order_by(department.name.asc())
        .fetch()?;

    assert_eq!(
        averages,
        [
            ("dept1".to_string(), Some(15.0)),
            ("dept2".to_string(), Some(35.0)),
        ]
    );
    Ok(())
}

#[test]
fn having_filters_groups() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let query = factory
        .select((department.name, count(user.id), user.age.sum()))
        .from(user)
        .join(user.department, department)
        .group_by((department.id, department.name))
        .having(user.age.sum().gt(40));

    let rows = query.fetch()?;
    assert_eq!(rows, [("dept2".to_string(), 2, Some(70))]);
    assert_eq!(query.fetch_count()?, 1);
    Ok(())
}

#[test]
fn aggregates_over_whole_table() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let (total, distinct, youngest, oldest) = factory
        .select((
            count_all(),
            user.department_id.count_distinct(),
            user.age.min(),
            user.age.max(),
        ))
        .from(user)
        .fetch_one()?
        .expect("aggregate query returns one row");

    assert_eq!(total, 4);
    assert_eq!(distinct, 2);
    assert_eq!(youngest, Some(10));
    assert_eq!(oldest, Some(40));
    Ok(())
}

#[test]
fn aggregates_over_no_rows_are_null() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let (sum, avg) = factory
        .select((user.age.sum(), user.age.avg()))
        .from(user)
        .r#where(user.age.gt(100))
        .fetch_one()?
        .expect("aggregate query returns one row");

    assert_eq!(sum, None);
    assert_eq!(avg, None);
    Ok(())
}
