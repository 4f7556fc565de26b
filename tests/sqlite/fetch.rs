//! Terminal operations: uniqueness, counts and paged results.

use crate::common::{QDepartment, QUser, Recorder, names, setup_db};
use qdsl::prelude::*;

#[test]
fn fetch_one_rejects_several_rows() {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let result = factory.select_from(user).r#where(user.age.gt(15)).fetch_one();
    assert!(matches!(result, Err(QueryError::NonUniqueResult)));

    let nothing = factory
        .select_from(user)
        .r#where(user.age.gt(100))
        .fetch_one()
        .expect("empty result is not an error");
    assert!(nothing.is_none());
}

#[test]
fn fetch_one_reads_at_most_two_rows() -> qdsl::Result<()> {
    let conn = setup_db();
    let recorder = Recorder::new(&conn);
    let factory = QueryFactory::new(&recorder);
    let user = QUser::default();

    let _ = factory.select_from(user).fetch_one();
    let statements = recorder.statements();
    assert_eq!(statements.len(), 1);
    assert!(statements[0].ends_with("LIMIT 2"), "{}", statements[0]);
    Ok(())
}

#[test]
fn fetch_first_takes_first_in_order() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let oldest = factory
        .select_from(user)
        .order_by(user.age.desc())
        .fetch_first()?;
    assert_eq!(oldest.map(|u| u.name), Some("user4".to_string()));

    let missing = factory
        .select(user.name)
        .from(user)
        .r#where(user.name.eq("nobody"))
        .fetch_first()?;
    assert_eq!(missing, None);
    Ok(())
}

#[test]
fn count_matches_fetch_len() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let (user, department) = (QUser::default(), QDepartment::default());

    let plain = factory.select_from(user);
    assert_eq!(plain.fetch_count()?, plain.fetch()?.len() as u64);

    let filtered = factory.select_from(user).r#where(user.age.goe(20));
    assert_eq!(filtered.fetch_count()?, 3);
    assert_eq!(filtered.fetch_count()?, filtered.fetch()?.len() as u64);

    let joined = factory
        .select(user.name)
        .from(user)
        .join(user.department, department)
        .r#where(department.name.eq("dept2"));
    assert_eq!(joined.fetch_count()?, joined.fetch()?.len() as u64);

    let grouped = factory
        .select(department.name)
        .from(user)
        .join(user.department, department)
        .group_by(department.name);
    assert_eq!(grouped.fetch_count()?, 2);
    assert_eq!(grouped.fetch_count()?, grouped.fetch()?.len() as u64);

    let distinct = factory.select(user.department_id).from(user).distinct();
    assert_eq!(distinct.fetch_count()?, distinct.fetch()?.len() as u64);
    Ok(())
}

#[test]
fn count_ignores_paging() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let count = factory
        .select_from(user)
        .order_by(user.name.asc())
        .offset(3)
        .limit(1)
        .fetch_count()?;
    assert_eq!(count, 4);
    Ok(())
}

#[test]
fn fetch_results_pages_and_counts() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let page = factory
        .select_from(user)
        .order_by(user.name.asc())
        .offset(1)
        .limit(2)
        .fetch_results()?;

    assert_eq!(page.total, 4);
    assert_eq!(page.limit, Some(2));
    assert_eq!(page.offset, 1);
    assert_eq!(names(&page.results), ["user2", "user3"]);
    assert!(page.results.len() as u64 <= page.total);

    let unbounded = factory.select_from(user).fetch_results()?;
    assert_eq!(unbounded.limit, None);
    assert_eq!(unbounded.offset, 0);
    assert_eq!(unbounded.results.len() as u64, unbounded.total);
    Ok(())
}

#[test]
fn fetch_results_skips_data_query_when_empty() -> qdsl::Result<()> {
    let conn = setup_db();
    let recorder = Recorder::new(&conn);
    let factory = QueryFactory::new(&recorder);
    let user = QUser::default();

    let page = factory
        .select_from(user)
        .r#where(user.age.gt(100))
        .limit(10)
        .fetch_results()?;

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    let statements = recorder.statements();
    assert_eq!(statements.len(), 1);
    assert!(statements[0].starts_with("SELECT COUNT(*)"));
    Ok(())
}

#[test]
fn fetch_first_overrides_configured_limit() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let first = factory
        .select(user.name)
        .from(user)
        .order_by(user.name.asc())
        .limit(0)
        .fetch_first()?;
    assert_eq!(first, Some("user1".to_string()));

    let second = factory
        .select(user.name)
        .from(user)
        .order_by(user.name.asc())
        .offset(1)
        .limit(3)
        .fetch_first()?;
    assert_eq!(second, Some("user2".to_string()));
    Ok(())
}

#[test]
fn fetch_results_offset_past_the_end() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let page = factory
        .select_from(user)
        .order_by(user.id.asc())
        .offset(10)
        .limit(2)
        .fetch_results()?;

    assert_eq!(page.total, 4);
    assert_eq!(page.offset, 10);
    assert_eq!(page.limit, Some(2));
    assert!(page.results.is_empty());
    assert!(page.results.len() as u64 <= page.total.saturating_sub(page.offset));
    Ok(())
}

#[test]
fn oversized_paging_values_mean_all_rows() -> qdsl::Result<()> {
    let conn = setup_db();
    let factory = QueryFactory::new(&conn);
    let user = QUser::default();

    let all = factory
        .select(user.name)
        .from(user)
        .order_by(user.name.asc())
        .limit(u64::MAX)
        .fetch()?;
    assert_eq!(all, ["user1", "user2", "user3", "user4"]);

    let none = factory
        .select(user.name)
        .from(user)
        .offset(u64::MAX)
        .fetch()?;
    assert!(none.is_empty());
    Ok(())
}
