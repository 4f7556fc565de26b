//! Query construction.
//!
//! A [`SelectQuery`] is assembled through chained configuration calls and
//! turned into a statement only by a terminal call (or by
//! [`SelectQuery::statement`]). Configuration calls never fail on their own:
//! the first misconfiguration is recorded and surfaced as a
//! [`QueryError::Configuration`](crate::error::QueryError::Configuration)
//! before any round trip.
//!
//! ```ignore
//! let factory = QueryFactory::new(&conn);
//! let users = factory
//!     .select_from(user)
//!     .join(user.department, department)
//!     .r#where(department.name.eq("dept1"))
//!     .order_by(user.name.asc())
//!     .fetch()?;
//! ```

mod clauses;
mod fetch;
mod render;

pub use clauses::*;
pub use fetch::*;

use crate::entity::Entity;
use crate::executor::Executor;
use crate::expr::{Expr, ExprExt};
use crate::join::{JoinClause, JoinType};
use crate::order::{OrderKeys, OrderSpec};
use crate::projection::Projection;
use crate::relation::Relation;
use crate::sql::SQL;
use crate::traits::ToSQL;

/// Entry point for executable queries bound to an [`Executor`].
#[derive(Debug)]
pub struct QueryFactory<'c, C: ?Sized> {
    executor: &'c C,
}

impl<C: ?Sized> Clone for QueryFactory<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for QueryFactory<'_, C> {}

impl<'c, C: Executor + ?Sized> QueryFactory<'c, C> {
    pub fn new(executor: &'c C) -> Self {
        Self { executor }
    }

    /// Starts a query selecting `projection`; the source is set with
    /// [`SelectQuery::from`].
    pub fn select<P: Projection>(&self, projection: P) -> SelectQuery<P, &'c C> {
        SelectQuery::new(self.executor, projection)
    }

    /// Starts a query selecting the whole `entity` from its own table.
    pub fn select_from<E: Entity>(&self, entity: E) -> SelectQuery<E, &'c C> {
        SelectQuery::new(self.executor, entity).from(entity)
    }
}

/// Starts a detached query, for embedding as a subquery.
///
/// A detached query has no executor and cannot be fetched.
///
/// ```compile_fail
/// use qdsl_core::query::select;
///
/// let _ = select(qdsl_core::expr::count_all()).fetch();
/// ```
pub fn select<P: Projection>(projection: P) -> SelectQuery<P> {
    SelectQuery::new((), projection)
}

/// Starts a detached query selecting the whole `entity`.
pub fn select_from<E: Entity>(entity: E) -> SelectQuery<E> {
    SelectQuery::new((), entity).from(entity)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Source {
    pub(crate) table: &'static str,
    pub(crate) alias: &'static str,
}

/// A query under construction.
///
/// - `P`: the projection (output row shape)
/// - `X`: the executor; `()` for detached subqueries
#[derive(Debug, Clone)]
pub struct SelectQuery<P, X = ()> {
    executor: X,
    projection: P,
    from: Option<Source>,
    joins: Vec<JoinClause>,
    predicates: Vec<SQL>,
    group_by: Vec<SQL>,
    having: Vec<SQL>,
    order_by: Vec<OrderSpec>,
    offset: Option<u64>,
    limit: Option<u64>,
    distinct: bool,
    error: Option<String>,
}

impl<P: Projection, X> SelectQuery<P, X> {
    fn new(executor: X, projection: P) -> Self {
        Self {
            executor,
            projection,
            from: None,
            joins: Vec::new(),
            predicates: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            offset: None,
            limit: None,
            distinct: false,
            error: None,
        }
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }

    fn is_registered(&self, alias: &str) -> bool {
        self.from.is_some_and(|source| source.alias == alias)
            || self.joins.iter().any(|join| join.alias == alias)
    }

    /// Sets the root entity.
    pub fn from<E: Entity>(mut self, entity: E) -> Self {
        if let Some(source) = self.from {
            self.fail(format!(
                "source already set to \"{}\" AS \"{}\"",
                source.table, source.alias
            ));
        } else {
            self.from = Some(Source {
                table: E::TABLE,
                alias: entity.alias(),
            });
        }
        self
    }

    /// Registers a join of `kind` through `relation`, binding the target
    /// entity to `target`'s alias.
    ///
    /// The relation must start at the root entity or at an entity joined
    /// earlier, and the target alias must not already be in use.
    pub fn join_with<S, T: Entity>(
        mut self,
        join_type: JoinType,
        relation: Relation<S, T>,
        target: T,
    ) -> Self {
        let source = relation.source_alias();
        if !self.is_registered(source) {
            self.fail(format!(
                "join source \"{source}\" is not registered; join from the root entity or an entity joined earlier"
            ));
        } else if self.is_registered(target.alias()) {
            self.fail(format!(
                "alias \"{}\" is already in use; create another alias with Entity::aliased",
                target.alias()
            ));
        } else {
            self.joins.push(JoinClause {
                join_type,
                table: T::TABLE,
                alias: target.alias(),
                on: relation.on(&target),
            });
        }
        self
    }

    /// Registers an inner join (plain `JOIN`).
    pub fn join<S, T: Entity>(self, relation: Relation<S, T>, target: T) -> Self {
        self.join_with(JoinType::Join, relation, target)
    }

    pub fn inner_join<S, T: Entity>(self, relation: Relation<S, T>, target: T) -> Self {
        self.join_with(JoinType::Inner, relation, target)
    }

    pub fn left_join<S, T: Entity>(self, relation: Relation<S, T>, target: T) -> Self {
        self.join_with(JoinType::Left, relation, target)
    }

    pub fn right_join<S, T: Entity>(self, relation: Relation<S, T>, target: T) -> Self {
        self.join_with(JoinType::Right, relation, target)
    }

    /// Appends predicates to the conjunction. Absent (`None`) predicates are
    /// dropped, so optional filters compose without special cases.
    pub fn r#where(mut self, predicates: impl Predicates) -> Self {
        predicates.into_predicates(&mut self.predicates);
        self
    }

    /// Sets the grouping keys.
    pub fn group_by(mut self, keys: impl GroupKeys) -> Self {
        keys.into_keys(&mut self.group_by);
        self
    }

    /// Appends post-grouping predicates; absent ones are dropped.
    pub fn having(mut self, predicates: impl Predicates) -> Self {
        predicates.into_predicates(&mut self.having);
        self
    }

    /// Appends sort keys; earlier keys take precedence.
    pub fn order_by(mut self, keys: impl OrderKeys) -> Self {
        keys.into_keys(&mut self.order_by);
        self
    }

    /// Skips the first `offset` rows.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns at most `limit` rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }
}

// =============================================================================
// Subqueries as expressions
// =============================================================================

impl<P: Projection, X> ToSQL for SelectQuery<P, X> {
    fn to_sql(&self) -> SQL {
        self.render()
    }
}

impl<P, X> Expr for SelectQuery<P, X>
where
    P: Projection + Expr,
{
    type SQLType = P::SQLType;
    type Nullable = P::Nullable;
    type Value = P::Value;
}

impl<P, X> ExprExt for SelectQuery<P, X> where P: Projection + Expr {}

/// A single-column subquery selected as one column of an outer query.
impl<P, X> Projection for SelectQuery<P, X>
where
    P: Projection + Expr,
{
    type Row = P::Row;

    fn select_list(&self) -> Vec<SQL> {
        vec![self.render()]
    }
}
