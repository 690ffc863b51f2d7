//! Typed filter clauses compiled into database conditions.
//!
//! Each entity declares a field enum implementing [`FilterField`], which tells the
//! compiler whether a field is a column on the entity's table or a value stored in a
//! child table owned by the entity. Clauses over child tables compile to
//! `pk IN (SELECT owner FROM child WHERE ...)` sub-selects.

use std::fmt;

use sea_orm::{
    sea_query::{DynIden, Expr, LikeExpr, Query, SelectStatement, SimpleExpr, ValueType},
    Condition, ExprTrait, Value,
};

use crate::server::query::params::escape_like;

/// Where a filterable field is stored.
pub enum Target {
    /// A column on the entity's own table.
    Column(DynIden),
    /// A column on a child table whose `owner` column references the entity.
    Child {
        table: DynIden,
        owner: DynIden,
        value: DynIden,
        /// Discriminator column and value for child tables holding several lists.
        kind: Option<(DynIden, &'static str)>,
    },
}

/// A field that can appear in a [`Clause`].
pub trait FilterField: Copy + fmt::Debug + PartialEq {
    /// The entity's table.
    fn table() -> DynIden;
    /// The entity's primary key column.
    fn primary_key() -> DynIden;
    /// Storage location of this field.
    fn target(self) -> Target;
}

/// A single constraint on one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Clause<F> {
    Equals(F, Value),
    /// Matches when the field equals any of the values.
    AnyOf(F, Vec<Value>),
    /// Matches when the entity holds every value; meant for child-table fields.
    AllOf(F, Vec<Value>),
    /// Strict upper bound.
    Below(F, Value),
    /// Case-sensitive prefix match; the prefix is escaped before use.
    Prefix(F, String),
}

impl<F: FilterField> Clause<F> {
    pub fn field(&self) -> F {
        match self {
            Self::Equals(field, _)
            | Self::AnyOf(field, _)
            | Self::AllOf(field, _)
            | Self::Below(field, _)
            | Self::Prefix(field, _) => *field,
        }
    }

    /// Compiles the clause into a condition on the entity's table.
    pub fn condition(&self) -> Condition {
        match self.field().target() {
            Target::Column(column) => {
                let column = || Expr::col((F::table(), column.clone()));

                self.compile(|predicate| predicate, column)
            }
            Target::Child {
                table,
                owner,
                value,
                kind,
            } => {
                let owned_by = |predicate: Condition| {
                    let mut select: SelectStatement = Query::select();
                    select
                        .column((table.clone(), owner.clone()))
                        .from(table.clone())
                        .cond_where(predicate);

                    if let Some((kind_column, kind_value)) = &kind {
                        select.and_where(
                            Expr::col((table.clone(), kind_column.clone())).eq(*kind_value),
                        );
                    }

                    Condition::all()
                        .add(Expr::col((F::table(), F::primary_key())).in_subquery(select))
                };
                let column = || Expr::col((table.clone(), value.clone()));

                self.compile(owned_by, column)
            }
        }
    }

    /// Builds the predicate for each clause kind and wraps it with `scope`.
    ///
    /// `AllOf` scopes every value separately so a child-table field must hold all of them.
    fn compile(
        &self,
        scope: impl Fn(Condition) -> Condition,
        column: impl Fn() -> Expr,
    ) -> Condition {
        let single = |expr: SimpleExpr| scope(Condition::all().add(expr));

        match self {
            Self::Equals(_, value) => single(column().eq(value.clone())),
            Self::AnyOf(_, values) if values.is_empty() => {
                Condition::all().add(Expr::val(1).eq(0))
            }
            Self::AnyOf(_, values) => single(column().is_in(values.clone())),
            Self::AllOf(_, values) => values.iter().fold(Condition::all(), |condition, value| {
                condition.add(single(column().eq(value.clone())))
            }),
            Self::Below(_, value) => single(column().lt(value.clone())),
            Self::Prefix(_, prefix) => single(
                column().like(LikeExpr::new(format!("{}%", escape_like(prefix))).escape('\\')),
            ),
        }
    }
}

/// An ordered conjunction of clauses.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter<F> {
    clauses: Vec<Clause<F>>,
}

impl<F> Default for Filter<F> {
    fn default() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }
}

impl<F: FilterField> Filter<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clause: Clause<F>) {
        self.clauses.push(clause);
    }

    /// Adds an any-of clause when `values` is present.
    pub fn any_of<V: Into<Value>>(&mut self, field: F, values: Option<Vec<V>>) {
        if let Some(values) = values {
            self.push(Clause::AnyOf(
                field,
                values.into_iter().map(Into::into).collect(),
            ));
        }
    }

    /// Adds an all-of clause when `values` is present.
    pub fn all_of<V: Into<Value>>(&mut self, field: F, values: Option<Vec<V>>) {
        if let Some(values) = values {
            self.push(Clause::AllOf(
                field,
                values.into_iter().map(Into::into).collect(),
            ));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause<F>] {
        &self.clauses
    }

    /// Values of every any-of clause on `field`, intersected.
    ///
    /// Returns `None` when no such clause exists.
    pub fn any_of_values(&self, field: F) -> Option<Vec<Value>> {
        self.clauses
            .iter()
            .filter_map(|clause| match clause {
                Clause::AnyOf(f, values) if *f == field => Some(values.clone()),
                _ => None,
            })
            .reduce(|acc, values| acc.into_iter().filter(|v| values.contains(v)).collect())
    }

    /// Like [`Filter::any_of_values`] for string fields; non-string values are skipped.
    pub fn any_of_strings(&self, field: F) -> Option<Vec<String>> {
        self.any_of_values(field).map(|values| {
            values
                .into_iter()
                .filter_map(|value| <String as ValueType>::try_from(value).ok())
                .collect()
        })
    }

    /// Compiles every clause into one conjunctive condition.
    pub fn condition(&self) -> Condition {
        self.clauses
            .iter()
            .fold(Condition::all(), |condition, clause| condition.add(clause.condition()))
    }
}
