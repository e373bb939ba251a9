//! In-memory repository for tests

use chrono::Utc;
use kernel::id::{CalculationId, UserId};
use kernel::page::Page;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{Calculation, EvaluatedCalculation};
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcResult, CalculationError};

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Calculation>,
    users: HashSet<i64>,
}

/// Mirrors the storage rules of the Postgres repository: identity IDs,
/// ID ordering and the `user_id` foreign key.
#[derive(Clone, Default)]
pub struct InMemoryCalculationRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryCalculationRepository {
    /// Repository whose foreign key accepts the given users
    pub fn with_users(users: impl IntoIterator<Item = UserId>) -> Self {
        let repo = Self::default();
        repo.state
            .lock()
            .unwrap()
            .users
            .extend(users.into_iter().map(|id| id.get()));
        repo
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn snapshot(&self, id: CalculationId) -> Option<Calculation> {
        self.state.lock().unwrap().rows.get(&id.get()).cloned()
    }
}

impl CalculationRepository for InMemoryCalculationRepository {
    async fn create(
        &self,
        calculation: &EvaluatedCalculation,
        user_id: Option<UserId>,
    ) -> CalcResult<Calculation> {
        let mut state = self.state.lock().unwrap();
        if let Some(owner) = user_id {
            if !state.users.contains(&owner.get()) {
                return Err(CalculationError::OwnerNotFound);
            }
        }

        state.next_id += 1;
        let row = Calculation {
            id: CalculationId::from_i64(state.next_id),
            a: calculation.a(),
            b: calculation.b(),
            calc_type: calculation.calc_type(),
            result: Some(calculation.value()),
            user_id,
            created_at: Utc::now(),
        };
        state.rows.insert(row.id.get(), row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: CalculationId) -> CalcResult<Option<Calculation>> {
        Ok(self.snapshot(id))
    }

    async fn list(&self, user_id: Option<UserId>, page: Page) -> CalcResult<Vec<Calculation>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .values()
            .filter(|row| user_id.is_none() || row.user_id == user_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: CalculationId,
        calculation: &EvaluatedCalculation,
    ) -> CalcResult<Option<Calculation>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.get_mut(&id.get()).map(|row| {
            row.a = calculation.a();
            row.b = calculation.b();
            row.calc_type = calculation.calc_type();
            row.result = Some(calculation.value());
            row.clone()
        }))
    }

    async fn delete(&self, id: CalculationId) -> CalcResult<bool> {
        Ok(self.state.lock().unwrap().rows.remove(&id.get()).is_some())
    }
}
